//! Firefox detection over raw User-Agent strings
//!
//! Every function here is total: malformed or hostile input falls through to
//! `false` or `"0"`.

use std::sync::LazyLock;

use regex::Regex;

use crate::version::compare::major_version;

/// Version reported when none can be read from the UA
pub const UNKNOWN_VERSION: &str = "0";

/// Product token of Firefox desktop, Fennec (legacy mobile) and Firefox for iOS
static FIREFOX_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s(?:Firefox|Fennec|FxiOS)").unwrap());

/// Gecko forks and rebrands that carry Firefox tokens without being Firefox
static LIKE_FIREFOX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Iceweasel|IceCat|SeaMonkey|Camino|like\sFirefox").unwrap()
});

static DESKTOP_PLATFORM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Windows|Macintosh|Mac OS X|Linux|X11|BSD").unwrap());

/// Phones, tablets, Maemo, Firefox OS and iOS
static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Mobile|Tablet|Fennec|Maemo|Android|FxiOS").unwrap());

static ANDROID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Android").unwrap());

static FXIOS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\sFxiOS").unwrap());

/// Major is capped at 9 digits so it always fits the `u32` major version
static FIREFOX_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Firefox/(\d{1,9}(?:\.\d+){1,2})").unwrap());

/// Firefox on any platform, excluding look-alikes
pub fn is_firefox(ua: &str) -> bool {
    FIREFOX_TOKEN_RE.is_match(ua) && !is_like_firefox(ua)
}

/// Firefox on Windows, macOS, Linux or BSD
pub fn is_firefox_desktop(ua: &str) -> bool {
    is_firefox(ua) && DESKTOP_PLATFORM_RE.is_match(ua) && !MOBILE_RE.is_match(ua)
}

/// Firefox for Android, phone or tablet
pub fn is_firefox_android(ua: &str) -> bool {
    is_firefox(ua) && ANDROID_RE.is_match(ua) && !FXIOS_RE.is_match(ua)
}

/// Firefox for iOS, which identifies itself with `FxiOS` instead of `Firefox`
pub fn is_firefox_ios(ua: &str) -> bool {
    FXIOS_RE.is_match(ua) && is_firefox(ua)
}

/// Camino, SeaMonkey, IceCat, Iceweasel and `like Firefox` UAs
pub fn is_like_firefox(ua: &str) -> bool {
    LIKE_FIREFOX_RE.is_match(ua)
}

/// Dotted version from the `Firefox/` token, or `"0"`.
///
/// iOS builds always report `"0"`, even when a `Firefox/` token is present,
/// as do look-alikes and anonymised UAs whose token has no version.
pub fn firefox_version(ua: &str) -> String {
    if is_like_firefox(ua) || FXIOS_RE.is_match(ua) {
        return UNKNOWN_VERSION.to_string();
    }

    FIREFOX_VERSION_RE
        .captures(ua)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| UNKNOWN_VERSION.to_string(), |m| m.as_str().to_string())
}

pub fn firefox_major_version(ua: &str) -> u32 {
    major_version(&firefox_version(ua))
}

#[cfg(test)]
pub(crate) mod uas {
    pub const FIREFOX_WINDOWS: &str =
        "Mozilla/5.0 (Windows NT x.y; rv:10.0) Gecko/20100101 Firefox/10.0";
    pub const FIREFOX_OSX: &str =
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.8; rv:23.0) Gecko/20100101 Firefox/23.0";
    pub const FIREFOX_LINUX: &str =
        "Mozilla/5.0 (X11; Linux i686; rv:10.0) Gecko/20100101 Firefox/10.0";
    pub const FIREFOX_MAEMO: &str = "Mozilla/5.0 (Maemo; Linux armv7l; rv:10.0.1) Gecko/20100101 Firefox/10.0.1 Fennec/10.0.1";
    pub const FIREFOX_ANDROID_MOBILE: &str =
        "Mozilla/5.0 (Android; Mobile; rv:26.0) Gecko/26.0 Firefox/26.0";
    pub const FIREFOX_ANDROID_TABLET: &str =
        "Mozilla/5.0 (Android; Tablet; rv:26.0) Gecko/26.0 Firefox/26.0";
    pub const FIREFOX_IOS_MOBILE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 8_3 like Mac OS X) AppleWebKit/600.1.4 (KHTML, like Gecko) FxiOS/1.1 Mobile/12F69 Safari/600.1.4";
    pub const FIREFOX_IOS_TABLET: &str = "Mozilla/5.0 (iPad; CPU iPhone OS 8_3 like Mac OS X) AppleWebKit/600.1.4 (KHTML, like Gecko) FxiOS/1.0 Mobile/12F69 Safari/600.1.4";
    pub const FIREFOX_OS_MOBILE: &str = "Mozilla/5.0 (Mobile; rv:26.0) Gecko/26.0 Firefox/26.0";
    pub const FIREFOX_OS_TABLET: &str = "Mozilla/5.0 (Tablet; rv:26.0) Gecko/26.0 Firefox/26.0";
    pub const FIREFOX_MODIFIED: &str = "Mozilla/5.0 (Windows; U; ; de; rv:1.9.2.6) Gecko/20100625 Firefox/ Anonymisiert durch AlMiSoft Browser-Anonymisierer 37324401";
    pub const FIREFOX_V100: &str =
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:100.0) Gecko/20100101 Firefox/100.0";

    pub const CAMINO: &str = "Mozilla/5.0 (Macintosh; U; PPC Mac OS X 10.4; en; rv:1.9.2.24) Gecko/20111114 Camino/2.1 (like Firefox/3.6.24)";
    pub const CAMINO_LIKE_FX: &str = "Mozilla/5.0 (Macintosh; U; PPC Mac OS X 10.4; en; rv:1.9.2.24) Gecko/20111114 (like Firefox/3.6.24)";
    pub const SEAMONKEY: &str = "Mozilla/5.0 (Windows NT 6.1; WOW64; rv:40.0) Gecko/20100101 Firefox/40.0 SeaMonkey/2.37a1";
    pub const ICECAT: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:17.0) Gecko/20121201 icecat/17.0.1";
    pub const ICEWEASEL: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:17.0) Gecko/20121202 Firefox/17.0 Iceweasel/17.0.1";

    pub const CHROME: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_8_4) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/29.0.1547.57 Safari/537.36";
    pub const SAFARI: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_6_8) AppleWebKit/537.13+ (KHTML, like Gecko) Version/5.1.7 Safari/534.57.2";
    pub const FIREFOX_IOS_WITH_FIREFOX_TOKEN: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 8_3 like Mac OS X) AppleWebKit/600.1.4 (KHTML, like Gecko) FxiOS/1.1 Mobile/12F69 Firefox/95.0 Safari/600.1.4";
    pub const FIREFOX_HUGE_MAJOR: &str =
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:100.0) Gecko/20100101 Firefox/99999999999.0";

    pub const IE: &str = "Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 5.1; Trident/4.0; .NET CLR 2.0.50727; .NET CLR 3.0.04506.648; .NET CLR 3.5.21022; .NET CLR 3.0.4506.2152; .NET CLR 3.5.30729)";

    pub const ALL: &[&str] = &[
        FIREFOX_WINDOWS,
        FIREFOX_OSX,
        FIREFOX_LINUX,
        FIREFOX_MAEMO,
        FIREFOX_ANDROID_MOBILE,
        FIREFOX_ANDROID_TABLET,
        FIREFOX_IOS_MOBILE,
        FIREFOX_IOS_TABLET,
        FIREFOX_OS_MOBILE,
        FIREFOX_OS_TABLET,
        FIREFOX_MODIFIED,
        FIREFOX_V100,
        FIREFOX_IOS_WITH_FIREFOX_TOKEN,
        FIREFOX_HUGE_MAJOR,
        CAMINO,
        CAMINO_LIKE_FX,
        SEAMONKEY,
        ICECAT,
        ICEWEASEL,
        CHROME,
        SAFARI,
        IE,
        "",
        "Firefox",
        "Mozilla/5.0 (",
        " FxiOS Android Firefox/",
    ];
}
