//! Up-to-date checks against the latest release and the ESR list

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::ReleaseConfig;
use crate::version::compare::{compare_versions, major_version};
use crate::version::types::Channel;

/// Leading `major.minor` or `major.minor.patch` of a user version
static USER_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:\.\d+){1,2})").unwrap());

/// Check whether `user_version` is current.
///
/// Targets are the ESR releases when `is_esr` is set, otherwise the latest
/// release. The version is up to date if it satisfies any target:
/// - strict: `user >= target`
/// - lenient: same or newer major, any minor/patch lag is tolerated
///
/// A version without a dotted numeric prefix ("0", "", "abc") is never up to
/// date, and neither is anything checked against missing config.
pub fn is_up_to_date(
    strict: bool,
    is_esr: bool,
    user_version: &str,
    config: &ReleaseConfig,
) -> bool {
    let Some(user) = USER_VERSION_RE
        .captures(user_version)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
    else {
        return false;
    };

    let satisfies = |target: &str| {
        if strict {
            compare_versions(user, target) != Ordering::Less
        } else {
            major_version(user) >= major_version(target)
        }
    };

    if is_esr {
        config.esr.iter().any(|target| satisfies(target.as_str()))
    } else {
        config.latest.as_deref().is_some_and(satisfies)
    }
}

/// Freshness checks bound to one [`ReleaseConfig`] snapshot
#[derive(Debug, Clone)]
pub struct FreshnessEvaluator {
    config: ReleaseConfig,
}

impl FreshnessEvaluator {
    pub fn new(config: ReleaseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReleaseConfig {
        &self.config
    }

    pub fn is_up_to_date(&self, strict: bool, is_esr: bool, user_version: &str) -> bool {
        is_up_to_date(strict, is_esr, user_version, &self.config)
    }

    /// Whether the version belongs to an ESR train.
    ///
    /// True when its major matches a listed ESR major that is not also the
    /// current release's major.
    pub fn is_esr_version(&self, user_version: &str) -> bool {
        let major = major_version(user_version);
        if major == 0 {
            return false;
        }

        let latest_major = self.config.latest.as_deref().map(major_version);
        if latest_major == Some(major) {
            return false;
        }

        self.config.esr.iter().any(|esr| major_version(esr) == major)
    }

    /// Channel inferred from a UA-derived version
    pub fn channel_for(&self, user_version: &str) -> Channel {
        if major_version(user_version) == 0 {
            Channel::Unknown
        } else if self.is_esr_version(user_version) {
            Channel::Esr
        } else if self.config.latest.is_some() {
            Channel::Release
        } else {
            Channel::Unknown
        }
    }
}
