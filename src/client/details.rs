//! Records delivered to callers

use serde::{Deserialize, Serialize, Serializer};

use crate::version::types::Channel;

/// What the page knows about the visitor's Firefox
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FirefoxDetails {
    /// Version came from the browser integration rather than the UA
    pub accurate: bool,
    pub version: String,
    pub channel: Channel,
    pub distribution: Option<String>,
    pub is_up_to_date: bool,
    #[serde(rename = "isESR")]
    pub is_esr: bool,
}

/// Mobile platform of a Firefox build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mobile {
    Android,
    Ios,
}

impl Mobile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mobile::Android => "android",
            Mobile::Ios => "ios",
        }
    }
}

/// Firefox Account applicability for the visitor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FxaDetails {
    pub firefox: bool,
    /// Desktop Firefox too old to sign in
    pub legacy: bool,
    /// `"android"`, `"ios"` or `false` on the page
    #[serde(serialize_with = "serialize_mobile")]
    pub mobile: Option<Mobile>,
    pub setup: bool,
    pub browser_services: BrowserServices,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrowserServices {
    pub sync: SyncServices,
}

/// Sync state; device counts are only known when the browser reports them
/// and read as `false` on the page until then
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SyncServices {
    pub setup: bool,
    #[serde(serialize_with = "serialize_count")]
    pub desktop_devices: Option<u32>,
    #[serde(serialize_with = "serialize_count")]
    pub mobile_devices: Option<u32>,
    #[serde(serialize_with = "serialize_count")]
    pub total_devices: Option<u32>,
}

fn serialize_mobile<S: Serializer>(
    mobile: &Option<Mobile>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match mobile {
        Some(mobile) => serializer.serialize_str(mobile.as_str()),
        None => serializer.serialize_bool(false),
    }
}

fn serialize_count<S: Serializer>(count: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error> {
    match count {
        Some(count) => serializer.serialize_u32(*count),
        None => serializer.serialize_bool(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn firefox_details_serializes_with_page_field_names() {
        let details = FirefoxDetails {
            accurate: false,
            version: "95.1.2".to_string(),
            channel: Channel::Release,
            distribution: None,
            is_up_to_date: true,
            is_esr: false,
        };

        assert_eq!(
            serde_json::to_value(details).unwrap(),
            json!({
                "accurate": false,
                "version": "95.1.2",
                "channel": "release",
                "distribution": null,
                "isUpToDate": true,
                "isESR": false
            })
        );
    }

    #[test]
    fn fxa_details_serializes_missing_mobile_as_false() {
        let value = serde_json::to_value(FxaDetails::default()).unwrap();

        assert_eq!(value["mobile"], json!(false));
        assert_eq!(value["browserServices"]["sync"]["setup"], json!(false));
    }

    #[test]
    fn fxa_details_serializes_unknown_device_counts_as_false() {
        let value = serde_json::to_value(FxaDetails::default()).unwrap();

        assert_eq!(
            value["browserServices"]["sync"],
            json!({
                "setup": false,
                "desktopDevices": false,
                "mobileDevices": false,
                "totalDevices": false
            })
        );
    }

    #[test]
    fn fxa_details_serializes_reported_device_counts() {
        let details = FxaDetails {
            browser_services: BrowserServices {
                sync: SyncServices {
                    setup: true,
                    desktop_devices: Some(1),
                    mobile_devices: None,
                    total_devices: Some(1),
                },
            },
            ..Default::default()
        };

        let sync = &serde_json::to_value(details).unwrap()["browserServices"]["sync"];

        assert_eq!(sync["desktopDevices"], json!(1));
        assert_eq!(sync["mobileDevices"], json!(false));
        assert_eq!(sync["totalDevices"], json!(1));
    }

    #[test]
    fn fxa_details_serializes_mobile_platform_name() {
        let details = FxaDetails {
            firefox: true,
            mobile: Some(Mobile::Ios),
            ..Default::default()
        };

        assert_eq!(serde_json::to_value(details).unwrap()["mobile"], json!("ios"));
    }
}
