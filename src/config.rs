use std::time::Duration;

use indexmap::IndexSet;
use serde::Deserialize;

use crate::error::ConfigError;

// =============================================================================
// Release-related constants
// =============================================================================

/// Oldest desktop Firefox major version that can sign in to a Firefox Account.
/// Anything below is reported as `legacy`.
pub const FXA_LAST_SUPPORTED: u32 = 29;

/// How long to wait for the browser integration before falling back to
/// UA-derived values (400ms)
pub const DEFAULT_REFINEMENT_TIMEOUT_MS: u64 = 400;

/// Ambient release data published by the page.
///
/// `latest` is the current stable release, `esr` the ESR releases still
/// supported, in page order.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ReleaseConfig {
    pub latest: Option<String>,
    #[serde(rename = "esrVersions")]
    pub esr: IndexSet<String>,
}

impl ReleaseConfig {
    pub fn new(
        latest: impl Into<String>,
        esr: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            latest: Some(latest.into()),
            esr: esr.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from the two raw attribute values, `data-latest-firefox` and the
    /// space-delimited `data-esr-versions`. Blank values count as missing.
    pub fn from_attributes(latest: Option<&str>, esr_versions: Option<&str>) -> Self {
        let latest = latest
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string);
        let esr = esr_versions
            .map(|v| v.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();

        Self { latest, esr }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Source of [`ReleaseConfig`], read once per evaluation.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigSource: Send + Sync {
    fn release_config(&self) -> ReleaseConfig;
}

impl ConfigSource for ReleaseConfig {
    fn release_config(&self) -> ReleaseConfig {
        self.clone()
    }
}

/// Aggregator behaviour
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    /// Treat any deficit against the target release as outdated
    pub strict: bool,
    /// Bounded wait for the browser integration, in milliseconds
    pub refinement_timeout: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            strict: false,
            refinement_timeout: DEFAULT_REFINEMENT_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    pub fn refinement_timeout(&self) -> Duration {
        Duration::from_millis(self.refinement_timeout)
    }
}
