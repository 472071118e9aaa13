//! Browser integration trait for precise version and account state

use std::future::Future;
use std::time::Duration;

#[cfg(test)]
use mockall::automock;
use serde::Deserialize;

use crate::client::details::BrowserServices;
use crate::error::IntegrationError;

/// Application info reported by the browser itself
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    pub version: String,
    #[serde(rename = "defaultUpdateChannel")]
    pub channel: String,
    #[serde(default)]
    pub distribution: Option<String>,
}

/// Firefox Account state reported by the browser
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FxaInfo {
    pub setup: bool,
    pub browser_services: BrowserServices,
}

impl TryFrom<serde_json::Value> for AppInfo {
    type Error = IntegrationError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value).map_err(|e| IntegrationError::InvalidResponse(e.to_string()))
    }
}

impl TryFrom<serde_json::Value> for FxaInfo {
    type Error = IntegrationError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value).map_err(|e| IntegrationError::InvalidResponse(e.to_string()))
    }
}

/// Best-effort channel to the hosting browser.
///
/// Implementations may never answer; callers bound every request with
/// [`request_with_timeout`].
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait BrowserIntegration: Send + Sync {
    async fn app_info(&self) -> Result<AppInfo, IntegrationError>;

    async fn fxa_info(&self) -> Result<FxaInfo, IntegrationError>;
}

/// Integration for environments without a browser bridge
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIntegration;

#[async_trait::async_trait]
impl BrowserIntegration for NoIntegration {
    async fn app_info(&self) -> Result<AppInfo, IntegrationError> {
        Err(IntegrationError::Unavailable)
    }

    async fn fxa_info(&self) -> Result<FxaInfo, IntegrationError> {
        Err(IntegrationError::Unavailable)
    }
}

/// Await an integration request for at most `timeout`
pub async fn request_with_timeout<T, F>(
    timeout: Duration,
    request: F,
) -> Result<T, IntegrationError>
where
    F: Future<Output = Result<T, IntegrationError>>,
{
    tokio::time::timeout(timeout, request)
        .await
        .map_err(|_| IntegrationError::Timeout {
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        })?
}
