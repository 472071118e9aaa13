//! Details aggregation for the visiting browser
//!
//! # Modules
//!
//! - [`details`]: `FirefoxDetails` and `FxaDetails` records
//! - [`integration`]: Browser integration trait and bounded requests
//! - `memo`: Session-wide memo with a single in-flight computation

pub mod details;
pub mod integration;
mod memo;

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::{ClientConfig, ConfigSource, FXA_LAST_SUPPORTED, ReleaseConfig};
use crate::error::IntegrationError;
use crate::ua::classifier::{BrowserClassification, Classifier, UserAgentClassifier};
use crate::version::compare::major_version;
use crate::version::freshness::FreshnessEvaluator;
use crate::version::types::Channel;

pub use details::{BrowserServices, FirefoxDetails, FxaDetails, Mobile, SyncServices};
pub use integration::{AppInfo, BrowserIntegration, FxaInfo, NoIntegration, request_with_timeout};

use memo::Memo;

/// Produces and caches [`FirefoxDetails`] and [`FxaDetails`] for one session
pub struct Client {
    classifier: Arc<dyn Classifier>,
    config: Arc<dyn ConfigSource>,
    integration: Arc<dyn BrowserIntegration>,
    settings: ClientConfig,
    firefox_details: Memo<FirefoxDetails>,
    fxa_details: Memo<FxaDetails>,
}

impl Client {
    /// Client for a UA string with no browser integration
    pub fn new(ua: impl Into<String>, release: ReleaseConfig) -> Self {
        Self::build(
            Arc::new(UserAgentClassifier::new(ua)),
            Arc::new(release),
            Arc::new(NoIntegration),
            ClientConfig::default(),
        )
    }

    /// Build a Client with custom classifier, config source and integration
    pub fn build(
        classifier: Arc<dyn Classifier>,
        config: Arc<dyn ConfigSource>,
        integration: Arc<dyn BrowserIntegration>,
        settings: ClientConfig,
    ) -> Self {
        info!(
            "Initializing client (strict: {}, refinement timeout: {}ms)",
            settings.strict, settings.refinement_timeout
        );

        Self {
            classifier,
            config,
            integration,
            settings,
            firefox_details: Memo::new(),
            fxa_details: Memo::new(),
        }
    }

    /// Facts about the current browser
    pub fn classification(&self) -> BrowserClassification {
        BrowserClassification::from_classifier(self.classifier.as_ref())
    }

    pub async fn firefox_details(&self) -> FirefoxDetails {
        self.firefox_details
            .get_or_init(|| self.compute_firefox_details())
            .await
    }

    /// Deliver [`FirefoxDetails`] to `callback` on a separate task
    pub fn get_firefox_details<F>(self: &Arc<Self>, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(FirefoxDetails) + Send + 'static,
    {
        let client = Arc::clone(self);
        tokio::spawn(async move { callback(client.firefox_details().await) })
    }

    /// Last computed [`FirefoxDetails`], if any
    pub fn cached_firefox_details(&self) -> Option<FirefoxDetails> {
        self.firefox_details.get()
    }

    pub async fn fxa_details(&self) -> FxaDetails {
        self.fxa_details
            .get_or_init(|| self.compute_fxa_details())
            .await
    }

    /// Deliver [`FxaDetails`] to `callback` on a separate task
    pub fn get_fxa_details<F>(self: &Arc<Self>, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(FxaDetails) + Send + 'static,
    {
        let client = Arc::clone(self);
        tokio::spawn(async move { callback(client.fxa_details().await) })
    }

    /// Last computed [`FxaDetails`], if any
    pub fn cached_fxa_details(&self) -> Option<FxaDetails> {
        self.fxa_details.get()
    }

    /// Drop both cached records; the next request recomputes from scratch
    pub fn reset(&self) {
        self.firefox_details.reset();
        self.fxa_details.reset();
    }

    async fn compute_firefox_details(&self) -> FirefoxDetails {
        debug!("Computing Firefox details");

        let evaluator = FreshnessEvaluator::new(self.config.release_config());
        let version = self.classifier.version();
        let is_esr = evaluator.is_esr_version(&version);

        let fallback = FirefoxDetails {
            accurate: false,
            channel: evaluator.channel_for(&version),
            distribution: None,
            is_up_to_date: evaluator.is_up_to_date(self.settings.strict, is_esr, &version),
            is_esr,
            version,
        };

        // Only desktop Firefox exposes the integration
        if !self.classifier.is_firefox_desktop() {
            return fallback;
        }

        let app_info = request_with_timeout(
            self.settings.refinement_timeout(),
            self.integration.app_info(),
        )
        .await
        .and_then(validate_app_info);

        match app_info {
            Ok(app_info) => {
                let channel = Channel::from(app_info.channel.as_str());
                let is_esr = channel == Channel::Esr;
                info!(
                    "Browser reported Firefox {} on channel {}",
                    app_info.version, channel
                );

                FirefoxDetails {
                    accurate: true,
                    is_up_to_date: evaluator.is_up_to_date(
                        self.settings.strict,
                        is_esr,
                        &app_info.version,
                    ),
                    version: app_info.version,
                    channel,
                    distribution: app_info.distribution,
                    is_esr,
                }
            }
            Err(e) => {
                debug!("Using UA-derived Firefox details: {}", e);
                fallback
            }
        }
    }

    async fn compute_fxa_details(&self) -> FxaDetails {
        debug!("Computing Firefox Account details");

        let desktop = self.classifier.is_firefox_desktop();
        let android = self.classifier.is_firefox_android();
        let ios = self.classifier.is_firefox_ios();

        let mobile = if android {
            Some(Mobile::Android)
        } else if ios {
            Some(Mobile::Ios)
        } else {
            None
        };

        let mut details = FxaDetails {
            firefox: desktop || android || ios,
            mobile,
            ..Default::default()
        };

        if !desktop {
            return details;
        }

        if major_version(&self.classifier.version()) < FXA_LAST_SUPPORTED {
            details.legacy = true;
            return details;
        }

        match request_with_timeout(
            self.settings.refinement_timeout(),
            self.integration.fxa_info(),
        )
        .await
        {
            Ok(fxa_info) => {
                details.setup = fxa_info.setup;
                details.browser_services = fxa_info.browser_services;
            }
            Err(e) => debug!("Account state unavailable: {}", e),
        }

        details
    }
}

fn validate_app_info(app_info: AppInfo) -> Result<AppInfo, IntegrationError> {
    if major_version(&app_info.version) == 0 {
        return Err(IntegrationError::InvalidResponse(format!(
            "unusable version {:?}",
            app_info.version
        )));
    }
    Ok(app_info)
}
