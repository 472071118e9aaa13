//! Classifier abstraction for the current environment's User-Agent

#[cfg(test)]
use mockall::automock;
use serde::Serialize;

use crate::ua::predicates;
use crate::version::compare::major_version;

/// Browser facts about the environment the client runs in.
///
/// The aggregator only sees the browser through this trait, so tests can
/// force any combination of facts.
#[cfg_attr(test, automock)]
pub trait Classifier: Send + Sync {
    fn is_firefox(&self) -> bool;

    fn is_firefox_desktop(&self) -> bool;

    fn is_firefox_android(&self) -> bool;

    fn is_firefox_ios(&self) -> bool;

    fn is_like_firefox(&self) -> bool;

    /// Dotted Firefox version, `"0"` when unknown
    fn version(&self) -> String;
}

/// [`Classifier`] over a fixed User-Agent string
#[derive(Debug, Clone)]
pub struct UserAgentClassifier {
    ua: String,
}

impl UserAgentClassifier {
    pub fn new(ua: impl Into<String>) -> Self {
        Self { ua: ua.into() }
    }

    pub fn user_agent(&self) -> &str {
        &self.ua
    }
}

impl Classifier for UserAgentClassifier {
    fn is_firefox(&self) -> bool {
        predicates::is_firefox(&self.ua)
    }

    fn is_firefox_desktop(&self) -> bool {
        predicates::is_firefox_desktop(&self.ua)
    }

    fn is_firefox_android(&self) -> bool {
        predicates::is_firefox_android(&self.ua)
    }

    fn is_firefox_ios(&self) -> bool {
        predicates::is_firefox_ios(&self.ua)
    }

    fn is_like_firefox(&self) -> bool {
        predicates::is_like_firefox(&self.ua)
    }

    fn version(&self) -> String {
        predicates::firefox_version(&self.ua)
    }
}

/// Snapshot of everything a [`Classifier`] knows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserClassification {
    pub is_firefox: bool,
    pub is_firefox_desktop: bool,
    pub is_firefox_android: bool,
    #[serde(rename = "isFirefoxiOS")]
    pub is_firefox_ios: bool,
    pub is_like_firefox: bool,
    pub version: String,
    pub major_version: u32,
}

impl BrowserClassification {
    pub fn from_classifier<C: Classifier + ?Sized>(classifier: &C) -> Self {
        let version = classifier.version();
        Self {
            is_firefox: classifier.is_firefox(),
            is_firefox_desktop: classifier.is_firefox_desktop(),
            is_firefox_android: classifier.is_firefox_android(),
            is_firefox_ios: classifier.is_firefox_ios(),
            is_like_firefox: classifier.is_like_firefox(),
            major_version: major_version(&version),
            version,
        }
    }
}

/// Classify a raw User-Agent string
pub fn classify(ua: &str) -> BrowserClassification {
    BrowserClassification::from_classifier(&UserAgentClassifier::new(ua))
}
