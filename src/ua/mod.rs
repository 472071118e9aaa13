//! User-Agent classification
//!
//! - predicates.rs: Pure Firefox detection over raw UA strings
//! - classifier.rs: Classifier trait bound to the current environment

pub mod classifier;
pub mod predicates;

pub use classifier::{BrowserClassification, Classifier, UserAgentClassifier, classify};
pub use predicates::{
    UNKNOWN_VERSION, firefox_major_version, firefox_version, is_firefox, is_firefox_android,
    is_firefox_desktop, is_firefox_ios, is_like_firefox,
};
