//! Firefox detection and update-freshness reporting
//!
//! Classifies a browser User-Agent string (is it Firefox, on which platform,
//! which version), checks that version against the latest release and the
//! ESR list, and aggregates the result into session-cached records for page
//! scripts.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Classifier  │────▶│   Client    │◀────│ Integration │
//! │    (ua)     │     │ (aggregate) │     │  (refine)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │  Freshness  │
//!                     │  (version)  │
//!                     └─────────────┘
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod ua;
pub mod version;

pub use client::{Client, FirefoxDetails, FxaDetails};
pub use config::{ClientConfig, ConfigSource, ReleaseConfig};
