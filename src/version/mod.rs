//! Version comparison and freshness checks
//!
//! # Modules
//!
//! - [`compare`]: Dotted version comparison with zero padding
//! - [`freshness`]: Up-to-date checks against the latest release and ESR list
//! - [`types`]: Common types like [`Channel`]

pub mod compare;
pub mod freshness;
pub mod types;

pub use compare::{compare_versions, major_version, parse_segments};
pub use freshness::{FreshnessEvaluator, is_up_to_date};
pub use types::Channel;
