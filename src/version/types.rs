//! Common types for version checks

use serde::{Serialize, Serializer};

/// Release track a Firefox build belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Stable release
    Release,
    /// Extended Support Release
    Esr,
    /// Could not be determined
    Unknown,
    /// Any other update channel reported by the browser (beta, nightly, ...)
    Other(String),
}

impl Channel {
    pub fn as_str(&self) -> &str {
        match self {
            Channel::Release => "release",
            Channel::Esr => "esr",
            Channel::Unknown => "unknown",
            Channel::Other(name) => name,
        }
    }
}

impl From<&str> for Channel {
    fn from(s: &str) -> Self {
        match s.trim() {
            "release" => Channel::Release,
            "esr" => Channel::Esr,
            "" | "unknown" => Channel::Unknown,
            other => Channel::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Channel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
