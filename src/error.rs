use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntegrationError {
    #[error("Browser integration is not available")]
    Unavailable,

    #[error("Browser integration did not respond within {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Failed to install subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}
