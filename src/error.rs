use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunLensError {
    #[error("Invalid duration '{0}': expected <amount><unit>, e.g. 7d, 2w or 1m")]
    InvalidDuration(String),

    #[error("Unknown duration unit '{0}': expected d/day, w/week or m/month")]
    UnknownDurationUnit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RunLensError>;
