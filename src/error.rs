use thiserror::Error;

#[derive(Error, Debug)]
pub enum OccupancyError {
    #[error("Hostaway API auth error: {status} - {body}")]
    Auth { status: u16, body: String },

    #[error("Authentication failed: {reason}")]
    AuthFailed { reason: String },

    #[error("Failed to fetch reservation data from Hostaway: {reason}")]
    Fetch { reason: String },

    #[error("Failed to publish report: {reason}")]
    Publish { reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, OccupancyError>;
