use thiserror::Error;

/// Main error type for the classkit crate.
///
/// Resolution and composition never fail; only the configuration-loading
/// surface produces errors.
#[derive(Debug, Error)]
pub enum ClasskitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, ClasskitError>;
