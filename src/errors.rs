use thiserror::Error;

/// Main error type for the tailwind-styled crate
#[derive(Debug, Error)]
pub enum StyledError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pattern error: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Glob error: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No style sheets found matching the provided patterns")]
    NoFilesFound,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Unknown component: {0}")]
    UnknownComponent(String),

    #[error("Invalid render target '{0}': expected an element identifier such as 'div' or 'my-widget'")]
    InvalidTarget(String),

    #[error("Invalid prop '{name}': expected {expected}")]
    InvalidProp { name: String, expected: &'static str },

    #[error("Input error: {0}")]
    InputError(String),

    #[error("Failed to write output to {path}: {message}")]
    OutputError { path: String, message: String },
}

pub type Result<T> = std::result::Result<T, StyledError>;
