//! Error types

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractError>;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// Neither a column key nor any global header matched the name
    #[error("no column keyed or headed by '{0}'")]
    MissingKey(String),

    #[error("invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("failed to parse extraction options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
