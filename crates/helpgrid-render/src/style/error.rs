//! Style configuration errors.

use thiserror::Error;

/// Error returned when a style configuration cannot be loaded.
#[derive(Debug, Error)]
pub enum StyleError {
    /// YAML parse error, including unknown category names.
    #[error("invalid style configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A shorthand value names an unknown color or attribute.
    #[error("style '{category}': {message}")]
    InvalidShorthand { category: String, message: String },
}
