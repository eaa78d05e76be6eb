//! error handling stuff
use thiserror::Error;

#[derive(Debug, Error)]
/// An error
pub enum ThemeError {
    /// a theme name that is not in the registry
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    /// a malformed color value
    #[error("invalid color value: {0}")]
    InvalidColor(String),

    /// a persisted value that no longer parses
    #[error("corrupt persisted data under key `{key}`: {reason}")]
    CorruptPersistedData {
        /// the store key the value lived under
        key: String,
        /// why it failed to parse
        reason: String,
    },

    /// a json error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A result using [`ThemeError`] as the `Err` variant
pub type Result<T, U = ThemeError> = std::result::Result<T, U>;
