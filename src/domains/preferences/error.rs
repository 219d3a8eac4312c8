//! Preference-specific error types.
//!
//! None of these escape the preference stores: every failure is logged and
//! recovered locally, either by treating a record as empty or by carrying
//! on in memory only.

use thiserror::Error;

/// Errors that can occur while reading or writing persisted preferences.
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// The storage backend could not be used at all.
    #[error("Preference storage unavailable: {0}")]
    Unavailable(String),

    /// I/O failure while reading or writing the backing file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted record could not be parsed.
    #[error("Malformed record '{key}': {reason}")]
    Malformed { key: String, reason: String },
}

impl PreferenceError {
    /// Create a new "unavailable" error.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Create a new "malformed" error.
    pub fn malformed(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
