//! Error types for evops
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (bad args, missing snapshot, unknown event)
//! - 4: Operation failed (IO, malformed snapshot or config)
//!
//! The derivation core itself never fails: missing dates, empty template
//! lists, and absent completion records all have defined fallbacks. Errors
//! only arise at the boundary, while loading input or parsing arguments.

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the evops CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for evops operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Event snapshot not found: {0}")]
    SnapshotNotFound(PathBuf),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // Operation failures (exit code 4)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::SnapshotNotFound(_)
            | Error::EventNotFound(_)
            | Error::InvalidConfig(_)
            | Error::InvalidArgument(_) => exit_codes::USER_ERROR,

            Error::Io(_)
            | Error::Json(_)
            | Error::TomlParse(_)
            | Error::TomlSerialize(_) => exit_codes::OPERATION_FAILED,
        }
    }
}

/// Result type alias for evops operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wrapper for displaying errors in JSON format
#[derive(serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&Error> for JsonError {
    fn from(err: &Error) -> Self {
        JsonError {
            error: err.to_string(),
            code: err.exit_code(),
            details: None,
        }
    }
}
