//! Error types for the Goldpan library.
//!
//! All fallible operations in Goldpan return [`Result`], an alias over
//! [`GoldpanError`]. Provider calls do NOT surface transport or payload
//! failures through this type; they log and fall back to their documented
//! defaults so a long collection run keeps going. The variants
//! here cover the failures that are allowed to stop a run: missing
//! credentials, unwritable reports, and plain I/O.
//!
//! # Examples
//!
//! ```
//! use goldpan::error::{GoldpanError, Result};
//!
//! fn check(configured: bool) -> Result<()> {
//!     if !configured {
//!         return Err(GoldpanError::config("API credentials are not set"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(false).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Goldpan operations.
#[derive(Error, Debug)]
pub enum GoldpanError {
    /// I/O errors (report writing, config reading).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors (missing or unusable credentials).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Provider-related errors (request construction, unexpected payloads).
    #[error("Provider error: {0}")]
    Provider(String),

    /// Analysis-related errors (tokenization, classification).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Report-related errors (artifact naming, serialization context).
    #[error("Report error: {0}")]
    Report(String),

    /// HTTP transport errors.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with GoldpanError.
pub type Result<T> = std::result::Result<T, GoldpanError>;

impl GoldpanError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        GoldpanError::Config(msg.into())
    }

    /// Create a new provider error.
    pub fn provider<S: Into<String>>(msg: S) -> Self {
        GoldpanError::Provider(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        GoldpanError::Analysis(msg.into())
    }

    /// Create a new report error.
    pub fn report<S: Into<String>>(msg: S) -> Self {
        GoldpanError::Report(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        GoldpanError::Other(msg.into())
    }
}
