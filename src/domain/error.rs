//! Error types for the viewer core.
//!
//! Navigation itself never fails: out-of-range requests are clamped and empty
//! sequences turn every operation into a no-op. The fallible edges are the
//! ones that touch the host: handle creation and release, configuration
//! loading, and decoding events posted by the UI shell. They all report
//! through [`ViewerError`].

use thiserror::Error;

/// The main error type for viewer operations.
///
/// # Examples
///
/// ```
/// use seqview::ViewerError;
///
/// fn validate_scheme(scheme: &str) -> Result<(), ViewerError> {
///     if scheme.is_empty() {
///         return Err(ViewerError::Config("handle_scheme must not be empty".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_scheme("").is_err());
/// ```
#[derive(Debug, Error)]
pub enum ViewerError {
    /// Filesystem or I/O operation failed.
    ///
    /// Only reachable while reading a configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The handle provider could not create a handle for a file.
    #[error("Handle error: {0}")]
    Handle(String),

    /// A handle was released that is unknown or already released.
    #[error("Handle already released: {0}")]
    HandleReleased(String),

    /// An event posted by the UI shell could not be decoded.
    #[error("Event decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A specialized `Result` type for viewer operations.
pub type Result<T> = std::result::Result<T, ViewerError>;
