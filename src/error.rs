//! Error types for the Glossa library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`GlossaError`] enum. Detection itself rarely fails: a text that cannot be
//! classified is reported as [`Detection::Undetermined`](crate::detector::Detection),
//! not as an error. Errors are reserved for broken artifacts, bad
//! configuration and misuse of the API.
//!
//! # Examples
//!
//! ```
//! use glossa::error::{GlossaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(GlossaError::invalid_argument("profile size must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

use crate::detector::DetectorKind;

/// The main error type for Glossa operations.
#[derive(Error, Debug)]
pub enum GlossaError {
    /// I/O errors (corpus files, artifacts, configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Analysis-related errors (normalization, tokenization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pretrained model artifact errors (shape mismatch, missing tensors, bad label map)
    #[error("Model error: {0}")]
    Model(String),

    /// Errors raised by the tensor library during loading or inference
    #[error("Tensor error: {0}")]
    Tensor(#[from] candle_core::Error),

    /// The requested detector was not configured
    #[error("Detector unavailable: {0}")]
    DetectorUnavailable(DetectorKind),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for operations that may fail with GlossaError.
pub type Result<T> = std::result::Result<T, GlossaError>;

impl GlossaError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        GlossaError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        GlossaError::Config(msg.into())
    }

    /// Create a new model error.
    pub fn model<S: Into<String>>(msg: S) -> Self {
        GlossaError::Model(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        GlossaError::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = GlossaError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");

        let error = GlossaError::model("missing tensor layer_1.weight");
        assert_eq!(error.to_string(), "Model error: missing tensor layer_1.weight");

        let error = GlossaError::DetectorUnavailable(DetectorKind::Neural);
        assert_eq!(error.to_string(), "Detector unavailable: neural");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let glossa_error = GlossaError::from(io_error);

        match glossa_error {
            GlossaError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
