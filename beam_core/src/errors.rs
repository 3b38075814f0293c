//! # Error Types
//!
//! Structured error types for beam_core. The raw evaluator functions never
//! return errors (they assume validated input); everything that checks input
//! first reports problems through [`BeamError`].
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{BeamError, BeamResult};
//!
//! fn validate_length(length: f64) -> BeamResult<()> {
//!     if length <= 0.0 {
//!         return Err(BeamError::invalid_input(
//!             "length",
//!             length.to_string(),
//!             "Length of beam must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_length(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type BeamResult<T> = Result<T, BeamError>;

/// Structured error type for beam operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BeamError {
    /// An input value is invalid (negative, out of bounds, not finite, ...)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The analysis was asked to run on inputs that break its preconditions
    #[error("Precondition violated: {reason}")]
    PreconditionViolation { reason: String },

    /// Two loads in one collection share a name
    #[error("Duplicate load name: {name}")]
    DuplicateLoadName { name: String },

    /// No load with this id exists in the collection
    #[error("Load not found: {id}")]
    LoadNotFound { id: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Reading or writing a document file failed
    #[error("File error during {operation} on '{path}': {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Document schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl BeamError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        BeamError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a PreconditionViolation error
    pub fn precondition(reason: impl Into<String>) -> Self {
        BeamError::PreconditionViolation {
            reason: reason.into(),
        }
    }

    /// Create a DuplicateLoadName error
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        BeamError::DuplicateLoadName { name: name.into() }
    }

    /// Create a LoadNotFound error
    pub fn load_not_found(id: impl ToString) -> Self {
        BeamError::LoadNotFound { id: id.to_string() }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        BeamError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        BeamError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BeamError::InvalidInput { .. } => "INVALID_INPUT",
            BeamError::PreconditionViolation { .. } => "PRECONDITION_VIOLATION",
            BeamError::DuplicateLoadName { .. } => "DUPLICATE_LOAD_NAME",
            BeamError::LoadNotFound { .. } => "LOAD_NOT_FOUND",
            BeamError::SerializationError { .. } => "SERIALIZATION_ERROR",
            BeamError::FileError { .. } => "FILE_ERROR",
            BeamError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for BeamError {
    fn from(err: serde_json::Error) -> Self {
        BeamError::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = BeamError::invalid_input("mass", "-5", "Mass must be at least 0");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: BeamError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(BeamError::duplicate_name("Load 1").error_code(), "DUPLICATE_LOAD_NAME");
        assert_eq!(BeamError::precondition("EI is zero").error_code(), "PRECONDITION_VIOLATION");
        assert_eq!(BeamError::load_not_found("abc").error_code(), "LOAD_NOT_FOUND");
        assert_eq!(BeamError::file_error("read", "a.json", "denied").error_code(), "FILE_ERROR");
        assert_eq!(BeamError::serialization("bad").error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_display_message() {
        let error = BeamError::duplicate_name("Load 2");
        assert_eq!(error.to_string(), "Duplicate load name: Load 2");
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<f64>("not a number").unwrap_err();
        let converted: BeamError = err.into();
        assert_eq!(converted.error_code(), "SERIALIZATION_ERROR");
    }
}
