//! Error types for parameter validation and hashing.

use thiserror::Error;

/// Errors produced while validating or hashing generation parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    /// A parameter failed validation.
    #[error("{field}: {message}")]
    Invalid {
        /// JSON path of the offending field (e.g. "resolution").
        field: String,
        /// Human-readable error message.
        message: String,
    },

    /// Parameters could not be serialized for hashing.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ParamsError {
    /// Creates a validation error for the given field.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        ParamsError::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the offending field, if this is a validation error.
    pub fn field(&self) -> Option<&str> {
        match self {
            ParamsError::Invalid { field, .. } => Some(field),
            ParamsError::Serialization(_) => None,
        }
    }
}

impl From<serde_json::Error> for ParamsError {
    fn from(err: serde_json::Error) -> Self {
        ParamsError::Serialization(err.to_string())
    }
}
