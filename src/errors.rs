// Copyright 2025 Cowboy AI, LLC.

//! Error types for category construction and export

use thiserror::Error;

/// Errors that can occur while building, validating or exporting categories
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    /// Invalid argument supplied to a constructor or mutator
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Why the argument was rejected
        reason: String,
    },

    /// A morphism endpoint is not a member of the category
    #[error("Invalid argument: '{role}' element {element} is not a member of the category")]
    UnknownElement {
        /// Which endpoint was missing ("from" or "to")
        role: &'static str,
        /// Display form of the missing element
        element: String,
    },

    /// The external graph renderer failed or could not be launched
    #[error("External tool failure: {tool} - {message}")]
    ExternalToolFailure {
        /// Program that was invoked
        tool: String,
        /// Exit status or launch error
        message: String,
    },

    /// Writing a graph description failed
    #[error("I/O error: {0}")]
    Io(String),

    /// Serializing a graph description failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for category operations
pub type CategoryResult<T> = Result<T, CategoryError>;

impl From<serde_json::Error> for CategoryError {
    fn from(err: serde_json::Error) -> Self {
        CategoryError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for CategoryError {
    fn from(err: std::io::Error) -> Self {
        CategoryError::Io(err.to_string())
    }
}

impl CategoryError {
    /// Create an invalid argument error
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        CategoryError::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Check if this error is an argument/membership rejection
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            CategoryError::InvalidArgument { .. } | CategoryError::UnknownElement { .. }
        )
    }

    /// Check if this error came from the external renderer
    pub fn is_external_tool_failure(&self) -> bool {
        matches!(self, CategoryError::ExternalToolFailure { .. })
    }
}
