//! Error type definitions for key-agreement operations

use std::fmt;

/// Primary error type for key-agreement operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Domain-parameter generation failed in an external collaborator
    ParameterGeneration {
        context: &'static str,
        message: String,
    },

    /// Other error
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for key-agreement operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::ParameterGeneration { message, .. } => {
                Self::ParameterGeneration { context, message }
            }
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKey { context, message } => {
                write!(f, "Invalid key in {}: {}", context, message)
            }
            Error::InvalidParameter { context, message } => {
                write!(f, "Invalid parameter in {}: {}", context, message)
            }
            Error::ParameterGeneration { context, message } => {
                write!(f, "Parameter generation failed in {}: {}", context, message)
            }
            Error::Other { context, message } => {
                write!(f, "Error in {}: {}", context, message)
            }
        }
    }
}

impl std::error::Error for Error {}
