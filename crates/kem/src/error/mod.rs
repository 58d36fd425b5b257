//! Error handling for key-agreement operations

use std::fmt;

use ffcrypt_algorithms::error::Error as PrimitiveError;
use ffcrypt_api::Error as CoreError;

/// Error type for key-agreement operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Arithmetic-primitive error
    Primitive(PrimitiveError),

    /// Domain-parameter generation failed in the external collaborator
    ParameterGeneration {
        /// Step that failed
        step: &'static str,
        /// Collaborator-reported details
        details: String,
    },

    /// Invalid key material
    InvalidKey {
        /// Kind of key that was rejected
        key_type: &'static str,
        /// Reason for the rejection
        reason: &'static str,
    },

    /// Invalid domain parameter supplied by the caller
    InvalidParameter {
        /// Name of the parameter
        name: &'static str,
        /// Reason for the rejection
        reason: &'static str,
    },
}

/// Result type for key-agreement operations
pub type Result<T> = core::result::Result<T, Error>;

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "{}", e),
            Error::ParameterGeneration { step, details } => {
                write!(f, "Parameter generation failed at {}: {}", step, details)
            }
            Error::InvalidKey { key_type, reason } => {
                write!(f, "Invalid {}: {}", key_type, reason)
            }
            Error::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
        }
    }
}

impl std::error::Error for Error {}

// Conversion into the top-level api error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => CoreError::from(e),
            Error::ParameterGeneration { step, details } => CoreError::ParameterGeneration {
                context: step,
                message: details,
            },
            Error::InvalidKey { key_type, reason } => CoreError::InvalidKey {
                context: key_type,
                message: reason.to_string(),
            },
            Error::InvalidParameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason.to_string(),
            },
        }
    }
}
