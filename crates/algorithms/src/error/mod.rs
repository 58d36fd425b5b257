//! Error handling for group-arithmetic primitives

use std::borrow::Cow;
use std::fmt;

use ffcrypt_api::{Error as CoreError, Result as CoreResult};

/// The error type for group-arithmetic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Operands lie on different curves; no cross-curve operation exists
    CurveMismatch {
        /// Operation that was attempted
        operation: &'static str,
    },

    /// A modular inverse does not exist (gcd with the modulus is not 1).
    /// Signals a non-prime field modulus upstream.
    NonInvertibleElement {
        /// Context where the inversion was attempted
        context: &'static str,
    },

    /// Malformed scalar supplied by the caller
    InvalidScalar {
        /// Context where the scalar was used
        context: &'static str,
        /// Reason why the scalar is invalid
        reason: &'static str,
    },

    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for group-arithmetic operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CurveMismatch { operation } => {
                write!(f, "Curve mismatch in {}: operands lie on different curves", operation)
            }
            Error::NonInvertibleElement { context } => {
                write!(
                    f,
                    "Non-invertible element in {}: modular inverse does not exist (modulus is not prime)",
                    context
                )
            }
            Error::InvalidScalar { context, reason } => {
                write!(f, "Invalid scalar in {}: {}", context, reason)
            }
            Error::Parameter { name, reason } => {
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
            Error::CurveMismatch { operation } => CoreError::InvalidParameter {
                context: operation,
                message: "operands lie on different curves".to_string(),
            },
            Error::NonInvertibleElement { context } => CoreError::InvalidParameter {
                context,
                message: "modular inverse does not exist; field modulus is not prime".to_string(),
            },
            Error::InvalidScalar { context, reason } => CoreError::InvalidParameter {
                context,
                message: reason.to_string(),
            },
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: "group arithmetic",
                message: format!("{}: {}", name, reason),
            },
        }
    }
}

/// Convert a primitives result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

// Include the validation submodule
pub mod validate;
