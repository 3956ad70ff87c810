//! Error handling for the arithmetic engine
//!
//! Errors are raised only for violations of *public, structural*
//! parameters (buffer lengths, weight counts). Secret-derived values such
//! as sparse exponents are deliberately never validated: value-dependent
//! checks would branch on secret data, which is exactly what this crate
//! exists to avoid. Out-of-range exponents are a caller contract
//! violation and produce unspecified (but memory-safe) results.

use core::fmt;

/// The error type for the arithmetic engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in 64-bit words or coefficients
        expected: usize,
        /// Actual length
        actual: usize,
    },
}

/// Result type for arithmetic operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
