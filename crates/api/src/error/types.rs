//! Error type definitions for key agreement operations

use thiserror::Error;

use crate::types::Curve;

/// Result type for dhkex operations
pub type Result<T> = core::result::Result<T, Error>;

/// Primary error type for key agreement operations
///
/// Every variant records the operation that detected the failure in
/// `context`. None of these conditions are fatal: they are always returned
/// to the caller of the operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested named group has no exchanger wired up
    #[error("{context}: unsupported curve (id {id:#06x})")]
    UnsupportedCurve {
        context: &'static str,
        id: u16,
    },

    /// A key buffer does not match the fixed size of its curve
    #[error("{context}: invalid key size (expected {expected}, got {actual})")]
    InvalidKeySize {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Keys or exchangers bound to different curves were mixed
    #[error("{context}: curve mismatch (expected {expected}, got {actual})")]
    CurveMismatch {
        context: &'static str,
        expected: Curve,
        actual: Curve,
    },

    /// The computed shared secret is all zero bytes
    #[error("{context}: degenerate shared secret")]
    DegenerateSecret {
        context: &'static str,
    },

    /// The secure random source failed to produce bytes
    #[error("Random source failure: {context}: {message}")]
    RandomSourceFailure {
        context: &'static str,
        message: String,
    },
}

impl Error {
    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::UnsupportedCurve { id, .. } => Self::UnsupportedCurve { context, id },
            Self::InvalidKeySize { expected, actual, .. } => Self::InvalidKeySize {
                context,
                expected,
                actual,
            },
            Self::CurveMismatch { expected, actual, .. } => Self::CurveMismatch {
                context,
                expected,
                actual,
            },
            Self::DegenerateSecret { .. } => Self::DegenerateSecret { context },
            Self::RandomSourceFailure { message, .. } => {
                Self::RandomSourceFailure { context, message }
            }
        }
    }

    /// The operation that reported this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::UnsupportedCurve { context, .. }
            | Self::InvalidKeySize { context, .. }
            | Self::CurveMismatch { context, .. }
            | Self::DegenerateSecret { context }
            | Self::RandomSourceFailure { context, .. } => *context,
        }
    }
}

