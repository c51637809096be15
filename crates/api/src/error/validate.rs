//! Validation utilities for key agreement operations

use super::{Error, Result};
use crate::types::Curve;

/// Validate that a key buffer has the curve's fixed size
pub fn key_size(context: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(Error::InvalidKeySize {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a key or exchanger is bound to the expected curve
pub fn curve(context: &'static str, expected: Curve, actual: Curve) -> Result<()> {
    if expected != actual {
        return Err(Error::CurveMismatch {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a computed shared secret is not degenerate
///
/// `is_zero` must come from a constant-time check over the whole secret.
pub fn non_degenerate(context: &'static str, is_zero: bool) -> Result<()> {
    if is_zero {
        return Err(Error::DegenerateSecret { context });
    }
    Ok(())
}
