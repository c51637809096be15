//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// Only the lengths are compared in variable time; for equal lengths the
/// running time does not depend on where the first mismatch sits.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a Choice (0 or 1)
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Constant-time all-zero check
///
/// ORs every byte into an accumulator and only inspects the accumulator at
/// the end, so no byte position influences the running time.
pub fn ct_is_zero<A: AsRef<[u8]>>(bytes: A) -> Choice {
    let acc = bytes.as_ref().iter().fold(0u8, |acc, &b| acc | b);
    acc.ct_eq(&0u8)
}
