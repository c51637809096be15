//! X25519 key agreement (RFC 7748)
//!
//! The group arithmetic is delegated to `curve25519-dalek`'s Montgomery
//! ladder, reached only through [`scalar_mult`]. This module owns the
//! checks around it: key sizes, curve identity of every key argument, and
//! the constant-time rejection of an all-zero shared secret.
//!
//! # Security Notes
//!
//! - Imported private keys are stored verbatim. The X25519 function decodes
//!   the scalar per RFC 7748 on every use, so the stored bytes are never
//!   clamped in place and `to_bytes()` returns exactly what was imported.
//! - An all-zero shared secret means the peer supplied a low-order point
//!   and is rejected with `DegenerateSecret`.

use curve25519_dalek::montgomery::MontgomeryPoint;
use dhkex_api::error::validate;
use dhkex_api::{Curve, Error, Result, ResultExt};
use dhkex_internal::constant_time::ct_is_zero;
use dhkex_params::traditional::ecdh::{
    X25519_BASEPOINT, X25519_PRIVATE_KEY_SIZE, X25519_PUBLIC_KEY_SIZE, X25519_SHARED_SECRET_SIZE,
};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::exchange::Exchange;
use crate::exchanger::Exchanger;
use crate::key::{PrivateKey, PublicKey};

/// Exchanger for Curve25519
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct X25519;

impl X25519 {
    /// Create the X25519 exchanger
    pub const fn new() -> Self {
        X25519
    }

    fn handle(&self) -> Exchanger {
        Exchanger::X25519(*self)
    }
}

/// The X25519 function: `scalar * point` on the Montgomery u-line.
fn scalar_mult(
    scalar: &[u8],
    point: &[u8],
) -> Result<Zeroizing<[u8; X25519_SHARED_SECRET_SIZE]>> {
    const CONTEXT: &str = "X25519 scalar multiplication";
    let scalar = <[u8; X25519_PRIVATE_KEY_SIZE]>::try_from(scalar).wrap_err(|| {
        Error::InvalidKeySize {
            context: CONTEXT,
            expected: X25519_PRIVATE_KEY_SIZE,
            actual: scalar.len(),
        }
    })?;
    let scalar = Zeroizing::new(scalar);
    let point: [u8; X25519_PUBLIC_KEY_SIZE] =
        <[u8; X25519_PUBLIC_KEY_SIZE]>::try_from(point).wrap_err(|| Error::InvalidKeySize {
            context: CONTEXT,
            expected: X25519_PUBLIC_KEY_SIZE,
            actual: point.len(),
        })?;

    Ok(Zeroizing::new(
        MontgomeryPoint(point).mul_clamped(*scalar).to_bytes(),
    ))
}

impl Exchange for X25519 {
    fn curve(&self) -> Curve {
        Curve::X25519
    }

    fn private_key_size(&self) -> usize {
        X25519_PRIVATE_KEY_SIZE
    }

    fn public_key_size(&self) -> usize {
        X25519_PUBLIC_KEY_SIZE
    }

    fn generate_private_key_with_rng<R: CryptoRng + RngCore + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<PrivateKey> {
        let mut key = Zeroizing::new(vec![0u8; X25519_PRIVATE_KEY_SIZE]);
        rng.try_fill_bytes(key.as_mut_slice())
            .map_err(|e| Error::RandomSourceFailure {
                context: "X25519::generate_private_key",
                message: e.to_string(),
            })?;

        tracing::debug!(curve = %self.curve(), "generated private key");
        Ok(PrivateKey::new(self.handle(), key))
    }

    fn private_key_from_key(&self, key: &[u8]) -> Result<PrivateKey> {
        validate::key_size(
            "X25519::private_key_from_key",
            X25519_PRIVATE_KEY_SIZE,
            key.len(),
        )?;

        tracing::debug!(curve = %self.curve(), "imported private key");
        Ok(PrivateKey::new(self.handle(), Zeroizing::new(key.to_vec())))
    }

    fn public_key_from_key(&self, key: &[u8]) -> Result<PublicKey> {
        validate::key_size(
            "X25519::public_key_from_key",
            X25519_PUBLIC_KEY_SIZE,
            key.len(),
        )?;
        Ok(PublicKey::new(self.handle(), key.to_vec()))
    }

    fn public_key(&self, private_key: &PrivateKey) -> Result<PublicKey> {
        const CONTEXT: &str = "X25519::public_key";
        validate::curve(CONTEXT, self.curve(), private_key.curve())?;
        validate::key_size(CONTEXT, X25519_PRIVATE_KEY_SIZE, private_key.secret().len())?;

        let public =
            scalar_mult(private_key.secret(), &X25519_BASEPOINT).with_context(CONTEXT)?;
        Ok(PublicKey::new(self.handle(), public.to_vec()))
    }

    fn shared_secret(
        &self,
        private_key: &PrivateKey,
        public_key: &PublicKey,
    ) -> Result<Zeroizing<Vec<u8>>> {
        const CONTEXT: &str = "X25519::shared_secret";
        validate::curve(CONTEXT, self.curve(), private_key.curve())?;
        validate::curve(CONTEXT, self.curve(), public_key.curve())?;
        validate::key_size(CONTEXT, X25519_PRIVATE_KEY_SIZE, private_key.secret().len())?;
        validate::key_size(CONTEXT, X25519_PUBLIC_KEY_SIZE, public_key.as_bytes().len())?;

        let shared =
            scalar_mult(private_key.secret(), public_key.as_bytes()).with_context(CONTEXT)?;

        let degenerate = bool::from(ct_is_zero(shared.as_slice()));
        if degenerate {
            tracing::warn!(curve = %self.curve(), "rejected all-zero shared secret");
        }
        validate::non_degenerate(CONTEXT, degenerate)?;

        Ok(Zeroizing::new(shared.to_vec()))
    }
}
