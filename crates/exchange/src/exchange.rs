//! The exchange contract every curve implementation satisfies

use dhkex_api::{Curve, Result};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::key::{PrivateKey, PublicKey};

/// Diffie-Hellman key agreement over one named group.
///
/// Implementations are stateless: two values of the same implementation are
/// interchangeable, and keys only record which curve they belong to.
///
/// # Security Requirements
/// - Every operation that accepts keys must reject keys bound to another
///   curve with `CurveMismatch` rather than computing a result.
/// - Shared-secret computation must reject an all-zero output in constant
///   time.
pub trait Exchange {
    /// The named group this exchanger operates on.
    fn curve(&self) -> Curve;

    /// Size of a private key in bytes. Constant per curve.
    fn private_key_size(&self) -> usize;

    /// Size of a public key in bytes. Constant per curve.
    fn public_key_size(&self) -> usize;

    /// Generate a private key from the provided CSPRNG.
    ///
    /// Fails only if the random source does.
    fn generate_private_key_with_rng<R: CryptoRng + RngCore + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<PrivateKey>;

    /// Generate a private key from the operating system's random source.
    #[cfg(feature = "std")]
    fn generate_private_key(&self) -> Result<PrivateKey> {
        self.generate_private_key_with_rng(&mut rand::rngs::OsRng)
    }

    /// Import a raw private key.
    ///
    /// The bytes are kept verbatim; no curve-specific clamping is applied to
    /// the stored scalar.
    fn private_key_from_key(&self, key: &[u8]) -> Result<PrivateKey>;

    /// Import a raw public key, validating only its length.
    fn public_key_from_key(&self, key: &[u8]) -> Result<PublicKey>;

    /// Derive the public key of `private_key`.
    ///
    /// This always recomputes; [`PrivateKey::public_key`] caches.
    fn public_key(&self, private_key: &PrivateKey) -> Result<PublicKey>;

    /// Compute the shared secret between a local private key and a remote
    /// public key.
    fn shared_secret(
        &self,
        private_key: &PrivateKey,
        public_key: &PublicKey,
    ) -> Result<Zeroizing<Vec<u8>>>;
}
