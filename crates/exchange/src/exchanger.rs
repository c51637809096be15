//! Closed set of wired-up exchangers and the curve factory

use dhkex_api::{Curve, Error, Result};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::exchange::Exchange;
use crate::key::{PrivateKey, PublicKey};
use crate::x25519::X25519;

/// An exchanger for one of the supported curves.
///
/// Adding a curve means adding a variant here and an arm in
/// [`Exchanger::new`]. Keys hold a copy of the `Exchanger` that created them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exchanger {
    /// Curve25519 (RFC 7748)
    X25519(X25519),
}

impl Exchanger {
    /// Build the exchanger for `curve`.
    ///
    /// Registry values without an implementation, such as the NIST curves
    /// and the finite-field groups, fail with `UnsupportedCurve`.
    pub fn new(curve: Curve) -> Result<Self> {
        let exchanger = match curve {
            Curve::X25519 => Self::X25519(X25519::new()),
            other => {
                tracing::debug!(curve = %other, "no exchanger for curve");
                return Err(Error::UnsupportedCurve {
                    context: "Exchanger::new",
                    id: other.id(),
                });
            }
        };
        tracing::debug!(curve = %curve, "created exchanger");
        Ok(exchanger)
    }

    /// The X25519 exchanger. Infallible.
    pub const fn x25519() -> Self {
        Self::X25519(X25519::new())
    }
}

impl From<X25519> for Exchanger {
    fn from(x: X25519) -> Self {
        Self::X25519(x)
    }
}

/// Map a curve identifier to its exchanger.
pub fn new_exchanger(curve: Curve) -> Result<Exchanger> {
    Exchanger::new(curve)
}

impl Exchange for Exchanger {
    fn curve(&self) -> Curve {
        match self {
            Self::X25519(x) => x.curve(),
        }
    }

    fn private_key_size(&self) -> usize {
        match self {
            Self::X25519(x) => x.private_key_size(),
        }
    }

    fn public_key_size(&self) -> usize {
        match self {
            Self::X25519(x) => x.public_key_size(),
        }
    }

    fn generate_private_key_with_rng<R: CryptoRng + RngCore + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<PrivateKey> {
        match self {
            Self::X25519(x) => x.generate_private_key_with_rng(rng),
        }
    }

    fn private_key_from_key(&self, key: &[u8]) -> Result<PrivateKey> {
        match self {
            Self::X25519(x) => x.private_key_from_key(key),
        }
    }

    fn public_key_from_key(&self, key: &[u8]) -> Result<PublicKey> {
        match self {
            Self::X25519(x) => x.public_key_from_key(key),
        }
    }

    fn public_key(&self, private_key: &PrivateKey) -> Result<PublicKey> {
        match self {
            Self::X25519(x) => x.public_key(private_key),
        }
    }

    fn shared_secret(
        &self,
        private_key: &PrivateKey,
        public_key: &PublicKey,
    ) -> Result<Zeroizing<Vec<u8>>> {
        match self {
            Self::X25519(x) => x.shared_secret(private_key, public_key),
        }
    }
}
