//! Private and public key values tagged with their curve

use core::fmt;

use dhkex_api::{Curve, Result};
use dhkex_internal::constant_time::ct_eq_choice;
use once_cell::sync::OnceCell;
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroizing;

use crate::exchange::Exchange;
use crate::exchanger::Exchanger;

/// A private key bound to the exchanger that created it.
///
/// The public counterpart is derived lazily on the first call to
/// [`PrivateKey::public_key`] and cached for the lifetime of the key. When
/// several threads race on the first call, exactly one performs the
/// derivation and the others block until it is stored.
///
/// The key bytes are zeroized on drop.
#[derive(Clone)]
pub struct PrivateKey {
    exchanger: Exchanger,
    key: Zeroizing<Vec<u8>>,
    public: OnceCell<PublicKey>,
}

impl PrivateKey {
    pub(crate) fn new(exchanger: Exchanger, key: Zeroizing<Vec<u8>>) -> Self {
        Self {
            exchanger,
            key,
            public: OnceCell::new(),
        }
    }

    /// The exchanger this key belongs to
    pub fn exchanger(&self) -> Exchanger {
        self.exchanger
    }

    /// The curve this key belongs to
    pub fn curve(&self) -> Curve {
        self.exchanger.curve()
    }

    /// Export the private key bytes (with zeroization on drop)
    ///
    /// Returns exactly the bytes the key was generated or imported with.
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.key.to_vec())
    }

    pub(crate) fn secret(&self) -> &[u8] {
        &self.key
    }

    /// The public key matching this private key.
    ///
    /// Derived through the owning exchanger on first access, then served
    /// from the cache. A failed derivation leaves the cache empty, so a
    /// later call retries.
    pub fn public_key(&self) -> Result<&PublicKey> {
        self.public.get_or_try_init(|| {
            let public = self.exchanger.public_key(self)?;
            tracing::trace!(curve = %self.curve(), "cached derived public key");
            Ok(public)
        })
    }
}

impl ConstantTimeEq for PrivateKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        let same_curve = Choice::from((self.curve() == other.curve()) as u8);
        same_curve & ct_eq_choice(self.secret(), other.secret())
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("curve", &self.curve())
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// A public key bound to the exchanger it was derived or imported under.
#[derive(Clone, Debug)]
pub struct PublicKey {
    exchanger: Exchanger,
    key: Vec<u8>,
}

impl PublicKey {
    pub(crate) fn new(exchanger: Exchanger, key: Vec<u8>) -> Self {
        Self { exchanger, key }
    }

    /// The exchanger this key belongs to
    pub fn exchanger(&self) -> Exchanger {
        self.exchanger
    }

    /// The curve this key belongs to
    pub fn curve(&self) -> Curve {
        self.exchanger.curve()
    }

    /// Borrow the raw public key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.key
    }

    /// Export the public key to bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        self.key.clone()
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.key
    }
}

impl ConstantTimeEq for PublicKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        let same_curve = Choice::from((self.curve() == other.curve()) as u8);
        same_curve & ct_eq_choice(&self.key, &other.key)
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for PublicKey {}
