//! Diffie-Hellman key agreement over named groups
//!
//! This crate defines the [`Exchange`] contract that every curve
//! implementation satisfies, the key types it produces, and the one wired-up
//! instantiation, [`X25519`].
//!
//! - [`Exchanger`] is the closed set of supported curves; [`new_exchanger`]
//!   maps a [`Curve`] identifier onto it.
//! - [`PrivateKey`] derives its [`PublicKey`] lazily, exactly once, even
//!   under concurrent first access.
//! - Key equality is constant time and also compares the curve.
//! - [`verify`] checks a claimed keypair and never returns an error.
//!
//! # Example
//!
//! ```
//! use dhkex_exchange::{new_exchanger, verify, Curve, Exchange, Result};
//!
//! # fn main() -> Result<()> {
//! let exchanger = new_exchanger(Curve::X25519)?;
//!
//! let alice = exchanger.generate_private_key()?;
//! let bob = exchanger.generate_private_key()?;
//!
//! let alice_shared = exchanger.shared_secret(&alice, bob.public_key()?)?;
//! let bob_shared = exchanger.shared_secret(&bob, alice.public_key()?)?;
//! assert_eq!(*alice_shared, *bob_shared);
//!
//! assert!(verify(&exchanger, &alice, alice.public_key()?));
//! # Ok(())
//! # }
//! ```

pub mod exchange;
pub mod exchanger;
pub mod key;
pub mod verify;
pub mod x25519;

// Re-exports
pub use dhkex_api::{Curve, Error, Result};
pub use exchange::Exchange;
pub use exchanger::{new_exchanger, Exchanger};
pub use key::{PrivateKey, PublicKey};
pub use verify::verify;
pub use x25519::X25519;
