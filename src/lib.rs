//! # dhkex
//!
//! Curve-agnostic Diffie-Hellman key agreement with an X25519 instantiation.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! dhkex = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): operating-system randomness for key generation
//! - `serde`: serialization of [`api::Curve`] by registry name
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`dhkex-api`]: Error type and the named-group registry
//! - [`dhkex-exchange`]: The exchange contract, key types and X25519
//! - [`dhkex-params`]: Key sizes and group generators
//! - [`dhkex-internal`]: Constant-time helpers

// Core re-exports (always available)
pub use dhkex_api as api;
pub use dhkex_exchange as exchange;
pub use dhkex_internal as internal;
pub use dhkex_params as params;

pub use dhkex_exchange::{new_exchanger, verify};

/// Common imports for dhkex users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Curve, Error, Result};

    // Re-export the exchange contract and its values
    pub use crate::exchange::{
        new_exchanger,
        verify,
        Exchange,
        Exchanger,
        PrivateKey,
        PublicKey,
        X25519,
    };

    // Constant-time comparison on keys
    pub use subtle::ConstantTimeEq;

    // Secret buffers returned by the exchange operations
    pub use zeroize::Zeroizing;

    // Caller-supplied randomness
    pub use rand::{CryptoRng, RngCore};
}
