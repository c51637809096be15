//! Keypair consistency check

use dhkex_internal::constant_time::ct_eq;

use crate::exchange::Exchange;
use crate::key::{PrivateKey, PublicKey};

/// Check that `public_key` is the public counterpart of `private_key` under
/// `exchanger`.
///
/// Fails closed: disagreeing curves or a failed derivation yield `false`,
/// never an error. The comparison itself is constant time.
pub fn verify<E: Exchange>(
    exchanger: &E,
    private_key: &PrivateKey,
    public_key: &PublicKey,
) -> bool {
    let curve = exchanger.curve();
    if private_key.curve() != curve || public_key.curve() != curve {
        tracing::debug!(
            exchanger = %curve,
            private_key = %private_key.curve(),
            public_key = %public_key.curve(),
            "verify: curve mismatch"
        );
        return false;
    }

    match exchanger.public_key(private_key) {
        Ok(derived) => ct_eq(derived.as_bytes(), public_key.as_bytes()),
        Err(err) => {
            tracing::debug!(error = %err, "verify: public key derivation failed");
            false
        }
    }
}
