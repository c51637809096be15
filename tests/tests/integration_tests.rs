//! End-to-end key agreement through the dhkex facade

use dhkex::prelude::*;
use dhkex_params::traditional::ecdh::{X25519_PRIVATE_KEY_SIZE, X25519_PUBLIC_KEY_SIZE};
use dhkex_tests::vectors::{decode, LOW_ORDER_POINTS, RFC7748_DH};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_rfc7748_key_agreement_via_factory() {
    let v = &RFC7748_DH;
    let exchanger = new_exchanger(Curve::X25519).unwrap();

    let alice = exchanger.private_key_from_key(&decode(v.alice_private)).unwrap();
    let bob = exchanger.private_key_from_key(&decode(v.bob_private)).unwrap();

    assert_eq!(
        alice.public_key().unwrap().as_bytes(),
        decode(v.alice_public).as_slice(),
        "{}: alice public key",
        v.name
    );
    assert_eq!(
        bob.public_key().unwrap().as_bytes(),
        decode(v.bob_public).as_slice(),
        "{}: bob public key",
        v.name
    );

    let alice_shared = exchanger
        .shared_secret(&alice, bob.public_key().unwrap())
        .unwrap();
    let bob_shared = exchanger
        .shared_secret(&bob, alice.public_key().unwrap())
        .unwrap();

    assert_eq!(alice_shared.as_slice(), decode(v.shared_secret).as_slice());
    assert_eq!(bob_shared.as_slice(), decode(v.shared_secret).as_slice());
}

#[test]
fn test_direct_constructor_matches_factory() {
    let v = &RFC7748_DH;
    let direct = X25519::new();
    let factory = new_exchanger(Curve::X25519).unwrap();

    let a = direct.private_key_from_key(&decode(v.alice_private)).unwrap();
    let b = factory.private_key_from_key(&decode(v.alice_private)).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.public_key().unwrap(), b.public_key().unwrap());
    assert_eq!(a.exchanger(), Exchanger::from(direct));
}

#[test]
fn test_imported_bytes_survive_roundtrip() {
    let exchanger = Exchanger::x25519();
    let seed = decode(RFC7748_DH.bob_private);
    let key = exchanger.private_key_from_key(&seed).unwrap();
    assert_eq!(key.to_bytes().as_slice(), seed.as_slice());
}

#[test]
fn test_unsupported_curves() {
    for curve in [
        Curve::Secp256r1,
        Curve::Secp384r1,
        Curve::Secp521r1,
        Curve::X448,
        Curve::Ffdhe2048,
        Curve::Ffdhe3072,
        Curve::Ffdhe4096,
        Curve::Ffdhe6144,
        Curve::Ffdhe8192,
    ] {
        match new_exchanger(curve) {
            Err(Error::UnsupportedCurve { id, .. }) => assert_eq!(id, curve.id()),
            other => panic!("{curve}: expected UnsupportedCurve, got {other:?}"),
        }
    }
}

#[test]
fn test_factory_from_wire_code() {
    let curve = Curve::try_from(0x001d_u16).unwrap();
    let exchanger = new_exchanger(curve).unwrap();
    assert_eq!(exchanger.curve().name(), "x25519");
}

#[test]
fn test_malformed_key_sizes() {
    let exchanger = Exchanger::x25519();
    for len in [X25519_PRIVATE_KEY_SIZE - 1, X25519_PRIVATE_KEY_SIZE + 1] {
        assert!(matches!(
            exchanger.private_key_from_key(&vec![7u8; len]),
            Err(Error::InvalidKeySize { expected, actual, .. })
                if expected == X25519_PRIVATE_KEY_SIZE && actual == len
        ));
    }
    for len in [X25519_PUBLIC_KEY_SIZE - 1, X25519_PUBLIC_KEY_SIZE + 1] {
        assert!(matches!(
            exchanger.public_key_from_key(&vec![7u8; len]),
            Err(Error::InvalidKeySize { expected, actual, .. })
                if expected == X25519_PUBLIC_KEY_SIZE && actual == len
        ));
    }
}

#[test]
fn test_low_order_points_are_degenerate() {
    let exchanger = Exchanger::x25519();
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    let local = exchanger.generate_private_key_with_rng(&mut rng).unwrap();

    for point in LOW_ORDER_POINTS {
        let remote = exchanger.public_key_from_key(&decode(point)).unwrap();
        assert!(
            matches!(
                exchanger.shared_secret(&local, &remote),
                Err(Error::DegenerateSecret { .. })
            ),
            "{point} should produce a degenerate secret"
        );
    }
}

#[test]
fn test_verify() {
    let exchanger = Exchanger::x25519();
    let alice = exchanger
        .private_key_from_key(&decode(RFC7748_DH.alice_private))
        .unwrap();
    let bob = exchanger
        .private_key_from_key(&decode(RFC7748_DH.bob_private))
        .unwrap();
    let claimed = exchanger
        .public_key_from_key(&decode(RFC7748_DH.alice_public))
        .unwrap();

    assert!(verify(&exchanger, &alice, &claimed));
    assert!(!verify(&exchanger, &bob, &claimed));
}

#[test]
fn test_key_equality_is_constant_time_eq() {
    let exchanger = Exchanger::x25519();
    let bytes = decode(RFC7748_DH.alice_public);
    let a = exchanger.public_key_from_key(&bytes).unwrap();
    let b = exchanger.public_key_from_key(&bytes).unwrap();
    assert!(bool::from(a.ct_eq(&b)));

    let mut flipped = bytes.clone();
    flipped[31] ^= 0x40;
    let c = exchanger.public_key_from_key(&flipped).unwrap();
    assert!(!bool::from(a.ct_eq(&c)));
    assert_ne!(a, c);
}
