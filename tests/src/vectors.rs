//! Known-answer vectors for X25519 (RFC 7748)

/// One two-party key agreement with every intermediate value
pub struct KeyAgreementVector {
    pub name: &'static str,
    pub alice_private: &'static str,
    pub alice_public: &'static str,
    pub bob_private: &'static str,
    pub bob_public: &'static str,
    pub shared_secret: &'static str,
}

/// RFC 7748 section 6.1
pub const RFC7748_DH: KeyAgreementVector = KeyAgreementVector {
    name: "RFC 7748 6.1",
    alice_private: "77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a",
    alice_public: "8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a",
    bob_private: "5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb",
    bob_public: "de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f",
    shared_secret: "4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742",
};

/// u-coordinates of small-order points; any clamped scalar maps them to zero
pub const LOW_ORDER_POINTS: [&str; 4] = [
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0100000000000000000000000000000000000000000000000000000000000000",
    "e0eb7a7c3b41b8ae1656e3faf19fc46ada098deb9c32b1fd866205165f49b800",
    "5f9c95bca3508c24b1d0b1559c83ef5b04445cc4581c8e86d8224eddd09f1157",
];

/// Decode a hex vector, panicking on malformed test data
pub fn decode(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str).unwrap_or_else(|e| panic!("bad test vector {hex_str}: {e}"))
}
