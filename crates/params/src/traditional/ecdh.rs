//! Constants for Elliptic Curve Diffie-Hellman over Montgomery curves

/// Size of an X25519 private scalar in bytes
pub const X25519_PRIVATE_KEY_SIZE: usize = 32;

/// Size of an X25519 public key (u-coordinate) in bytes
pub const X25519_PUBLIC_KEY_SIZE: usize = 32;

/// Size of an X25519 shared secret in bytes
pub const X25519_SHARED_SECRET_SIZE: usize = 32;

/// u-coordinate of the Curve25519 base point (u = 9), little-endian
pub const X25519_BASEPOINT: [u8; X25519_PUBLIC_KEY_SIZE] = [
    9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];
