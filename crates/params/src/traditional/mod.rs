//! Constants for traditional (pre-quantum) key agreement

pub mod ecdh;
