//! Internal utilities for the dhkex library
//!
//! Not part of the stable API; shared by the exchange crate and its tests.

pub mod constant_time;
