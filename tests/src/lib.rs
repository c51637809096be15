//! Testing utilities for the dhkex library
pub mod vectors;
