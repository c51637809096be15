//! Constant values for the dhkex library
//!
//! Key sizes and group generators, grouped by algorithm family.

#![no_std]

pub mod traditional;
