//! Domain models for IPv4 addressing.
//!
//! This module contains the core value types and their conversion helpers:
//! - [`Ipv4Address`] - a single address as a 32-bit integer
//! - [`Ipv4Network`] - a CIDR block: base address plus routing prefix
//! - pure functions converting between dot-decimal notation and integers

mod addr;
mod convert;
mod network;

// Re-export public types
pub use addr::Ipv4Address;
pub use convert::{
    dot_decimal_prefix_to_int, dot_decimal_to_int, int_prefix_to_dot_decimal, int_to_dot_decimal,
    prefix_to_mask, MAX_PREFIX,
};
pub use network::Ipv4Network;
