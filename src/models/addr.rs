//! IPv4 address value type.

use std::fmt;
use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};

use super::convert::{dot_decimal_to_int, int_to_dot_decimal, prefix_to_mask, MAX_PREFIX};
use super::network::Ipv4Network;
use crate::error::ParseError;

/// An IPv4 address stored as a 32-bit integer, octet 0 in bits 31-24.
///
/// Immutable value type; equality and ordering follow the numeric value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv4Address {
    ip: u32,
}

impl Ipv4Address {
    /// Parse an address from dot-decimal notation, e.g. "192.168.0.1".
    pub fn new(s: &str) -> Result<Ipv4Address, ParseError> {
        Ok(Ipv4Address {
            ip: dot_decimal_to_int(s)?,
        })
    }

    /// The address as a 32-bit integer.
    pub fn ip(&self) -> u32 {
        self.ip
    }

    /// True if the address lies within the loopback range `127.0.0.0/8`.
    pub fn is_loopback(&self) -> bool {
        Ipv4Network::from_parts(0x7F00_0000, 8).contains(*self)
    }

    /// True if the address lies within any of the private or special-use
    /// ranges `10.0.0.0/8`, `100.64.0.0/10`, `172.16.0.0/12`,
    /// `192.0.0.0/24`, `192.168.0.0/16` or the `198.18.0.0/15`
    /// benchmarking range.
    pub fn is_private(&self) -> bool {
        // 10.0.0.0/8
        Ipv4Network::from_parts(0x0A00_0000, 8).contains(*self)
            // 100.64.0.0/10
            || Ipv4Network::from_parts(0x6440_0000, 10).contains(*self)
            // 172.16.0.0/12
            || Ipv4Network::from_parts(0xAC10_0000, 12).contains(*self)
            // 192.0.0.0/24
            || Ipv4Network::from_parts(0xC000_0000, 24).contains(*self)
            // 192.168.0.0/16
            || Ipv4Network::from_parts(0xC0A8_0000, 16).contains(*self)
            // 198.18.0.0/15
            || Ipv4Network::from_parts(0xC612_0000, 15).contains(*self)
    }

    /// Derive the network this address belongs to under the given prefix.
    ///
    /// The host bits are masked off first, so the returned network always
    /// holds a canonical base address. Returns `None` when `prefix`
    /// exceeds 32.
    ///
    /// # Examples
    /// ```
    /// use ipaddress::{Ipv4Address, Ipv4Network};
    /// let ip = Ipv4Address::new("192.168.1.10").unwrap();
    /// let net = ip.network_with_prefix(16).unwrap();
    /// assert_eq!(net, Ipv4Network::new("192.168.0.0/16").unwrap());
    /// ```
    pub fn network_with_prefix(&self, prefix: u8) -> Option<Ipv4Network> {
        if prefix > MAX_PREFIX {
            return None;
        }
        let network = self.ip & prefix_to_mask(prefix);
        Some(Ipv4Network::from_parts(network, prefix))
    }
}

impl From<u32> for Ipv4Address {
    /// Wrap an integer verbatim; every `u32` is a valid address.
    fn from(ip: u32) -> Ipv4Address {
        Ipv4Address { ip }
    }
}

impl From<Ipv4Address> for u32 {
    fn from(addr: Ipv4Address) -> u32 {
        addr.ip
    }
}

impl FromStr for Ipv4Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Ipv4Address, ParseError> {
        Ipv4Address::new(s)
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", int_to_dot_decimal(self.ip))
    }
}

impl Serialize for Ipv4Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&int_to_dot_decimal(self.ip))
    }
}

impl<'de> Deserialize<'de> for Ipv4Address {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4Address::new(&s).map_err(de::Error::custom)
    }
}
