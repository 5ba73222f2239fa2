//! IPv4 network (CIDR block) value type.

use std::fmt;
use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};

use super::addr::Ipv4Address;
use super::convert::{
    dot_decimal_prefix_to_int, int_prefix_to_dot_decimal, prefix_to_mask, MAX_PREFIX,
};
use crate::error::ParseError;

/// An IPv4 network: a base address plus a routing prefix in [0, 32].
///
/// Immutable value type. Equality is the (ip, prefix) pair, so `/8` and
/// `/9` blocks over the same base address are distinct.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv4Network {
    ip: u32,
    prefix: u8,
}

impl Ipv4Network {
    /// Parse a network from CIDR notation, e.g. "10.0.0.0/8".
    ///
    /// The address portion must have no host bits set; "1.2.3.4/24" is
    /// rejected with [`ParseError::InvalidPrefix`].
    pub fn new(s: &str) -> Result<Ipv4Network, ParseError> {
        let (ip, prefix) = dot_decimal_prefix_to_int(s)?;
        Ok(Ipv4Network { ip, prefix })
    }

    /// Build a network from a base address and prefix without validation.
    ///
    /// The caller must pass a prefix in [0, 32] and is trusted not to set
    /// host bits in `ip`; nothing is masked or rejected here. Use
    /// [`Ipv4Address::network_with_prefix`] to derive a canonical network
    /// from an arbitrary address.
    pub fn from_parts(ip: u32, prefix: u8) -> Ipv4Network {
        debug_assert!(prefix <= MAX_PREFIX, "prefix must be in [0, 32]");
        Ipv4Network { ip, prefix }
    }

    /// The base address as a 32-bit integer.
    pub fn ip(&self) -> u32 {
        self.ip
    }

    /// The routing prefix length.
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// The subnet mask as a 32-bit integer, e.g. 0xFF000000 for a /8.
    pub fn mask(&self) -> u32 {
        prefix_to_mask(self.prefix)
    }

    /// The network's base (first) address.
    pub fn network_address(&self) -> Ipv4Address {
        Ipv4Address::from(self.ip)
    }

    /// The network's broadcast (last) address, with all host bits set.
    ///
    /// For a /32 this equals the network address; for a /0 it is
    /// 255.255.255.255.
    pub fn broadcast_address(&self) -> Ipv4Address {
        Ipv4Address::from(self.ip | !self.mask())
    }

    /// True if the given address falls within this network.
    pub fn contains(&self, addr: Ipv4Address) -> bool {
        (addr.ip() & self.mask()) == self.ip
    }

    /// True if the given network is contained within this network.
    ///
    /// A network with a shorter prefix spans a wider range and can never
    /// be contained in a longer one, regardless of base address.
    pub fn contains_network(&self, other: Ipv4Network) -> bool {
        if other.prefix < self.prefix {
            return false;
        }
        (other.ip & self.mask()) == self.ip
    }
}

impl FromStr for Ipv4Network {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Ipv4Network, ParseError> {
        Ipv4Network::new(s)
    }
}

impl fmt::Display for Ipv4Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", int_prefix_to_dot_decimal(self.ip, self.prefix))
    }
}

impl Serialize for Ipv4Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&int_prefix_to_dot_decimal(self.ip, self.prefix))
    }
}

impl<'de> Deserialize<'de> for Ipv4Network {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4Network::new(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        let net = Ipv4Network::new("1.2.3.0/24").unwrap();
        assert_eq!(net.ip(), 0x0102_0300);
        assert_eq!(net.prefix(), 24);
    }

    #[test]
    fn test_to_string() {
        for s in ["0.0.0.0/0", "10.0.0.0/8", "192.168.1.0/24", "1.2.3.4/32"] {
            let net = Ipv4Network::new(s).unwrap();
            assert_eq!(net.to_string(), s);
        }
    }

    #[test]
    fn test_invalid_strings() {
        assert!(matches!(
            Ipv4Network::new("1.2.3.4/24"),
            Err(ParseError::InvalidPrefix(_))
        ));
        assert!(matches!(
            Ipv4Network::new("10.0.0.0/nope"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Ipv4Network::new("10.0.0.0/33"),
            Err(ParseError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_from_parts_is_verbatim() {
        // The trusted constructor stores host bits untouched.
        let net = Ipv4Network::from_parts(0x0102_0304, 24);
        assert_eq!(net.ip(), 0x0102_0304);
        assert_eq!(net.to_string(), "1.2.3.4/24");
    }

    #[test]
    fn test_mask() {
        assert_eq!(Ipv4Network::new("1.0.0.0/8").unwrap().mask(), 0xFF00_0000);
        assert_eq!(Ipv4Network::new("1.2.0.0/16").unwrap().mask(), 0xFFFF_0000);
        assert_eq!(Ipv4Network::new("1.2.3.0/24").unwrap().mask(), 0xFFFF_FF00);
        assert_eq!(Ipv4Network::new("0.0.0.0/0").unwrap().mask(), 0x0000_0000);
        assert_eq!(Ipv4Network::new("1.2.3.4/32").unwrap().mask(), 0xFFFF_FFFF);
    }

    #[test]
    fn test_network_address() {
        let net = Ipv4Network::new("192.168.1.0/24").unwrap();
        assert_eq!(
            net.network_address(),
            Ipv4Address::new("192.168.1.0").unwrap()
        );
        assert!(net.contains(net.network_address()));
    }

    #[test]
    fn test_broadcast_address() {
        let net = Ipv4Network::new("192.168.1.0/24").unwrap();
        assert_eq!(
            net.broadcast_address(),
            Ipv4Address::new("192.168.1.255").unwrap()
        );

        let net = Ipv4Network::new("10.0.0.0/8").unwrap();
        assert_eq!(
            net.broadcast_address(),
            Ipv4Address::new("10.255.255.255").unwrap()
        );

        // Edge prefixes: /32 collapses to the base address, /0 spans all.
        let net = Ipv4Network::new("1.2.3.4/32").unwrap();
        assert_eq!(net.broadcast_address(), net.network_address());
        let net = Ipv4Network::new("0.0.0.0/0").unwrap();
        assert_eq!(
            net.broadcast_address(),
            Ipv4Address::new("255.255.255.255").unwrap()
        );
    }

    #[test]
    fn test_contains_address() {
        let net = Ipv4Network::new("192.168.1.0/24").unwrap();
        assert!(!net.contains(Ipv4Address::new("192.167.255.255").unwrap()));
        assert!(net.contains(Ipv4Address::new("192.168.1.0").unwrap()));
        assert!(net.contains(Ipv4Address::new("192.168.1.1").unwrap()));
        assert!(net.contains(Ipv4Address::new("192.168.1.255").unwrap()));
        assert!(!net.contains(Ipv4Address::new("192.169.0.0").unwrap()));

        let net = Ipv4Network::new("10.0.0.0/8").unwrap();
        assert!(net.contains(Ipv4Address::new("10.1.2.3").unwrap()));
        assert!(!net.contains(Ipv4Address::new("11.0.0.0").unwrap()));
    }

    #[test]
    fn test_contains_network() {
        let net = Ipv4Network::new("10.0.0.0/8").unwrap();
        assert!(net.contains_network(Ipv4Network::new("10.1.0.0/16").unwrap()));
        // A broader network never fits inside a narrower one.
        assert!(!net.contains_network(Ipv4Network::new("10.0.0.0/7").unwrap()));
        assert!(!net.contains_network(Ipv4Network::new("9.255.0.0/16").unwrap()));
        // Reflexive.
        assert!(net.contains_network(net));
    }

    #[test]
    fn test_equality() {
        let a = Ipv4Network::new("10.0.0.0/8").unwrap();
        let b = Ipv4Network::new("10.0.0.0/8").unwrap();
        let c = Ipv4Network::new("11.0.0.0/8").unwrap();
        let d = Ipv4Network::new("10.0.0.0/9").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_serde_round_trip() {
        let net = Ipv4Network::new("10.0.0.0/8").unwrap();
        let json = serde_json::to_string(&net).unwrap();
        assert_eq!(json, "\"10.0.0.0/8\"");
        let back: Ipv4Network = serde_json::from_str(&json).unwrap();
        assert_eq!(back, net);

        // Deserialization goes through the validated parser.
        assert!(serde_json::from_str::<Ipv4Network>("\"1.2.3.4/24\"").is_err());
    }
}
