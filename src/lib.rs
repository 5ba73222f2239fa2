//! IPv4 address and CIDR network value types.
//!
//! Parses dot-decimal notation to and from 32-bit integer form, derives
//! subnet masks from routing prefixes, and answers containment and
//! well-known-range questions (loopback, private ranges). Everything is a
//! pure function over immutable values; there is no I/O and no state.
//!
//! ```
//! use ipaddress::{Ipv4Address, Ipv4Network};
//!
//! let ip1 = Ipv4Address::new("192.168.0.1")?;
//! let ip2 = Ipv4Address::new("10.0.0.1")?;
//! let network = Ipv4Network::new("10.0.0.0/8")?;
//!
//! assert_ne!(ip1, ip2);
//! assert!(network.contains(ip2));
//! assert!(ip2.is_private());
//! # Ok::<(), ipaddress::ParseError>(())
//! ```

pub mod error;
pub mod models;

pub use error::ParseError;
pub use models::{Ipv4Address, Ipv4Network};
