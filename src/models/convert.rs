//! Conversions between dot-decimal notation and 32-bit integer form.
//!
//! Leaf helpers behind [`Ipv4Address`] and [`Ipv4Network`]: pure functions
//! over integers and strings, no state.
//!
//! [`Ipv4Address`]: super::Ipv4Address
//! [`Ipv4Network`]: super::Ipv4Network

use crate::error::ParseError;

/// Maximum length for an IPv4 routing prefix (32 bits).
pub const MAX_PREFIX: u8 = 32;

/// Convert a routing prefix length to a subnet mask.
///
/// Callers must pass a prefix in [0, 32]; anything larger is a contract
/// violation, not a recoverable error.
///
/// # Examples
/// ```
/// use ipaddress::models::prefix_to_mask;
/// assert_eq!(prefix_to_mask(24), 0xFFFF_FF00);
/// ```
pub fn prefix_to_mask(prefix: u8) -> u32 {
    debug_assert!(prefix <= MAX_PREFIX, "prefix must be in [0, 32]");
    // Widen to 64 bits so the /0 shift stays in range.
    let all_bits = u32::MAX as u64;
    (all_bits - (all_bits >> prefix)) as u32
}

/// Format a 32-bit integer as a dot-decimal address string.
///
/// Octet 0 of the output comes from bits 31-24 (big-endian packing).
pub fn int_to_dot_decimal(ip: u32) -> String {
    format!(
        "{}.{}.{}.{}",
        (ip >> 24) & 0xFF,
        (ip >> 16) & 0xFF,
        (ip >> 8) & 0xFF,
        ip & 0xFF
    )
}

/// Format an address and routing prefix as a CIDR string, e.g. "10.0.0.0/8".
pub fn int_prefix_to_dot_decimal(ip: u32, prefix: u8) -> String {
    debug_assert!(prefix <= MAX_PREFIX, "prefix must be in [0, 32]");
    format!("{}/{}", int_to_dot_decimal(ip), prefix)
}

/// Parse a dot-decimal address string into its integer form.
///
/// The input must be exactly four base-10 octets separated by periods,
/// each in [0, 255].
pub fn dot_decimal_to_int(s: &str) -> Result<u32, ParseError> {
    let parts: Vec<&str> = s.split('.').collect();
    if parts.len() != 4 {
        log::trace!("rejected address {s:?}: wrong segment count");
        return Err(ParseError::InvalidFormat(format!(
            "{s:?} does not conform to format a.b.c.d"
        )));
    }

    let mut ip: u32 = 0;
    for (i, part) in parts.iter().enumerate() {
        let octet: i64 = part.parse().map_err(|_| {
            log::trace!("rejected address {s:?}: octet {part:?} is not a number");
            ParseError::InvalidFormat(format!("octet {part:?} is not a valid number"))
        })?;
        if !(0..=255).contains(&octet) {
            return Err(ParseError::ValueOutOfRange(format!(
                "octet {octet} must be in range [0, 255]"
            )));
        }
        ip += (octet as u32) << (24 - 8 * i);
    }
    Ok(ip)
}

/// Parse a CIDR string "a.b.c.d/e" into its integer address and prefix.
///
/// The host bits of the address are not allowed to be set.
pub fn dot_decimal_prefix_to_int(s: &str) -> Result<(u32, u8), ParseError> {
    let parts: Vec<&str> = s.split('/').collect();
    if parts.len() != 2 {
        log::trace!("rejected network {s:?}: wrong segment count");
        return Err(ParseError::InvalidFormat(format!(
            "{s:?} does not conform to format a.b.c.d/e"
        )));
    }

    let prefix: i64 = parts[1].parse().map_err(|_| {
        ParseError::InvalidFormat(format!(
            "network prefix {:?} is not a valid number",
            parts[1]
        ))
    })?;
    if !(0..=MAX_PREFIX as i64).contains(&prefix) {
        return Err(ParseError::ValueOutOfRange(format!(
            "network prefix {prefix} must be in range [0, 32]"
        )));
    }
    let prefix = prefix as u8;

    let ip = dot_decimal_to_int(parts[0])?;
    if ip & prefix_to_mask(prefix) != ip {
        log::debug!("rejected network {s:?}: host bits set under /{prefix}");
        return Err(ParseError::InvalidPrefix(
            "host bits are not allowed to be set".to_string(),
        ));
    }

    Ok((ip, prefix))
}
