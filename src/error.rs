//! Parse errors for IPv4 textual notation.

use thiserror::Error;

/// Errors produced when parsing dot-decimal address or CIDR network literals.
///
/// All variants are recoverable. The payload is a human-readable detail
/// describing the first violation encountered in the input; no partial
/// value is ever returned alongside a failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input does not match the expected shape: wrong segment count,
    /// a non-numeric segment, or a malformed prefix token.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// A segment is syntactically valid but outside its legal range:
    /// an octet outside [0, 255] or a routing prefix outside [0, 32].
    #[error("value out of range: {0}")]
    ValueOutOfRange(String),

    /// The address portion of a network literal has one or more host bits
    /// set relative to its declared prefix.
    #[error("invalid prefix: {0}")]
    InvalidPrefix(String),
}
