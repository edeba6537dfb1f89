//! # Exchange Value Codec
//!
//! Every hop in the system carries the same unit of data: one IEEE-754
//! binary64 value.
//!
//! ```text
//! [8 bytes: big-endian f64]
//! ```
//!
//! There is no length prefix, type tag or version byte. The receiver knows how
//! many values to expect from its position in the exchange.

/// Size in bytes of one encoded Exchange Value.
pub const VALUE_SIZE: usize = 8;

/// Encode a value into its network representation.
pub fn encode_value(value: f64) -> [u8; VALUE_SIZE] {
    value.to_be_bytes()
}

/// Decode a value from its network representation.
///
/// Operates on raw bits, so NaN payloads and signed zeros come back unchanged.
pub fn decode_value(bytes: [u8; VALUE_SIZE]) -> f64 {
    f64::from_be_bytes(bytes)
}
