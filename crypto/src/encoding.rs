//! Hex decoding of published roll values.

pub use hex::FromHexError as HexError;

/// Decode a hex string (either case) into raw bytes.
///
/// Anything that is not an even-length run of hex digits is an error,
/// including surrounding whitespace.
pub fn decode_hex(text: &str) -> Result<Vec<u8>, HexError> {
    hex::decode(text)
}

/// Lowercase hex encoding.
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
