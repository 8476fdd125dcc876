//! Hashing and encoding primitives for roll verification.
//!
//! - **SHA-512** for server commitments and the combined seed
//! - **Hex** decoding of the values the dice service publishes

pub mod encoding;
pub mod hash;

pub use encoding::{decode_hex, encode_hex, HexError};
pub use hash::{sha512, sha512_multi};
