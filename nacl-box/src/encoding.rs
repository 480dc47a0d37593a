//! Encoding utilities — lowercase hex.
//!
//! Keys and nonces are exchanged out of band as hex strings. Decoding
//! into fixed-width arrays reports the expected and actual byte counts.

use crate::errors::BoxError;

/// Encode bytes to lowercase hex string.
pub fn to_hex(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decode hex string to bytes.
///
/// # Errors
/// Returns `BoxError::Encoding` on invalid hex input.
pub fn from_hex(encoded: &str) -> Result<Vec<u8>, BoxError> {
    hex::decode(encoded).map_err(|e| BoxError::Encoding(format!("invalid hex: {e}")))
}

/// Decode hex string into a fixed-width array.
///
/// # Errors
/// Returns `BoxError::Encoding` on invalid hex and
/// `BoxError::InvalidLength` when the decoded width is not `N`.
pub fn from_hex_array<const N: usize>(encoded: &str) -> Result<[u8; N], BoxError> {
    let bytes = from_hex(encoded)?;
    bytes
        .try_into()
        .map_err(|v: Vec<u8>| BoxError::InvalidLength {
            expected: N,
            actual: v.len(),
        })
}
