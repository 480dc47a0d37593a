//! Error types for nacl-box.
//!
//! Decryption failures are deliberately coarse: a wrong key, a tampered
//! tag, a tampered ciphertext and a wrong nonce all surface as the same
//! [`BoxError::InvalidInput`] so callers cannot be turned into an oracle.

/// Unified error type for all nacl-box operations.
#[derive(Debug, thiserror::Error)]
pub enum BoxError {
    /// The random source could not supply the required bytes.
    /// No key or nonce material is returned alongside this error.
    #[error("Entropy error: {0}")]
    Entropy(String),

    /// A nonce-prefixed box was shorter than the nonce itself.
    #[error("Decryption error: message too short")]
    MessageTooShort,

    /// Authentication failed. Intentionally carries no detail.
    #[error("Decryption error: could not decrypt invalid input")]
    InvalidInput,

    /// The authenticated-encryption primitive refused to seal.
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// A byte slice had the wrong width for the target type.
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Malformed hex input.
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl From<rand_core::Error> for BoxError {
    fn from(err: rand_core::Error) -> Self {
        BoxError::Entropy(err.to_string())
    }
}

impl From<std::io::Error> for BoxError {
    fn from(err: std::io::Error) -> Self {
        BoxError::Entropy(err.to_string())
    }
}
