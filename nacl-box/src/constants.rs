//! Byte-width constants — the wire contract shared with every NaCl
//! `crypto_box` implementation.
//!
//! Every constant here MUST match libsodium's `crypto_box_*BYTES`
//! values. Changing any of them breaks interop.

/// Curve25519 public key length in bytes (`crypto_box_PUBLICKEYBYTES`).
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Curve25519 private scalar length in bytes (`crypto_box_SECRETKEYBYTES`).
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// Precomputed shared key length in bytes (`crypto_box_BEFORENMBYTES`).
pub const SHARED_KEY_LENGTH: usize = 32;

/// XSalsa20 nonce length in bytes (`crypto_box_NONCEBYTES`).
pub const NONCE_LENGTH: usize = 24;

/// Bytes added to every sealed message (Poly1305 tag, `crypto_box_MACBYTES`).
pub const OVERHEAD: usize = 16;

/// Bytes added by the nonce-embedding `easy_*` variants.
pub const EASY_OVERHEAD: usize = NONCE_LENGTH + OVERHEAD;
