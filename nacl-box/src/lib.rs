//! nacl-box — public-key authenticated encryption.
//!
//! Curve25519 key agreement, an HSalsa20 key-derivation round and the
//! XSalsa20-Poly1305 secretbox, composed exactly as NaCl `crypto_box`.
//! Ciphertexts interoperate byte-for-byte with libsodium, TweetNaCl and
//! every other compliant implementation.
//!
//! # Module Map
//!
//! | Module | NaCl Equivalent |
//! |--------|-----------------|
//! | [`constants`] | `crypto_box_*BYTES` |
//! | [`errors`] | N/A |
//! | [`encoding`] | N/A |
//! | [`keys`] | `crypto_box_keypair` |
//! | [`nonce`] | N/A |
//! | [`crypto`] | `crypto_box`, `crypto_box_open`, `crypto_box_beforenm`, `crypto_box_afternm` |
//! | [`easy`] | `crypto_box_easy` with a random nonce prefix |
//! | [`vectors`] | N/A (test-only) |
//!
//! # Nonces
//!
//! The caller MUST guarantee nonce uniqueness per key pair. Reusing a
//! nonce breaks both confidentiality and authentication. The [`easy`]
//! wrappers draw a random 24-byte nonce per message; counters are
//! available through [`Nonce::from_prefix_and_counter`].
//!
//! Message lengths are not hidden.

/// Byte-width constants.
pub mod constants;

/// Error types for nacl-box operations.
pub mod errors;

/// Encoding utilities — hex.
pub mod encoding;

/// Key material and key generation.
pub mod keys;

/// 24-byte nonces.
pub mod nonce;

/// The box construction — precompute, seal, open.
pub mod crypto;

/// Nonce-embedding convenience wrappers.
pub mod easy;

/// Deterministic golden vector generator (test use only).
/// Requires the `vectors` feature: `cargo test --features vectors`.
#[cfg(feature = "vectors")]
pub mod vectors;

pub use constants::{NONCE_LENGTH, OVERHEAD};
pub use crypto::{
    open, open_after_precomputation, open_after_precomputation_append, open_append, precompute,
    seal, seal_after_precomputation, seal_after_precomputation_append, seal_append,
};
pub use easy::{
    easy_open, easy_open_after_precomputation, easy_seal, easy_seal_after_precomputation,
    easy_seal_with_rng,
};
pub use errors::BoxError;
pub use keys::{generate_key, generate_key_from_reader, KeyPair, PrivateKey, PublicKey, SharedKey};
pub use nonce::Nonce;
