//! Nonce-embedding convenience wrappers.
//!
//! Wire format: `nonce(24) || tag(16) || ciphertext`.
//!
//! A fresh random nonce is drawn for every message, so callers never
//! manage counters. Callers that need deterministic or counter nonces
//! should use [`crate::crypto::seal`] directly.

use rand_core::{CryptoRng, OsRng, RngCore};
use tracing::debug;

use crate::constants::{EASY_OVERHEAD, NONCE_LENGTH};
use crate::crypto::{open_after_precomputation, precompute, seal_after_precomputation_append};
use crate::errors::BoxError;
use crate::keys::{PrivateKey, PublicKey, SharedKey};
use crate::nonce::Nonce;

/// Seal `message` for `peer_public_key` under a random nonce and
/// prepend the nonce. Output is `message.len() + EASY_OVERHEAD` bytes.
///
/// # Errors
/// Returns `BoxError::Entropy` if the OS CSPRNG fails.
pub fn easy_seal(
    message: &[u8],
    peer_public_key: &PublicKey,
    private_key: &PrivateKey,
) -> Result<Vec<u8>, BoxError> {
    easy_seal_with_rng(&mut OsRng, message, peer_public_key, private_key)
}

/// [`easy_seal`] drawing the nonce from a caller-supplied CSPRNG.
///
/// # Errors
/// Returns `BoxError::Entropy` if `rng` fails.
pub fn easy_seal_with_rng<R>(
    rng: &mut R,
    message: &[u8],
    peer_public_key: &PublicKey,
    private_key: &PrivateKey,
) -> Result<Vec<u8>, BoxError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let shared_key = precompute(peer_public_key, private_key);
    seal_with_nonce_prefix(rng, message, &shared_key)
}

/// [`easy_seal`] with a key from [`precompute`].
///
/// # Errors
/// Returns `BoxError::Entropy` if the OS CSPRNG fails.
pub fn easy_seal_after_precomputation(
    message: &[u8],
    shared_key: &SharedKey,
) -> Result<Vec<u8>, BoxError> {
    seal_with_nonce_prefix(&mut OsRng, message, shared_key)
}

/// Open a box produced by [`easy_seal`].
///
/// # Errors
/// - `BoxError::MessageTooShort` if `sealed` cannot hold a nonce.
/// - `BoxError::InvalidInput` if authentication fails. The error never
///   says whether the key, the nonce or the ciphertext was wrong.
pub fn easy_open(
    sealed: &[u8],
    peer_public_key: &PublicKey,
    private_key: &PrivateKey,
) -> Result<Vec<u8>, BoxError> {
    // Reject before paying for the scalar multiplication.
    if sealed.len() < NONCE_LENGTH {
        debug!(sealed_len = sealed.len(), "easy box rejected: too short");
        return Err(BoxError::MessageTooShort);
    }
    let shared_key = precompute(peer_public_key, private_key);
    easy_open_after_precomputation(sealed, &shared_key)
}

/// [`easy_open`] with a key from [`precompute`].
///
/// # Errors
/// Same as [`easy_open`].
pub fn easy_open_after_precomputation(
    sealed: &[u8],
    shared_key: &SharedKey,
) -> Result<Vec<u8>, BoxError> {
    if sealed.len() < NONCE_LENGTH {
        debug!(sealed_len = sealed.len(), "easy box rejected: too short");
        return Err(BoxError::MessageTooShort);
    }
    let (nonce_bytes, boxed) = sealed.split_at(NONCE_LENGTH);
    let nonce = Nonce::try_from(nonce_bytes)?;

    open_after_precomputation(boxed, &nonce, shared_key).map_err(|_| BoxError::InvalidInput)
}

fn seal_with_nonce_prefix<R>(
    rng: &mut R,
    message: &[u8],
    shared_key: &SharedKey,
) -> Result<Vec<u8>, BoxError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let nonce = Nonce::generate(rng)?;
    let mut out = Vec::with_capacity(message.len() + EASY_OVERHEAD);
    out.extend_from_slice(nonce.as_bytes());
    seal_after_precomputation_append(&mut out, message, &nonce, shared_key)?;
    Ok(out)
}
