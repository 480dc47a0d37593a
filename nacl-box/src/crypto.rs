//! The box construction — Curve25519 + HSalsa20 + XSalsa20-Poly1305.
//!
//! Wire-compatible with NaCl `crypto_box`:
//! - `precompute`            == `crypto_box_beforenm`
//! - `seal_after_precomputation` / `open_after_precomputation`
//!                           == `crypto_box_afternm` / `crypto_box_open_afternm`
//! - `seal` / `open`         == `crypto_box` / `crypto_box_open`
//!
//! Sealed layout: `tag(16) || ciphertext(len(message))`.
//!
//! The `*_append` forms write into a caller-owned `Vec`. Because `out`
//! is borrowed mutably and the input immutably, the two can never
//! overlap. On failure `out` is restored to its original length.

use crypto_secretbox::aead::generic_array::GenericArray;
use crypto_secretbox::aead::{AeadInPlace, KeyInit};
use crypto_secretbox::consts::U16;
use crypto_secretbox::{Kdf, Key, Tag, XSalsa20Poly1305};
use tracing::{debug, trace};
use zeroize::Zeroize;

use crate::constants::OVERHEAD;
use crate::errors::BoxError;
use crate::keys::{PrivateKey, PublicKey, SharedKey};
use crate::nonce::Nonce;

/// Derive the symmetric key shared between `private_key` and
/// `peer_public_key`.
///
/// `HSalsa20(key = X25519(private_key, peer_public_key), input = 0^16)`
/// with the standard "expand 32-byte k" constants. Symmetric:
/// `precompute(B.public, A.private) == precompute(A.public, B.private)`.
///
/// Cache the result and use the `*_after_precomputation` functions when
/// exchanging many messages with the same peer.
pub fn precompute(peer_public_key: &PublicKey, private_key: &PrivateKey) -> SharedKey {
    let secret = private_key.to_static_secret();
    let point = secret.diffie_hellman(&peer_public_key.to_dalek());

    let zero_block = GenericArray::<u8, U16>::default();
    let mut derived = XSalsa20Poly1305::kdf(Key::from_slice(point.as_bytes()), &zero_block);

    let mut shared = SharedKey::zeroed();
    shared.as_mut_bytes().copy_from_slice(derived.as_slice());
    derived.as_mut_slice().zeroize();
    shared
}

/// Seal `message` for `peer_public_key`, appending `tag || ciphertext`
/// to `out`. Exactly `message.len() + OVERHEAD` bytes are appended.
///
/// The nonce MUST be unique for each message under this key pair.
///
/// # Errors
/// Returns `BoxError::Encryption` if the primitive refuses to seal.
pub fn seal_append(
    out: &mut Vec<u8>,
    message: &[u8],
    nonce: &Nonce,
    peer_public_key: &PublicKey,
    private_key: &PrivateKey,
) -> Result<(), BoxError> {
    let shared_key = precompute(peer_public_key, private_key);
    seal_after_precomputation_append(out, message, nonce, &shared_key)
}

/// Seal `message` into a freshly allocated box.
///
/// # Errors
/// Returns `BoxError::Encryption` if the primitive refuses to seal.
pub fn seal(
    message: &[u8],
    nonce: &Nonce,
    peer_public_key: &PublicKey,
    private_key: &PrivateKey,
) -> Result<Vec<u8>, BoxError> {
    let mut out = Vec::with_capacity(message.len() + OVERHEAD);
    seal_append(&mut out, message, nonce, peer_public_key, private_key)?;
    Ok(out)
}

/// Verify and decrypt `sealed` from `peer_public_key`, appending the
/// plaintext to `out`.
///
/// # Errors
/// Returns `BoxError::InvalidInput` if authentication fails for any
/// reason. `out` is left untouched and no plaintext is exposed.
pub fn open_append(
    out: &mut Vec<u8>,
    sealed: &[u8],
    nonce: &Nonce,
    peer_public_key: &PublicKey,
    private_key: &PrivateKey,
) -> Result<(), BoxError> {
    let shared_key = precompute(peer_public_key, private_key);
    open_after_precomputation_append(out, sealed, nonce, &shared_key)
}

/// Verify and decrypt `sealed` into a freshly allocated buffer.
///
/// # Errors
/// Returns `BoxError::InvalidInput` if authentication fails.
pub fn open(
    sealed: &[u8],
    nonce: &Nonce,
    peer_public_key: &PublicKey,
    private_key: &PrivateKey,
) -> Result<Vec<u8>, BoxError> {
    let mut out = Vec::with_capacity(sealed.len().saturating_sub(OVERHEAD));
    open_append(&mut out, sealed, nonce, peer_public_key, private_key)?;
    Ok(out)
}

/// `seal_append` with a key from [`precompute`].
///
/// # Errors
/// Returns `BoxError::Encryption` if the primitive refuses to seal.
pub fn seal_after_precomputation_append(
    out: &mut Vec<u8>,
    message: &[u8],
    nonce: &Nonce,
    shared_key: &SharedKey,
) -> Result<(), BoxError> {
    let start = out.len();
    out.reserve(message.len() + OVERHEAD);
    out.extend_from_slice(&[0u8; OVERHEAD]);
    out.extend_from_slice(message);

    let body = &mut out[start + OVERHEAD..];
    let tag = match cipher(shared_key).encrypt_in_place_detached(
        crypto_secretbox::Nonce::from_slice(nonce.as_bytes()),
        b"",
        body,
    ) {
        Ok(tag) => tag,
        Err(_) => {
            // The body may hold plaintext at this point.
            out[start..].zeroize();
            out.truncate(start);
            return Err(BoxError::Encryption("Encryption failed".into()));
        }
    };
    out[start..start + OVERHEAD].copy_from_slice(tag.as_slice());

    trace!(plaintext_len = message.len(), "sealed box");
    Ok(())
}

/// `seal` with a key from [`precompute`].
///
/// # Errors
/// Returns `BoxError::Encryption` if the primitive refuses to seal.
pub fn seal_after_precomputation(
    message: &[u8],
    nonce: &Nonce,
    shared_key: &SharedKey,
) -> Result<Vec<u8>, BoxError> {
    let mut out = Vec::with_capacity(message.len() + OVERHEAD);
    seal_after_precomputation_append(&mut out, message, nonce, shared_key)?;
    Ok(out)
}

/// `open_append` with a key from [`precompute`].
///
/// # Errors
/// Returns `BoxError::InvalidInput` if authentication fails. `out` is
/// left untouched.
pub fn open_after_precomputation_append(
    out: &mut Vec<u8>,
    sealed: &[u8],
    nonce: &Nonce,
    shared_key: &SharedKey,
) -> Result<(), BoxError> {
    if sealed.len() < OVERHEAD {
        debug!(sealed_len = sealed.len(), "box rejected: shorter than tag");
        return Err(BoxError::InvalidInput);
    }
    let (tag, ciphertext) = sealed.split_at(OVERHEAD);

    let start = out.len();
    out.extend_from_slice(ciphertext);

    // The keystream is only applied once the tag verifies, so on failure
    // the appended region still holds ciphertext.
    let verified = cipher(shared_key).decrypt_in_place_detached(
        crypto_secretbox::Nonce::from_slice(nonce.as_bytes()),
        b"",
        &mut out[start..],
        Tag::from_slice(tag),
    );
    if verified.is_err() {
        out.truncate(start);
        debug!("box rejected: authentication failed");
        return Err(BoxError::InvalidInput);
    }

    trace!(plaintext_len = ciphertext.len(), "opened box");
    Ok(())
}

/// `open` with a key from [`precompute`].
///
/// # Errors
/// Returns `BoxError::InvalidInput` if authentication fails.
pub fn open_after_precomputation(
    sealed: &[u8],
    nonce: &Nonce,
    shared_key: &SharedKey,
) -> Result<Vec<u8>, BoxError> {
    let mut out = Vec::with_capacity(sealed.len().saturating_sub(OVERHEAD));
    open_after_precomputation_append(&mut out, sealed, nonce, shared_key)?;
    Ok(out)
}

fn cipher(shared_key: &SharedKey) -> XSalsa20Poly1305 {
    XSalsa20Poly1305::new(Key::from_slice(shared_key.as_bytes()))
}
