//! Curve25519 key material — public keys, private scalars, precomputed
//! shared keys, and key-pair generation.
//!
//! Secret types (`PrivateKey`, `SharedKey`) are zeroized on drop via
//! `zeroize` and never print their bytes through `Debug`. Public keys are
//! plain `Copy` values.
//!
//! A private key is exactly [`PRIVATE_KEY_LENGTH`] bytes, the width the
//! X25519 primitive consumes. Bytes are stored as supplied; clamping
//! happens inside scalar multiplication.

use std::fmt;
use std::io::Read;

use rand_core::{CryptoRng, OsRng, RngCore};
use tracing::debug;
use x25519_dalek::StaticSecret;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::constants::{PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH, SHARED_KEY_LENGTH};
use crate::encoding::{from_hex_array, to_hex};
use crate::errors::BoxError;

/// Curve25519 public key (32 bytes). Freely shareable.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_LENGTH]);

impl PublicKey {
    /// Wrap raw public key bytes.
    pub const fn from_bytes(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.0
    }

    /// Parse a public key from 64 hex characters.
    ///
    /// # Errors
    /// `BoxError::Encoding` on bad hex, `BoxError::InvalidLength` on a
    /// wrong width.
    pub fn from_hex(encoded: &str) -> Result<Self, BoxError> {
        from_hex_array(encoded).map(Self)
    }

    pub fn to_hex(&self) -> String {
        to_hex(&self.0)
    }

    pub(crate) fn to_dalek(self) -> x25519_dalek::PublicKey {
        x25519_dalek::PublicKey::from(self.0)
    }
}

impl From<[u8; PUBLIC_KEY_LENGTH]> for PublicKey {
    fn from(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = BoxError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; PUBLIC_KEY_LENGTH]>::try_from(bytes)
            .map(Self)
            .map_err(|_| BoxError::InvalidLength {
                expected: PUBLIC_KEY_LENGTH,
                actual: bytes.len(),
            })
    }
}

/// Base-point multiplication: the public half of `private_key`.
impl From<&PrivateKey> for PublicKey {
    fn from(private_key: &PrivateKey) -> Self {
        let secret = private_key.to_static_secret();
        Self(x25519_dalek::PublicKey::from(&secret).to_bytes())
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

/// Curve25519 private scalar (32 bytes). Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; PRIVATE_KEY_LENGTH]);

impl PrivateKey {
    /// Wrap raw private scalar bytes.
    pub fn from_bytes(bytes: [u8; PRIVATE_KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw scalar. Callers persisting keys are responsible
    /// for protecting the copy they make.
    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_LENGTH] {
        &self.0
    }

    /// Parse a private key from 64 hex characters.
    ///
    /// # Errors
    /// `BoxError::Encoding` on bad hex, `BoxError::InvalidLength` on a
    /// wrong width.
    pub fn from_hex(encoded: &str) -> Result<Self, BoxError> {
        let bytes = Zeroizing::new(from_hex_array::<PRIVATE_KEY_LENGTH>(encoded)?);
        Ok(Self(*bytes))
    }

    /// Derive the matching public key (base-point multiplication).
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from(self)
    }

    pub(crate) fn to_static_secret(&self) -> StaticSecret {
        StaticSecret::from(self.0)
    }
}

impl From<[u8; PRIVATE_KEY_LENGTH]> for PrivateKey {
    fn from(bytes: [u8; PRIVATE_KEY_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for PrivateKey {
    type Error = BoxError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != PRIVATE_KEY_LENGTH {
            return Err(BoxError::InvalidLength {
                expected: PRIVATE_KEY_LENGTH,
                actual: bytes.len(),
            });
        }
        let mut key = Self([0u8; PRIVATE_KEY_LENGTH]);
        key.0.copy_from_slice(bytes);
        Ok(key)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

/// Precomputed symmetric key for one (private key, peer public key) pair.
///
/// Read-only once built; share it freely between threads. Every
/// concurrent user still needs its own unique nonces.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedKey([u8; SHARED_KEY_LENGTH]);

impl SharedKey {
    /// Wrap raw shared key bytes, e.g. from a libsodium `crypto_box_beforenm`.
    pub fn from_bytes(bytes: [u8; SHARED_KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SHARED_KEY_LENGTH] {
        &self.0
    }

    pub(crate) fn zeroed() -> Self {
        Self([0u8; SHARED_KEY_LENGTH])
    }

    pub(crate) fn as_mut_bytes(&mut self) -> &mut [u8; SHARED_KEY_LENGTH] {
        &mut self.0
    }
}

impl fmt::Debug for SharedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedKey([REDACTED])")
    }
}

/// Owned public/private key pair.
#[derive(Clone, Debug)]
pub struct KeyPair {
    pub public: PublicKey,
    pub private: PrivateKey,
}

impl KeyPair {
    /// Generate a fresh key pair from the OS CSPRNG.
    ///
    /// # Errors
    /// Returns `BoxError::Entropy` if the OS cannot supply randomness.
    pub fn generate() -> Result<Self, BoxError> {
        let (public, private) = generate_key(&mut OsRng)?;
        Ok(Self { public, private })
    }

    /// Rebuild a pair from a stored private key.
    pub fn from_private_key(private: PrivateKey) -> Self {
        Self {
            public: private.public_key(),
            private,
        }
    }
}

/// Generate a key pair from a caller-supplied CSPRNG.
///
/// Reads 32 bytes into a zeroizing scratch buffer, then derives the
/// public key by base-point multiplication.
///
/// # Errors
/// Returns `BoxError::Entropy` if `rng` cannot fill the scalar. No key
/// material is returned in that case and the scratch buffer is wiped.
pub fn generate_key<R>(rng: &mut R) -> Result<(PublicKey, PrivateKey), BoxError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let mut scalar = Zeroizing::new([0u8; PRIVATE_KEY_LENGTH]);
    if let Err(err) = rng.try_fill_bytes(&mut scalar[..]) {
        debug!(error = %err, "key generation aborted: random source failed");
        return Err(err.into());
    }
    Ok(finish_key(&scalar))
}

/// Generate a key pair by reading exactly 32 bytes from `reader`.
///
/// For randomness sources exposed as byte streams (`/dev/urandom`, a
/// hardware token). The reader must be cryptographically secure.
///
/// # Errors
/// Returns `BoxError::Entropy` on a short read or I/O failure. No key
/// material is returned in that case.
pub fn generate_key_from_reader<R: Read>(mut reader: R) -> Result<(PublicKey, PrivateKey), BoxError> {
    let mut scalar = Zeroizing::new([0u8; PRIVATE_KEY_LENGTH]);
    if let Err(err) = reader.read_exact(&mut scalar[..]) {
        debug!(error = %err, "key generation aborted: reader could not supply 32 bytes");
        return Err(err.into());
    }
    Ok(finish_key(&scalar))
}

fn finish_key(scalar: &[u8; PRIVATE_KEY_LENGTH]) -> (PublicKey, PrivateKey) {
    let private = PrivateKey(*scalar);
    let public = private.public_key();
    debug!(public_key = %public.to_hex(), "generated key pair");
    (public, private)
}
