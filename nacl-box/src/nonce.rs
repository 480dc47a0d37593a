//! 24-byte XSalsa20 nonces.
//!
//! A nonce is not secret but MUST NOT repeat for a given key pair.
//! Two strategies are supported:
//! - random (`Nonce::random`, `Nonce::generate`) — 192 bits make
//!   collisions negligible for any realistic message volume;
//! - counter (`Nonce::from_prefix_and_counter`) — a fixed 16-byte prefix
//!   plus a big-endian 64-bit message counter.

use std::fmt;

use rand_core::{CryptoRng, OsRng, RngCore};

use crate::constants::NONCE_LENGTH;
use crate::encoding::{from_hex_array, to_hex};
use crate::errors::BoxError;

/// XSalsa20 nonce (24 bytes).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nonce([u8; NONCE_LENGTH]);

impl Nonce {
    pub const fn from_bytes(bytes: [u8; NONCE_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; NONCE_LENGTH] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; NONCE_LENGTH] {
        self.0
    }

    /// Fresh random nonce from the OS CSPRNG.
    ///
    /// # Errors
    /// Returns `BoxError::Entropy` if the OS cannot supply randomness.
    pub fn random() -> Result<Self, BoxError> {
        Self::generate(&mut OsRng)
    }

    /// Fresh random nonce from a caller-supplied CSPRNG.
    ///
    /// # Errors
    /// Returns `BoxError::Entropy` if `rng` fails.
    pub fn generate<R>(rng: &mut R) -> Result<Self, BoxError>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let mut bytes = [0u8; NONCE_LENGTH];
        rng.try_fill_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Counter nonce: `prefix(16) || counter as big-endian u64`.
    ///
    /// Distinct counters under the same prefix never collide. The caller
    /// owns the counter and must never rewind it for a given key pair.
    pub fn from_prefix_and_counter(prefix: [u8; 16], counter: u64) -> Self {
        let mut out = [0u8; NONCE_LENGTH];
        out[..16].copy_from_slice(&prefix);
        out[16..].copy_from_slice(&counter.to_be_bytes());
        Self(out)
    }

    /// Parse a nonce from 48 hex characters.
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
}

impl From<[u8; NONCE_LENGTH]> for Nonce {
    fn from(bytes: [u8; NONCE_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Nonce {
    type Error = BoxError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; NONCE_LENGTH]>::try_from(bytes)
            .map(Self)
            .map_err(|_| BoxError::InvalidLength {
                expected: NONCE_LENGTH,
                actual: bytes.len(),
            })
    }
}

impl AsRef<[u8]> for Nonce {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nonce({})", self.to_hex())
    }
}
