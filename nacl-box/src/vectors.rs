//! Deterministic golden vector generator.
//!
//! Produces `tests/vectors/box.vectors.json`. Fixed keys and nonces make
//! the output reproducible, so any other crypto_box implementation can
//! check itself against the committed file and this crate can detect
//! drift by regenerating it.
//!
//! Keys: sender secret is bytes `0x01..=0x20`, receiver secret is bytes
//! `0x21..=0x40`.

use serde::Serialize;

use crate::constants::{NONCE_LENGTH, OVERHEAD};
use crate::crypto::{precompute, seal_after_precomputation};
use crate::encoding::to_hex;
use crate::errors::BoxError;
use crate::keys::{KeyPair, PrivateKey};
use crate::nonce::Nonce;

#[derive(Serialize)]
struct BoxVectorFile {
    #[serde(rename = "_WARNING")]
    warning: &'static str,
    description: &'static str,
    overhead: usize,
    nonce_length: usize,
    sender: KeyEntry,
    receiver: KeyEntry,
    shared_key_hex: String,
    vectors: Vec<ValidVector>,
    corrupt_vectors: Vec<CorruptVector>,
}

#[derive(Serialize)]
struct KeyEntry {
    public_key_hex: String,
    secret_key_hex: String,
}

#[derive(Serialize)]
struct ValidVector {
    id: &'static str,
    plaintext_hex: String,
    nonce_hex: String,
    sealed_hex: String,
}

#[derive(Serialize)]
struct CorruptVector {
    id: &'static str,
    sealed_hex: String,
    nonce_hex: String,
}

/// Sender key pair used by the committed vectors.
pub fn sender_keypair() -> KeyPair {
    KeyPair::from_private_key(PrivateKey::from_bytes(core::array::from_fn(|i| {
        (i as u8) + 1
    })))
}

/// Receiver key pair used by the committed vectors.
pub fn receiver_keypair() -> KeyPair {
    KeyPair::from_private_key(PrivateKey::from_bytes(core::array::from_fn(|i| {
        (i as u8) + 33
    })))
}

/// Render the golden vector file as pretty JSON.
///
/// # Errors
/// Returns `BoxError::Encryption` if sealing fails and
/// `BoxError::Encoding` if serialization fails.
pub fn generate_box_json() -> Result<String, BoxError> {
    let sender = sender_keypair();
    let receiver = receiver_keypair();
    let shared = precompute(&receiver.public, &sender.private);

    let zero_nonce = Nonce::from_bytes([0u8; NONCE_LENGTH]);
    let counting_nonce = Nonce::from_bytes(core::array::from_fn(|i| i as u8));
    let pattern: Vec<u8> = (0..256).map(|i| i as u8).collect();

    let cases: [(&'static str, &[u8], Nonce); 4] = [
        ("hello", &b"hello"[..], zero_nonce),
        ("empty", &b""[..], counting_nonce),
        ("single-byte-ff", &[0xffu8][..], counting_nonce),
        (
            "256-byte-pattern",
            pattern.as_slice(),
            Nonce::from_bytes([0x42; NONCE_LENGTH]),
        ),
    ];

    let mut vectors = Vec::with_capacity(cases.len());
    for (id, plaintext, nonce) in cases {
        vectors.push(ValidVector {
            id,
            plaintext_hex: to_hex(plaintext),
            nonce_hex: nonce.to_hex(),
            sealed_hex: to_hex(&seal_after_precomputation(plaintext, &nonce, &shared)?),
        });
    }

    let hello = seal_after_precomputation(b"hello", &zero_nonce, &shared)?;
    let mut wrong_nonce = [0u8; NONCE_LENGTH];
    wrong_nonce[NONCE_LENGTH - 1] = 1;

    let corrupt = |id, sealed: Vec<u8>, nonce: Nonce| CorruptVector {
        id,
        sealed_hex: to_hex(&sealed),
        nonce_hex: nonce.to_hex(),
    };
    let corrupt_vectors = vec![
        corrupt("flipped-tag-byte", flip(&hello, 0, 0x01), zero_nonce),
        corrupt(
            "flipped-ciphertext-byte",
            flip(&hello, hello.len() - 1, 0x80),
            zero_nonce,
        ),
        corrupt("truncated", hello[..hello.len() - 1].to_vec(), zero_nonce),
        corrupt("shorter-than-overhead", hello[..OVERHEAD - 1].to_vec(), zero_nonce),
        corrupt("wrong-nonce", hello.clone(), Nonce::from_bytes(wrong_nonce)),
    ];

    let file = BoxVectorFile {
        warning: "Generated by nacl-box (cargo test --features vectors). Do not edit by hand.",
        description: "crypto_box (Curve25519-XSalsa20-Poly1305) golden vectors. Sender secret is bytes 0x01..0x20, receiver secret is bytes 0x21..0x40.",
        overhead: OVERHEAD,
        nonce_length: NONCE_LENGTH,
        sender: key_entry(&sender),
        receiver: key_entry(&receiver),
        shared_key_hex: to_hex(shared.as_bytes()),
        vectors,
        corrupt_vectors,
    };

    serde_json::to_string_pretty(&file)
        .map_err(|e| BoxError::Encoding(format!("vector serialization failed: {e}")))
}

fn key_entry(kp: &KeyPair) -> KeyEntry {
    KeyEntry {
        public_key_hex: kp.public.to_hex(),
        secret_key_hex: to_hex(kp.private.as_bytes()),
    }
}

fn flip(sealed: &[u8], index: usize, mask: u8) -> Vec<u8> {
    let mut out = sealed.to_vec();
    out[index] ^= mask;
    out
}
