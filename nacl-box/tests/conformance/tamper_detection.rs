//! Conformance: authentication enforcement.
//!
//! Flipping any single bit of a sealed box, using the wrong recipient
//! key, or using the wrong nonce MUST be rejected without exposing
//! plaintext.

use nacl_box::{
    easy_open, easy_seal, open, open_append, seal, BoxError, KeyPair, Nonce, NONCE_LENGTH,
};

#[test]
fn conformance_every_bit_flip_rejected() {
    let a = KeyPair::generate().unwrap();
    let b = KeyPair::generate().unwrap();
    let nonce = Nonce::random().unwrap();
    let sealed = seal(b"tamper-evident payload", &nonce, &b.public, &a.private).unwrap();

    for byte in 0..sealed.len() {
        for bit in 0..8 {
            let mut tampered = sealed.clone();
            tampered[byte] ^= 1 << bit;

            let mut out = Vec::new();
            let result = open_append(&mut out, &tampered, &nonce, &a.public, &b.private);
            assert!(
                matches!(result, Err(BoxError::InvalidInput)),
                "flip at byte {byte} bit {bit} was accepted"
            );
            assert!(out.is_empty(), "plaintext leaked after flip at byte {byte}");
        }
    }
}

#[test]
fn conformance_easy_bit_flips_rejected() {
    let a = KeyPair::generate().unwrap();
    let b = KeyPair::generate().unwrap();
    let sealed = easy_seal(b"nonce is covered too", &b.public, &a.private).unwrap();

    for byte in 0..sealed.len() {
        let mut tampered = sealed.clone();
        tampered[byte] ^= 0x01;
        assert!(
            matches!(
                easy_open(&tampered, &a.public, &b.private),
                Err(BoxError::InvalidInput)
            ),
            "flip at byte {byte} was accepted"
        );
    }
}

#[test]
fn conformance_wrong_recipient_rejected() {
    let a = KeyPair::generate().unwrap();
    let b = KeyPair::generate().unwrap();
    for _ in 0..8 {
        let eve = KeyPair::generate().unwrap();
        let nonce = Nonce::random().unwrap();
        let sealed = seal(b"for bob only", &nonce, &b.public, &a.private).unwrap();
        assert!(open(&sealed, &nonce, &a.public, &eve.private).is_err());
    }
}

#[test]
fn conformance_wrong_sender_rejected() {
    let a = KeyPair::generate().unwrap();
    let b = KeyPair::generate().unwrap();
    let eve = KeyPair::generate().unwrap();
    let nonce = Nonce::random().unwrap();
    let sealed = seal(b"from alice", &nonce, &b.public, &a.private).unwrap();
    // Bob believes the box came from Eve.
    assert!(open(&sealed, &nonce, &eve.public, &b.private).is_err());
}

#[test]
fn conformance_truncation_rejected() {
    let a = KeyPair::generate().unwrap();
    let b = KeyPair::generate().unwrap();
    let nonce = Nonce::random().unwrap();
    let sealed = seal(b"do not truncate", &nonce, &b.public, &a.private).unwrap();
    for len in 0..sealed.len() {
        assert!(open(&sealed[..len], &nonce, &a.public, &b.private).is_err());
    }
}

#[test]
fn conformance_easy_short_input_rejected_before_decrypt() {
    let a = KeyPair::generate().unwrap();
    let b = KeyPair::generate().unwrap();
    for len in 0..NONCE_LENGTH {
        assert!(matches!(
            easy_open(&vec![0u8; len], &a.public, &b.private),
            Err(BoxError::MessageTooShort)
        ));
    }
}
