//! Conformance: key generation, symmetry, round trip, length law.

use nacl_box::{
    easy_open, easy_seal, generate_key, open, open_after_precomputation, precompute, seal,
    seal_after_precomputation, seal_append, KeyPair, Nonce, OVERHEAD,
};
use rand_core::OsRng;

const PAIRS: usize = 16;
const SIZES: [usize; 8] = [0, 1, 15, 16, 17, 63, 64, 1000];

fn message_of(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7 + 3) as u8).collect()
}

#[test]
fn conformance_public_key_is_base_point_multiple() {
    for _ in 0..PAIRS {
        let (public, private) = generate_key(&mut OsRng).unwrap();
        assert_eq!(public, private.public_key());
    }
}

#[test]
fn conformance_shared_key_symmetry() {
    for _ in 0..PAIRS {
        let a = KeyPair::generate().unwrap();
        let b = KeyPair::generate().unwrap();
        let ab = precompute(&b.public, &a.private);
        let ba = precompute(&a.public, &b.private);
        assert_eq!(ab.as_bytes(), ba.as_bytes());
    }
}

#[test]
fn conformance_distinct_peers_distinct_shared_keys() {
    let a = KeyPair::generate().unwrap();
    let b = KeyPair::generate().unwrap();
    let c = KeyPair::generate().unwrap();
    assert_ne!(
        precompute(&b.public, &a.private).as_bytes(),
        precompute(&c.public, &a.private).as_bytes()
    );
}

#[test]
fn conformance_roundtrip_all_sizes() {
    let a = KeyPair::generate().unwrap();
    let b = KeyPair::generate().unwrap();
    for len in SIZES {
        let message = message_of(len);
        let nonce = Nonce::random().unwrap();
        let sealed = seal(&message, &nonce, &b.public, &a.private).unwrap();
        let opened = open(&sealed, &nonce, &a.public, &b.private).unwrap();
        assert_eq!(opened, message, "round trip failed for len {len}");
    }
}

#[test]
fn conformance_precomputed_and_direct_agree() {
    let a = KeyPair::generate().unwrap();
    let b = KeyPair::generate().unwrap();
    let shared = precompute(&b.public, &a.private);
    for len in SIZES {
        let message = message_of(len);
        let nonce = Nonce::from_prefix_and_counter([9u8; 16], len as u64);
        let direct = seal(&message, &nonce, &b.public, &a.private).unwrap();
        let cached = seal_after_precomputation(&message, &nonce, &shared).unwrap();
        assert_eq!(direct, cached, "precomputed seal diverged for len {len}");
        assert_eq!(
            open_after_precomputation(&direct, &nonce, &shared).unwrap(),
            message
        );
    }
}

#[test]
fn conformance_seal_length_law() {
    let a = KeyPair::generate().unwrap();
    let b = KeyPair::generate().unwrap();
    let nonce = Nonce::random().unwrap();
    for len in SIZES {
        let mut out = vec![0xee; 5];
        seal_append(&mut out, &message_of(len), &nonce, &b.public, &a.private).unwrap();
        assert_eq!(out.len() - 5, len + OVERHEAD);
    }
}

#[test]
fn conformance_easy_length_law_and_roundtrip() {
    let a = KeyPair::generate().unwrap();
    let b = KeyPair::generate().unwrap();
    for len in SIZES {
        let message = message_of(len);
        let sealed = easy_seal(&message, &b.public, &a.private).unwrap();
        assert_eq!(sealed.len(), len + OVERHEAD + 24);
        assert_eq!(easy_open(&sealed, &a.public, &b.private).unwrap(), message);
    }
}

#[test]
fn conformance_sealing_is_deterministic_for_fixed_inputs() {
    let a = KeyPair::generate().unwrap();
    let b = KeyPair::generate().unwrap();
    let nonce = Nonce::from_bytes([0u8; 24]);
    let first = seal(b"hello", &nonce, &b.public, &a.private).unwrap();
    let second = seal(b"hello", &nonce, &b.public, &a.private).unwrap();
    assert_eq!(first, second);
}
