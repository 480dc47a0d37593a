//! Conformance: error display stability.
//!
//! Display strings are part of the public surface. Authentication
//! failures share one message regardless of cause.

use nacl_box::BoxError;

#[test]
fn conformance_box_error_display_format_stable() {
    let cases: Vec<(BoxError, &str)> = vec![
        (
            BoxError::Entropy("os rng unavailable".into()),
            "Entropy error: os rng unavailable",
        ),
        (
            BoxError::MessageTooShort,
            "Decryption error: message too short",
        ),
        (
            BoxError::InvalidInput,
            "Decryption error: could not decrypt invalid input",
        ),
        (
            BoxError::Encryption("Encryption failed".into()),
            "Encryption error: Encryption failed",
        ),
        (
            BoxError::InvalidLength {
                expected: 24,
                actual: 3,
            },
            "Invalid length: expected 24 bytes, got 3",
        ),
        (
            BoxError::Encoding("invalid hex: Odd number of digits".into()),
            "Encoding error: invalid hex: Odd number of digits",
        ),
    ];

    for (error, expected) in &cases {
        assert_eq!(error.to_string(), *expected, "BoxError display drift detected");
    }
}

#[test]
fn conformance_invalid_input_carries_no_detail() {
    let msg = BoxError::InvalidInput.to_string();
    for leak in ["tag", "key", "nonce", "mac", "poly1305"] {
        assert!(
            !msg.to_lowercase().contains(leak),
            "auth failure message mentions {leak:?}"
        );
    }
}

#[test]
fn conformance_box_error_is_std_error() {
    let err = BoxError::MessageTooShort;
    let _: &dyn std::error::Error = &err;
}
