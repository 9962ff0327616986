use ed25519_dalek::SigningKey;
use tldw::api::signature::{compute_signature, verify_signature};

const TEST_KEY_SEED: [u8; 32] = [7u8; 32];

fn test_public_key_hex() -> String {
    let signing_key = SigningKey::from_bytes(&TEST_KEY_SEED);
    hex::encode(signing_key.verifying_key().to_bytes())
}

#[test]
fn test_signature_round_trip() {
    let body = br#"{"type": 1}"#;
    let timestamp = "1700000000";

    let signature = compute_signature(timestamp, body, &TEST_KEY_SEED);
    assert!(verify_signature(
        body,
        timestamp,
        &signature,
        &test_public_key_hex()
    ));
}

#[test]
fn test_tampered_body_fails_verification() {
    let timestamp = "1700000000";
    let signature = compute_signature(timestamp, br#"{"type": 1}"#, &TEST_KEY_SEED);

    assert!(!verify_signature(
        br#"{"type": 2}"#,
        timestamp,
        &signature,
        &test_public_key_hex()
    ));
}

#[test]
fn test_changed_timestamp_fails_verification() {
    let body = br#"{"type": 1}"#;
    let signature = compute_signature("1700000000", body, &TEST_KEY_SEED);

    assert!(!verify_signature(
        body,
        "1700000001",
        &signature,
        &test_public_key_hex()
    ));
}

#[test]
fn test_wrong_key_fails_verification() {
    let body = b"payload";
    let timestamp = "1700000000";
    let signature = compute_signature(timestamp, body, &[9u8; 32]);

    assert!(!verify_signature(
        body,
        timestamp,
        &signature,
        &test_public_key_hex()
    ));
}

#[test]
fn test_malformed_hex_inputs_are_rejected() {
    let body = b"body";
    let timestamp = "ts";
    let signature = compute_signature(timestamp, body, &TEST_KEY_SEED);
    let public_key = test_public_key_hex();

    // Odd-length and non-hex signature strings
    assert!(!verify_signature(body, timestamp, "abc", &public_key));
    assert!(!verify_signature(body, timestamp, "zz", &public_key));

    // Truncated and non-hex public keys
    assert!(!verify_signature(body, timestamp, &signature, "deadbeef"));
    assert!(!verify_signature(body, timestamp, &signature, "not hex at all"));
}
