use ed25519_dalek::{PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH, Signature, Signer, SigningKey, Verifier, VerifyingKey};
use tracing::error;

/// Header carrying the hex ed25519 signature of `timestamp || body`.
pub const SIGNATURE_HEADER: &str = "X-Signature-Ed25519";

/// Header carrying the timestamp the signature covers.
pub const TIMESTAMP_HEADER: &str = "X-Signature-Timestamp";

/// Verifies a request signature against the configured hex public key.
///
/// The signed message is the timestamp bytes followed by the raw body bytes.
/// Malformed hex, wrong lengths, and failed verification all return false.
pub fn verify_signature(
    body: &[u8],
    timestamp: &str,
    signature_hex: &str,
    public_key_hex: &str,
) -> bool {
    let key_bytes = match hex::decode(public_key_hex) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to decode public key hex: {}", e);
            return false;
        }
    };
    let key_bytes: [u8; PUBLIC_KEY_LENGTH] = match key_bytes.try_into() {
        Ok(bytes) => bytes,
        Err(_) => {
            error!("Public key is not {} bytes", PUBLIC_KEY_LENGTH);
            return false;
        }
    };
    let verifying_key = match VerifyingKey::from_bytes(&key_bytes) {
        Ok(key) => key,
        Err(e) => {
            error!("Invalid ed25519 public key: {}", e);
            return false;
        }
    };

    let signature_bytes = match hex::decode(signature_hex) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to decode signature hex: {}", e);
            return false;
        }
    };
    let signature_bytes: [u8; SIGNATURE_LENGTH] = match signature_bytes.try_into() {
        Ok(bytes) => bytes,
        Err(_) => {
            error!("Signature is not {} bytes", SIGNATURE_LENGTH);
            return false;
        }
    };
    let signature = Signature::from_bytes(&signature_bytes);

    let mut message = Vec::with_capacity(timestamp.len() + body.len());
    message.extend_from_slice(timestamp.as_bytes());
    message.extend_from_slice(body);

    if verifying_key.verify(&message, &signature).is_ok() {
        true
    } else {
        error!("Signature verification failed");
        false
    }
}

/// Computes the hex signature for `timestamp || body` with the given signing
/// key. Counterpart of [`verify_signature`], used to build signed requests in
/// tests.
#[must_use]
pub fn compute_signature(timestamp: &str, body: &[u8], signing_key_bytes: &[u8; 32]) -> String {
    let signing_key = SigningKey::from_bytes(signing_key_bytes);
    let mut message = Vec::with_capacity(timestamp.len() + body.len());
    message.extend_from_slice(timestamp.as_bytes());
    message.extend_from_slice(body);
    hex::encode(signing_key.sign(&message).to_bytes())
}
