//! Opaque bearer token generation and hashing.
//!
//! Tokens carry no claims. Each one is 32 bytes of OS randomness encoded
//! as URL-safe base64, and only its SHA-256 digest is ever persisted, so
//! a leaked sessions table cannot be replayed.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

/// Number of random bytes in a session token.
const TOKEN_BYTES: usize = 32;

/// Generates a fresh random session token.
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Computes the storable hash of a bearer token.
pub fn hash_token(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    URL_SAFE_NO_PAD.encode(digest)
}
