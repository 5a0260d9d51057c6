//! Password hashing and verification.
//!
//! The `users` table stores `password_hash` as `{salt}${hex(sha256(salt
//! + password))}`. Verification recomputes the digest locally after the
//! user row is fetched by email; credentials are never compared by plain
//! equality against a stored column. Malformed stored values simply fail
//! verification.

use rand::Rng;
use sha2::{Digest, Sha256};

const SALT_BYTES: usize = 16;

/// Hashes a password with a freshly generated random salt, producing the
/// stored `{salt}${digest}` form.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_BYTES];
    rand::thread_rng().fill(&mut salt);
    let salt = hex::encode(salt);
    let digest = digest_with_salt(&salt, password);
    format!("{}${}", salt, digest)
}

/// Verifies a password against a stored `{salt}${digest}` value.
///
/// Returns `false` for malformed stored values (missing separator, empty
/// parts); never fails.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt, digest)) = stored.split_once('$') else {
        return false;
    };
    if salt.is_empty() || digest.is_empty() {
        return false;
    }
    digest_with_salt(salt, password) == digest
}

fn digest_with_salt(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}
