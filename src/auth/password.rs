/**
 * Password Digests
 *
 * This module computes the credential digest stored in the `users` table:
 * a single-pass SHA-256 of the plaintext, hex encoded. The digest is
 * deterministic and unsalted, and digest equality is the sole credential
 * check.
 *
 * Compatibility constraint: existing rows hold exactly this digest, so
 * the scheme cannot change without a migration. A future hardening pass
 * should move to a salted, memory-hard KDF and re-digest on login.
 */

use sha2::{Digest, Sha256};

/// Compute the stored digest for a plaintext password
///
/// Returns a 64-character lowercase hex string.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check a plaintext password against a stored digest
pub fn verify_password(password: &str, stored_digest: &str) -> bool {
    hash_password(password) == stored_digest
}
