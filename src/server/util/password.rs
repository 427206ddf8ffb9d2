use sha2::{Digest, Sha256};

/// Hash a password for storage in the mock store.
///
/// Unsalted SHA-256, sufficient for fake development accounts only.
pub fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

/// Compare a plaintext password against a hash produced by [`hash_password`].
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    hash_password(password) == password_hash
}
