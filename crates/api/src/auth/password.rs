//! Password hashing for staff credentials.
//!
//! Hashes are Argon2id in PHC string form, so the salt and the algorithm
//! parameters travel inside the stored value and verification needs no
//! out-of-band configuration.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{Error as HashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Hash a plaintext password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, HashError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

/// Check a plaintext password against a stored PHC hash.
///
/// A mismatch is `Ok(false)`, not an error; `Err` means the stored hash
/// itself is malformed and the row needs attention.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, HashError> {
    let parsed = PasswordHash::new(stored)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(HashError::Password) => Ok(false),
        Err(other) => Err(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_accepts_correct_password() {
        let hash = hash_password("till-drawer-9000").expect("hashing should succeed");

        assert!(
            hash.starts_with("$argon2id$"),
            "stored form must be an argon2id PHC string"
        );
        assert!(verify_password("till-drawer-9000", &hash).expect("verify should succeed"));
    }

    #[test]
    fn test_rejects_wrong_password() {
        let hash = hash_password("till-drawer-9000").expect("hashing should succeed");
        let ok = verify_password("till-drawer-9001", &hash).expect("verify should succeed");
        assert!(!ok);
    }

    #[test]
    fn test_salts_differ_between_hashes() {
        let first = hash_password("same-input").expect("hashing should succeed");
        let second = hash_password("same-input").expect("hashing should succeed");
        assert_ne!(first, second, "each hash draws its own salt");
    }

    #[test]
    fn test_malformed_stored_hash_is_an_error() {
        let result = verify_password("whatever", "not-a-phc-string");
        assert!(result.is_err(), "corrupt hash must not read as a mismatch");
    }
}
