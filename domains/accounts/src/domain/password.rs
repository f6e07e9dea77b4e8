//! Password hashing and verification (Argon2id)
//!
//! Hashing is an explicit transformation applied by the handler before
//! the persistence call, not a lifecycle hook on the data model.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use stonegate_common::Error;

/// Hash a password with Argon2id. Returns a PHC-format string that is
/// stored in the `password_hash` column.
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::Unexpected(anyhow::anyhow!("failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored PHC-format hash. `Ok(false)` is a
/// mismatch; `Err` means the stored hash itself is malformed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, Error> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| Error::Unexpected(anyhow::anyhow!("invalid password hash: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
