//! Argon2id hashing for account passwords.

use argon2::password_hash::{self, rand_core::OsRng, PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};

fn hasher() -> Argon2<'static> {
    Argon2::default()
}

/// PHC string for `password` under a fresh random salt.
pub fn hash_password(password: &str) -> password_hash::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    hasher()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

/// Check `password` against a PHC hash string. A malformed hash is an error,
/// a mismatch is `Ok(false)`.
pub fn verify_password(password: &str, stored: &str) -> password_hash::Result<bool> {
    let parsed = PasswordHash::new(stored)?;
    match hasher().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}
