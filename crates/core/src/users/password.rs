//! One-way password hashing with Argon2.

use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    },
    Argon2,
};
use rand::rngs::OsRng;

use crate::errors::{AuthError, Result};

/// Hashes a password into a salted PHC string.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::PasswordHash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Checks a candidate password against a stored PHC string.
pub fn verify_password(candidate: &str, stored_hash: &str) -> Result<()> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| AuthError::PasswordHash(format!("Invalid stored password hash: {e}")))?;
    Argon2::default()
        .verify_password(candidate.as_bytes(), &parsed)
        .map_err(|err| match err {
            PasswordHashError::Password => AuthError::InvalidCredentials.into(),
            other => {
                AuthError::PasswordHash(format!("Password verification failed: {other}")).into()
            }
        })
}
