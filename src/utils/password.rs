use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::{AppError, AppResult};

fn hasher_error(error: argon2::password_hash::Error) -> AppError {
    AppError::Internal {
        source: anyhow::anyhow!("password hasher failed: {error}"),
    }
}

/// Hash a password using Argon2id with a freshly generated salt.
///
/// # Arguments
/// * `password` - The plain text password to hash
///
/// # Returns
/// * `AppResult<String>` - The PHC-formatted digest or an error
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(hasher_error)?
        .to_string();

    Ok(password_hash)
}

/// Verify a password against a stored digest.
///
/// The comparison runs inside the argon2 library and is constant-time.
///
/// # Arguments
/// * `password` - The plain text password to verify
/// * `password_hash` - The PHC-formatted digest to verify against
///
/// # Returns
/// * `AppResult<bool>` - True if the password matches, false otherwise
pub fn verify_password(password: &str, password_hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(password_hash).map_err(hasher_error)?;
    let argon2 = Argon2::default();

    match argon2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(error) => Err(hasher_error(error)),
    }
}
