//! Password hashing with bcrypt.
//!
//! Hashes use a fixed cost of [`PASSWORD_HASH_COST`] with a random salt per call.

use bcrypt::{hash, verify};

use crate::errors::AppError;

/// bcrypt work factor for stored credentials.
pub const PASSWORD_HASH_COST: u32 = 8;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, PASSWORD_HASH_COST)
        .map_err(|e| AppError::internal_error(format!("Failed to hash password: {}", e)))
}

/// Returns `Ok(false)` on mismatch and an error only when `hash` is not a bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal_error(format!("Failed to verify password: {}", e)))
}
