//! JWT creation and verification.
//!
//! Verification is strict: any failure (bad signature, malformed token,
//! expired token) is reported as 403 Forbidden, never as 401. A 401 is reserved
//! for requests that carry no bearer token at all.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use healthdesk_config::JwtConfig;
use healthdesk_core::AppError;
use healthdesk_models::UserRole;

use crate::claims::Claims;

const INVALID_TOKEN_MESSAGE: &str = "Forbidden: Invalid or expired token.";

/// Issues a session token for `user_id` valid for `jwt_config.token_expiry` seconds.
pub fn create_token(
    user_id: i64,
    role: UserRole,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    create_token_issued_at(user_id, role, Utc::now(), jwt_config)
}

/// Issues a session token as if it had been created at `issued_at`.
pub fn create_token_issued_at(
    user_id: i64,
    role: UserRole,
    issued_at: DateTime<Utc>,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let iat = issued_at.timestamp().max(0) as usize;
    let exp = (issued_at.timestamp() + jwt_config.token_expiry).max(0) as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        role,
        exp,
        iat,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies signature and expiry and returns the embedded claims.
///
/// # Errors
///
/// Returns a forbidden error if the token is malformed, signed with another
/// secret, or past its `exp`.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::forbidden(INVALID_TOKEN_MESSAGE))
}

/// Reads the claims of a token without checking its signature or expiry.
///
/// Only for client-side presentation decisions (which view to render). The
/// server never authorizes anything from an unverified decode.
pub fn decode_unverified(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation).map(|data| data.claims)
}
