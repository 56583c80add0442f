//! # Healthdesk Auth
//!
//! Session token claims and JWT utilities.
//!
//! - [`claims`]: the [`Claims`] embedded in every session token
//! - [`jwt`]: token issuance, verification, and unverified decoding
//!
//! Tokens are HS256-signed, carry the user id and role, and expire after
//! [`JwtConfig::token_expiry`](healthdesk_config::JwtConfig) seconds.
//!
//! # Example
//!
//! ```ignore
//! use healthdesk_auth::{create_token, verify_token};
//! use healthdesk_config::JwtConfig;
//! use healthdesk_models::UserRole;
//!
//! let config = JwtConfig::from_env();
//! let token = create_token(42, UserRole::Patient, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.user_id()?, 42);
//! ```

pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::{create_token, create_token_issued_at, decode_unverified, verify_token};
