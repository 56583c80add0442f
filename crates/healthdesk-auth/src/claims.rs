//! Session token claims.

use healthdesk_core::AppError;
use healthdesk_models::UserRole;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Claims carried by a session token.
///
/// The role here is the role stored on the account at login time, not the
/// portal the user asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: String,
    pub role: UserRole,
    /// Expiration timestamp (Unix seconds)
    pub exp: usize,
    /// Issued-at timestamp (Unix seconds)
    pub iat: usize,
}

impl Claims {
    pub fn user_id(&self) -> Result<i64, AppError> {
        self.sub
            .parse::<i64>()
            .map_err(|_| AppError::forbidden("Forbidden: Invalid or expired token."))
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
