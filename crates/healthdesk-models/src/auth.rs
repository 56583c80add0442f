//! Register/login payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body of `POST /register`.
///
/// Missing fields deserialize to empty strings so that absent and empty
/// values are rejected with the same message.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Username and password are required."))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Username and password are required."))]
    pub password: String,
}

/// Body of `POST /login`. `role` is the portal the user is signing in to
/// (`patient` or `admin`), not necessarily the role stored on the account.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Username, password, and role are required."))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Username, password, and role are required."))]
    pub password: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Username, password, and role are required."))]
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub auth: bool,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_missing_fields_fail_validation() {
        let dto: RegisterRequest = serde_json::from_str(r#"{"username":"alice"}"#).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_login_requires_role() {
        let dto: LoginRequest =
            serde_json::from_str(r#"{"username":"alice","password":"pw1"}"#).unwrap();
        assert!(dto.validate().is_err());

        let dto: LoginRequest =
            serde_json::from_str(r#"{"username":"alice","password":"pw1","role":"patient"}"#)
                .unwrap();
        assert!(dto.validate().is_ok());
    }
}
