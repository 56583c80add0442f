use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use healthdesk_auth::{Claims, verify_token};
use healthdesk_core::AppError;

use crate::metrics::track_token_rejected;
use crate::state::AppState;

pub const NO_TOKEN_MESSAGE: &str = "Unauthorized: No token provided.";

/// Returns the bearer token of an `Authorization` header value, if well formed.
pub fn bearer_token(header_value: Option<&str>) -> Option<&str> {
    header_value?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Verifies the bearer token and attaches its claims to the request.
///
/// Missing or malformed header: 401. Invalid, forged or expired token: 403.
pub async fn require_auth(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let Some(token) = bearer_token(header_value) else {
        return AppError::unauthorized(NO_TOKEN_MESSAGE).into_response();
    };

    match verify_token(token, &state.jwt_config) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(err) => {
            track_token_rejected();
            tracing::debug!("Rejected bearer token");
            err.into_response()
        }
    }
}

/// Extractor for the claims attached by [`require_auth`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> Result<i64, AppError> {
        self.0.user_id()
    }

    pub fn claims(&self) -> &Claims {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| AppError::unauthorized(NO_TOKEN_MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthdesk_models::UserRole;

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token(Some("Bearer abc.def.ghi")), Some("abc.def.ghi"));
        assert_eq!(bearer_token(None), None);
        assert_eq!(bearer_token(Some("Basic dXNlcjpwdw==")), None);
        assert_eq!(bearer_token(Some("bearer abc")), None);
        assert_eq!(bearer_token(Some("Bearer ")), None);
    }

    #[tokio::test]
    async fn test_auth_user_reads_extensions() {
        let claims = Claims {
            sub: "3".to_string(),
            role: UserRole::Patient,
            exp: 9999999999,
            iat: 1234567890,
        };
        let (mut parts, _) = axum::http::Request::new(()).into_parts();
        parts.extensions.insert(claims.clone());

        let user = AuthUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(user.claims(), &claims);
        assert_eq!(user.user_id().unwrap(), 3);
    }

    #[tokio::test]
    async fn test_auth_user_without_claims_is_unauthorized() {
        let (mut parts, _) = axum::http::Request::new(()).into_parts();
        let err = AuthUser::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert_eq!(err.status.as_u16(), 401);
    }
}
