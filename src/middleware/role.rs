//! Role gate for administrator routes.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use healthdesk_auth::Claims;
use healthdesk_core::AppError;

pub const ADMIN_ONLY_MESSAGE: &str = "Forbidden: Access is restricted to administrators.";

/// Checks the claims attached to a request against the admin role.
///
/// Only recognised non-admin claims are rejected. A request without claims
/// passes; [`require_auth`](crate::middleware::auth::require_auth) must run
/// first for the gate to mean anything.
pub fn check_admin(claims: Option<&Claims>) -> Result<(), AppError> {
    match claims {
        Some(claims) if !claims.is_admin() => Err(AppError::forbidden(ADMIN_ONLY_MESSAGE)),
        _ => Ok(()),
    }
}

/// Middleware wrapper around [`check_admin`].
///
/// ```rust,ignore
/// Router::new()
///     .nest("/admin", admin_router.route_layer(middleware::from_fn(admin_only)))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));
/// ```
pub async fn admin_only(req: Request, next: Next) -> Response {
    match check_admin(req.extensions().get::<Claims>()) {
        Ok(()) => next.run(req).await,
        Err(err) => err.into_response(),
    }
}
