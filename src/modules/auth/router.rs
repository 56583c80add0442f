use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{login_user, register_user, verify_session};

/// Public credential endpoints, mounted at the root.
pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_user))
        .route("/login", post(login_user))
}

/// Token check endpoint, mounted under `/api` behind `require_auth`.
pub fn init_session_router() -> Router<AppState> {
    Router::new().route("/verify", get(verify_session))
}
