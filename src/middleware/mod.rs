//! Request middleware for authentication and authorization.
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. [`auth::require_auth`] verifies the token and stores its [`Claims`] in
//!    the request extensions (401 when no bearer token, 403 when invalid)
//! 3. [`role::admin_only`] rejects non-admin claims on admin routes
//! 4. Handlers read the claims through the [`auth::AuthUser`] extractor
//!
//! [`Claims`]: healthdesk_auth::Claims

pub mod auth;
pub mod role;
