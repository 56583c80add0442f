use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use healthdesk_cache::CachePolicy;
use healthdesk_core::{AppError, ErrorResponse};
use healthdesk_models::{ProfileResponse, UpsertProfileDto};
use tracing::instrument;

use super::service::{ProfileRead, ProfileService, profile_etag};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Profiles may be cached by the owner's browser for an hour.
const PROFILE_MAX_AGE_SECONDS: u64 = 3600;

fn cache_headers(etag: &str) -> Result<[(header::HeaderName, HeaderValue); 2], AppError> {
    let etag = HeaderValue::from_str(etag)
        .map_err(|e| AppError::internal(anyhow::Error::from(e).context("Invalid ETag value")))?;
    let cache_control = CachePolicy::Private {
        max_age: PROFILE_MAX_AGE_SECONDS,
    }
    .header_value();

    Ok([(header::ETAG, etag), (header::CACHE_CONTROL, cache_control)])
}

/// Get the authenticated user's patient profile
#[utoipa::path(
    get,
    path = "/api/my-profile",
    params(
        ("If-None-Match" = Option<String>, Header, description = "ETag from a previous response")
    ),
    responses(
        (status = 200, description = "Profile, or null data when none exists", body = ProfileResponse),
        (status = 304, description = "Profile unchanged since the given ETag"),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Profile",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, headers))]
pub async fn get_my_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let user_id = auth_user.user_id()?;
    let if_none_match = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok());

    let read = ProfileService::get_own_profile(&state.db, user_id, if_none_match).await?;
    let headers = cache_headers(read.etag())?;

    Ok(match read {
        ProfileRead::Unchanged { .. } => (StatusCode::NOT_MODIFIED, headers).into_response(),
        ProfileRead::Fresh { body, .. } => (StatusCode::OK, headers, Json(body)).into_response(),
    })
}

/// Create or update the authenticated user's patient profile
#[utoipa::path(
    put,
    path = "/api/my-profile",
    request_body = UpsertProfileDto,
    responses(
        (status = 200, description = "Saved profile", body = ProfileResponse),
        (status = 400, description = "Missing name or age", body = ErrorResponse),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Profile",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn upsert_my_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<UpsertProfileDto>,
) -> Result<Response, AppError> {
    let user_id = auth_user.user_id()?;
    let patient = ProfileService::upsert_own_profile(&state.db, user_id, dto).await?;
    let headers = cache_headers(&profile_etag(Some(&patient))?)?;

    let body = ProfileResponse {
        data: Some(patient.into()),
    };

    Ok((StatusCode::OK, headers, Json(body)).into_response())
}
