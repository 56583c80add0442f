use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use healthdesk_core::{AppError, ErrorResponse};
use healthdesk_models::AdminPatientsResponse;
use tracing::instrument;

use super::service::AdminService;
use crate::state::AppState;

fn parse_patient_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::bad_request(anyhow::anyhow!("Invalid patient id.")))
}

/// List every patient record with its owner
#[utoipa::path(
    get,
    path = "/api/admin/patients",
    responses(
        (status = 200, description = "All patient records, newest first", body = AdminPatientsResponse),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Not an administrator, or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn list_patients(
    State(state): State<AppState>,
) -> Result<Json<AdminPatientsResponse>, AppError> {
    let patients = AdminService::list_all_patients(&state.db).await?;
    Ok(Json(AdminPatientsResponse::new(patients)))
}

/// Delete a patient record
#[utoipa::path(
    delete,
    path = "/api/admin/patients/{id}",
    params(
        ("id" = i64, Path, description = "Patient record id")
    ),
    responses(
        (status = 204, description = "Patient record deleted"),
        (status = 400, description = "Non-numeric id", body = ErrorResponse),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Not an administrator, or invalid token", body = ErrorResponse),
        (status = 404, description = "Patient record not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let patient_id = parse_patient_id(&id)?;
    AdminService::delete_patient(&state.db, patient_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
