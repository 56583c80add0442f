use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

use super::controller::{delete_patient, list_patients};

/// Patient administration. Mounted under `/api/admin` behind `admin_only`.
pub fn init_admin_router() -> Router<AppState> {
    Router::new()
        .route("/patients", get(list_patients))
        .route("/patients/{id}", delete(delete_patient))
}
