use crate::state::AppState;
use axum::{Router, routing::get};

use super::controller::{get_my_profile, upsert_my_profile};

pub fn init_profile_router() -> Router<AppState> {
    Router::new().route("/my-profile", get(get_my_profile).put(upsert_my_profile))
}
