use healthdesk_config::{CorsConfig, JwtConfig};
use sqlx::PgPool;

/// Shared, cheaply cloneable request state.
///
/// The pool is the only shared resource; every service receives it by
/// reference from here instead of reaching for a global connection.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    /// Builds state around an existing pool, reading the rest from the environment.
    pub fn from_env(db: PgPool) -> Self {
        Self {
            db,
            jwt_config: JwtConfig::from_env(),
            cors_config: CorsConfig::from_env(),
        }
    }
}
