use anyhow::Context;
use healthdesk_auth::create_token;
use healthdesk_config::JwtConfig;
use healthdesk_core::{AppError, hash_password, verify_password};
use healthdesk_models::{LoginRequest, LoginResponse, RegisterRequest, User, UserCredentials, UserRole};
use sqlx::PgPool;
use tracing::instrument;

use crate::metrics::{track_login_failure, track_login_success, track_user_registered};

pub struct AuthService;

impl AuthService {
    /// Creates a `patient` account. The caller must log in afterwards.
    ///
    /// Username uniqueness is left to the store's constraint so that two
    /// concurrent registrations cannot both succeed.
    #[instrument(skip(db, dto), fields(username = %dto.username))]
    pub async fn register_user(db: &PgPool, dto: RegisterRequest) -> Result<User, AppError> {
        if dto.username.is_empty() || dto.password.is_empty() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Username and password are required."
            )));
        }

        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password, role)
             VALUES ($1, $2, $3)
             RETURNING id, username, role, created_at",
        )
        .bind(&dto.username)
        .bind(&hashed_password)
        .bind(UserRole::Patient)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::conflict(anyhow::anyhow!(
                        "Conflict: This username is already taken."
                    ));
                }
            }
            AppError::internal(anyhow::Error::from(e).context("Error registering user."))
        })?;

        track_user_registered();
        tracing::info!(user_id = user.id, "User registered");

        Ok(user)
    }

    /// Authenticates credentials and issues a 24 hour session token.
    ///
    /// `dto.role` names the portal being signed in to. Asking for the admin
    /// portal with a non-admin account is forbidden even with a correct
    /// password; the token always carries the role stored on the account.
    #[instrument(skip(db, dto, jwt_config), fields(username = %dto.username, portal = %dto.role))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        if dto.username.is_empty() || dto.password.is_empty() || dto.role.is_empty() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Username, password, and role are required."
            )));
        }

        let intended_role: UserRole = dto.role.parse().map_err(|_| {
            AppError::bad_request(anyhow::anyhow!(
                "Role must be either 'patient' or 'admin'."
            ))
        })?;

        let user = sqlx::query_as::<_, UserCredentials>(
            "SELECT id, username, password, role FROM users WHERE username = $1",
        )
        .bind(&dto.username)
        .fetch_optional(db)
        .await
        .context("Database error during login.")?
        .ok_or_else(|| {
            track_login_failure("not_found");
            AppError::not_found(anyhow::anyhow!("User not found."))
        })?;

        if !verify_password(&dto.password, &user.password)? {
            track_login_failure("invalid_credentials");
            return Err(AppError::unauthorized("Unauthorized: Invalid credentials."));
        }

        if intended_role.is_admin() && !user.role.is_admin() {
            track_login_failure("role_mismatch");
            return Err(AppError::forbidden(
                "Forbidden: You do not have administrator privileges.",
            ));
        }

        let token = create_token(user.id, user.role, jwt_config)?;

        track_login_success(user.role.as_str());
        tracing::info!(user_id = user.id, role = %user.role, "Login succeeded");

        Ok(LoginResponse { auth: true, token })
    }
}
