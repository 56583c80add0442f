//! # Healthdesk CLI
//!
//! Administrative operations that have no HTTP endpoint.
//!
//! ```ignore
//! use healthdesk_cli::create_admin;
//!
//! let outcome = create_admin(&pool, "root", "s3cret").await?;
//! ```

use anyhow::{Context, bail};
use healthdesk_core::hash_password;
use healthdesk_models::UserRole;
use sqlx::PgPool;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminOutcome {
    Created { user_id: i64 },
    /// The username already existed and now has the admin role. Its password is unchanged.
    Promoted { user_id: i64 },
}

/// Inserts an administrator, or promotes the existing account with that username.
pub async fn create_admin(db: &PgPool, username: &str, password: &str) -> anyhow::Result<AdminOutcome> {
    if username.is_empty() || password.is_empty() {
        bail!("Username and password are required.");
    }

    let hashed_password =
        hash_password(password).map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e.error))?;

    // xmax is 0 only for a freshly inserted row.
    let (user_id, inserted) = sqlx::query_as::<_, (i64, bool)>(
        "INSERT INTO users (username, password, role)
         VALUES ($1, $2, $3)
         ON CONFLICT (username) DO UPDATE SET role = EXCLUDED.role
         RETURNING id, (xmax = 0) AS inserted",
    )
    .bind(username)
    .bind(&hashed_password)
    .bind(UserRole::Admin)
    .fetch_one(db)
    .await
    .context("Failed to save administrator")?;

    Ok(if inserted {
        AdminOutcome::Created { user_id }
    } else {
        AdminOutcome::Promoted { user_id }
    })
}
