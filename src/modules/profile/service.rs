use anyhow::Context;
use healthdesk_cache::{fingerprint, if_none_match_matches};
use healthdesk_core::AppError;
use healthdesk_models::{Patient, ProfileResponse, UpsertProfileDto};
use sqlx::PgPool;
use tracing::instrument;

use crate::metrics::track_profile_upserted;

/// Outcome of a conditional profile read.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileRead {
    /// The caller's `If-None-Match` still matches.
    Unchanged { etag: String },
    Fresh { etag: String, body: ProfileResponse },
}

impl ProfileRead {
    pub fn etag(&self) -> &str {
        match self {
            Self::Unchanged { etag } | Self::Fresh { etag, .. } => etag,
        }
    }
}

/// Entity tag for a profile slot, derived from the stored record (or its absence).
pub fn profile_etag(patient: Option<&Patient>) -> Result<String, AppError> {
    fingerprint(&patient)
        .map_err(|e| AppError::internal(anyhow::Error::from(e).context("Failed to fingerprint profile")))
}

pub struct ProfileService;

impl ProfileService {
    #[instrument(skip(db))]
    pub async fn find_by_user_id(db: &PgPool, user_id: i64) -> Result<Option<Patient>, AppError> {
        let patient = sqlx::query_as::<_, Patient>(
            "SELECT id, user_id, name, age, gender, medical_history
             FROM patients
             WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch profile")?;

        Ok(patient)
    }

    /// Reads the caller's profile, short-circuiting when `if_none_match`
    /// names the current fingerprint.
    #[instrument(skip(db))]
    pub async fn get_own_profile(
        db: &PgPool,
        user_id: i64,
        if_none_match: Option<&str>,
    ) -> Result<ProfileRead, AppError> {
        let patient = Self::find_by_user_id(db, user_id).await?;
        let etag = profile_etag(patient.as_ref())?;

        if if_none_match_matches(if_none_match, &etag) {
            tracing::debug!(%etag, "Profile unchanged");
            return Ok(ProfileRead::Unchanged { etag });
        }

        Ok(ProfileRead::Fresh {
            etag,
            body: ProfileResponse {
                data: patient.map(Into::into),
            },
        })
    }

    /// Creates or replaces the caller's profile in a single statement.
    #[instrument(skip(db, dto))]
    pub async fn upsert_own_profile(
        db: &PgPool,
        user_id: i64,
        dto: UpsertProfileDto,
    ) -> Result<Patient, AppError> {
        let name = dto.name.filter(|name| !name.is_empty());
        let (Some(name), Some(age)) = (name, dto.age) else {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Name and age are required fields."
            )));
        };

        let patient = sqlx::query_as::<_, Patient>(
            "INSERT INTO patients (user_id, name, age, gender, medical_history)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (user_id) DO UPDATE SET
                 name = EXCLUDED.name,
                 age = EXCLUDED.age,
                 gender = EXCLUDED.gender,
                 medical_history = EXCLUDED.medical_history,
                 updated_at = NOW()
             RETURNING id, user_id, name, age, gender, medical_history",
        )
        .bind(user_id)
        .bind(&name)
        .bind(age)
        .bind(&dto.gender)
        .bind(&dto.medical_history)
        .fetch_one(db)
        .await
        .context("Failed to save profile")?;

        track_profile_upserted();
        tracing::info!(patient_id = patient.id, "Profile saved");

        Ok(patient)
    }
}
