use anyhow::Context;
use healthdesk_core::AppError;
use healthdesk_models::AdminPatient;
use sqlx::PgPool;
use tracing::instrument;

use crate::metrics::track_patient_deleted;

pub struct AdminService;

impl AdminService {
    /// Every patient record with its owner's username, newest first.
    #[instrument(skip(db))]
    pub async fn list_all_patients(db: &PgPool) -> Result<Vec<AdminPatient>, AppError> {
        let patients = sqlx::query_as::<_, AdminPatient>(
            "SELECT p.id, p.name, p.age, p.gender, p.medical_history, u.username AS owner
             FROM patients p
             JOIN users u ON u.id = p.user_id
             ORDER BY p.id DESC",
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch patients")?;

        Ok(patients)
    }

    #[instrument(skip(db))]
    pub async fn delete_patient(db: &PgPool, patient_id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM patients WHERE id = $1")
            .bind(patient_id)
            .execute(db)
            .await
            .context("Failed to delete patient")?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Patient record not found."
            )));
        }

        track_patient_deleted();
        tracing::info!(patient_id, "Patient record deleted");

        Ok(())
    }
}
