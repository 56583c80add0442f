//! Patient records and the envelopes they travel in.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::links::{AdminPatientLinks, CollectionLinks, Link, ProfileLinks, ADMIN_PATIENTS_PATH};

/// A row of the `patients` table. One per user, keyed by `user_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Patient {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub age: i32,
    pub gender: Option<String>,
    pub medical_history: Option<String>,
}

/// A patient record as seen by its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PatientProfile {
    #[serde(flatten)]
    pub patient: Patient,
    #[serde(rename = "_links")]
    pub links: ProfileLinks,
}

impl From<Patient> for PatientProfile {
    fn from(patient: Patient) -> Self {
        Self {
            patient,
            links: ProfileLinks::new(),
        }
    }
}

/// Body of `GET`/`PUT /api/my-profile`. `data` is `null` until the first upsert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub data: Option<PatientProfile>,
}

/// Body of `PUT /api/my-profile`.
///
/// `name` and `age` are optional at the type level so that a missing value
/// is reported as a validation failure rather than a parse failure.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpsertProfileDto {
    #[serde(default)]
    #[validate(
        required(message = "Name and age are required fields."),
        length(min = 1, message = "Name and age are required fields.")
    )]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::de::deserialize_optional_i32")]
    #[validate(
        required(message = "Name and age are required fields."),
        range(min = 1, message = "Name and age are required fields.")
    )]
    pub age: Option<i32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub medical_history: Option<String>,
}

/// A patient row joined with its owner's username, as listed for admins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AdminPatient {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub gender: Option<String>,
    pub medical_history: Option<String>,
    pub owner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AdminPatientEntry {
    #[serde(flatten)]
    pub patient: AdminPatient,
    #[serde(rename = "_links")]
    pub links: AdminPatientLinks,
}

impl From<AdminPatient> for AdminPatientEntry {
    fn from(patient: AdminPatient) -> Self {
        let links = AdminPatientLinks::for_patient(patient.id);
        Self { patient, links }
    }
}

/// Body of `GET /api/admin/patients`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AdminPatientsResponse {
    pub data: Vec<AdminPatientEntry>,
    #[serde(rename = "_links")]
    pub links: CollectionLinks,
}

impl AdminPatientsResponse {
    pub fn new(patients: Vec<AdminPatient>) -> Self {
        Self {
            data: patients.into_iter().map(AdminPatientEntry::from).collect(),
            links: CollectionLinks {
                self_link: Link::with_method(ADMIN_PATIENTS_PATH, "GET"),
            },
        }
    }
}
