//! # Healthdesk Models
//!
//! Database entities, request/response DTOs and hypermedia links shared by the
//! API server and the client crate.
//!
//! # Modules
//!
//! - [`roles`]: the [`UserRole`] enum stored in the `user_role` column type
//! - [`users`]: user rows
//! - [`auth`]: register/login payloads
//! - [`patients`]: patient rows, profile upsert payload and response envelopes
//! - [`links`]: `_links` objects attached to patient resources
//! - [`de`]: lenient deserializers for form-submitted values

pub mod auth;
pub mod links;
pub mod patients;
pub mod roles;
pub mod de;
pub mod users;

pub use auth::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
pub use links::{AdminPatientLinks, CollectionLinks, Link, ProfileLinks};
pub use patients::{
    AdminPatient, AdminPatientEntry, AdminPatientsResponse, Patient, PatientProfile,
    ProfileResponse, UpsertProfileDto,
};
pub use roles::UserRole;
pub use users::{User, UserCredentials};
