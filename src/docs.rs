use healthdesk_core::{ErrorBody, ErrorResponse};
use healthdesk_models::{
    AdminPatient, AdminPatientEntry, AdminPatientLinks, AdminPatientsResponse, CollectionLinks,
    Link, LoginRequest, LoginResponse, MessageResponse, Patient, PatientProfile, ProfileLinks,
    ProfileResponse, RegisterRequest, UpsertProfileDto, UserRole,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::verify_session,
        crate::modules::profile::controller::get_my_profile,
        crate::modules::profile::controller::upsert_my_profile,
        crate::modules::admin::controller::list_patients,
        crate::modules::admin::controller::delete_patient,
    ),
    components(
        schemas(
            UserRole,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            MessageResponse,
            Patient,
            PatientProfile,
            ProfileResponse,
            UpsertProfileDto,
            AdminPatient,
            AdminPatientEntry,
            AdminPatientsResponse,
            Link,
            ProfileLinks,
            AdminPatientLinks,
            CollectionLinks,
            ErrorBody,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login and token checks"),
        (name = "Profile", description = "The signed-in user's own patient record"),
        (name = "Admin", description = "Patient administration, administrators only")
    ),
    info(
        title = "Healthdesk API",
        version = "0.1.0",
        description = "Patient records API built with Rust, Axum, and PostgreSQL with JWT-based authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
