//! Hypermedia `_links` attached to patient resources.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const PROFILE_PATH: &str = "/api/my-profile";
pub const ADMIN_PATIENTS_PATH: &str = "/api/admin/patients";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Link {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            method: None,
        }
    }

    pub fn with_method(href: impl Into<String>, method: &str) -> Self {
        Self {
            href: href.into(),
            method: Some(method.to_string()),
        }
    }
}

/// Links on the caller's own profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
    pub update: Link,
}

impl ProfileLinks {
    pub fn new() -> Self {
        Self {
            self_link: Link::with_method(PROFILE_PATH, "GET"),
            update: Link::with_method(PROFILE_PATH, "PUT"),
        }
    }
}

impl Default for ProfileLinks {
    fn default() -> Self {
        Self::new()
    }
}

/// Links on one entry of the admin roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AdminPatientLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
    pub delete: Link,
}

impl AdminPatientLinks {
    pub fn for_patient(patient_id: i64) -> Self {
        let href = format!("{}/{}", ADMIN_PATIENTS_PATH, patient_id);
        Self {
            self_link: Link::new(href.clone()),
            delete: Link::with_method(href, "DELETE"),
        }
    }
}

/// Top-level links on a collection response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CollectionLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
}
