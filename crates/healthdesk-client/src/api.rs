//! Typed access to the Healthdesk HTTP API.

use healthdesk_models::{
    AdminPatientsResponse, LoginResponse, MessageResponse, ProfileResponse, UpsertProfileDto,
    UserRole,
};
use reqwest::{Client, RequestBuilder, Response, StatusCode, header};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::{ClientError, ClientResult};

/// Calls the session controller depends on.
#[trait_variant::make(SessionApi: Send)]
pub trait LocalSessionApi {
    async fn register(&self, username: &str, password: &str) -> ClientResult<MessageResponse>;

    async fn login(
        &self,
        username: &str,
        password: &str,
        portal: UserRole,
    ) -> ClientResult<LoginResponse>;

    /// Succeeds only if the server still accepts `token`.
    async fn verify(&self, token: &str) -> ClientResult<()>;
}

/// Result of a conditional profile fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileFetch {
    NotModified,
    Fresh {
        etag: Option<String>,
        body: ProfileResponse,
    },
}

/// Extracts `error.message` from an error body, if it has one.
pub(crate) fn error_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

async fn ensure_success(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() || status == StatusCode::NOT_MODIFIED {
        return Ok(response);
    }

    let body = response.bytes().await?;
    let message = error_message(&body);
    tracing::debug!(status = status.as_u16(), ?message, "API request failed");

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authed(&self, builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.bearer_auth(token)
    }

    /// Fetches the caller's profile, sending `etag` as `If-None-Match`.
    pub async fn get_profile(&self, token: &str, etag: Option<&str>) -> ClientResult<ProfileFetch> {
        let mut request = self.authed(self.http.get(self.url("/api/my-profile")), token);
        if let Some(etag) = etag {
            request = request.header(header::IF_NONE_MATCH, etag);
        }

        let response = ensure_success(request.send().await?).await?;
        if response.status() == StatusCode::NOT_MODIFIED {
            return Ok(ProfileFetch::NotModified);
        }

        let etag = response
            .headers()
            .get(header::ETAG)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = read_json(response).await?;

        Ok(ProfileFetch::Fresh { etag, body })
    }

    pub async fn update_profile(
        &self,
        token: &str,
        profile: &UpsertProfileDto,
    ) -> ClientResult<ProfileResponse> {
        let request = self.authed(self.http.put(self.url("/api/my-profile")), token);
        let response = ensure_success(request.json(profile).send().await?).await?;
        read_json(response).await
    }

    pub async fn list_patients(&self, token: &str) -> ClientResult<AdminPatientsResponse> {
        let request = self.authed(self.http.get(self.url("/api/admin/patients")), token);
        let response = ensure_success(request.send().await?).await?;
        read_json(response).await
    }

    pub async fn delete_patient(&self, token: &str, patient_id: i64) -> ClientResult<()> {
        let path = format!("/api/admin/patients/{}", patient_id);
        let request = self.authed(self.http.delete(self.url(&path)), token);
        ensure_success(request.send().await?).await?;
        Ok(())
    }
}

impl SessionApi for ApiClient {
    async fn register(&self, username: &str, password: &str) -> ClientResult<MessageResponse> {
        let body = json!({ "username": username, "password": password });
        let response =
            ensure_success(self.http.post(self.url("/register")).json(&body).send().await?).await?;
        read_json(response).await
    }

    async fn login(
        &self,
        username: &str,
        password: &str,
        portal: UserRole,
    ) -> ClientResult<LoginResponse> {
        let body = json!({ "username": username, "password": password, "role": portal.as_str() });
        let response =
            ensure_success(self.http.post(self.url("/login")).json(&body).send().await?).await?;
        read_json(response).await
    }

    async fn verify(&self, token: &str) -> ClientResult<()> {
        let request = self.authed(self.http.get(self.url("/api/verify")), token);
        ensure_success(request.send().await?).await?;
        Ok(())
    }
}
