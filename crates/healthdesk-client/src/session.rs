//! Client session state machine.
//!
//! ```text
//! Verifying ──verify ok──▶ LoggedIn(role)
//!     │                        │  ▲
//!     └─no token / rejected─▶ LoggedOut ──login ok──┘
//!                              ▲
//!                  logout ─────┘
//! ```
//!
//! The role used to pick a view is read from the token without checking its
//! signature. It only decides what to render; every request is still
//! authorized by the server.

use healthdesk_auth::decode_unverified;
use healthdesk_models::UserRole;

use crate::api::SessionApi;
use crate::error::{ClientError, ClientResult};
use crate::store::TokenStore;

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check credentials.";
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Verifying,
    LoggedOut,
    LoggedIn(UserRole),
}

/// Screen shown to a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    AdminRoster,
    PatientProfile,
}

impl View {
    pub fn for_role(role: UserRole) -> Self {
        match role {
            UserRole::Admin => View::AdminRoster,
            UserRole::Patient => View::PatientProfile,
        }
    }
}

fn role_of(token: &str) -> ClientResult<UserRole> {
    decode_unverified(token)
        .map(|claims| claims.role)
        .map_err(|e| ClientError::Decode(format!("Unreadable session token: {}", e)))
}

pub struct SessionController<A, S> {
    api: A,
    store: S,
    state: SessionState,
    token: Option<String>,
}

impl<A, S> SessionController<A, S>
where
    A: SessionApi,
    S: TokenStore,
{
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            state: SessionState::Verifying,
            token: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Bearer token for authenticated calls while logged in.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn view(&self) -> Option<View> {
        match self.state {
            SessionState::LoggedIn(role) => Some(View::for_role(role)),
            _ => None,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Resolves the initial state from a previously stored token.
    pub async fn start(&mut self) -> ClientResult<SessionState> {
        self.state = SessionState::Verifying;

        let Some(token) = self.store.load()? else {
            self.state = SessionState::LoggedOut;
            return Ok(self.state);
        };

        let verified = match self.api.verify(&token).await {
            Ok(()) => role_of(&token),
            Err(err) => Err(err),
        };

        match verified {
            Ok(role) => {
                tracing::debug!(%role, "Stored session accepted");
                self.token = Some(token);
                self.state = SessionState::LoggedIn(role);
            }
            Err(err) => {
                tracing::debug!(error = %err, "Stored session rejected");
                self.logout()?;
            }
        }

        Ok(self.state)
    }

    /// Logs in to the given portal and stores the new token.
    ///
    /// On failure the state is unchanged; render the error with
    /// [`ClientError::user_message`] and [`LOGIN_FAILED_MESSAGE`].
    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
        portal: UserRole,
    ) -> ClientResult<UserRole> {
        let response = self.api.login(username, password, portal).await?;
        let role = role_of(&response.token)?;

        self.store.save(&response.token)?;
        self.token = Some(response.token);
        self.state = SessionState::LoggedIn(role);

        Ok(role)
    }

    /// Creates an account. The session stays logged out.
    pub async fn register(&mut self, username: &str, password: &str) -> ClientResult<String> {
        let response = self.api.register(username, password).await?;
        Ok(response.message)
    }

    pub fn logout(&mut self) -> ClientResult<()> {
        self.token = None;
        self.state = SessionState::LoggedOut;
        self.store.clear()
    }
}
