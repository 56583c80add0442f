//! # Healthdesk Client
//!
//! A typed client for the Healthdesk API and the session controller that
//! drives a front end through logged-out, verifying and logged-in states.
//!
//! - [`api`]: the reqwest-backed [`ApiClient`] and the [`SessionApi`] seam
//! - [`session`]: [`SessionController`], [`SessionState`] and [`View`]
//! - [`store`]: token persistence ([`MemoryTokenStore`], [`FileTokenStore`])
//! - [`error`]: [`ClientError`]
//!
//! # Example
//!
//! ```ignore
//! use healthdesk_client::{ApiClient, FileTokenStore, SessionController, View};
//!
//! let mut session = SessionController::new(
//!     ApiClient::new("http://localhost:5000"),
//!     FileTokenStore::new(".healthdesk/token"),
//! );
//! session.start().await?;
//! if session.view() == Some(View::AdminRoster) {
//!     let token = session.token().unwrap_or_default();
//!     let roster = session.api().list_patients(token).await?;
//! }
//! ```

pub mod api;
pub mod error;
pub mod session;
pub mod store;

pub use api::{ApiClient, LocalSessionApi, ProfileFetch, SessionApi};
pub use error::{ClientError, ClientResult};
pub use session::{
    LOGIN_FAILED_MESSAGE, REGISTRATION_FAILED_MESSAGE, SessionController, SessionState, View,
};
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};
