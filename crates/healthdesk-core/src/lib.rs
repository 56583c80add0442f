//! # Healthdesk Core
//!
//! Foundational types shared by every Healthdesk crate:
//!
//! - [`errors`]: the [`AppError`] taxonomy and its JSON rendering
//! - [`password`]: bcrypt hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use healthdesk_core::{AppError, hash_password, verify_password};
//!
//! let hash = hash_password("pw1")?;
//! if !verify_password("pw1", &hash)? {
//!     return Err(AppError::unauthorized("Unauthorized: Invalid credentials."));
//! }
//! ```

pub mod errors;
pub mod password;

pub use errors::{AppError, ErrorBody, ErrorResponse};
pub use password::{PASSWORD_HASH_COST, hash_password, verify_password};
