//! # Healthdesk Cache
//!
//! HTTP-level cache validation. There is no server-side cache: a response is
//! fingerprinted from its content, so any change to the underlying record
//! yields a new entity tag and previously issued tags stop matching.
//!
//! - [`control`]: `Cache-Control` header construction
//! - [`etag`]: content fingerprints and `If-None-Match` comparison
//!
//! # Example
//!
//! ```ignore
//! use healthdesk_cache::{CachePolicy, fingerprint, if_none_match_matches};
//!
//! let etag = fingerprint(&profile)?;
//! if if_none_match_matches(request_header, &etag) {
//!     return StatusCode::NOT_MODIFIED.into_response();
//! }
//! let cache_control = CachePolicy::Private { max_age: 3600 }.header_value();
//! ```

pub mod control;
pub mod etag;

pub use control::CachePolicy;
pub use etag::{etags_match, fingerprint, generate_etag, if_none_match_matches};
