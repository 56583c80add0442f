//! `Cache-Control` policies.

use std::fmt;

use axum::http::HeaderValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Only the requesting browser may keep the response. Used for per-user data.
    Private { max_age: u64 },
    Public { max_age: u64 },
    NoStore,
}

impl CachePolicy {
    pub fn header_value(self) -> HeaderValue {
        HeaderValue::try_from(self.to_string())
            .unwrap_or_else(|_| HeaderValue::from_static("no-store"))
    }
}

impl fmt::Display for CachePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CachePolicy::Private { max_age } => write!(f, "private, max-age={}", max_age),
            CachePolicy::Public { max_age } => write!(f, "public, max-age={}", max_age),
            CachePolicy::NoStore => f.write_str("no-store"),
        }
    }
}
