use std::env;

/// Session tokens live for 24 hours.
pub const DEFAULT_TOKEN_EXPIRY_SECONDS: i64 = 86_400;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds.
    pub token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET is not set, using the insecure development secret");
            "your-secret-key-change-in-production".to_string()
        });

        Self {
            secret,
            token_expiry: env::var("JWT_EXPIRY_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TOKEN_EXPIRY_SECONDS),
        }
    }
}
