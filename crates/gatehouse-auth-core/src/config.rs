//! Configuration types for the auth core

use std::time::Duration;

/// Auth configuration
///
/// The signing secret is injected here at construction; nothing in the
/// auth core reads ambient process state.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret for token signing
    pub token_secret: String,
    /// Lifetime of issued bearer tokens
    pub token_ttl: Duration,
}

impl AuthConfig {
    /// Default token lifetime
    pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(23 * 60 * 60);

    /// Create a new auth config with the default token lifetime
    pub fn new(token_secret: impl Into<String>) -> Self {
        Self {
            token_secret: token_secret.into(),
            token_ttl: Self::DEFAULT_TOKEN_TTL,
        }
    }

    /// Set the token lifetime
    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }
}
