//! Gatehouse Auth Core - Account business logic
//!
//! Registration, credential verification, bearer-token sessions, and
//! subscription changes over a pluggable account repository.

pub mod config;
pub mod error;
pub mod password;
pub mod service;
pub mod token;

pub use config::AuthConfig;
pub use error::AccountError;
pub use password::BcryptHasher;
pub use service::{AccountProfile, AccountService, AuthSession};
pub use token::{JwtCodec, TokenClaims};
