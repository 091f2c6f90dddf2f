//! Bearer token signing and verification

use chrono::Utc;
use gatehouse_types::AccountId;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::{AccountError, AuthConfig};

/// Claims carried by an issued bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (account id)
    pub sub: String,
    /// Token id, unique per mint
    pub jti: String,
    /// Issued at timestamp (seconds)
    pub iat: i64,
    /// Expiration timestamp (seconds)
    pub exp: i64,
}

impl TokenClaims {
    /// Create claims for an account with the given lifetime
    pub fn new(account_id: AccountId, ttl: Duration) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: account_id.to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: now,
            exp: now + ttl.as_secs() as i64,
        }
    }

    /// Check if the token is expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Parse the subject into an account id
    pub fn account_id(&self) -> Result<AccountId, AccountError> {
        AccountId::parse(&self.sub).map_err(|_| AccountError::NotAuthorized)
    }
}

/// Token codec: signs account ids into bearer tokens and verifies them
///
/// Tokens are HS256 JWTs with a fixed lifetime. Verification fails on
/// malformed input, signature mismatch, or expiry; callers see a single
/// undifferentiated error for all three.
#[derive(Clone)]
pub struct JwtCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl: Duration,
}

impl JwtCodec {
    /// Create a codec from config
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.token_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.token_secret.as_bytes()),
            token_ttl: config.token_ttl,
        }
    }

    /// Sign a fresh token for the account
    ///
    /// The random `jti` makes every minted token distinct, so a later
    /// login observably replaces the stored session token.
    pub fn sign(&self, account_id: AccountId) -> Result<String, AccountError> {
        let claims = TokenClaims::new(account_id, self.token_ttl);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("token signing failed: {}", e);
            AccountError::Internal(e.to_string())
        })
    }

    /// Verify a token's signature and expiry and return its claims
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AccountError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("token rejected: {}", e);
                AccountError::NotAuthorized
            })
    }
}

impl std::fmt::Debug for JwtCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtCodec")
            .field("token_ttl", &self.token_ttl)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn codec() -> JwtCodec {
        JwtCodec::new(&AuthConfig::new(SECRET))
    }

    #[test]
    fn test_sign_verify_roundtrip() {
        let codec = codec();
        let account_id = AccountId::new();

        let token = codec.sign(account_id).unwrap();
        let claims = codec.verify(&token).unwrap();

        assert_eq!(claims.account_id().unwrap(), account_id);
        assert_eq!(claims.exp - claims.iat, 23 * 60 * 60);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_every_mint_is_distinct() {
        let codec = codec();
        let account_id = AccountId::new();

        let first = codec.sign(account_id).unwrap();
        let second = codec.sign(account_id).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let codec = codec();
        let mut token = codec.sign(AccountId::new()).unwrap();

        let last = token.pop().unwrap();
        token.push(if last == 'a' { 'b' } else { 'a' });

        assert!(matches!(
            codec.verify(&token),
            Err(AccountError::NotAuthorized)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let signer = codec();
        let verifier = JwtCodec::new(&AuthConfig::new("another-secret-another-secret-00"));

        let token = signer.sign(AccountId::new()).unwrap();

        assert!(matches!(
            verifier.verify(&token),
            Err(AccountError::NotAuthorized)
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let codec = codec();
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: AccountId::new().to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(claims.is_expired());
        assert!(matches!(
            codec.verify(&token),
            Err(AccountError::NotAuthorized)
        ));
    }

    #[test]
    fn test_malformed_token_rejected() {
        let codec = codec();

        for garbage in ["", "not.a.jwt", "a.b", "x"] {
            assert!(matches!(
                codec.verify(garbage),
                Err(AccountError::NotAuthorized)
            ));
        }
    }

    #[test]
    fn test_subject_must_be_account_id() {
        let claims = TokenClaims {
            sub: "not-a-uuid".to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: Utc::now().timestamp(),
            exp: Utc::now().timestamp() + 3600,
        };

        assert!(matches!(
            claims.account_id(),
            Err(AccountError::NotAuthorized)
        ));
    }
}
