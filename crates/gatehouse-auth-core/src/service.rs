//! Account service - the five account operations and the session guard

use std::sync::Arc;

use gatehouse_db::{AccountRepository, AccountRow, CreateAccount};
use gatehouse_types::{AccountId, Email, Subscription};
use serde::Serialize;

use crate::{
    config::AuthConfig, password::BcryptHasher, token::JwtCodec, AccountError,
};

/// Minimum accepted password length
const MIN_PASSWORD_LENGTH: usize = 8;

/// Outward projection of an account
///
/// The only account data that ever leaves the service: no hash, no id,
/// no token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountProfile {
    pub email: String,
    pub subscription: Subscription,
}

impl AccountProfile {
    /// Project a stored row into its public shape
    pub fn from_row(row: &AccountRow) -> Self {
        Self {
            email: row.email.clone(),
            subscription: row.subscription.parse().unwrap_or_default(),
        }
    }
}

/// A freshly established session: the bearer token plus the profile
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub profile: AccountProfile,
}

/// Account service
///
/// Provides the account operations:
/// - register / authenticate (public)
/// - end_session / update_subscription (for accounts resolved by
///   [`AccountService::authorize`])
pub struct AccountService<R: AccountRepository> {
    repo: Arc<R>,
    hasher: BcryptHasher,
    codec: JwtCodec,
}

impl<R: AccountRepository> AccountService<R> {
    /// Create a new account service
    pub fn new(config: AuthConfig, repo: Arc<R>) -> Self {
        Self {
            codec: JwtCodec::new(&config),
            hasher: BcryptHasher::new(),
            repo,
        }
    }

    /// Override the password hasher (tests use a cheaper work factor)
    pub fn with_hasher(mut self, hasher: BcryptHasher) -> Self {
        self.hasher = hasher;
        self
    }

    /// Register a new account
    ///
    /// The account starts on the starter plan with no active session.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AccountProfile, AccountError> {
        let email = validate_credentials(email, password)?;

        if self.repo.find_by_email(email.as_str()).await?.is_some() {
            return Err(AccountError::EmailInUse);
        }

        let password_hash = self.hasher.hash(password)?;

        // The unique index on email backstops the lookup above; a create
        // that races a duplicate still surfaces as EmailInUse.
        let row = self
            .repo
            .create(CreateAccount {
                id: AccountId::new().0,
                email: email.into_inner(),
                password_hash,
            })
            .await?;

        Ok(AccountProfile::from_row(&row))
    }

    /// Authenticate with email and password, establishing a new session
    ///
    /// Mints a fresh bearer token and stores it on the account, replacing
    /// any previous one: at most one session is live per account. Unknown
    /// email and wrong password share one error so callers cannot probe
    /// which emails are registered.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AccountError> {
        let email = validate_credentials(email, password)?;

        let row = self
            .repo
            .find_by_email(email.as_str())
            .await?
            .ok_or(AccountError::WrongCredentials)?;

        if !self.hasher.verify(password, &row.password_hash)? {
            return Err(AccountError::WrongCredentials);
        }

        let token = self.codec.sign(row.account_id())?;
        self.repo.set_session_token(row.id, Some(&token)).await?;

        Ok(AuthSession {
            token,
            profile: AccountProfile::from_row(&row),
        })
    }

    /// Session guard: resolve an Authorization header to a live account
    ///
    /// The presented token must carry the `Bearer` scheme, verify, and
    /// still be the token stored on the account. A token outlived by a
    /// logout or a newer login is rejected even while cryptographically
    /// valid. Never mutates state.
    pub async fn authorize(
        &self,
        authorization: Option<&str>,
    ) -> Result<AccountRow, AccountError> {
        let header = authorization.ok_or(AccountError::NotAuthorized)?;

        let (scheme, token) = header.split_once(' ').ok_or(AccountError::NotAuthorized)?;
        if scheme != "Bearer" || token.is_empty() {
            return Err(AccountError::NotAuthorized);
        }

        let claims = self.codec.verify(token)?;
        let account_id = claims.account_id()?;

        let row = self
            .repo
            .find_by_id(account_id.0)
            .await?
            .ok_or(AccountError::NotAuthorized)?;

        match row.session_token.as_deref() {
            Some(stored) if stored == token => Ok(row),
            _ => Err(AccountError::NotAuthorized),
        }
    }

    /// End the account's session, clearing the stored token
    ///
    /// A no-op when no session is active.
    pub async fn end_session(&self, account_id: AccountId) -> Result<(), AccountError> {
        self.repo.set_session_token(account_id.0, None).await?;
        Ok(())
    }

    /// Change the account's subscription plan
    pub async fn update_subscription(
        &self,
        account_id: AccountId,
        subscription: Subscription,
    ) -> Result<AccountProfile, AccountError> {
        let row = self
            .repo
            .update_subscription(account_id.0, subscription.as_str())
            .await?
            .ok_or_else(|| {
                AccountError::Internal(format!("account {account_id} missing during update"))
            })?;

        Ok(AccountProfile::from_row(&row))
    }
}

impl<R: AccountRepository> std::fmt::Debug for AccountService<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountService").finish_non_exhaustive()
    }
}

/// Validate the shape of login/registration credentials
///
/// Register and login share this check, including its error messages.
fn validate_credentials(email: &str, password: &str) -> Result<Email, AccountError> {
    let email = Email::parse(email).map_err(|e| AccountError::Validation(e.to_string()))?;

    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AccountError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(email)
}
