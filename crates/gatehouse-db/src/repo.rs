//! Repository traits
//!
//! Define async repository interfaces for database operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::AccountRow;

/// Account repository trait
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by ID
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<AccountRow>>;

    /// Find an account by email
    async fn find_by_email(&self, email: &str) -> DbResult<Option<AccountRow>>;

    /// Create a new account (the store enforces email uniqueness)
    async fn create(&self, account: CreateAccount) -> DbResult<AccountRow>;

    /// Replace the stored session token; `None` clears it
    async fn set_session_token(&self, id: Uuid, token: Option<&str>) -> DbResult<()>;

    /// Update the subscription plan and return the updated row
    async fn update_subscription(
        &self,
        id: Uuid,
        subscription: &str,
    ) -> DbResult<Option<AccountRow>>;
}

/// Create account input
///
/// New accounts start on the starter plan with no session token.
#[derive(Debug, Clone)]
pub struct CreateAccount {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
}
