//! Mock repositories for testing

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use gatehouse_db::{AccountRepository, AccountRow, CreateAccount, DbError, DbResult};
use std::sync::Arc;
use uuid::Uuid;

/// In-memory account repository for testing
#[derive(Default, Clone)]
pub struct MockAccountRepository {
    accounts: Arc<DashMap<Uuid, AccountRow>>,
    by_email: Arc<DashMap<String, Uuid>>,
}

impl MockAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<AccountRow>> {
        Ok(self.accounts.get(&id).map(|r| r.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> DbResult<Option<AccountRow>> {
        Ok(self
            .by_email
            .get(email)
            .and_then(|id| self.accounts.get(id.value()).map(|r| r.value().clone())))
    }

    async fn create(&self, account: CreateAccount) -> DbResult<AccountRow> {
        // Same behavior as the unique index on accounts.email
        if self.by_email.contains_key(&account.email) {
            return Err(DbError::UniqueViolation);
        }

        let row = AccountRow {
            id: account.id,
            email: account.email.clone(),
            password_hash: account.password_hash,
            subscription: "starter".to_string(),
            session_token: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.by_email.insert(account.email, account.id);
        self.accounts.insert(account.id, row.clone());
        Ok(row)
    }

    async fn set_session_token(&self, id: Uuid, token: Option<&str>) -> DbResult<()> {
        if let Some(mut row) = self.accounts.get_mut(&id) {
            row.session_token = token.map(String::from);
            row.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn update_subscription(
        &self,
        id: Uuid,
        subscription: &str,
    ) -> DbResult<Option<AccountRow>> {
        match self.accounts.get_mut(&id) {
            Some(mut row) => {
                row.subscription = subscription.to_string();
                row.updated_at = Utc::now();
                Ok(Some(row.value().clone()))
            }
            None => Ok(None),
        }
    }
}
