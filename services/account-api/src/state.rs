//! Application state

use std::ops::Deref;
use std::sync::Arc;

use gatehouse_auth_core::AccountService;
use gatehouse_db::pg::PgAccountRepository;
use gatehouse_db::DbPool;

/// Type alias for the account service with the concrete repository
pub type AccountServiceImpl = AccountService<PgAccountRepository>;

/// Shared database pool wrapper for health checks
#[derive(Clone)]
pub struct SharedPool(Arc<DbPool>);

impl Deref for SharedPool {
    type Target = DbPool;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Account service for the user-facing operations
    pub accounts: Arc<AccountServiceImpl>,
    /// Database connection pool (shared reference for health checks)
    pub pool: SharedPool,
}

impl AppState {
    /// Create new application state
    pub fn new(accounts: AccountServiceImpl, pool: DbPool) -> Self {
        Self {
            accounts: Arc::new(accounts),
            pool: SharedPool(Arc::new(pool)),
        }
    }
}
