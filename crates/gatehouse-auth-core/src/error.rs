//! Account errors

use gatehouse_db::DbError;
use thiserror::Error;

/// Errors produced by account operations
///
/// Display strings are the user-facing messages. `WrongCredentials` and
/// `NotAuthorized` deliberately carry no detail: login failures never say
/// which half of the credentials was wrong, and the session guard never
/// says whether a token was malformed, expired, or unbound.
#[derive(Error, Debug)]
pub enum AccountError {
    /// Malformed or missing input, user-fixable
    #[error("{0}")]
    Validation(String),

    /// An account with this email already exists
    #[error("Email in use")]
    EmailInUse,

    /// Login credentials rejected
    #[error("Email or password is wrong")]
    WrongCredentials,

    /// Missing, invalid, expired, or unbound bearer token
    #[error("Not authorized")]
    NotAuthorized,

    /// Unexpected collaborator failure
    #[error("{0}")]
    Internal(String),
}

impl AccountError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::WrongCredentials | Self::NotAuthorized => 401,
            Self::EmailInUse => 409,
            Self::Internal(_) => 500,
        }
    }
}

impl From<DbError> for AccountError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::UniqueViolation => Self::EmailInUse,
            other => {
                tracing::error!("database error: {}", other);
                Self::Internal(other.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AccountError::Validation("bad".into()).status_code(), 400);
        assert_eq!(AccountError::WrongCredentials.status_code(), 401);
        assert_eq!(AccountError::NotAuthorized.status_code(), 401);
        assert_eq!(AccountError::EmailInUse.status_code(), 409);
        assert_eq!(AccountError::Internal("boom".into()).status_code(), 500);
    }

    #[test]
    fn test_messages_match_wire_contract() {
        assert_eq!(AccountError::EmailInUse.to_string(), "Email in use");
        assert_eq!(
            AccountError::WrongCredentials.to_string(),
            "Email or password is wrong"
        );
        assert_eq!(AccountError::NotAuthorized.to_string(), "Not authorized");
    }

    #[test]
    fn test_unique_violation_maps_to_conflict() {
        let err: AccountError = DbError::UniqueViolation.into();
        assert!(matches!(err, AccountError::EmailInUse));
    }
}
