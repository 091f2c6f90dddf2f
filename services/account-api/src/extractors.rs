//! Axum extractors for authentication

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::http::header;

use gatehouse_db::AccountRow;

use crate::error::ApiError;
use crate::state::AppState;

/// Account resolved by the session guard, attached to protected requests
///
/// Extraction runs the full guard: Bearer scheme, token verification,
/// account lookup, and session binding. Handlers receiving this value can
/// rely on the account being the one live session holder.
#[derive(Debug, Clone)]
pub struct CurrentAccount(pub AccountRow);

impl<S> FromRequestParts<S> for CurrentAccount
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let authorization = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        let account = app_state.accounts.authorize(authorization).await?;

        Ok(CurrentAccount(account))
    }
}
