//! Account handlers (signup, login, logout, current, subscription)

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use gatehouse_auth_core::{AccountError, AccountProfile};
use gatehouse_types::Subscription;

use crate::error::ApiResult;
use crate::extractors::CurrentAccount;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Shared body for signup and login
///
/// Fields default to empty so that missing keys reach the shape validator
/// instead of the JSON deserializer.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub user: AccountProfile,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AccountProfile,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSubscriptionRequest {
    #[serde(default)]
    pub subscription: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/users/signup
///
/// Register a new account
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> ApiResult<impl IntoResponse> {
    let user = state.accounts.register(&req.email, &req.password).await?;

    tracing::info!(email = %user.email, "Account registered");

    Ok((StatusCode::CREATED, Json(SignupResponse { user })))
}

/// POST /api/users/login
///
/// Authenticate and establish a session
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let session = state
        .accounts
        .authenticate(&req.email, &req.password)
        .await?;

    Ok(Json(LoginResponse {
        token: session.token,
        user: session.profile,
    }))
}

/// GET /api/users/logout
///
/// End the current session
pub async fn logout(
    State(state): State<AppState>,
    CurrentAccount(account): CurrentAccount,
) -> ApiResult<StatusCode> {
    state.accounts.end_session(account.account_id()).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/users/current
///
/// Return the authenticated account's profile
pub async fn current(CurrentAccount(account): CurrentAccount) -> Json<AccountProfile> {
    Json(AccountProfile::from_row(&account))
}

/// PATCH /api/users/
///
/// Change the authenticated account's subscription plan
pub async fn update_subscription(
    State(state): State<AppState>,
    CurrentAccount(account): CurrentAccount,
    Json(req): Json<UpdateSubscriptionRequest>,
) -> ApiResult<Json<AccountProfile>> {
    let subscription: Subscription = req
        .subscription
        .parse()
        .map_err(|e: gatehouse_types::SubscriptionParseError| {
            AccountError::Validation(e.to_string())
        })?;

    let user = state
        .accounts
        .update_subscription(account.account_id(), subscription)
        .await?;

    tracing::info!(email = %user.email, subscription = %subscription, "Subscription updated");

    Ok(Json(user))
}
