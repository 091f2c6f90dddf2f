//! Gatehouse Account API
//!
//! HTTP service exposing registration, login, and session-scoped account
//! operations.

mod config;
mod error;
mod extractors;
mod handlers;
mod state;

use axum::routing::{get, patch, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use gatehouse_auth_core::AccountService;
use gatehouse_db::{create_pool, Repositories};

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Gatehouse Account API");

    let config = Config::from_env()?;

    // Database
    let pool = create_pool(&config.database_url).await?;
    sqlx::migrate!().run(&pool).await?;

    let repos = Repositories::new(pool.clone());
    let accounts = AccountService::new(config.auth.clone(), Arc::new(repos.accounts));

    let state = AppState::new(accounts, pool);

    // Build router
    let app = Router::new()
        .route("/health", get(handlers::health))
        .route("/ready", get(handlers::ready))
        .nest("/api/users", users_router())
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn users_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(handlers::signup))
        .route("/login", post(handlers::login))
        .route("/logout", get(handlers::logout))
        .route("/current", get(handlers::current))
        .route("/", patch(handlers::update_subscription))
}
