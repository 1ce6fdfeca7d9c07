use axum::{
    http::Uri,
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use super::accounts;
use super::auth;
use super::health;
use super::middleware::{authenticate, security_headers_middleware};
use super::state::AppState;
use super::types::ApiError;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    // Account routes sit behind the fail-closed token verifier
    let account_routes = accounts::create_accounts_router()
        .layer(from_fn_with_state(state.clone(), authenticate));

    Router::new()
        // Health endpoints (no auth)
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        // Authentication endpoints (no auth required for login/signup)
        .nest("/api/auth", auth::create_auth_router())
        // Account endpoints
        .nest("/api/accounts", account_routes)
        // Deny unknown API paths by default
        .fallback(fallback)
        .with_state(state)
        .layer(from_fn(security_headers_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Unknown `/api` paths are denied, everything else is a plain 404
async fn fallback(uri: Uri) -> ApiError {
    if uri.path().starts_with("/api/") {
        ApiError::unauthorized("unauthorized")
    } else {
        ApiError::not_found("not_found")
    }
}
