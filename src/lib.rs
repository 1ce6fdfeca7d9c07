//! Coffer
//!
//! A small JWT-secured account service:
//! - Token issuance and fail-closed verification (HS256, issuer/audience/expiry)
//! - Ownership-gated balance reads and transfers
//! - Mass-assignment-safe signup with server-assigned roles
//! - Per-user transfer rate limiting
//! - Opaque error handling with server-side correlation ids

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use api::state::AppState;
use domain::account::{Account, AccountRepository};
use domain::user::{User, UserId, UserRepository};
use infrastructure::account::{AccountService, InMemoryAccountRepository, TransferPolicy};
use infrastructure::auth::{JwtConfig, JwtService};
use infrastructure::rate_limit::SlidingWindowLimiter;
use infrastructure::user::{Argon2Hasher, InMemoryUserRepository, PasswordHasher, UserService};

/// Create the application state with all services initialized
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let jwt_service = Arc::new(JwtService::new(JwtConfig::new(
        &config.jwt.secret,
        config.jwt.ttl_seconds,
        &config.jwt.issuer,
        &config.jwt.audience,
    )));

    let user_repository = Arc::new(InMemoryUserRepository::new());
    let account_repository = Arc::new(InMemoryAccountRepository::new());
    let hasher = Arc::new(Argon2Hasher::new());

    if config.demo.seed {
        seed_demo_data(&user_repository, &account_repository, hasher.as_ref()).await?;
    }

    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repository),
        Arc::clone(&hasher),
    ));

    let limiter = Arc::new(SlidingWindowLimiter::per_minute(config.transfer.per_minute));

    let account_service = Arc::new(AccountService::new(
        Arc::clone(&account_repository),
        limiter,
        TransferPolicy {
            max_amount: config.transfer.max_amount,
        },
    ));

    Ok(AppState::new(jwt_service, user_service, account_service))
}

/// Seed the demo users and their accounts
async fn seed_demo_data(
    users: &InMemoryUserRepository,
    accounts: &InMemoryAccountRepository,
    hasher: &Argon2Hasher,
) -> anyhow::Result<()> {
    let seeds = [
        ("alice", "alice123", 1, "DE02120300000000202051", 500.0),
        ("bob", "bob123", 2, "DE02120300000000202052", 750.0),
    ];

    for (username, password, account_id, iban, balance) in seeds {
        let password_hash = hasher.hash(password)?;

        let user = User::new(
            UserId::new(Uuid::new_v4().to_string()),
            username,
            format!("{username}@example.com"),
            password_hash,
        );
        let owner = user.id().clone();

        users.create(user).await?;
        accounts
            .create(Account::new(account_id, owner, iban, balance))
            .await?;
    }

    info!("Seeded demo users and accounts");

    Ok(())
}
