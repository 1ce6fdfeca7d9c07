//! Account API endpoints
//!
//! All responses are built from `AccountView`, an explicit projection of the
//! entity. The owner id has no field in the view and cannot appear in a body
//! regardless of how the entity evolves.

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::api::middleware::{MaybeUser, RequireUser};
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::account::{Account, AccountId};
use crate::domain::DomainError;

/// Create the accounts router
pub fn create_accounts_router() -> Router<AppState> {
    Router::new()
        .route("/mine", get(mine))
        .route("/{id}/balance", get(balance))
        .route("/{id}/transfer", post(transfer))
}

/// Safe projection of an account (no owner field)
#[derive(Debug, Serialize)]
pub struct AccountView {
    pub id: AccountId,
    pub iban: String,
    pub balance: f64,
}

impl From<&Account> for AccountView {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id(),
            iban: account.iban().to_string(),
            balance: account.balance(),
        }
    }
}

/// Transfer query parameters
///
/// The amount arrives as a raw string so a malformed value gets the same
/// structured `invalid_amount` response as a missing or non-positive one,
/// instead of the extractor's plain-text rejection.
#[derive(Debug, Deserialize)]
pub struct TransferParams {
    pub amount: Option<String>,
}

impl TransferParams {
    fn parse_amount(&self) -> Result<Option<f64>, DomainError> {
        match &self.amount {
            Some(raw) => raw
                .parse::<f64>()
                .map(Some)
                .map_err(|_| DomainError::InvalidAmount),
            None => Ok(None),
        }
    }
}

/// Transfer response
#[derive(Debug, Serialize)]
pub struct TransferResponse {
    pub status: String,
    pub remaining: f64,
}

/// Get the balance of an owned account
///
/// GET /api/accounts/{id}/balance
pub async fn balance(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(id): Path<AccountId>,
) -> Result<Json<AccountView>, ApiError> {
    let account = state.account_service.balance(id, user.id()).await?;

    Ok(Json(AccountView::from(&account)))
}

/// Debit an amount from an owned account
///
/// POST /api/accounts/{id}/transfer?amount=<amount>
pub async fn transfer(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(id): Path<AccountId>,
    Query(params): Query<TransferParams>,
) -> Result<Json<TransferResponse>, ApiError> {
    let amount = params.parse_amount()?;

    let remaining = state
        .account_service
        .transfer(id, amount, user.id())
        .await?;

    Ok(Json(TransferResponse {
        status: "ok".to_string(),
        remaining,
    }))
}

/// List the caller's accounts
///
/// GET /api/accounts/mine
///
/// Without a caller this is an empty list, not an error: the route accepts
/// unauthenticated requests and answers with what they are allowed to see.
pub async fn mine(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
) -> Result<Json<Vec<AccountView>>, ApiError> {
    let user = match user {
        Some(user) => user,
        None => return Ok(Json(Vec::new())),
    };

    let accounts = state.account_service.list_for(user.id()).await?;

    Ok(Json(accounts.iter().map(AccountView::from).collect()))
}
