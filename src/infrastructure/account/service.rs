//! Account service: balance lookup, transfers and account listing
//!
//! Every operation that touches a concrete account takes the caller identity
//! and enforces ownership before doing anything else. Lookups for accounts
//! that do not exist fail with the same forbidden error as lookups for
//! accounts owned by someone else, so callers cannot probe which account ids
//! are in use.

use std::sync::Arc;

use crate::domain::account::{Account, AccountId, AccountRepository};
use crate::domain::user::UserId;
use crate::domain::DomainError;
use crate::infrastructure::rate_limit::RateLimiter;

const FORBIDDEN_MESSAGE: &str = "forbidden: not your account";

/// Transfer policy limits
#[derive(Debug, Clone, Copy)]
pub struct TransferPolicy {
    /// Largest amount accepted for a single transfer
    pub max_amount: f64,
}

impl Default for TransferPolicy {
    fn default() -> Self {
        Self {
            max_amount: 1_000_000.0,
        }
    }
}

/// Account service enforcing ownership, amount limits and rate limits
#[derive(Debug)]
pub struct AccountService<R: AccountRepository> {
    repository: Arc<R>,
    limiter: Arc<dyn RateLimiter>,
    policy: TransferPolicy,
}

impl<R: AccountRepository> AccountService<R> {
    pub fn new(repository: Arc<R>, limiter: Arc<dyn RateLimiter>, policy: TransferPolicy) -> Self {
        Self {
            repository,
            limiter,
            policy,
        }
    }

    /// Fetch an account after verifying the caller owns it
    async fn get_owned(&self, id: AccountId, caller: &UserId) -> Result<Account, DomainError> {
        let account = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::forbidden(FORBIDDEN_MESSAGE))?;

        if !account.is_owned_by(caller) {
            return Err(DomainError::forbidden(FORBIDDEN_MESSAGE));
        }

        Ok(account)
    }

    /// Get the balance of an account the caller owns
    pub async fn balance(&self, id: AccountId, caller: &UserId) -> Result<Account, DomainError> {
        self.get_owned(id, caller).await
    }

    /// List all accounts owned by the caller
    pub async fn list_for(&self, caller: &UserId) -> Result<Vec<Account>, DomainError> {
        self.repository.list_by_owner(caller).await
    }

    /// Debit `amount` from an account the caller owns and return the
    /// remaining balance.
    ///
    /// Checks run in a fixed order: amount validity, amount ceiling,
    /// ownership, funds, rate limit. The rate limit slot is only consumed
    /// once every other check has passed, so rejected requests never burn
    /// the caller's window.
    pub async fn transfer(
        &self,
        id: AccountId,
        amount: Option<f64>,
        caller: &UserId,
    ) -> Result<f64, DomainError> {
        let amount = match amount {
            Some(a) if a.is_finite() && a > 0.0 => a,
            _ => return Err(DomainError::InvalidAmount),
        };

        if amount > self.policy.max_amount {
            return Err(DomainError::AmountTooLarge);
        }

        let account = self.get_owned(id, caller).await?;

        if account.balance() < amount {
            return Err(DomainError::InsufficientFunds);
        }

        if !self.limiter.try_consume(caller.as_str()).await {
            return Err(DomainError::RateLimited);
        }

        // The repository re-checks funds under its lock, so a concurrent
        // transfer racing past the pre-check above still cannot overdraw.
        self.repository.debit(id, amount).await
    }
}
