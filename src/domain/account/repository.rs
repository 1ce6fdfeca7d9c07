//! Account repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Account, AccountId};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Repository trait for account storage
///
/// `debit` is the single mutation point for balances. Implementations must
/// apply the balance check and the decrement atomically per account so that
/// concurrent transfers can neither overdraw nor lose an update.
#[async_trait]
pub trait AccountRepository: Send + Sync + Debug {
    /// Get an account by its ID
    async fn get(&self, id: AccountId) -> Result<Option<Account>, DomainError>;

    /// List all accounts owned by a user
    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Account>, DomainError>;

    /// Create a new account
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Atomically decrease the balance of an account and return the remaining
    /// balance. Fails with `InsufficientFunds` when the balance is lower than
    /// `amount` at the time the lock is held.
    async fn debit(&self, id: AccountId, amount: f64) -> Result<f64, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock account repository for testing
    #[derive(Debug, Default)]
    pub struct MockAccountRepository {
        accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
    }

    impl MockAccountRepository {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl AccountRepository for MockAccountRepository {
        async fn get(&self, id: AccountId) -> Result<Option<Account>, DomainError> {
            let accounts = self.accounts.read().await;
            Ok(accounts.get(&id).cloned())
        }

        async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Account>, DomainError> {
            let accounts = self.accounts.read().await;
            let mut owned: Vec<Account> = accounts
                .values()
                .filter(|a| a.is_owned_by(owner))
                .cloned()
                .collect();
            owned.sort_by_key(|a| a.id());
            Ok(owned)
        }

        async fn create(&self, account: Account) -> Result<Account, DomainError> {
            let mut accounts = self.accounts.write().await;

            if accounts.contains_key(&account.id()) {
                return Err(DomainError::conflict(format!(
                    "Account '{}' already exists",
                    account.id()
                )));
            }

            accounts.insert(account.id(), account.clone());
            Ok(account)
        }

        async fn debit(&self, id: AccountId, amount: f64) -> Result<f64, DomainError> {
            let mut accounts = self.accounts.write().await;

            let account = accounts
                .get_mut(&id)
                .ok_or_else(|| DomainError::not_found(format!("Account '{}' not found", id)))?;

            if account.balance() < amount {
                return Err(DomainError::InsufficientFunds);
            }

            account.debit(amount);
            Ok(account.balance())
        }
    }
}
