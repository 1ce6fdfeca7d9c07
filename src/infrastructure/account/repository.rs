//! In-memory account repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::account::{Account, AccountId, AccountRepository};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// In-memory implementation of AccountRepository
///
/// `debit` holds the write lock across the balance check and the decrement,
/// which gives the per-account read-modify-write atomicity the transfer
/// operation requires. A relational implementation would use a transactional
/// `UPDATE ... WHERE balance >= ?` instead.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
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
