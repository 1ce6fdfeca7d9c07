//! Account entity
//!
//! The entity is intentionally not `Serialize`: responses are built from
//! explicit projection types at the API boundary so internal fields such as
//! the owner id can never leak into a response body.

use chrono::{DateTime, Utc};

use crate::domain::user::UserId;

/// Account identifier
pub type AccountId = i64;

/// A bank account owned by exactly one user
#[derive(Debug, Clone)]
pub struct Account {
    /// Unique identifier for the account
    id: AccountId,
    /// Owning user. Internal, never serialized.
    owner: UserId,
    /// Display IBAN
    iban: String,
    /// Current balance. Mutated only through `AccountRepository::debit`.
    balance: f64,
    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl Account {
    pub fn new(id: AccountId, owner: UserId, iban: impl Into<String>, balance: f64) -> Self {
        Self {
            id,
            owner,
            iban: iban.into(),
            balance,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    pub fn iban(&self) -> &str {
        &self.iban
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Check whether the given user owns this account
    pub fn is_owned_by(&self, user: &UserId) -> bool {
        &self.owner == user
    }

    /// Decrease the balance. Callers must have verified `amount <= balance`;
    /// repositories apply this under their own lock.
    pub(crate) fn debit(&mut self, amount: f64) {
        self.balance -= amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ownership() {
        let owner = UserId::new("user-1");
        let account = Account::new(1, owner.clone(), "DE02120300000000202051", 500.0);

        assert!(account.is_owned_by(&owner));
        assert!(!account.is_owned_by(&UserId::new("user-2")));
    }

    #[test]
    fn test_debit() {
        let mut account = Account::new(1, UserId::new("user-1"), "DE02120300000000202051", 500.0);

        account.debit(120.5);
        assert_eq!(account.balance(), 379.5);
    }
}
