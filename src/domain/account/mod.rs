//! Account domain
//!
//! The account entity and the repository trait that carries the atomic
//! per-account debit contract.

mod entity;
mod repository;

pub use entity::{Account, AccountId};
pub use repository::AccountRepository;

#[cfg(test)]
pub use repository::mock::MockAccountRepository;
