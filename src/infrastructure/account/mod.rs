//! Account infrastructure module

mod repository;
mod service;

pub use repository::InMemoryAccountRepository;
pub use service::{AccountService, TransferPolicy};
