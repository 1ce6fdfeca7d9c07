//! Domain layer - Core business logic and entities

pub mod account;
pub mod error;
pub mod user;

pub use account::{Account, AccountId, AccountRepository};
pub use error::DomainError;
pub use user::{Role, User, UserId, UserRepository};
