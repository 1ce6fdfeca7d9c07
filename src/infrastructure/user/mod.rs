//! User infrastructure module
//!
//! Argon2 password hashing, the in-memory credential store, and the user
//! service handling signup and authentication.

mod password;
mod repository;
mod service;

pub use password::{Argon2Hasher, PasswordHasher};
pub use repository::InMemoryUserRepository;
pub use service::{SignupRequest, UserService};
