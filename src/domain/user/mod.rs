//! User domain
//!
//! Domain types and traits for stored credentials: the user entity,
//! validation rules, and the repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::{Role, User, UserId};
pub use repository::UserRepository;
pub use validation::{validate_email, validate_password, validate_username, UserValidationError};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
