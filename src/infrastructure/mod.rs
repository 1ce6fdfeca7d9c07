//! Infrastructure layer - Concrete implementations of domain contracts

pub mod account;
pub mod auth;
pub mod logging;
pub mod rate_limit;
pub mod user;

pub use account::{AccountService, InMemoryAccountRepository, TransferPolicy};
pub use auth::{Claims, JwtConfig, JwtService, TokenIssuer};
pub use rate_limit::{RateLimiter, SlidingWindowLimiter};
pub use user::{Argon2Hasher, InMemoryUserRepository, PasswordHasher, SignupRequest, UserService};
