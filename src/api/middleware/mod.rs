//! HTTP middleware

mod auth;
mod security;

pub use auth::{authenticate, extract_bearer_token, CurrentUser, MaybeUser, RequireUser};
pub use security::security_headers_middleware;
