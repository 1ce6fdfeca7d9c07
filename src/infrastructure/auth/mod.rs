//! Token issuance and verification

mod jwt;

pub use jwt::{Claims, JwtConfig, JwtService, TokenIssuer};
