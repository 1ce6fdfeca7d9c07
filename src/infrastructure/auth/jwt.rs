//! JWT token issuance and verification
//!
//! Tokens are HS256-signed bearer tokens carrying subject, role, issuer,
//! audience, issued-at and expiry. Verification is strict: signature,
//! issuer, audience and expiry must all check out or the token is rejected.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::domain::{DomainError, Role};

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,
    /// Role claim. Absent means the identity carries no authorities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Admin flag
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// Issued at timestamp (Unix epoch)
    pub iat: i64,
    /// Expiration timestamp (Unix epoch)
    pub exp: i64,
}

impl Claims {
    /// Check if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Get the subject username from the claims
    pub fn subject(&self) -> &str {
        &self.sub
    }
}

/// Configuration for the JWT service
#[derive(Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,
    /// Token time-to-live in seconds
    pub ttl_seconds: u64,
    /// Required issuer claim
    pub issuer: String,
    /// Required audience claim
    pub audience: String,
}

impl Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[hidden]")
            .field("ttl_seconds", &self.ttl_seconds)
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .finish()
    }
}

impl JwtConfig {
    pub fn new(
        secret: impl Into<String>,
        ttl_seconds: u64,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        Self {
            secret: secret.into(),
            ttl_seconds,
            issuer: issuer.into(),
            audience: audience.into(),
        }
    }
}

/// Trait for token operations
pub trait TokenIssuer: Send + Sync + Debug {
    /// Issue a signed token for an already-authenticated subject
    fn issue(&self, subject: &str, role: Role, is_admin: bool) -> Result<String, DomainError>;

    /// Verify a token and return its claims
    fn verify(&self, token: &str) -> Result<Claims, DomainError>;

    /// Token time-to-live in seconds
    fn ttl_seconds(&self) -> u64;
}

/// HS256 JWT service
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("config", &self.config)
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .finish()
    }
}

impl JwtService {
    /// Create a new JWT service with the given configuration
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_audience(&[&self.config.audience]);
        validation
    }
}

impl TokenIssuer for JwtService {
    fn issue(&self, subject: &str, role: Role, is_admin: bool) -> Result<String, DomainError> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: subject.to_string(),
            role: Some(role.as_str().to_string()),
            is_admin,
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
            iat: now,
            exp: now + self.config.ttl_seconds as i64,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("Failed to issue JWT: {}", e)))
    }

    fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation())
            .map_err(|e| DomainError::credential(format!("Invalid token: {}", e)))?;

        Ok(token_data.claims)
    }

    fn ttl_seconds(&self) -> u64 {
        self.config.ttl_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_service() -> JwtService {
        JwtService::new(JwtConfig::new(
            "test-secret-key-12345",
            900,
            "coffer",
            "coffer-api",
        ))
    }

    #[test]
    fn test_issue_and_verify() {
        let service = create_service();

        let token = service.issue("alice", Role::User, false).unwrap();
        assert!(!token.is_empty());

        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.subject(), "alice");
        assert_eq!(claims.role.as_deref(), Some("USER"));
        assert!(!claims.is_admin);
        assert_eq!(claims.iss, "coffer");
        assert_eq!(claims.aud, "coffer-api");
        assert!(!claims.is_expired());
        assert_eq!(claims.exp - claims.iat, 900);
    }

    #[test]
    fn test_invalid_token() {
        let service = create_service();

        assert!(service.verify("invalid-token").is_err());
        assert!(service.verify("").is_err());
    }

    #[test]
    fn test_wrong_secret() {
        let service1 = JwtService::new(JwtConfig::new("secret-1", 900, "coffer", "coffer-api"));
        let service2 = JwtService::new(JwtConfig::new("secret-2", 900, "coffer", "coffer-api"));

        let token = service1.issue("alice", Role::User, false).unwrap();

        assert!(service2.verify(&token).is_err());
    }

    #[test]
    fn test_wrong_issuer() {
        let issuer = JwtService::new(JwtConfig::new("shared-secret", 900, "evil", "coffer-api"));
        let verifier = JwtService::new(JwtConfig::new("shared-secret", 900, "coffer", "coffer-api"));

        let token = issuer.issue("alice", Role::User, false).unwrap();

        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn test_wrong_audience() {
        let issuer = JwtService::new(JwtConfig::new("shared-secret", 900, "coffer", "other-api"));
        let verifier = JwtService::new(JwtConfig::new("shared-secret", 900, "coffer", "coffer-api"));

        let token = issuer.issue("alice", Role::User, false).unwrap();

        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn test_expired_token() {
        let service = create_service();

        // Craft claims that expired an hour ago
        let past = Utc::now().timestamp() - 3600;
        let claims = Claims {
            sub: "alice".to_string(),
            role: Some("USER".to_string()),
            is_admin: false,
            iss: "coffer".to_string(),
            aud: "coffer-api".to_string(),
            iat: past - 900,
            exp: past,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret-key-12345"),
        )
        .unwrap();

        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn test_admin_claims() {
        let service = create_service();

        let token = service.issue("root", Role::Admin, true).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.role.as_deref(), Some("ADMIN"));
        assert!(claims.is_admin);
    }

    #[test]
    fn test_ttl_seconds() {
        let service = create_service();
        assert_eq!(service.ttl_seconds(), 900);
    }
}
