//! Authentication API endpoints
//!
//! Login and signup. Login failures are opaque: unknown usernames and wrong
//! passwords produce the same response. The signup body deliberately has no
//! role or admin fields; anything extra a client sends is dropped during
//! deserialization and the server assigns the defaults.

use axum::{extract::State, routing::post, Router};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::infrastructure::user::SignupRequest;

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/signup", post(signup))
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Signup request body. Role and admin flag are server-assigned and have no
/// corresponding fields here.
#[derive(Debug, Deserialize)]
pub struct SignupBody {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// Signup response
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub status: String,
}

/// Login with username and password
///
/// POST /api/auth/login
///
/// Returns a JWT token on successful authentication.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = state
        .user_service
        .authenticate(&request.username, &request.password)
        .await?
        .ok_or_else(|| ApiError::unauthorized("invalid credentials"))?;

    let token = state
        .jwt_service
        .issue(user.username(), user.role(), user.is_admin())?;

    Ok(Json(LoginResponse { token }))
}

/// Register a new user
///
/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupBody>,
) -> Result<Json<SignupResponse>, ApiError> {
    state
        .user_service
        .signup(SignupRequest {
            username: body.username,
            password: body.password,
            email: body.email,
        })
        .await?;

    Ok(Json(SignupResponse {
        status: "signup successful".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_body_drops_unknown_fields() {
        // A client trying to smuggle privileges in the body gets them ignored
        let body: SignupBody = serde_json::from_str(
            r#"{"username":"mallory","password":"mallory_pw1","email":"m@example.com",
                "role":"ADMIN","isAdmin":true}"#,
        )
        .unwrap();

        assert_eq!(body.username, "mallory");
        assert_eq!(body.email, "m@example.com");
    }
}
