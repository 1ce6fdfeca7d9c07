//! Application state for shared services

use std::sync::Arc;

use crate::domain::account::{Account, AccountId, AccountRepository};
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::account::AccountService;
use crate::infrastructure::auth::TokenIssuer;
use crate::infrastructure::user::{PasswordHasher, SignupRequest, UserService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub jwt_service: Arc<dyn TokenIssuer>,
    pub user_service: Arc<dyn UserServiceTrait>,
    pub account_service: Arc<dyn AccountServiceTrait>,
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn signup(&self, request: SignupRequest) -> Result<User, DomainError>;
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError>;
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
}

/// Trait for account service operations
#[async_trait::async_trait]
pub trait AccountServiceTrait: Send + Sync {
    async fn balance(&self, id: AccountId, caller: &UserId) -> Result<Account, DomainError>;
    async fn transfer(
        &self,
        id: AccountId,
        amount: Option<f64>,
        caller: &UserId,
    ) -> Result<f64, DomainError>;
    async fn list_for(&self, caller: &UserId) -> Result<Vec<Account>, DomainError>;
}

// Implement traits for the actual services

#[async_trait::async_trait]
impl<R: UserRepository + 'static, H: PasswordHasher + 'static> UserServiceTrait
    for UserService<R, H>
{
    async fn signup(&self, request: SignupRequest) -> Result<User, DomainError> {
        UserService::signup(self, request).await
    }

    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        UserService::authenticate(self, username, password).await
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        UserService::get_by_username(self, username).await
    }
}

#[async_trait::async_trait]
impl<R: AccountRepository + 'static> AccountServiceTrait for AccountService<R> {
    async fn balance(&self, id: AccountId, caller: &UserId) -> Result<Account, DomainError> {
        AccountService::balance(self, id, caller).await
    }

    async fn transfer(
        &self,
        id: AccountId,
        amount: Option<f64>,
        caller: &UserId,
    ) -> Result<f64, DomainError> {
        AccountService::transfer(self, id, amount, caller).await
    }

    async fn list_for(&self, caller: &UserId) -> Result<Vec<Account>, DomainError> {
        AccountService::list_for(self, caller).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        jwt_service: Arc<dyn TokenIssuer>,
        user_service: Arc<dyn UserServiceTrait>,
        account_service: Arc<dyn AccountServiceTrait>,
    ) -> Self {
        Self {
            jwt_service,
            user_service,
            account_service,
        }
    }
}
