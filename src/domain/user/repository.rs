//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{User, UserId};
use crate::domain::DomainError;

/// Repository trait for credential storage
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by their ID
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Get a user by their username (for login and token subjects)
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user
    async fn update(&self, user: &User) -> Result<User, DomainError>;

    /// Check if a username exists
    async fn username_exists(&self, username: &str) -> Result<bool, DomainError> {
        Ok(self.get_by_username(username).await?.is_some())
    }

    /// Record a login for a user
    async fn record_login(&self, id: &UserId) -> Result<(), DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock user repository for testing
    #[derive(Debug, Default)]
    pub struct MockUserRepository {
        users: Arc<RwLock<HashMap<String, User>>>,
        should_fail: Arc<RwLock<bool>>,
    }

    impl MockUserRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// Set whether operations should fail
        pub async fn set_should_fail(&self, fail: bool) {
            *self.should_fail.write().await = fail;
        }

        async fn check_should_fail(&self) -> Result<(), DomainError> {
            if *self.should_fail.read().await {
                return Err(DomainError::storage("Mock repository configured to fail"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
            self.check_should_fail().await?;
            let users = self.users.read().await;
            Ok(users.get(id.as_str()).cloned())
        }

        async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
            self.check_should_fail().await?;
            let users = self.users.read().await;
            Ok(users.values().find(|u| u.username() == username).cloned())
        }

        async fn create(&self, user: User) -> Result<User, DomainError> {
            self.check_should_fail().await?;
            let mut users = self.users.write().await;

            if users.values().any(|u| u.username() == user.username()) {
                return Err(DomainError::conflict("username already exists"));
            }

            users.insert(user.id().as_str().to_string(), user.clone());
            Ok(user)
        }

        async fn update(&self, user: &User) -> Result<User, DomainError> {
            self.check_should_fail().await?;
            let mut users = self.users.write().await;
            let id = user.id().as_str().to_string();

            if !users.contains_key(&id) {
                return Err(DomainError::not_found(format!("User '{}' not found", id)));
            }

            users.insert(id, user.clone());
            Ok(user.clone())
        }

        async fn record_login(&self, id: &UserId) -> Result<(), DomainError> {
            self.check_should_fail().await?;
            let mut users = self.users.write().await;

            if let Some(user) = users.get_mut(id.as_str()) {
                user.record_login();
                Ok(())
            } else {
                Err(DomainError::not_found(format!("User '{}' not found", id)))
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn create_test_user(id: &str, username: &str) -> User {
            User::new(
                UserId::new(id),
                username,
                format!("{username}@example.com"),
                "hashed_password",
            )
        }

        #[tokio::test]
        async fn test_create_and_get() {
            let repo = MockUserRepository::new();
            let user = create_test_user("user-1", "alice");

            repo.create(user.clone()).await.unwrap();

            let retrieved = repo.get(user.id()).await.unwrap();
            assert!(retrieved.is_some());
            assert_eq!(retrieved.unwrap().username(), "alice");
        }

        #[tokio::test]
        async fn test_get_by_username() {
            let repo = MockUserRepository::new();
            repo.create(create_test_user("user-1", "alice")).await.unwrap();

            let retrieved = repo.get_by_username("alice").await.unwrap();
            assert!(retrieved.is_some());
            assert_eq!(retrieved.unwrap().id().as_str(), "user-1");
        }

        #[tokio::test]
        async fn test_username_uniqueness() {
            let repo = MockUserRepository::new();
            repo.create(create_test_user("user-1", "alice")).await.unwrap();

            let result = repo.create(create_test_user("user-2", "alice")).await;
            assert!(result.is_err());
        }

        #[tokio::test]
        async fn test_record_login() {
            let repo = MockUserRepository::new();
            let user = create_test_user("user-1", "alice");

            repo.create(user.clone()).await.unwrap();
            repo.record_login(user.id()).await.unwrap();

            let retrieved = repo.get(user.id()).await.unwrap().unwrap();
            assert!(retrieved.last_login_at().is_some());
        }

        #[tokio::test]
        async fn test_should_fail() {
            let repo = MockUserRepository::new();
            repo.set_should_fail(true).await;

            let result = repo.get_by_username("alice").await;
            assert!(result.is_err());
        }
    }
}
