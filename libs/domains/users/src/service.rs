//! User Service - orchestration between transport and repository

use std::sync::Arc;
use tracing::instrument;

use crate::error::UserResult;
use crate::models::User;
use crate::repository::UserRepository;

/// Service layer for User operations
///
/// Builds entities from raw fields, checks existence before writes, and logs
/// every outcome. Errors from the repository are returned unchanged.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a user; the repository assigns its ID
    #[instrument(skip(self, first_name, last_name, email))]
    pub async fn create_user(
        &self,
        first_name: String,
        last_name: String,
        email: String,
    ) -> UserResult<User> {
        let user = User::new(first_name, last_name, email);

        match self.repository.create(user).await {
            Ok(created) => {
                tracing::info!(user_id = created.id, "User created: {}", created);
                Ok(created)
            }
            Err(e) => {
                tracing::error!("Error creating user: {}", e);
                Err(e)
            }
        }
    }

    /// Get a user by ID
    #[instrument(skip(self))]
    pub async fn get_user_by_id(&self, id: u64) -> UserResult<User> {
        let user = self.repository.get_by_id(id).await.inspect_err(|e| {
            tracing::warn!("Error getting user by ID: {}", e);
        })?;

        tracing::info!("User found: {}", user);
        Ok(user)
    }

    /// All users in insertion order
    #[instrument(skip(self))]
    pub async fn get_all_users(&self) -> UserResult<Vec<User>> {
        let users = self.repository.get_all().await.inspect_err(|e| {
            tracing::error!("Error getting all users: {}", e);
        })?;

        tracing::info!(count = users.len(), "All users found");
        Ok(users)
    }

    /// Replace a stored user; the user must already exist
    #[instrument(skip(self, user), fields(user_id = user.id))]
    pub async fn update_user(&self, user: User) -> UserResult<()> {
        self.repository.get_by_id(user.id).await.inspect_err(|e| {
            tracing::warn!("Error getting user by ID: {}", e);
        })?;

        self.repository.update(user.clone()).await.inspect_err(|e| {
            tracing::error!("Error updating user: {}", e);
        })?;

        tracing::info!("User updated: {}", user);
        Ok(())
    }

    /// Delete a user by ID; the user must already exist
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: u64) -> UserResult<()> {
        let user = self.repository.get_by_id(id).await.inspect_err(|e| {
            tracing::warn!("Error getting user by ID: {}", e);
        })?;

        self.repository.delete(user.id).await.inspect_err(|e| {
            tracing::error!("Error deleting user: {}", e);
        })?;

        tracing::info!("User deleted: {}", user);
        Ok(())
    }

    pub async fn close(&self) -> UserResult<()> {
        self.repository.close().await
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
