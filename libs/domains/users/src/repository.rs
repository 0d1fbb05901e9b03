use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user, assigning it the next ID
    async fn create(&self, user: User) -> UserResult<User>;

    /// Get a user by ID
    async fn get_by_id(&self, id: u64) -> UserResult<User>;

    /// All users in insertion order
    async fn get_all(&self) -> UserResult<Vec<User>>;

    /// Replace the stored record with the same ID
    async fn update(&self, user: User) -> UserResult<()>;

    /// Delete a user by ID
    async fn delete(&self, id: u64) -> UserResult<()>;

    /// Release backing resources
    async fn close(&self) -> UserResult<()>;
}

/// Ordered user records plus the highest ID ever assigned.
///
/// IDs are never reused: the counter only moves forward, even after deletes.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Vec<User>,
    max_user_id: u64,
}

impl UserStore {
    /// Build a store from existing records.
    ///
    /// The counter is raised to the highest ID present if `max_user_id` is lower.
    pub fn new(users: Vec<User>, max_user_id: u64) -> Self {
        let highest = users.iter().map(|u| u.id).max().unwrap_or(0);
        if highest > max_user_id {
            tracing::warn!(
                max_user_id,
                highest,
                "Seed counter below highest stored ID, raising it"
            );
        }

        Self {
            users,
            max_user_id: max_user_id.max(highest),
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn max_user_id(&self) -> u64 {
        self.max_user_id
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }
}

/// In-memory implementation of UserRepository
///
/// Every operation is a linear scan under the store lock.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<UserStore>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::from_store(UserStore::default())
    }

    pub fn from_store(store: UserStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, mut user: User) -> UserResult<User> {
        let mut store = self.store.write().await;

        store.max_user_id += 1;
        user.id = store.max_user_id;
        store.users.push(user.clone());

        tracing::info!(user_id = user.id, "Created user {}", user);
        Ok(user)
    }

    async fn get_by_id(&self, id: u64) -> UserResult<User> {
        let store = self.store.read().await;

        let user = store
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(UserError::NotFound(id))?;

        tracing::debug!(user_id = id, "Found user {}", user);
        Ok(user)
    }

    async fn get_all(&self) -> UserResult<Vec<User>> {
        let store = self.store.read().await;
        tracing::debug!(count = store.len(), "Listing all users");
        Ok(store.users.clone())
    }

    async fn update(&self, user: User) -> UserResult<()> {
        let mut store = self.store.write().await;

        let index = store.position(user.id).ok_or(UserError::NotFound(user.id))?;

        tracing::info!(user_id = user.id, "Updated user {}", user);
        store.users[index] = user;
        Ok(())
    }

    async fn delete(&self, id: u64) -> UserResult<()> {
        let mut store = self.store.write().await;

        let index = store.position(id).ok_or(UserError::NotFound(id))?;
        let removed = store.users.remove(index);

        tracing::info!(user_id = id, "Deleted user {}", removed);
        Ok(())
    }

    async fn close(&self) -> UserResult<()> {
        // Nothing to release for the in-memory store.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_of(n: u64) -> UserStore {
        let users = (1..=n)
            .map(|i| {
                User::new(format!("First{i}"), format!("Last{i}"), format!("u{i}@example.com"))
                    .with_id(i)
            })
            .collect();
        UserStore::new(users, n)
    }

    fn ids(users: &[User]) -> Vec<u64> {
        users.iter().map(|u| u.id).collect()
    }

    #[tokio::test]
    async fn test_create_assigns_next_id_and_appends() {
        let repo = InMemoryUserRepository::from_store(store_of(3));

        let created = repo
            .create(User::new("Ann", "Lee", "ann@example.com").with_id(99))
            .await
            .unwrap();
        assert_eq!(created.id, 4);

        let all = repo.get_all().await.unwrap();
        assert_eq!(ids(&all), vec![1, 2, 3, 4]);
        assert_eq!(all.last(), Some(&created));
        assert_eq!(all[3].first_name, "Ann");
    }

    #[tokio::test]
    async fn test_ids_are_never_reused_after_delete() {
        let repo = InMemoryUserRepository::new();

        let mut last = 0;
        for round in 0..5 {
            let created = repo
                .create(User::new("A", "B", format!("{round}@example.com")))
                .await
                .unwrap();
            assert!(created.id > last);
            last = created.id;

            if round % 2 == 0 {
                repo.delete(created.id).await.unwrap();
            }
        }

        // The newest record (ID 5) was deleted in the last round.
        let next = repo.create(User::new("C", "D", "c@example.com")).await.unwrap();
        assert_eq!(next.id, last + 1);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let repo = InMemoryUserRepository::from_store(store_of(3));

        let user = repo.get_by_id(2).await.unwrap();
        assert_eq!(user.first_name, "First2");

        let err = repo.get_by_id(42).await.unwrap_err();
        assert_eq!(err, UserError::NotFound(42));
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let repo = InMemoryUserRepository::from_store(store_of(3));

        let replacement = User::new("Ann", "Lee", "ann@example.com").with_id(2);
        repo.update(replacement.clone()).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(ids(&all), vec![1, 2, 3]);
        assert_eq!(all[1], replacement);
    }

    #[tokio::test]
    async fn test_update_missing_user_leaves_store_unchanged() {
        let repo = InMemoryUserRepository::from_store(store_of(3));
        let before = repo.get_all().await.unwrap();

        let err = repo
            .update(User::new("Ann", "Lee", "ann@example.com").with_id(7))
            .await
            .unwrap_err();
        assert_eq!(err, UserError::NotFound(7));

        assert_eq!(repo.get_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one_and_keeps_order() {
        let repo = InMemoryUserRepository::from_store(store_of(5));

        repo.delete(3).await.unwrap();
        assert_eq!(ids(&repo.get_all().await.unwrap()), vec![1, 2, 4, 5]);

        let err = repo.delete(3).await.unwrap_err();
        assert_eq!(err, UserError::NotFound(3));
        assert_eq!(repo.get_all().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_close_is_a_no_op() {
        let repo = InMemoryUserRepository::from_store(store_of(2));
        repo.close().await.unwrap();
        assert_eq!(repo.get_all().await.unwrap().len(), 2);
    }

    #[test]
    fn test_store_counter_is_raised_to_highest_id() {
        let store = UserStore::new(store_of(10).users, 3);
        assert_eq!(store.max_user_id(), 10);
        assert_eq!(store.len(), 10);
        assert!(!store.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let repo = InMemoryUserRepository::new();

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.create(User::new("A", "B", format!("{i}@example.com")))
                        .await
                        .unwrap()
                        .id
                })
            })
            .collect();

        let mut assigned = Vec::new();
        for handle in handles {
            assigned.push(handle.await.unwrap());
        }
        assigned.sort_unstable();
        assert_eq!(assigned, (1..=32).collect::<Vec<u64>>());
    }
}
