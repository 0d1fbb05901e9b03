//! Sample records loaded at startup.

use crate::models::User;
use crate::repository::UserStore;

const SAMPLE_USERS: [(&str, &str, &str); 10] = [
    ("John", "Doe", "john_doe@gmail.com"),
    ("Jane", "Doe", "jane_doe@gmail.com"),
    ("Alice", "Smith", "alice_smith@gmail.com"),
    ("Bob", "Johnson", "bob_johnson@gmail.com"),
    ("Charlie", "Brown", "charlie_brown@gmail.com"),
    ("Diana", "Prince", "diana_prince@gmail.com"),
    ("Eve", "Adams", "eve_adams@gmail.com"),
    ("Frank", "Miller", "frank_miller@gmail.com"),
    ("Grace", "Hopper", "grace_hopper@gmail.com"),
    ("Hank", "Pym", "hank_pym@gmail.com"),
];

/// The ten sample users with IDs 1 through 10.
pub fn sample_users() -> Vec<User> {
    SAMPLE_USERS
        .iter()
        .zip(1u64..)
        .map(|(&(first, last, email), id)| User::new(first, last, email).with_id(id))
        .collect()
}

/// A store holding [`sample_users`] with the counter at 10.
pub fn seeded_store() -> UserStore {
    let users = sample_users();
    let max_user_id = users.len() as u64;
    UserStore::new(users, max_user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_sequential() {
        let ids: Vec<u64> = sample_users().iter().map(|u| u.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_seeded_store_counter_matches_records() {
        let store = seeded_store();
        assert_eq!(store.len(), 10);
        assert_eq!(store.max_user_id(), 10);
    }
}
