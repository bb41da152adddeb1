use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use crate::models::dto::UpdateUser;
use crate::models::User;

/// In-memory store for user records, a stand-in for a real database.
/// Records live only for the lifetime of the process.
pub struct UserStore {
    inner: Mutex<Inner>,
}

struct Inner {
    users: Vec<User>,
    next_id: i32,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a new user, assigning the next id and stamping both
    /// timestamps from the same clock read.
    pub fn create_user(&self, name: String, email: String, password: String) -> User {
        let mut inner = self.lock();
        let now = Utc::now();
        let user = User {
            id: inner.next_id,
            name,
            email,
            password,
            created_at: now,
            updated_at: now,
        };
        // Ids are never reused, even after deletion
        inner.next_id += 1;
        inner.users.push(user.clone());
        user
    }

    /// All live records in insertion order.
    pub fn list_users(&self) -> Vec<User> {
        self.lock().users.clone()
    }

    /// Get a user by id. Linear search.
    pub fn get_user_by_id(&self, id: i32) -> Option<User> {
        self.lock().users.iter().find(|u| u.id == id).cloned()
    }

    /// Merge the provided fields over the stored record and refresh
    /// `updated_at`, leaving `created_at` untouched. Returns `None` if no
    /// record has that id.
    pub fn update_user(&self, id: i32, changes: UpdateUser) -> Option<User> {
        let mut inner = self.lock();
        let user = inner.users.iter_mut().find(|u| u.id == id)?;
        if let Some(name) = changes.name {
            user.name = name;
        }
        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(password) = changes.password {
            user.password = password;
        }
        user.updated_at = Utc::now();
        Some(user.clone())
    }

    /// Remove a user by id. Returns whether a record was removed.
    pub fn delete_user(&self, id: i32) -> bool {
        let mut inner = self.lock();
        let before = inner.users.len();
        inner.users.retain(|u| u.id != id);
        inner.users.len() != before
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("user store mutex poisoned")
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john(store: &UserStore) -> User {
        store.create_user(
            "John Doe".to_string(),
            "john.doe@example.com".to_string(),
            "password123".to_string(),
        )
    }

    #[test]
    fn create_assigns_sequential_ids_starting_at_one() {
        let store = UserStore::new();
        let first = john(&store);
        let second = store.create_user(
            "Jane Doe".to_string(),
            "jane.doe@example.com".to_string(),
            "password456".to_string(),
        );

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn create_stamps_both_timestamps_equal() {
        let store = UserStore::new();
        let user = john(&store);

        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn get_returns_the_created_record() {
        let store = UserStore::new();
        let created = john(&store);

        let found = store.get_user_by_id(created.id).unwrap();
        assert_eq!(found.name, "John Doe");
        assert_eq!(found.email, "john.doe@example.com");
        assert_eq!(found.created_at, found.updated_at);
    }

    #[test]
    fn get_unknown_id_returns_none() {
        let store = UserStore::new();
        assert!(store.get_user_by_id(999).is_none());
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = UserStore::new();
        assert!(store.list_users().is_empty());

        john(&store);
        store.create_user(
            "Jane Doe".to_string(),
            "jane.doe@example.com".to_string(),
            "password456".to_string(),
        );

        let users = store.list_users();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[1].id, 2);
    }

    #[test]
    fn update_merges_only_provided_fields() {
        let store = UserStore::new();
        let created = john(&store);

        std::thread::sleep(std::time::Duration::from_millis(5));
        let updated = store
            .update_user(
                created.id,
                UpdateUser {
                    name: Some("Updated Name".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.name, "Updated Name");
        assert_eq!(updated.email, "john.doe@example.com");
        assert_eq!(updated.password, "password123");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > updated.created_at);
    }

    #[test]
    fn update_unknown_id_returns_none() {
        let store = UserStore::new();
        let changes = UpdateUser {
            name: Some("Updated Name".to_string()),
            ..Default::default()
        };
        assert!(store.update_user(999, changes).is_none());
    }

    #[test]
    fn delete_removes_the_record() {
        let store = UserStore::new();
        let created = john(&store);

        assert!(store.delete_user(created.id));
        assert!(store.get_user_by_id(created.id).is_none());
        assert!(!store.delete_user(created.id));
    }

    #[test]
    fn ids_are_not_reused_after_deletion() {
        let store = UserStore::new();
        let first = john(&store);
        store.delete_user(first.id);

        let second = john(&store);
        assert_eq!(second.id, first.id + 1);
    }
}
