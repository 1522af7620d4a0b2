//! Identity store: users keyed by id plus the email index

use std::collections::HashMap;

use parking_lot::RwLock;
use uuid::Uuid;

use super::{StoreError, StoreResult};
use crate::types::{Role, User};

#[derive(Default)]
struct UserTables {
    by_id: HashMap<String, User>,
    /// email -> user id; always written together with `by_id`
    by_email: HashMap<String, String>,
}

/// Thread-safe user store
#[derive(Default)]
pub struct UserStore {
    tables: RwLock<UserTables>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user, returning the generated id.
    ///
    /// Emails are compared exactly as given; callers own normalization.
    pub fn create(
        &self,
        name: String,
        email: String,
        password_hash: String,
        role: Role,
    ) -> StoreResult<String> {
        let mut tables = self.tables.write();
        if tables.by_email.contains_key(&email) {
            return Err(StoreError::DuplicateEmail);
        }

        let user_id = Uuid::new_v4().to_string();
        tables.by_email.insert(email.clone(), user_id.clone());
        tables.by_id.insert(
            user_id.clone(),
            User {
                user_id: user_id.clone(),
                name,
                email,
                password_hash,
                role,
            },
        );

        Ok(user_id)
    }

    pub fn find_by_email(&self, email: &str) -> Option<User> {
        let tables = self.tables.read();
        tables
            .by_email
            .get(email)
            .and_then(|id| tables.by_id.get(id))
            .cloned()
    }

    pub fn find_by_id(&self, user_id: &str) -> Option<User> {
        self.tables.read().by_id.get(user_id).cloned()
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.tables.read().by_id.contains_key(user_id)
    }

    /// Remove a user from both the primary table and the email index
    pub fn delete(&self, user_id: &str) -> StoreResult<()> {
        let mut tables = self.tables.write();
        let user = tables
            .by_id
            .remove(user_id)
            .ok_or(StoreError::NotFound("User"))?;
        tables.by_email.remove(&user.email);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tables.read().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    fn create(store: &UserStore, email: &str) -> StoreResult<String> {
        store.create(
            "Test".to_string(),
            email.to_string(),
            "hash".to_string(),
            Role::Attendee,
        )
    }

    #[test]
    fn test_create_and_lookup() {
        let store = UserStore::new();
        let id = create(&store, "a@example.com").unwrap();

        let by_email = store.find_by_email("a@example.com").unwrap();
        assert_eq!(by_email.user_id, id);
        assert_eq!(store.find_by_id(&id), Some(by_email));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let store = UserStore::new();
        create(&store, "a@example.com").unwrap();

        let err = store
            .create(
                "Other".to_string(),
                "a@example.com".to_string(),
                "other-hash".to_string(),
                Role::Organizer,
            )
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateEmail);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_email_lookup_is_case_sensitive() {
        let store = UserStore::new();
        create(&store, "a@example.com").unwrap();

        assert!(store.find_by_email("A@example.com").is_none());
        assert!(create(&store, "A@example.com").is_ok());
    }

    #[test]
    fn test_delete_clears_email_index() {
        let store = UserStore::new();
        let id = create(&store, "a@example.com").unwrap();

        store.delete(&id).unwrap();
        assert!(store.find_by_id(&id).is_none());
        assert!(store.find_by_email("a@example.com").is_none());
        assert!(store.is_empty());

        // Email is free again
        assert!(create(&store, "a@example.com").is_ok());
    }

    #[test]
    fn test_delete_missing_user() {
        let store = UserStore::new();
        assert_eq!(store.delete("nope"), Err(StoreError::NotFound("User")));
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let store = UserStore::new();
        let ids: HashSet<String> = (0..50)
            .map(|i| create(&store, &format!("u{}@example.com", i)).unwrap())
            .collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_concurrent_duplicate_email_single_winner() {
        let store = Arc::new(UserStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || create(&store, "race@example.com").is_ok())
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(winners, 1);
        assert_eq!(store.len(), 1);
    }
}
