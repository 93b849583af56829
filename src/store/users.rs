use chrono::Utc;

use super::Store;
use crate::models::{NewUser, User};

impl Store {
    pub fn get_user(&self, id: u64) -> Option<User> {
        self.lock().users.get(&id).cloned()
    }

    pub fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.lock()
            .users
            .values()
            .find(|user| user.username == username)
            .cloned()
    }

    pub fn create_user(&self, new: NewUser) -> User {
        let mut inner = self.lock();
        let id = inner.next_user_id;
        inner.next_user_id += 1;
        let user = User {
            id,
            username: new.username,
            password_hash: new.password_hash,
            email: new.email,
            created_at: Utc::now(),
        };
        inner.users.insert(id, user.clone());
        user
    }
}
