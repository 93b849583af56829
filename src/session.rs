use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

/// Opaque-token session registry backing the auth cookie. Tokens are random
/// UUIDs, held in memory only; a restart logs everyone out.
pub struct SessionManager {
    sessions: DashMap<String, Session>,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: u64,
    pub created_at: DateTime<Utc>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Issues a fresh token bound to `user_id`.
    pub fn create(&self, user_id: u64) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions.insert(
            token.clone(),
            Session {
                user_id,
                created_at: Utc::now(),
            },
        );
        token
    }

    pub fn resolve(&self, token: &str) -> Option<u64> {
        self.sessions.get(token).map(|session| session.user_id)
    }

    /// Returns whether the token existed.
    pub fn destroy(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
