/**
 * Session Store
 *
 * This module implements the in-memory session store backing the
 * `sessionId` cookie. The store maps opaque random tokens to the logged-in
 * user and lives for the lifetime of the server process: sessions are
 * never persisted, expired, or evicted, and a restart logs everyone out.
 *
 * # Thread Safety
 *
 * The map is wrapped in `Arc<RwLock<..>>`, so concurrent lookups proceed
 * in parallel and inserts never expose a partially written entry. The
 * store is `Clone` and shared through `AppState` rather than a global.
 *
 * # Tokens
 *
 * Tokens are UUIDv4 strings. Uniqueness comes from the generator's
 * entropy (122 random bits); the store performs no collision checking of
 * its own.
 */

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A logged-in session
#[derive(Debug, Clone)]
pub struct Session {
    /// The user this session belongs to
    pub user_id: i64,
    /// When the session was created
    pub created_at: DateTime<Utc>,
}

/// Process-wide session store
///
/// Cheap to clone; all clones share the same underlying map.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    /// Create an empty session store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session for a user and return its token
    pub fn create(&self, user_id: i64) -> String {
        let token = Uuid::new_v4().to_string();
        let session = Session {
            user_id,
            created_at: Utc::now(),
        };
        self.inner.write().unwrap().insert(token.clone(), session);
        token
    }

    /// Resolve a token to its user id
    ///
    /// Returns `None` for tokens the store has never issued (or issued
    /// before the last restart).
    pub fn lookup(&self, token: &str) -> Option<i64> {
        self.inner
            .read()
            .unwrap()
            .get(token)
            .map(|session| session.user_id)
    }

    /// Fetch the full session entry for a token
    pub fn get(&self, token: &str) -> Option<Session> {
        self.inner.read().unwrap().get(token).cloned()
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    /// Whether the store holds no sessions
    pub fn is_empty(&self) -> bool {
        self.inner.read().unwrap().is_empty()
    }
}
