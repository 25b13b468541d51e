//! In-Memory Session Store Adapter
//!
//! Holds every session snapshot in a process-local map. State does not
//! survive a restart, which matches the single-process deployment this
//! server targets.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::session::{SessionData, SessionId};
use crate::ports::{SessionStore, SessionStoreError};

#[derive(Debug, Clone)]
struct SessionRecord {
    data: SessionData,
    touched_at: DateTime<Utc>,
}

/// In-memory implementation of [`SessionStore`] with TTL-based expiry.
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionRecord>>>,
    ttl: Duration,
}

impl InMemorySessionStore {
    /// Create a store whose sessions expire after `ttl` of inactivity.
    pub fn new(ttl: std::time::Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl: Duration::from_std(ttl).unwrap_or_else(|_| Duration::days(1)),
        }
    }

    /// Number of live sessions, expired or not (useful for tests).
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, id: SessionId) -> Result<Option<SessionData>, SessionStoreError> {
        let sessions = self.sessions.read().await;
        let Some(record) = sessions.get(&id) else {
            return Ok(None);
        };
        // Expired records are invisible; removal is left to the sweeper
        if Utc::now() - record.touched_at > self.ttl {
            return Ok(None);
        }
        Ok(Some(record.data.clone()))
    }

    async fn save(&self, id: SessionId, data: SessionData) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(
            id,
            SessionRecord {
                data,
                touched_at: Utc::now(),
            },
        );
        Ok(())
    }

    async fn remove(&self, id: SessionId) -> Result<(), SessionStoreError> {
        self.sessions.write().await.remove(&id);
        Ok(())
    }

    async fn sweep_expired(&self) -> Result<usize, SessionStoreError> {
        let cutoff = Utc::now() - self.ttl;
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, record| record.touched_at >= cutoff);
        Ok(before - sessions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration as StdDuration;

    fn sample_data() -> SessionData {
        let mut data = SessionData::new();
        data.lists.create("Groceries").unwrap();
        data
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let store = InMemorySessionStore::new(StdDuration::from_secs(3600));
        let id = SessionId::new();

        store.save(id, sample_data()).await.unwrap();
        let loaded = store.load(id).await.unwrap().unwrap();
        assert_eq!(loaded.lists.lists()[0].name, "Groceries");
    }

    #[tokio::test]
    async fn test_load_unknown_session_is_none() {
        let store = InMemorySessionStore::new(StdDuration::from_secs(3600));
        assert_eq!(store.load(SessionId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_drops_session() {
        let store = InMemorySessionStore::new(StdDuration::from_secs(3600));
        let id = SessionId::new();

        store.save(id, sample_data()).await.unwrap();
        store.remove(id).await.unwrap();
        assert_eq!(store.load(id).await.unwrap(), None);
        assert_eq!(store.session_count().await, 0);
    }

    #[tokio::test]
    async fn test_expired_sessions_are_invisible_and_swept() {
        let store = InMemorySessionStore::new(StdDuration::from_secs(0));
        let id = SessionId::new();

        store.save(id, sample_data()).await.unwrap();
        tokio::time::sleep(StdDuration::from_millis(5)).await;

        assert_eq!(store.load(id).await.unwrap(), None);
        let dropped = store.sweep_expired().await.unwrap();
        assert_eq!(dropped, 1);
        assert_eq!(store.session_count().await, 0);
    }

    #[tokio::test]
    async fn test_save_refreshes_expiry() {
        let store = InMemorySessionStore::new(StdDuration::from_secs(3600));
        let id = SessionId::new();

        store.save(id, sample_data()).await.unwrap();
        store.save(id, sample_data()).await.unwrap();
        assert_eq!(store.session_count().await, 1);
        assert_eq!(store.sweep_expired().await.unwrap(), 0);
    }
}
