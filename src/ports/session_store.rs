//! Session persistence port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::session::{SessionData, SessionId};

/// Errors from a session store backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionStoreError {
    #[error("session store backend failed: {0}")]
    Backend(String),
}

/// Storage for per-browser session snapshots.
///
/// Handlers load the whole snapshot, mutate it, and save it back before
/// responding. Last-write-wins between concurrent requests from the same
/// browser is accepted; no cross-request locking is provided.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the snapshot for `id`, if the session exists and has not expired.
    async fn load(&self, id: SessionId) -> Result<Option<SessionData>, SessionStoreError>;

    /// Persist the snapshot for `id`, refreshing its expiry.
    async fn save(&self, id: SessionId, data: SessionData) -> Result<(), SessionStoreError>;

    /// Drop the session entirely.
    async fn remove(&self, id: SessionId) -> Result<(), SessionStoreError>;

    /// Remove sessions idle past their TTL, returning how many were dropped.
    async fn sweep_expired(&self) -> Result<usize, SessionStoreError>;
}
