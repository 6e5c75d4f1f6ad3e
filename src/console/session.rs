use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::admin::AdminResponse;

/// A trust decision that survives reloads: the issued token and its lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AdminSession {
    /// Session described by a successful login response, if it carries a token.
    pub fn from_login(response: &AdminResponse) -> Option<Self> {
        if !response.success {
            return None;
        }
        Some(Self {
            token: response.token.clone()?,
            issued_at: response.issued_at?,
            expires_at: response.expires_at?,
        })
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Persistence for the admin session, injected into the console.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self) -> Option<AdminSession>;
    async fn save(&self, session: &AdminSession) -> std::io::Result<()>;
    async fn clear(&self) -> std::io::Result<()>;
}

/// Session kept for the lifetime of the process only.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<AdminSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: AdminSession) -> Self {
        Self {
            session: Mutex::new(Some(session)),
        }
    }

    /// Poisoning is ignored: the slot always holds a whole value.
    fn slot(&self) -> MutexGuard<'_, Option<AdminSession>> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> Option<AdminSession> {
        self.slot().clone()
    }

    async fn save(&self, session: &AdminSession) -> std::io::Result<()> {
        *self.slot() = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> std::io::Result<()> {
        *self.slot() = None;
        Ok(())
    }
}

/// Session persisted as a JSON file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Option<AdminSession> {
        let raw = tokio::fs::read(&self.path).await.ok()?;
        match serde_json::from_slice(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("Ignoring unreadable session file {}: {e}", self.path.display());
                None
            }
        }
    }

    async fn save(&self, session: &AdminSession) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let raw = serde_json::to_vec_pretty(session)?;
        tokio::fs::write(&self.path, raw).await
    }

    async fn clear(&self) -> std::io::Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}
