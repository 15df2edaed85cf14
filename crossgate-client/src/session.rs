//! Session storage
//!
//! The bearer token is the only durable, cross-component mutable state in
//! the client. It sits behind [`SessionStore`] so the gateway and the auth
//! flows never touch storage directly; login success writes it, logout and
//! the gateway's 401 handler clear it, nothing else may.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Abstract token storage injected into the gateway.
pub trait SessionStore: Send + Sync + fmt::Debug {
    /// Current token, if a session exists.
    fn token(&self) -> Option<String>;

    /// Store a new token (login success).
    fn set_token(&self, token: &str);

    /// Drop the session (logout or 401 teardown). Idempotent.
    fn clear(&self);
}

/// Persisted session record.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    token: String,
}

/// File-backed store holding exactly one durable value under a fixed name.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub const FILE_NAME: &'static str = "session.json";

    /// Store rooted at `base_path`; the file is created on first login.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        let path = base_path.into().join(Self::FILE_NAME);
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    fn save(&self, session: &StoredSession) -> std::io::Result<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)
    }

    fn load(&self) -> Option<StoredSession> {
        if !self.path.exists() {
            return None;
        }
        let json = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&json).ok()
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<String> {
        self.load().map(|s| s.token)
    }

    fn set_token(&self, token: &str) {
        let session = StoredSession {
            token: token.to_string(),
        };
        if let Err(e) = self.save(&session) {
            tracing::warn!("failed to persist session: {}", e);
        }
    }

    fn clear(&self) {
        if self.path.exists()
            && let Err(e) = fs::remove_file(&self.path)
        {
            tracing::warn!("failed to remove session file: {}", e);
        }
    }
}

/// In-memory store for tests and short-lived tools.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RwLock<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.token.read().expect("session lock poisoned").clone()
    }

    fn set_token(&self, token: &str) {
        *self.token.write().expect("session lock poisoned") = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.write().expect("session lock poisoned") = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_store_round_trips_token() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());

        assert!(store.token().is_none());
        assert!(!store.exists());

        store.set_token("tok-123");
        assert!(store.exists());
        assert_eq!(store.token().unwrap(), "tok-123");

        // overwrite
        store.set_token("tok-456");
        assert_eq!(store.token().unwrap(), "tok-456");

        store.clear();
        assert!(store.token().is_none());
        assert!(!store.exists());
        // clearing twice is fine
        store.clear();
    }

    #[test]
    fn memory_store_round_trips_token() {
        let store = MemorySessionStore::with_token("abc");
        assert_eq!(store.token().unwrap(), "abc");
        store.clear();
        assert!(store.token().is_none());
        store.set_token("def");
        assert_eq!(store.token().unwrap(), "def");
    }
}
