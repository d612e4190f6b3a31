//! Session persistence — a JSON-backed `SessionStore` that survives restarts
//! within one session.
//!
//! A terminal has no browser session, so a "session" is any run started
//! within `ttl` of the last write. Older files are treated as a new session
//! and start empty.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use karenos_core::error::StorageError;
use karenos_core::ui_mode::SessionStore;

/// On-disk shape of the session file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionFile {
    pub touched_at: DateTime<Utc>,
    #[serde(default)]
    pub entries: BTreeMap<String, String>,
}

/// Read a session file. Missing files are `Ok(None)`.
pub fn load(path: &Path) -> Result<Option<SessionFile>, StorageError> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| StorageError::Corrupt(e.to_string()))
}

/// Write a session file. Creates parent directories if needed.
pub fn save(path: &Path, file: &SessionFile) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(file).map_err(|e| StorageError::Corrupt(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileSessionStore {
    /// Open the store, starting empty when the file is missing, corrupt or expired.
    pub fn open(path: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self::open_at(path, ttl, Utc::now())
    }

    fn open_at(path: impl Into<PathBuf>, ttl: Duration, now: DateTime<Utc>) -> Self {
        let path = path.into();
        let entries = match load(&path) {
            Ok(Some(file)) if now - file.touched_at <= ttl => file.entries,
            Ok(Some(file)) => {
                tracing::info!(touched_at = %file.touched_at, "session expired, starting fresh");
                BTreeMap::new()
            }
            Ok(None) => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable session file, starting fresh");
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        save(
            &self.path,
            &SessionFile {
                touched_at: Utc::now(),
                entries: self.entries.clone(),
            },
        )
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use karenos_core::ui_mode::RECRUITER_KEY;

    #[test]
    fn roundtrip() {
        let dir = std::env::temp_dir().join("karenos_session_roundtrip");
        let path = dir.join("session.json");
        let _ = std::fs::remove_dir_all(&dir);

        let mut store = FileSessionStore::open(&path, Duration::minutes(30));
        store.set(RECRUITER_KEY, "1").unwrap();

        let reopened = FileSessionStore::open(&path, Duration::minutes(30));
        assert_eq!(reopened.get(RECRUITER_KEY).unwrap().as_deref(), Some("1"));

        let mut reopened = reopened;
        reopened.remove(RECRUITER_KEY).unwrap();
        let again = FileSessionStore::open(&path, Duration::minutes(30));
        assert_eq!(again.get(RECRUITER_KEY).unwrap(), None);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn expired_session_starts_empty() {
        let dir = std::env::temp_dir().join("karenos_session_expired");
        let path = dir.join("session.json");
        let old = Utc::now() - Duration::hours(2);
        let mut entries = BTreeMap::new();
        entries.insert(RECRUITER_KEY.to_string(), "1".to_string());
        save(
            &path,
            &SessionFile {
                touched_at: old,
                entries,
            },
        )
        .unwrap();

        let store = FileSessionStore::open(&path, Duration::minutes(30));
        assert_eq!(store.get(RECRUITER_KEY).unwrap(), None);

        let fresh = FileSessionStore::open_at(&path, Duration::minutes(30), old + Duration::minutes(5));
        assert_eq!(fresh.get(RECRUITER_KEY).unwrap().as_deref(), Some("1"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_is_none() {
        assert!(load(Path::new("/nonexistent/karenos/session.json")).unwrap().is_none());
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = std::env::temp_dir().join("karenos_session_corrupt");
        let path = dir.join("session.json");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "not valid json {{{").unwrap();

        assert!(matches!(load(&path), Err(StorageError::Corrupt(_))));
        let store = FileSessionStore::open(&path, Duration::minutes(30));
        assert_eq!(store.get(RECRUITER_KEY).unwrap(), None);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
