//! UI mode flags — recruiter mode (session-persisted) and neon mode (cosmetic).
//!
//! Recruiter mode lives under one session key: `"1"` means active, anything
//! else (or nothing) means inactive. Storage failures are swallowed and leave
//! the flag at its in-memory value.

use std::collections::HashMap;

use crate::error::StorageError;

/// Session storage key for recruiter mode.
pub const RECRUITER_KEY: &str = "recruiter-mode";

/// Session-scoped key/value storage.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-process store; lives as long as the page.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Storage disabled by host policy: every operation fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledStore;

impl SessionStore for DisabledStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

/// Process-wide display settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiMode {
    recruiter: bool,
    neon: bool,
}

impl UiMode {
    /// Read recruiter mode from the store; any failure means inactive.
    pub fn init(store: &dyn SessionStore) -> Self {
        let recruiter = match store.get(RECRUITER_KEY) {
            Ok(value) => value.as_deref() == Some("1"),
            Err(e) => {
                tracing::debug!(error = %e, "session storage unreadable, recruiter mode off");
                false
            }
        };
        Self {
            recruiter,
            neon: false,
        }
    }

    pub fn recruiter(&self) -> bool {
        self.recruiter
    }

    pub fn neon(&self) -> bool {
        self.neon
    }

    /// Set recruiter mode and mirror it into the store.
    pub fn set_recruiter(&mut self, active: bool, store: &mut dyn SessionStore) {
        self.recruiter = active;
        let result = if active {
            store.set(RECRUITER_KEY, "1")
        } else {
            store.remove(RECRUITER_KEY)
        };
        if let Err(e) = result {
            tracing::debug!(error = %e, active, "failed to persist recruiter mode");
        }
    }

    pub fn toggle_recruiter(&mut self, store: &mut dyn SessionStore) -> bool {
        self.set_recruiter(!self.recruiter, store);
        self.recruiter
    }

    pub fn toggle_neon(&mut self) -> bool {
        self.neon = !self.neon;
        self.neon
    }
}

/// A key press as the page sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: char,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
}

impl KeyInput {
    pub fn plain(key: char) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
            alt: false,
        }
    }

    /// `k`/`K` with no Ctrl, Meta or Alt.
    pub fn is_neon_shortcut(&self) -> bool {
        matches!(self.key, 'k' | 'K') && !self.ctrl && !self.meta && !self.alt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_reads_only_exact_one() {
        let mut store = MemoryStore::new();
        assert!(!UiMode::init(&store).recruiter());
        store.set(RECRUITER_KEY, "true").unwrap();
        assert!(!UiMode::init(&store).recruiter());
        store.set(RECRUITER_KEY, "1").unwrap();
        assert!(UiMode::init(&store).recruiter());
    }

    #[test]
    fn toggle_mirrors_into_store() {
        let mut store = MemoryStore::new();
        let mut mode = UiMode::init(&store);
        assert!(mode.toggle_recruiter(&mut store));
        assert_eq!(store.get(RECRUITER_KEY).unwrap().as_deref(), Some("1"));
        assert!(!mode.toggle_recruiter(&mut store));
        assert_eq!(store.get(RECRUITER_KEY).unwrap(), None);
    }

    #[test]
    fn disabled_storage_is_tolerated() {
        let mut store = DisabledStore;
        let mut mode = UiMode::init(&store);
        assert!(!mode.recruiter());
        assert!(mode.toggle_recruiter(&mut store));
        assert!(mode.recruiter());
    }

    #[test]
    fn neon_shortcut_requires_no_modifiers() {
        assert!(KeyInput::plain('k').is_neon_shortcut());
        assert!(KeyInput::plain('K').is_neon_shortcut());
        assert!(!KeyInput::plain('j').is_neon_shortcut());
        let ctrl = KeyInput {
            ctrl: true,
            ..KeyInput::plain('k')
        };
        assert!(!ctrl.is_neon_shortcut());
        let alt = KeyInput {
            alt: true,
            ..KeyInput::plain('K')
        };
        assert!(!alt.is_neon_shortcut());
    }

    #[test]
    fn neon_is_independent_of_recruiter() {
        let mut store = MemoryStore::new();
        let mut mode = UiMode::default();
        mode.toggle_neon();
        assert!(mode.neon());
        assert!(!mode.recruiter());
        mode.toggle_recruiter(&mut store);
        assert!(mode.neon());
    }
}
