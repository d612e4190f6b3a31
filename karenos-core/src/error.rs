//! Error types for configuration loading and session storage.
//!
//! Neither kind is fatal to the page: config errors surface at start-up in
//! the binaries, storage errors are swallowed by [`crate::ui_mode::UiMode`].

use std::path::PathBuf;

/// Errors that can occur while loading a `KarenConfig`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid TOML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Errors raised by a [`crate::ui_mode::SessionStore`].
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Session storage is unavailable")]
    Unavailable,
    #[error("Session storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Session storage is corrupt: {0}")]
    Corrupt(String),
}
