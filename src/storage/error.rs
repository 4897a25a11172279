use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by [Store](super::Store) operations.
///
/// A missing key is not an error; [get](super::StorageEngine::get) reports it as `None`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be opened or created
    #[error("cannot open database `{}`; {source}", .path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// The `kv` table could not be created, or exists with the wrong shape
    #[error("invalid schema in `{}`; {reason}", .path.display())]
    Schema {
        path: PathBuf,
        reason: String,
        #[source]
        source: Option<rusqlite::Error>,
    },

    /// Operation attempted on a closed handle
    #[error("cannot {operation}; store is not open")]
    NotOpen { operation: &'static str },

    /// An upsert failed to prepare or execute
    #[error("failed to set `{key}`; {source}")]
    Write {
        key: String,
        #[source]
        source: rusqlite::Error,
    },

    /// A lookup or scan failed to prepare or step
    #[error("failed to {operation}{}; {source}", key_context(.key))]
    Read {
        operation: &'static str,
        key: Option<String>,
        #[source]
        source: rusqlite::Error,
    },
}

fn key_context(key: &Option<String>) -> String {
    match key {
        Some(key) => format!(" `{key}`"),
        None => String::new(),
    }
}

impl StoreError {
    /// The key involved in the failed operation, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Write { key, .. } => Some(key),
            Self::Read { key, .. } => key.as_deref(),
            _ => None,
        }
    }
}
