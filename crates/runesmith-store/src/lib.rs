//! Last-query persistence.
//!
//! A [`QueryStore`] remembers the most recent accepted query in a single
//! JSON state file so the interactive prompt can offer its values back as
//! defaults. The query core never touches this; only the front-end
//! consults it.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use runesmith_model::Query;

/// Errors raised while reading or writing the state file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access query state at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed query state at {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// File-backed store for the last accepted query.
#[derive(Debug, Clone)]
pub struct QueryStore {
    path: PathBuf,
}

impl QueryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        QueryStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The previously saved query, or `None` when nothing has been saved yet.
    pub fn load(&self) -> Result<Option<Query>, StoreError> {
        if !self.path.exists() {
            debug!("no query state at {}", self.path.display());
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        let query = serde_json::from_str(&content).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(query))
    }

    /// Persist `query`, creating parent directories as needed.
    pub fn save(&self, query: &Query) -> Result<(), StoreError> {
        // parent() is Some("") for a bare file name; nothing to create then
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(query).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!("saved query state to {}", self.path.display());
        Ok(())
    }
}
