//! File-backed bearer-token store.
//!
//! Plain JSON next to the user's other config. The token authorizes calls
//! against the back-office API only; the marketplace OAuth tokens live in
//! the backend, never here.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use baydesk_core::errors::{Error, Result};
use baydesk_connect::TokenProvider;

const CURRENT_VERSION: u32 = 1;

#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

#[derive(Serialize, Deserialize, Default)]
struct StoredToken {
    version: u32,
    #[serde(default)]
    access_token: Option<String>,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Persist a token, creating parent directories as needed.
    pub fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Secret(format!("Failed to create {}: {}", parent.display(), e)))?;
        }
        let stored = StoredToken {
            version: CURRENT_VERSION,
            access_token: Some(token.trim().to_string()),
        };
        let json = serde_json::to_vec_pretty(&stored)
            .map_err(|e| Error::Secret(format!("Failed to encode token file: {}", e)))?;
        fs::write(&self.path, json)
            .map_err(|e| Error::Secret(format!("Failed to write {}: {}", self.path.display(), e)))
    }

    /// Remove the stored token. Missing file counts as already cleared.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Secret(format!(
                "Failed to remove {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read(&self.path)
            .map_err(|e| Error::Secret(format!("Failed to read {}: {}", self.path.display(), e)))?;
        let stored: StoredToken = serde_json::from_slice(&raw)
            .map_err(|e| Error::Secret(format!("Malformed token file {}: {}", self.path.display(), e)))?;
        Ok(stored.access_token.filter(|t| !t.trim().is_empty()))
    }
}

impl TokenProvider for FileTokenStore {
    fn access_token(&self) -> Result<String> {
        self.read()?.ok_or_else(|| {
            Error::Auth(format!(
                "No access token at {}; run `baydesk auth login` first",
                self.path.display()
            ))
        })
    }
}
