//! Session persistence.
//!
//! A small key-value file under the portal directory. The navigation guard
//! only ever reads the `authToken` key; login and logout write it.

use crate::frontend::services::guard::CredentialLookup;
use crate::utils::paths::portal_data_dir;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tokio::fs;

/// Storage key the navigation guard consults.
pub const AUTH_TOKEN_KEY: &str = "authToken";

const SESSION_FILE: &str = "session.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionData {
    #[serde(flatten)]
    entries: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store backed by the given file.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Creates a store under the default portal directory.
    pub fn open_default() -> Self {
        Self::new(portal_data_dir().join(SESSION_FILE))
    }

    fn read_data(&self) -> Option<SessionData> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&raw).ok()
    }

    /// Reads the stored token.
    ///
    /// A missing file, an unreadable file, and malformed contents all read
    /// as "no token"; there is no error to report that would mean anything
    /// different from "not logged in".
    pub fn read_token(&self) -> Option<String> {
        self.read_data()?.entries.remove(AUTH_TOKEN_KEY)
    }

    /// Saves the token, keeping any other stored keys.
    pub async fn save_token(&self, token: &str) -> Result<()> {
        let mut data = self.read_data().unwrap_or_default();
        data.entries
            .insert(AUTH_TOKEN_KEY.to_string(), token.to_string());

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&data)?;
        fs::write(&self.path, json).await?;

        Ok(())
    }

    /// Removes the token, keeping any other stored keys.
    pub async fn clear_token(&self) -> Result<()> {
        let Some(mut data) = self.read_data() else {
            return Ok(());
        };
        data.entries.remove(AUTH_TOKEN_KEY);

        let json = serde_json::to_string_pretty(&data)?;
        fs::write(&self.path, json).await?;

        Ok(())
    }
}

impl CredentialLookup for SessionStore {
    fn token(&self) -> Option<String> {
        self.read_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn save_then_read_returns_token() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));

        store.save_token("abc123").await.unwrap();
        assert_eq!(store.read_token().as_deref(), Some("abc123"));
    }

    #[tokio::test]
    async fn clear_removes_token() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));

        store.save_token("abc123").await.unwrap();
        store.clear_token().await.unwrap();
        assert_eq!(store.read_token(), None);
    }

    #[test]
    fn missing_file_reads_as_no_token() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));

        assert_eq!(store.read_token(), None);
    }

    #[test]
    fn corrupt_file_reads_as_no_token() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let store = SessionStore::new(path);
        assert_eq!(store.read_token(), None);
    }

    #[tokio::test]
    async fn save_keeps_unrelated_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, r#"{"theme":"dark"}"#).unwrap();

        let store = SessionStore::new(path.clone());
        store.save_token("abc123").await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let entries: BTreeMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(entries.get("theme").map(String::as_str), Some("dark"));
        assert_eq!(entries.get(AUTH_TOKEN_KEY).map(String::as_str), Some("abc123"));
    }

    #[tokio::test]
    async fn clear_on_missing_file_is_a_no_op() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));

        store.clear_token().await.unwrap();
        assert_eq!(store.read_token(), None);
    }
}
