use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, RwLock};

use tracing::debug;

use crate::errors::Error;

use super::{SessionCredentials, TokenKey};

/// Key/value storage for the session tokens.
///
/// Every write replaces a single key; implementations must make that
/// replacement atomic with respect to concurrent readers.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: TokenKey) -> Option<String>;

    fn set(&self, key: TokenKey, value: &str) -> Result<(), Error>;

    fn remove(&self, key: TokenKey) -> Result<(), Error>;

    fn credentials(&self) -> Option<SessionCredentials> {
        Some(SessionCredentials {
            access_token: self.get(TokenKey::Access)?,
            refresh_token: self.get(TokenKey::Refresh)?,
        })
    }

    fn store_credentials(&self, credentials: &SessionCredentials) -> Result<(), Error> {
        self.set(TokenKey::Access, &credentials.access_token)?;
        self.set(TokenKey::Refresh, &credentials.refresh_token)
    }

    fn clear(&self) -> Result<(), Error> {
        for key in TokenKey::ALL {
            self.remove(key)?;
        }
        Ok(())
    }
}

/// Process-local store; tokens are lost when the process exits.
#[derive(Default)]
pub struct MemorySessionStore {
    values: RwLock<HashMap<TokenKey, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(credentials: &SessionCredentials) -> Self {
        let mut values = HashMap::new();
        values.insert(TokenKey::Access, credentials.access_token.clone());
        values.insert(TokenKey::Refresh, credentials.refresh_token.clone());
        Self {
            values: RwLock::new(values),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: TokenKey) -> Option<String> {
        let values = self.values.read().unwrap_or_else(|e| e.into_inner());
        values.get(&key).cloned()
    }

    fn set(&self, key: TokenKey, value: &str) -> Result<(), Error> {
        let mut values = self.values.write().unwrap_or_else(|e| e.into_inner());
        values.insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: TokenKey) -> Result<(), Error> {
        let mut values = self.values.write().unwrap_or_else(|e| e.into_inner());
        values.remove(&key);
        Ok(())
    }
}

/// Store backed by a JSON object file, keyed like browser local storage.
pub struct FileSessionStore {
    path: PathBuf,
    values: Mutex<HashMap<String, String>>,
}

impl FileSessionStore {
    /// Opens the file at `path`, starting empty when it does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => HashMap::new(),
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
                Error::Storage(format!("Corrupt session file '{}': {}", path.display(), e))
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(Error::Io(err)),
        };
        debug!(path = %path.display(), keys = values.len(), "session file loaded");
        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.values.lock().unwrap_or_else(|e| e.into_inner())
    }

    // Write-then-rename so a reader never observes a half written file.
    fn persist(&self, values: &HashMap<String, String>) -> Result<(), Error> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        std::fs::write(&tmp, serde_json::to_vec_pretty(values)?)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: TokenKey) -> Option<String> {
        self.lock().get(key.as_str()).cloned()
    }

    // The map only changes once the file on disk holds the new state.
    fn set(&self, key: TokenKey, value: &str) -> Result<(), Error> {
        let mut values = self.lock();
        let mut next = values.clone();
        next.insert(key.as_str().to_string(), value.to_string());
        self.persist(&next)?;
        *values = next;
        Ok(())
    }

    fn remove(&self, key: TokenKey) -> Result<(), Error> {
        let mut values = self.lock();
        if !values.contains_key(key.as_str()) {
            return Ok(());
        }
        let mut next = values.clone();
        next.remove(key.as_str());
        self.persist(&next)?;
        *values = next;
        Ok(())
    }
}
