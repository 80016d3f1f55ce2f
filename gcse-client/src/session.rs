//! Bearer credential storage.
//!
//! The access layer considers a caller authenticated when a token is stored, nothing more:
//! there is no expiry check, no signature validation and no refresh. The backend is the only
//! authority on whether a token is still good, and a stale token shows up as a failed
//! authenticated call.
//!
//! Storage sits behind the [`CredentialStore`] trait so the token can live in memory, in a
//! JSON file, or anywhere else a host provides.

use serde_json::{Map, Value};
use std::{
    fmt, fs,
    io::ErrorKind,
    path::PathBuf,
    sync::{Arc, Mutex, PoisonError, RwLock},
};
use tracing::{debug, info, warn};

use crate::config::CredentialsConfig;
use crate::errors::{Error, Result};

/// Key the token is stored under
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Where logout sends the user
pub const LANDING_PATH: &str = "/";

/// Backing storage for the bearer token.
pub trait CredentialStore: Send + Sync {
    /// Current token, or `None` when nothing is stored
    fn get(&self) -> Option<String>;

    fn set(&self, token: &str) -> Result<()>;

    fn clear(&self) -> Result<()>;
}

/// Token held in process memory.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: RwLock<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Option<String> {
        self.token.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set(&self, token: &str) -> Result<()> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

/// Token persisted as a JSON object on disk.
///
/// The file is a flat key/value object, so keys other than [`AUTH_TOKEN_KEY`] written by other
/// tools survive a `set` or `clear`.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn read_entries(&self) -> Result<Map<String, Value>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => {
                return Err(Error::Storage {
                    message: format!("failed to read {}: {e}", self.path.display()),
                });
            }
        };

        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(entries)) => Ok(entries),
            Ok(_) | Err(_) => {
                warn!("Ignoring malformed credential file at {}", self.path.display());
                Ok(Map::new())
            }
        }
    }

    fn write_entries(&self, entries: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::Storage {
                message: format!("failed to create {}: {e}", parent.display()),
            })?;
        }

        let body = serde_json::to_vec_pretty(entries)?;
        fs::write(&self.path, body).map_err(|e| Error::Storage {
            message: format!("failed to write {}: {e}", self.path.display()),
        })
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self) -> Option<String> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        match self.read_entries() {
            Ok(entries) => entries.get(AUTH_TOKEN_KEY).and_then(Value::as_str).map(str::to_owned),
            Err(e) => {
                warn!("Treating credentials as absent: {e}");
                None
            }
        }
    }

    fn set(&self, token: &str) -> Result<()> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.read_entries()?;
        entries.insert(AUTH_TOKEN_KEY.to_string(), Value::String(token.to_string()));
        self.write_entries(&entries)
    }

    fn clear(&self) -> Result<()> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.read_entries()?;
        if entries.remove(AUTH_TOKEN_KEY).is_none() {
            return Ok(());
        }
        self.write_entries(&entries)
    }
}

type NavigateFn = dyn Fn(&str) + Send + Sync;

/// The caller's authentication context, shared by every request the client makes.
///
/// Cloning is cheap; clones share the same store.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn CredentialStore>,
    navigate: Option<Arc<NavigateFn>>,
}

impl Session {
    pub fn new(store: impl CredentialStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
            navigate: None,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryCredentialStore::new())
    }

    pub fn from_config(config: &CredentialsConfig) -> Self {
        match config {
            CredentialsConfig::Memory => Self::in_memory(),
            CredentialsConfig::File { path } => Self::new(FileCredentialStore::new(path.clone())),
        }
    }

    /// Hook invoked with [`LANDING_PATH`] after logout, e.g. to reset the router
    pub fn with_navigator(mut self, navigate: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.navigate = Some(Arc::new(navigate));
        self
    }

    pub fn store_token(&self, token: &str) -> Result<()> {
        self.store.set(token)?;
        debug!("Stored bearer token");
        Ok(())
    }

    pub fn token(&self) -> Option<String> {
        self.store.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Forget the token and go back to the landing page
    pub fn logout(&self) -> Result<()> {
        self.store.clear()?;
        info!("Logged out");
        if let Some(navigate) = &self.navigate {
            navigate(LANDING_PATH);
        }
        Ok(())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .field("navigator", &self.navigate.is_some())
            .finish()
    }
}
