//! Persistent Store using a JSON document on disk

use bridge_traits::{
    error::{BridgeError, Result},
    storage::PersistentStore,
};
use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Directory created under the platform config directory
pub const APP_DIR_NAME: &str = "music-platform-core";

/// Default document name inside the app directory
pub const DEFAULT_FILE_NAME: &str = "config.json";

/// File-backed persistent store
///
/// Keeps every key as a top-level entry of a single JSON object:
/// - The document is re-read on every access, so edits made by another
///   process are picked up
/// - Writes go to a sibling temp file that is renamed over the document
/// - A missing or empty document reads as an empty store
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write of the whole document.
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store backed by the document at `path`
    ///
    /// The file and its parent directories are created lazily on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        debug!(path = ?path, "Initialized JSON file store");
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    /// Create a store at the platform default location
    /// (`<config dir>/music-platform-core/config.json`)
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    /// Resolve the platform default document path
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(DEFAULT_FILE_NAME))
            .ok_or_else(|| {
                BridgeError::NotAvailable(
                    "Could not determine config directory. HOME environment variable may not be set."
                        .to_string(),
                )
            })
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Map<String, Value>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(BridgeError::Io(e)),
        };

        // Empty file is treated as non-existent
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str(&content)? {
            Value::Object(map) => Ok(map),
            other => {
                warn!(path = ?self.path, "Store document is not a JSON object");
                Err(BridgeError::OperationFailed(format!(
                    "Store document {:?} must be a JSON object, found {}",
                    self.path,
                    json_kind(&other)
                )))
            }
        }
    }

    fn write_document(&self, document: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(document)?;
        let temp_path = self.temp_path();
        {
            let mut temp_file = File::create(&temp_path)?;
            temp_file.write_all(content.as_bytes())?;
            temp_file.sync_all()?;
        }

        fs::rename(&temp_path, &self.path)?;
        sync_parent_dir(&self.path)?;
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Flush the directory entry so the rename itself survives a crash
#[cfg(unix)]
fn sync_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            File::open(parent)?.sync_all()?;
            Ok(())
        }
        _ => Ok(()),
    }
}

#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) -> Result<()> {
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl PersistentStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let _guard = self.lock.lock();
        let mut document = self.read_document()?;
        let value = document.remove(key);
        debug!(key = key, found = value.is_some(), "Read store key");
        Ok(value)
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        let _guard = self.lock.lock();
        let mut document = self.read_document()?;
        document.insert(key.to_string(), value);
        self.write_document(&document)?;
        debug!(key = key, "Stored key");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let _guard = self.lock.lock();
        let mut document = self.read_document()?;
        if document.remove(key).is_some() {
            self.write_document(&document)?;
            debug!(key = key, "Deleted key");
        }
        Ok(())
    }

    fn list_keys(&self) -> Result<Vec<String>> {
        let _guard = self.lock.lock();
        Ok(self.read_document()?.keys().cloned().collect())
    }
}
