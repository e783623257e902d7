//! # Core Configuration Module
//!
//! Provides configuration management for the favorites core.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a `CoreConfig`
//! instance that holds the persistent store and the settings the favorites
//! service needs. It enforces fail-fast validation so a missing store is
//! reported at startup instead of on the first favorite.
//!
//! ## Required Dependencies
//!
//! - `PersistentStore` - Holds the favorites record, settings and providers
//!
//! When the `desktop-shims` feature is enabled, a `JsonFileStore` is injected
//! automatically if no store is provided.
//!
//! ## Usage
//!
//! ### Desktop Defaults
//!
//! ```ignore
//! use core_runtime::config::CoreConfig;
//!
//! let config = CoreConfig::builder()
//!     .data_dir("/path/to/app-data")
//!     .build()
//!     .expect("Failed to build config");
//! ```
//!
//! ### Custom Store
//!
//! ```ignore
//! use core_runtime::config::CoreConfig;
//! use std::sync::Arc;
//!
//! let config = CoreConfig::builder()
//!     .persistent_store(Arc::new(MyStore::new()))
//!     .auto_download_override(false)
//!     .build()?;
//! ```

use crate::error::{Error, Result};
use bridge_traits::PersistentStore;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Default name of the store document inside `data_dir`
pub const DEFAULT_STORE_FILE_NAME: &str = "config.json";

/// Core configuration for the favorites service.
///
/// Use [`CoreConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct CoreConfig {
    /// Directory holding the store document (None when a store is injected
    /// or the platform default location is used)
    pub data_dir: Option<PathBuf>,

    /// Name of the store document inside `data_dir`
    pub store_file_name: String,

    /// Persistent key-value store (required)
    pub persistent_store: Arc<dyn PersistentStore>,

    /// Feature flags
    pub features: FeatureFlags,
}

impl std::fmt::Debug for CoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoreConfig")
            .field("data_dir", &self.data_dir)
            .field("store_file_name", &self.store_file_name)
            .field("persistent_store", &"PersistentStore { ... }")
            .field("features", &self.features)
            .finish()
    }
}

/// Feature flags control optional behavior of the favorites service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureFlags {
    /// When set, overrides the persisted `autoDownloadFavourites` setting
    pub auto_download_favorites_override: Option<bool>,

    /// Serialize each read-modify-write on the favorites record
    pub serialize_writes: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            auto_download_favorites_override: None,
            serialize_writes: true,
        }
    }
}

impl CoreConfig {
    /// Creates a new builder for constructing a `CoreConfig`.
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder::default()
    }

    /// Validates the configuration and returns an error if invalid.
    ///
    /// This checks:
    /// - Store file name is not empty
    /// - Store file name is a bare file name (no path separators)
    pub fn validate(&self) -> Result<()> {
        validate_store_file_name(&self.store_file_name)?;

        if let Some(dir) = &self.data_dir {
            if dir.as_os_str().is_empty() {
                return Err(Error::Config("Data directory cannot be empty".to_string()));
            }
        }

        Ok(())
    }

    /// Full path of the store document, when the store is file-backed at a
    /// configured directory
    pub fn store_path(&self) -> Option<PathBuf> {
        self.data_dir
            .as_ref()
            .map(|dir| dir.join(&self.store_file_name))
    }
}

fn validate_store_file_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Config("Store file name cannot be empty".to_string()));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::Config(format!(
            "Store file name '{}' must not contain path separators. Use .data_dir() to choose the directory.",
            name
        )));
    }

    Ok(())
}

#[cfg(feature = "desktop-shims")]
fn provide_default_store(
    data_dir: Option<&Path>,
    store_file_name: &str,
) -> Result<Arc<dyn PersistentStore>> {
    use bridge_desktop::JsonFileStore;

    let path = match data_dir {
        Some(dir) => dir.join(store_file_name),
        None => JsonFileStore::default_path()?.with_file_name(store_file_name),
    };

    info!(
        file = %crate::logging::strip_path(&path.to_string_lossy()),
        "Using default JSON file store"
    );

    let store: Arc<dyn PersistentStore> = Arc::new(JsonFileStore::new(path));
    Ok(store)
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_store(
    _data_dir: Option<&Path>,
    _store_file_name: &str,
) -> Result<Arc<dyn PersistentStore>> {
    info!("No persistent store injected and desktop shims are disabled");
    Err(Error::CapabilityMissing {
        capability: "PersistentStore".to_string(),
        message: "PersistentStore implementation is required to keep favorites. \
                 Desktop: ensure the 'desktop-shims' feature is enabled to use the default JsonFileStore. \
                 Mobile: inject a store backed by UserDefaults/DataStore. \
                 Web: inject a localStorage-based store."
            .to_string(),
    })
}

/// Builder for constructing [`CoreConfig`] instances.
///
/// Use this builder to incrementally set configuration options and then
/// call [`build()`](CoreConfigBuilder::build) to create the final config.
#[derive(Default)]
pub struct CoreConfigBuilder {
    data_dir: Option<PathBuf>,
    store_file_name: Option<String>,
    persistent_store: Option<Arc<dyn PersistentStore>>,
    features: FeatureFlags,
}

impl CoreConfigBuilder {
    /// Sets the directory holding the default store document.
    ///
    /// Ignored when a store is injected with
    /// [`persistent_store`](Self::persistent_store).
    pub fn data_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.into());
        self
    }

    /// Sets the store document name (default: `config.json`).
    pub fn store_file_name(mut self, name: impl Into<String>) -> Self {
        self.store_file_name = Some(name.into());
        self
    }

    /// Injects the persistent store implementation.
    pub fn persistent_store(mut self, store: Arc<dyn PersistentStore>) -> Self {
        self.persistent_store = Some(store);
        self
    }

    /// Forces auto-download of newly favorited tracks on or off, regardless
    /// of the persisted setting.
    pub fn auto_download_override(mut self, enabled: bool) -> Self {
        self.features.auto_download_favorites_override = Some(enabled);
        self
    }

    /// Enables or disables serialization of favorites writes.
    pub fn serialize_writes(mut self, enabled: bool) -> Self {
        self.features.serialize_writes = enabled;
        self
    }

    /// Replaces all feature flags at once.
    pub fn features(mut self, features: FeatureFlags) -> Self {
        self.features = features;
        self
    }

    /// Builds the final `CoreConfig` instance.
    ///
    /// # Returns
    ///
    /// Returns `Ok(CoreConfig)` on success, or an error if:
    /// - No store is injected and no default can be provided
    /// - Configuration values are invalid
    pub fn build(self) -> Result<CoreConfig> {
        let store_file_name = self
            .store_file_name
            .unwrap_or_else(|| DEFAULT_STORE_FILE_NAME.to_string());

        // Check the name before it is used to build a default path
        validate_store_file_name(&store_file_name)?;

        let persistent_store = match self.persistent_store {
            Some(store) => store,
            None => provide_default_store(self.data_dir.as_deref(), &store_file_name)?,
        };

        let config = CoreConfig {
            data_dir: self.data_dir,
            store_file_name,
            persistent_store,
            features: self.features,
        };

        config.validate()?;

        Ok(config)
    }
}
