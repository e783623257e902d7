//! Core service façade and bootstrap helpers.
//!
//! This crate wires a host-provided `PersistentStore` (and optionally a
//! download queue) into the favorites core. Desktop apps typically enable the
//! `desktop-shims` feature, which falls back to a JSON file store under the
//! platform config directory; other hosts inject their own store through
//! `CoreConfig`.

pub mod error;
pub mod favorites;

pub use error::{Result, ServiceError};
pub use favorites::{FavoritesCommand, FavoritesService};

pub use bridge_traits::PersistentStore;
pub use core_library::{DownloadSink, FavoritesAction, TrackEquality};
pub use core_runtime::config::{CoreConfig, CoreConfigBuilder, FeatureFlags};

/// Convenience bootstrapper for desktop hosts.
///
/// Keeps favorites in the default JSON store file inside `data_dir`.
///
/// ```no_run
/// # #[cfg(feature = "desktop-shims")]
/// # fn example() -> core_service::Result<()> {
/// use core_service::bootstrap_desktop;
///
/// let service = bootstrap_desktop("/path/to/app-data", None)?;
/// let favorites = service.read_favorites()?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "desktop-shims")]
pub fn bootstrap_desktop(
    data_dir: impl Into<std::path::PathBuf>,
    downloads: Option<std::sync::Arc<dyn DownloadSink>>,
) -> Result<FavoritesService> {
    let config = CoreConfig::builder()
        .data_dir(data_dir)
        .build()
        .map_err(|err| ServiceError::InitializationFailed(err.to_string()))?;
    FavoritesService::new(config, downloads)
}
