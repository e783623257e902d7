//! # Desktop Bridge Implementations
//!
//! Default implementations of bridge traits for desktop platforms
//! (macOS, Windows, Linux).
//!
//! ## Overview
//!
//! This crate provides production-ready implementations of the bridge traits
//! using desktop-appropriate libraries:
//! - `PersistentStore` using a JSON document under the platform config
//!   directory (`dirs`)
//! - `PersistentStore` held in memory for tests and ephemeral sessions
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::JsonFileStore;
//! use bridge_traits::PersistentStore;
//! use std::sync::Arc;
//!
//! let store: Arc<dyn PersistentStore> = Arc::new(JsonFileStore::open_default()?);
//! // Use in core configuration
//! ```

mod json_store;
mod memory_store;

pub use json_store::{JsonFileStore, APP_DIR_NAME, DEFAULT_FILE_NAME};
pub use memory_store::MemoryStore;
