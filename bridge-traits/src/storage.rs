//! Persistent Storage Abstractions
//!
//! Provides the platform-agnostic key-value store the core keeps its user
//! collections in (favorites, settings, provider registrations).

use serde_json::Value;

use crate::error::Result;
use crate::platform::PlatformSendSync;

/// Durable key-value document store
///
/// Abstracts the host's persisted application store:
/// - Desktop: a JSON document on disk (one top-level entry per key)
/// - Mobile: UserDefaults / DataStore holding serialized JSON
/// - Web: localStorage / IndexedDB
///
/// Every call is synchronous and must be durable once `set` returns `Ok`.
/// Values are whole JSON documents; callers read, modify and write them back
/// in full.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::storage::PersistentStore;
/// use serde_json::json;
///
/// fn remember_volume(store: &dyn PersistentStore) -> Result<()> {
///     store.set("volume", json!(0.8))?;
///     Ok(())
/// }
/// ```
pub trait PersistentStore: PlatformSendSync {
    /// Retrieve the value stored under `key`
    ///
    /// # Returns
    ///
    /// Returns `Ok(None)` if the key doesn't exist.
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: Value) -> Result<()>;

    /// Delete a key
    ///
    /// Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<()>;

    /// List all stored keys
    fn list_keys(&self) -> Result<Vec<String>>;

    /// Check if a key exists
    fn has_key(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MapStore {
        entries: Mutex<BTreeMap<String, Value>>,
    }

    impl PersistentStore for MapStore {
        fn get(&self, key: &str) -> Result<Option<Value>> {
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        fn set(&self, key: &str, value: Value) -> Result<()> {
            self.entries.lock().unwrap().insert(key.to_string(), value);
            Ok(())
        }

        fn delete(&self, key: &str) -> Result<()> {
            self.entries.lock().unwrap().remove(key);
            Ok(())
        }

        fn list_keys(&self) -> Result<Vec<String>> {
            Ok(self.entries.lock().unwrap().keys().cloned().collect())
        }
    }

    #[test]
    fn test_has_key_default_uses_get() {
        let store = MapStore::default();
        assert!(!store.has_key("favorites").unwrap());

        store.set("favorites", serde_json::json!({"tracks": []})).unwrap();
        assert!(store.has_key("favorites").unwrap());

        store.delete("favorites").unwrap();
        assert!(!store.has_key("favorites").unwrap());
    }

    #[test]
    fn test_store_is_object_safe() {
        let store: Box<dyn PersistentStore> = Box::new(MapStore::default());
        store.set("settings", serde_json::json!({"theme": "dark"})).unwrap();
        assert_eq!(store.list_keys().unwrap(), vec!["settings".to_string()]);
    }
}
