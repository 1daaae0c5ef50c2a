//! Key-value backends for persisted storefront state.
//!
//! The stores only ever see the [`KeyValueStore`] trait. In the browser it is
//! backed by `window.localStorage`; tests and the no-storage fallback use
//! [`MemoryStorage`].

use std::cell::RefCell;
use std::collections::BTreeMap;

use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};

use crate::error::StorageError;

/// String-keyed, string-valued persistent storage.
///
/// Everything runs on the browser's single thread, so implementations take
/// `&self` and use interior mutability where they need it.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// Erase every key, including ones written by other code on the page.
    fn clear(&self) -> Result<(), StorageError>;
}

/// Read `key`, falling back to `legacy` when `key` holds nothing.
pub fn get_item_or_legacy(
    storage: &dyn KeyValueStore,
    key: &str,
    legacy: Option<&str>,
) -> Result<Option<String>, StorageError> {
    if let Some(value) = storage.get_item(key)? {
        return Ok(Some(value));
    }
    let Some(old) = legacy else {
        return Ok(None);
    };
    let value = storage.get_item(old)?;
    if value.is_some() {
        debug!("No value under '{}', reading legacy key '{}'", key, old);
    }
    Ok(value)
}

/// Drop a legacy key once its data lives under the new key.
pub fn remove_legacy(storage: &dyn KeyValueStore, legacy: Option<&str>) {
    if let Some(old) = legacy {
        if let Err(e) = storage.remove_item(old) {
            warn!("Failed to remove legacy key '{}': {}", old, e);
        }
    }
}

/// `window.localStorage`.
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    /// Open the page's local storage.
    /// Fails outside a browser, or when the user agent denies access
    /// (private browsing, disabled cookies).
    pub fn local() -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window object".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(js_error_message(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Read(js_error_message(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(|e| {
            if is_quota_error(&e) {
                StorageError::QuotaExceeded(key.to_string())
            } else {
                StorageError::Write(js_error_message(&e))
            }
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|e| StorageError::Write(js_error_message(&e)))
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.storage
            .clear()
            .map_err(|e| StorageError::Write(js_error_message(&e)))
    }
}

fn is_quota_error(err: &JsValue) -> bool {
    err.dyn_ref::<web_sys::DomException>()
        .map(|ex| ex.name() == "QuotaExceededError")
        .unwrap_or(false)
}

fn js_error_message(err: &JsValue) -> String {
    if let Some(ex) = err.dyn_ref::<web_sys::DomException>() {
        return format!("{}: {}", ex.name(), ex.message());
    }
    err.as_string().unwrap_or_else(|| "Unknown error".to_string())
}

/// In-process storage with an optional byte quota.
///
/// The quota counts the UTF-8 length of every key and value, roughly what
/// browsers charge against their per-origin limit.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<BTreeMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects writes once the stored bytes would exceed `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: RefCell::new(BTreeMap::new()),
            quota: Some(bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota {
            let needed = self.used_bytes_without(key) + key.len() + value.len();
            if needed > quota {
                debug!("Memory storage quota of {} bytes exceeded ({} needed)", quota, needed);
                return Err(StorageError::QuotaExceeded(key.to_string()));
            }
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.entries.borrow_mut().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_get_missing_is_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("nothing").unwrap(), None);
    }

    #[test]
    fn test_memory_set_overwrites() {
        let storage = MemoryStorage::new();
        storage.set_item("k", "one").unwrap();
        storage.set_item("k", "two").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("two"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_memory_remove_and_clear() {
        let storage = MemoryStorage::new();
        storage.set_item("a", "1").unwrap();
        storage.set_item("b", "2").unwrap();

        storage.remove_item("a").unwrap();
        assert_eq!(storage.get_item("a").unwrap(), None);
        // Removing an absent key is fine
        storage.remove_item("a").unwrap();

        storage.clear().unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_memory_quota_rejects_oversized_write() {
        let storage = MemoryStorage::with_quota(10);
        storage.set_item("k", "12345").unwrap();

        let result = storage.set_item("other", "123456789");
        assert_eq!(result, Err(StorageError::QuotaExceeded("other".to_string())));
        // Failed write leaves existing data alone
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("12345"));
        assert_eq!(storage.get_item("other").unwrap(), None);
    }

    #[test]
    fn test_legacy_fallback_only_when_key_empty() {
        let storage = MemoryStorage::new();
        storage.set_item("old", "legacy").unwrap();

        assert_eq!(
            get_item_or_legacy(&storage, "new", Some("old")).unwrap().as_deref(),
            Some("legacy")
        );
        assert_eq!(get_item_or_legacy(&storage, "new", None).unwrap(), None);

        storage.set_item("new", "current").unwrap();
        assert_eq!(
            get_item_or_legacy(&storage, "new", Some("old")).unwrap().as_deref(),
            Some("current")
        );

        remove_legacy(&storage, Some("old"));
        assert_eq!(storage.get_item("old").unwrap(), None);
    }

    #[test]
    fn test_memory_quota_ignores_value_being_replaced() {
        let storage = MemoryStorage::with_quota(10);
        storage.set_item("k", "123456789").unwrap();
        // Replacing the only key only counts the new value
        storage.set_item("k", "987654321").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("987654321"));
    }
}
