use std::rc::Rc;

use tracing::{info, warn};

use super::types::Preferences;
use crate::error::StorageError;
use crate::storage::{self, KeyValueStore};

/// Persisted visitor preferences, with the same best-effort write semantics
/// as [`crate::cart::CartStore`].
#[derive(Clone)]
pub struct PreferenceStore {
    storage: Rc<dyn KeyValueStore>,
    key: String,
    legacy_key: Option<String>,
}

impl PreferenceStore {
    pub fn new(storage: Rc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            legacy_key: None,
        }
    }

    /// See [`crate::cart::CartStore::with_legacy_key`].
    pub fn with_legacy_key(mut self, key: Option<String>) -> Self {
        self.legacy_key = key;
        self
    }

    /// Read preferences; anything missing or unreadable gives the defaults.
    pub fn get_preferences(&self) -> Preferences {
        match storage::get_item_or_legacy(&*self.storage, &self.key, self.legacy_key.as_deref()) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Discarding unreadable preferences: {}", e);
                Preferences::default()
            }),
            Ok(None) => Preferences::default(),
            Err(e) => {
                warn!("Failed to read preferences: {}", e);
                Preferences::default()
            }
        }
    }

    pub fn save_preferences(&self, prefs: &Preferences) {
        if let Err(e) = self.try_save_preferences(prefs) {
            warn!("Failed to save preferences: {}", e);
        }
    }

    pub fn try_save_preferences(&self, prefs: &Preferences) -> Result<(), StorageError> {
        let json = serde_json::to_string(prefs)
            .map_err(|e| StorageError::Write(format!("Failed to serialize preferences: {}", e)))?;
        self.storage.set_item(&self.key, &json)?;
        storage::remove_legacy(&*self.storage, self.legacy_key.as_deref());
        Ok(())
    }

    pub fn toggle_theme(&self) -> Preferences {
        let mut prefs = self.get_preferences();
        prefs.theme = prefs.theme.toggled();
        self.save_preferences(&prefs);
        info!("Theme set to {}", prefs.theme.as_str());
        prefs
    }

    pub fn toggle_notifications(&self) -> Preferences {
        let mut prefs = self.get_preferences();
        prefs.notifications = !prefs.notifications;
        self.save_preferences(&prefs);
        info!("Notifications {}", if prefs.notifications { "enabled" } else { "disabled" });
        prefs
    }

    /// Erase the whole local store: preferences, cart and anything else on
    /// this origin.
    pub fn reset_all(&self) {
        match self.storage.clear() {
            Ok(()) => info!("All stored data erased"),
            Err(e) => warn!("Failed to erase stored data: {}", e),
        }
    }
}
