//! The storefront coordinator.
//!
//! Owns the catalog, cart and preference state as signals plus the two
//! stores, and is handed to the view tree through context. Views read the
//! signals and call the methods here; they never touch storage themselves.

use std::rc::Rc;

use leptos::prelude::*;
use tracing::warn;
use wasm_bindgen_futures::spawn_local;

use crate::cart::{Cart, CartStore};
use crate::catalog::{self, CatalogItem, ItemId};
use crate::config::AppConfig;
use crate::preferences::{PreferenceStore, Preferences};
use crate::storage::{BrowserStorage, KeyValueStore, MemoryStorage};

/// Where the catalog fetch stands.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    Loading,
    Loaded(Vec<CatalogItem>),
    Failed(String),
}

struct Stores {
    cart: CartStore,
    preferences: PreferenceStore,
}

#[derive(Clone, Copy)]
pub struct Storefront {
    config: StoredValue<AppConfig>,
    stores: StoredValue<Stores, LocalStorage>,
    pub catalog: RwSignal<CatalogState>,
    pub cart: RwSignal<Cart>,
    pub preferences: RwSignal<Preferences>,
    pub cart_open: RwSignal<bool>,
    pub menu_open: RwSignal<bool>,
    pub toast: RwSignal<Option<String>>,
}

impl Storefront {
    /// Coordinator over the browser's local storage, or over memory when the
    /// browser refuses access.
    pub fn new(config: AppConfig) -> Self {
        let storage: Rc<dyn KeyValueStore> = match BrowserStorage::local() {
            Ok(storage) => Rc::new(storage),
            Err(e) => {
                warn!("{}; cart and preferences will not survive a reload", e);
                Rc::new(MemoryStorage::new())
            }
        };
        Self::with_storage(config, storage)
    }

    pub fn with_storage(config: AppConfig, storage: Rc<dyn KeyValueStore>) -> Self {
        let cart = CartStore::new(storage.clone(), config.cart_key.clone())
            .with_legacy_key(config.legacy_cart_key.clone());
        let preferences = PreferenceStore::new(storage, config.preferences_key.clone())
            .with_legacy_key(config.legacy_preferences_key.clone());
        let initial_cart = cart.get_cart();
        let initial_prefs = preferences.get_preferences();

        Self {
            config: StoredValue::new(config),
            stores: StoredValue::new_local(Stores { cart, preferences }),
            catalog: RwSignal::new(CatalogState::Loading),
            cart: RwSignal::new(initial_cart),
            preferences: RwSignal::new(initial_prefs),
            cart_open: RwSignal::new(false),
            menu_open: RwSignal::new(false),
            toast: RwSignal::new(None),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Start fetching the catalog; `catalog` moves to `Loaded` or `Failed`.
    pub fn load_catalog(&self) {
        let state = self.catalog;
        let path = self.config.with_value(|c| c.catalog_path.clone());
        state.set(CatalogState::Loading);
        spawn_local(async move {
            match catalog::load_catalog(&path).await {
                Ok(items) => state.set(CatalogState::Loaded(items)),
                Err(e) => {
                    warn!("Catalog unavailable: {}", e);
                    state.set(CatalogState::Failed(e.into()));
                }
            }
        });
    }

    pub fn add(&self, item: &CatalogItem) {
        let cart = self.stores.with_value(|s| s.cart.add_item(item));
        self.cart.set(cart);
        self.cart_open.set(true);
        if self.preferences.get_untracked().notifications {
            self.toast.set(Some(format!("{} added to your cart", item.name)));
        }
    }

    pub fn remove(&self, id: &ItemId) {
        let cart = self.stores.with_value(|s| s.cart.remove_item(id));
        self.cart.set(cart);
    }

    pub fn set_quantity(&self, id: &ItemId, quantity: u32) {
        let cart = self.stores.with_value(|s| s.cart.set_quantity(id, quantity));
        self.cart.set(cart);
    }

    pub fn increment(&self, id: &ItemId) {
        let cart = self.stores.with_value(|s| s.cart.increment(id));
        self.cart.set(cart);
    }

    pub fn decrement(&self, id: &ItemId) {
        let cart = self.stores.with_value(|s| s.cart.decrement(id));
        self.cart.set(cart);
    }

    pub fn clear_cart(&self) {
        let cart = self.stores.with_value(|s| s.cart.clear());
        self.cart.set(cart);
    }

    pub fn toggle_theme(&self) {
        let prefs = self.stores.with_value(|s| s.preferences.toggle_theme());
        self.preferences.set(prefs);
    }

    pub fn toggle_notifications(&self) {
        let prefs = self.stores.with_value(|s| s.preferences.toggle_notifications());
        self.preferences.set(prefs);
    }

    /// Erase everything stored locally and reload both records, which then
    /// read as their defaults.
    pub fn reset_all(&self) {
        let (cart, prefs) = self.stores.with_value(|s| {
            s.preferences.reset_all();
            (s.cart.get_cart(), s.preferences.get_preferences())
        });
        self.cart.set(cart);
        self.preferences.set(prefs);
    }

    pub fn open_cart(&self) {
        self.cart_open.set(true);
    }

    pub fn close_cart(&self) {
        self.cart_open.set(false);
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    pub fn close_menu(&self) {
        self.menu_open.set(false);
    }
}

/// The coordinator provided by [`crate::app::App`].
pub fn use_storefront() -> Storefront {
    expect_context::<Storefront>()
}
