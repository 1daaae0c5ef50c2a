use std::rc::Rc;

use tracing::{debug, info, warn};

use super::types::Cart;
use crate::catalog::{CatalogItem, ItemId};
use crate::error::StorageError;
use crate::storage::{self, KeyValueStore};

/// Persisted cart. Every mutation is read-modify-write of the whole cart
/// under one storage key, so the last write wins.
///
/// Writes are best effort: a failed write is logged and the returned cart
/// still reflects the change, even though a later read will not.
#[derive(Clone)]
pub struct CartStore {
    storage: Rc<dyn KeyValueStore>,
    key: String,
    legacy_key: Option<String>,
}

impl CartStore {
    pub fn new(storage: Rc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            legacy_key: None,
        }
    }

    /// Also read a cart saved under `key` by an earlier version of the site.
    /// The first successful save moves it to the current key.
    pub fn with_legacy_key(mut self, key: Option<String>) -> Self {
        self.legacy_key = key;
        self
    }

    /// Read the persisted cart. Missing, unreadable or corrupt data reads as
    /// an empty cart.
    pub fn get_cart(&self) -> Cart {
        let stored =
            storage::get_item_or_legacy(&*self.storage, &self.key, self.legacy_key.as_deref());
        let raw = match stored {
            Ok(Some(raw)) => raw,
            Ok(None) => return Cart::new(),
            Err(e) => {
                warn!("Failed to read cart: {}", e);
                return Cart::new();
            }
        };
        match serde_json::from_str::<Cart>(&raw) {
            Ok(cart) => cart,
            Err(e) => {
                warn!("Discarding unreadable cart: {}", e);
                Cart::new()
            }
        }
    }

    /// Persist `cart`, logging and swallowing any failure.
    pub fn save_cart(&self, cart: &Cart) {
        if let Err(e) = self.try_save_cart(cart) {
            warn!("Failed to save cart: {}", e);
        }
    }

    /// Persist `cart`, reporting failure to the caller.
    pub fn try_save_cart(&self, cart: &Cart) -> Result<(), StorageError> {
        let json = serde_json::to_string(cart)
            .map_err(|e| StorageError::Write(format!("Failed to serialize cart: {}", e)))?;
        self.storage.set_item(&self.key, &json)?;
        storage::remove_legacy(&*self.storage, self.legacy_key.as_deref());
        debug!("Saved cart with {} lines", cart.len());
        Ok(())
    }

    /// Add one booking of `item` and persist.
    pub fn add_item(&self, item: &CatalogItem) -> Cart {
        let mut cart = self.get_cart();
        cart.add(item);
        self.save_cart(&cart);
        info!("Added '{}' to cart ({} items)", item.name, cart.item_count());
        cart
    }

    /// Remove the line for `id`, if any, and persist.
    pub fn remove_item(&self, id: &ItemId) -> Cart {
        let mut cart = self.get_cart();
        if cart.remove(id) {
            info!("Removed item {} from cart", id);
        }
        self.save_cart(&cart);
        cart
    }

    /// Set the quantity of the line for `id` and persist. Zero removes the
    /// line; an unknown id leaves the cart unchanged.
    pub fn set_quantity(&self, id: &ItemId, quantity: u32) -> Cart {
        let mut cart = self.get_cart();
        if !cart.set_quantity(id, quantity) {
            debug!("No cart line for item {}", id);
        }
        self.save_cart(&cart);
        cart
    }

    pub fn increment(&self, id: &ItemId) -> Cart {
        let current = self.get_cart().line(id).map(|l| l.quantity);
        match current {
            Some(q) => self.set_quantity(id, q.saturating_add(1)),
            None => self.get_cart(),
        }
    }

    /// Take one booking off the line for `id`; the last one removes the line.
    pub fn decrement(&self, id: &ItemId) -> Cart {
        let current = self.get_cart().line(id).map(|l| l.quantity);
        match current {
            Some(q) => self.set_quantity(id, q.saturating_sub(1)),
            None => self.get_cart(),
        }
    }

    /// Replace the persisted cart with an empty one.
    pub fn clear(&self) -> Cart {
        let cart = Cart::new();
        self.save_cart(&cart);
        info!("Cart cleared");
        cart
    }
}
