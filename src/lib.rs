pub mod app;
pub mod cart;
pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod pages;
pub mod preferences;
pub mod state;
pub mod storage;
pub mod theme;

pub use cart::{Cart, CartLine, CartStore};
pub use catalog::{CatalogItem, ItemId};
pub use error::{LoadError, StorageError};
pub use preferences::{PreferenceStore, Preferences, Theme};
