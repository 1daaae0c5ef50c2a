/// Catalog path relative to the page.
pub const DEFAULT_CATALOG_PATH: &str = "data/sessions.json";
/// Local storage key holding the cart.
pub const DEFAULT_CART_KEY: &str = "wellness_cart";
/// Local storage key holding the preferences record.
pub const DEFAULT_PREFERENCES_KEY: &str = "user_preferences";
/// Keys the earlier version of the site wrote; read once and migrated.
pub const LEGACY_CART_KEY: &str = "carrito_espiritual";
pub const LEGACY_PREFERENCES_KEY: &str = "preferencias_usuario";
/// Shown on session cards whose catalog entry has no image.
pub const DEFAULT_SESSION_IMAGE: &str =
    "https://images.unsplash.com/photo-1506126613408-eca07ce68773?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80";

/// Where the storefront finds its catalog and keeps its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub catalog_path: String,
    pub cart_key: String,
    pub preferences_key: String,
    /// Read when `cart_key` holds nothing; removed after the first save.
    pub legacy_cart_key: Option<String>,
    pub legacy_preferences_key: Option<String>,
    pub fallback_image: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: DEFAULT_CATALOG_PATH.to_string(),
            cart_key: DEFAULT_CART_KEY.to_string(),
            preferences_key: DEFAULT_PREFERENCES_KEY.to_string(),
            legacy_cart_key: Some(LEGACY_CART_KEY.to_string()),
            legacy_preferences_key: Some(LEGACY_PREFERENCES_KEY.to_string()),
            fallback_image: DEFAULT_SESSION_IMAGE.to_string(),
        }
    }
}
