mod store;
mod types;

pub use store::PreferenceStore;
pub use types::{Preferences, Theme};
