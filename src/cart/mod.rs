mod store;
mod types;

pub use store::CartStore;
pub use types::{total, Cart, CartLine};
