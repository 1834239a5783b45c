//! CLI command implementations.

pub mod cart;
pub mod catalog;

use ruja_storefront::cart::CartManager;
use ruja_storefront::config::StorefrontConfig;
use ruja_storefront::error::Result;
use ruja_storefront::storage::FileStore;

use crate::host::ConsoleHost;

/// Cart manager bound to the configured data directory.
pub type ConsoleCart = CartManager<FileStore, ConsoleHost>;

/// Load the persisted cart.
///
/// # Errors
///
/// Returns an error if the data directory cannot be opened or read.
pub fn open_cart(config: &StorefrontConfig) -> Result<ConsoleCart> {
    let store = FileStore::open(&config.data_dir)?;
    CartManager::load(store, ConsoleHost, config.cart_settings())
}
