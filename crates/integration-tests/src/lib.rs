//! Integration tests for the Ruja storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p ruja-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Cart state against a real on-disk store
//! - `checkout_flow` - Listing search, product modal, add-to-cart and hand-off
//!
//! The helpers below build a cart over a temporary data directory so each
//! test starts from a clean slate.

use std::path::Path;

use ruja_core::Product;
use ruja_storefront::cart::{CartManager, CartSettings};
use ruja_storefront::catalog::Catalog;
use ruja_storefront::notify::RecordingHost;
use ruja_storefront::storage::FileStore;

/// Cart over a file store, reporting to a recording host.
pub type FileCart<'a> = CartManager<FileStore, &'a RecordingHost, &'a RecordingHost>;

/// Load the cart stored in `dir`.
///
/// # Panics
///
/// Panics if the store cannot be opened or read.
#[must_use]
#[allow(clippy::expect_used)]
pub fn open_cart<'a>(dir: &Path, host: &'a RecordingHost) -> FileCart<'a> {
    let store = FileStore::open(dir).expect("open file store");
    CartManager::load(store, host, CartSettings::default())
        .expect("load cart")
        .with_display(host)
}

/// The catalog shipped with the storefront crate.
///
/// # Panics
///
/// Panics if the bundled catalog does not parse.
#[must_use]
#[allow(clippy::expect_used)]
pub fn bundled_catalog() -> Catalog {
    Catalog::from_json(include_str!("../../storefront/content/catalog.json"))
        .expect("bundled catalog parses")
}

/// A product with a given price.
#[must_use]
pub fn product(title: &str, price: &str) -> Product {
    Product::new(
        format!("img/{title}.jpg"),
        title,
        format!("{title} de prueba"),
        price,
    )
}
