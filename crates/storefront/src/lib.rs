//! Ruja Storefront library.
//!
//! Client-side storefront helpers: a persisted shopping cart with a WhatsApp
//! checkout hand-off, a listing search filter and a product detail overlay.
//! The host (a web page binding, or the `ruja` CLI) owns presentation and
//! supplies storage and notification through the traits in [`storage`] and
//! [`notify`].
//!
//! # Example
//!
//! ```rust
//! use ruja_core::Product;
//! use ruja_storefront::cart::{CartManager, CartSettings, Checkout};
//! use ruja_storefront::notify::TracingNotifier;
//! use ruja_storefront::storage::MemoryStore;
//!
//! # fn main() -> ruja_storefront::error::Result<()> {
//! let store = MemoryStore::new();
//! let mut cart = CartManager::load(&store, TracingNotifier, CartSettings::default())?;
//!
//! cart.open_product(Product::new("img/ron.jpg", "Ron", "Añejo", "RD$1,250.00"))?;
//! let id = cart.add_current_product()?.expect("a product was viewed");
//! cart.set_quantity(id, 1)?;
//!
//! assert_eq!(cart.render().total, "RD$2500.00");
//! assert!(matches!(cart.checkout()?, Checkout::HandedOff(_)));
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod handoff;
pub mod modal;
pub mod notify;
pub mod search;
pub mod storage;
