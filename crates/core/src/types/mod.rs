//! Core types for the Ruja storefront.
//!
//! This module provides type-safe wrappers for the cart's domain concepts.

pub mod id;
pub mod price;
pub mod product;
pub mod quantity;

pub use id::CartItemId;
pub use price::{PriceError, PriceFormat, round_cents};
pub use product::{CartItem, Product};
pub use quantity::{Quantity, QuantityError};
