//! Ruja Core - Shared domain types.
//!
//! This crate provides the types used across the Ruja storefront components:
//! - `storefront` - Cart manager, search filter, product modal and hand-off
//! - `cli` - Command-line host for the listing and cart pages
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no storage,
//! no clock access outside of id generation. This keeps it lightweight and
//! allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Cart item ids, quantities, products and price parsing

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
