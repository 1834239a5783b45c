//! Cart manager.
//!
//! Owns the cart lines and the viewed product, mirrors the cart to durable
//! storage after every mutation, and hands the order off to WhatsApp at
//! checkout.
//!
//! Every mutation is a complete synchronous cycle:
//! modify in memory, persist, update the counter, re-render.

mod message;
mod view;

use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::instrument;
use url::Url;

use ruja_core::{CartItem, CartItemId, PriceFormat, Product};

use crate::error::Result;
use crate::handoff::WhatsAppLink;
use crate::modal::{ProductModal, ProductModalView};
use crate::notify::{CartDisplay, Notice, Notifier};
use crate::storage::{KeyValueStore, keys};

pub use message::{checkout_message, compute_total};
pub use view::{CartAction, CartLineView, CartView, EMPTY_CART_MESSAGE, ParseActionError};

/// Settings the cart needs from configuration.
#[derive(Debug, Clone, Default)]
pub struct CartSettings {
    pub link: WhatsAppLink,
    pub price_format: PriceFormat,
}

/// Outcome of [`CartManager::checkout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Checkout {
    /// Nothing to order; the shopper was warned and nothing navigated.
    Empty,
    /// The shopper was sent to this WhatsApp link.
    HandedOff(Url),
}

/// Placeholder for hosts without cart elements. Every update is dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDisplay;

impl CartDisplay for NoDisplay {
    fn show_items(&self, _view: &CartView) {}

    fn show_count(&self, _count: usize) {}
}

/// The cart state machine.
pub struct CartManager<S, N, D = NoDisplay> {
    store: S,
    notifier: N,
    display: Option<D>,
    settings: CartSettings,
    cart: Vec<CartItem>,
    modal: ProductModal,
}

impl<S: KeyValueStore, N: Notifier> CartManager<S, N, NoDisplay> {
    /// Load the cart from `store`.
    ///
    /// Missing or malformed data (bad JSON, a zero quantity, duplicate ids)
    /// starts an empty cart.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store itself cannot be read.
    #[instrument(skip_all)]
    pub fn load(store: S, notifier: N, settings: CartSettings) -> Result<Self> {
        let cart = match store.get(keys::CART)? {
            Some(raw) => parse_cart(&raw).unwrap_or_else(|| {
                tracing::warn!("Stored cart is malformed; starting with an empty cart");
                Vec::new()
            }),
            None => Vec::new(),
        };
        tracing::debug!(lines = cart.len(), "Cart loaded");

        Ok(Self {
            store,
            notifier,
            display: None,
            settings,
            cart,
            modal: ProductModal::new(),
        })
    }
}

impl<S: KeyValueStore, N: Notifier, D: CartDisplay> CartManager<S, N, D> {
    /// Attach host elements and bring the counter up to date.
    ///
    /// The item list is left alone; a cart page calls [`Self::redraw`] once it
    /// is ready to show it.
    pub fn with_display<E: CartDisplay>(self, display: E) -> CartManager<S, N, E> {
        let manager = CartManager {
            store: self.store,
            notifier: self.notifier,
            display: Some(display),
            settings: self.settings,
            cart: self.cart,
            modal: self.modal,
        };
        manager.refresh_count();
        manager
    }

    /// Push a fresh rendering to the attached item list, if any.
    pub fn redraw(&self) {
        self.refresh_items();
    }

    /// Cart lines in display order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.cart
    }

    /// Number of lines, as shown on the counter badge.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.cart.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn settings(&self) -> &CartSettings {
        &self.settings
    }

    // =========================================================================
    // Product modal
    // =========================================================================

    /// Show a product in the detail overlay.
    ///
    /// # Errors
    ///
    /// Returns an error if the inquiry link cannot be built.
    #[instrument(skip(self, product), fields(title = %product.title))]
    pub fn open_product(&mut self, product: Product) -> Result<ProductModalView> {
        Ok(self.modal.open(product, &self.settings.link)?)
    }

    /// Close the detail overlay.
    pub fn close_product(&mut self) {
        self.modal.close();
    }

    /// The product in the detail overlay, if it is open.
    #[must_use]
    pub const fn viewed_product(&self) -> Option<&Product> {
        self.modal.viewed()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add the viewed product as a new line with quantity one.
    ///
    /// Does nothing and returns `Ok(None)` when no product is viewed.
    /// Otherwise persists, confirms to the shopper and closes the overlay.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted.
    #[instrument(skip(self))]
    pub fn add_current_product(&mut self) -> Result<Option<CartItemId>> {
        let Some(product) = self.modal.viewed().cloned() else {
            tracing::debug!("No product viewed; nothing to add");
            return Ok(None);
        };

        let taken: Vec<CartItemId> = self.cart.iter().map(|item| item.id).collect();
        let id = CartItemId::generate(&taken);
        tracing::info!(%id, title = %product.title, "Adding to cart");
        self.cart.push(CartItem::from_product(id, product));

        self.persist()?;
        self.notifier.notify(Notice::AddedToCart);
        self.modal.close();
        Ok(Some(id))
    }

    /// Change a line's quantity by `delta`, never below one.
    ///
    /// Returns `false` (and touches nothing) if no line has `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted.
    #[instrument(skip(self))]
    pub fn set_quantity(&mut self, id: CartItemId, delta: i64) -> Result<bool> {
        let Some(item) = self.cart.iter_mut().find(|item| item.id == id) else {
            tracing::debug!("Quantity change for unknown line ignored");
            return Ok(false);
        };

        item.quantity = item.quantity.saturating_add_delta(delta);
        tracing::debug!(quantity = %item.quantity, "Quantity updated");

        self.persist()?;
        self.refresh_items();
        Ok(true)
    }

    /// Remove a line. Returns whether a line was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted.
    #[instrument(skip(self))]
    pub fn remove(&mut self, id: CartItemId) -> Result<bool> {
        let before = self.cart.len();
        self.cart.retain(|item| item.id != id);
        let removed = self.cart.len() != before;
        tracing::debug!(removed, "Remove requested");

        self.persist()?;
        self.refresh_items();
        Ok(removed)
    }

    /// Carry out an action token from the rendered cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted or the hand-off link
    /// cannot be built.
    pub fn apply(&mut self, action: CartAction) -> Result<()> {
        match action {
            CartAction::Adjust { id, delta } => {
                self.set_quantity(id, delta)?;
            }
            CartAction::Remove { id } => {
                self.remove(id)?;
            }
            CartAction::Checkout => {
                self.checkout()?;
            }
        }
        Ok(())
    }

    /// Write the whole cart to storage in a single call.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the store write fails.
    pub fn persist(&self) -> Result<()> {
        let json = serde_json::to_string(&self.cart)?;
        self.store.set(keys::CART, &json)?;
        tracing::trace!(lines = self.cart.len(), "Cart persisted");
        self.refresh_count();
        Ok(())
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Sum of all lines, rounded to cents; `None` if a price is unreadable.
    #[must_use]
    pub fn compute_total(&self) -> Option<Decimal> {
        compute_total(&self.cart, &self.settings.price_format)
    }

    #[must_use]
    pub fn render(&self) -> CartView {
        CartView::build(&self.cart, &self.settings.price_format)
    }

    #[must_use]
    pub fn build_checkout_message(&self) -> String {
        checkout_message(&self.cart, &self.settings.price_format)
    }

    /// Send the shopper to WhatsApp with the order summary.
    ///
    /// With an empty cart the shopper is warned and nothing navigates.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand-off link cannot be built.
    #[instrument(skip(self))]
    pub fn checkout(&self) -> Result<Checkout> {
        if self.cart.is_empty() {
            tracing::info!("Checkout requested with an empty cart");
            self.notifier.notify(Notice::EmptyCart);
            return Ok(Checkout::Empty);
        }

        let url = self.settings.link.url_for(&self.build_checkout_message())?;
        tracing::info!(lines = self.cart.len(), "Handing off checkout to WhatsApp");
        self.notifier.navigate(&url);
        Ok(Checkout::HandedOff(url))
    }

    fn refresh_count(&self) {
        if let Some(display) = &self.display {
            display.show_count(self.cart.len());
        }
    }

    fn refresh_items(&self) {
        if let Some(display) = &self.display {
            display.show_items(&self.render());
        }
    }
}

/// Parse a stored cart, rejecting anything that breaks the cart invariants.
fn parse_cart(raw: &str) -> Option<Vec<CartItem>> {
    let items: Vec<CartItem> = serde_json::from_str(raw).ok()?;
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().all(|item| seen.insert(item.id)).then_some(items)
}
