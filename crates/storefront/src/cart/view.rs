//! Cart rendering.
//!
//! [`CartView`] is plain data produced from the cart; the host decides how to
//! show it. Two Askama renderings are provided: the item-list markup a web
//! host injects into its cart container, and a text summary for terminals.
//!
//! Buttons in the markup carry a `data-action` token (see [`CartAction`])
//! which the host hands back to [`CartManager::apply`](super::CartManager::apply).

use core::fmt;
use core::str::FromStr;

use askama::Template;
use thiserror::Error;

use ruja_core::{CartItem, CartItemId, PriceFormat};

use super::message::compute_total;

/// Shown instead of the item list when the cart is empty.
pub const EMPTY_CART_MESSAGE: &str = "No hay productos en el carrito";

const CHECKOUT_LABEL: &str = "Proceder al pago";
const REMOVE_LABEL: &str = "Eliminar";

/// A user interaction on the rendered cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    /// Change a line's quantity by `delta`.
    Adjust { id: CartItemId, delta: i64 },
    /// Remove a line.
    Remove { id: CartItemId },
    /// Hand the order off to the store's chat.
    Checkout,
}

/// Error parsing a [`CartAction`] token.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized cart action: {0:?}")]
pub struct ParseActionError(String);

impl fmt::Display for CartAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adjust { id, delta } => write!(f, "quantity:{id}:{delta}"),
            Self::Remove { id } => write!(f, "remove:{id}"),
            Self::Checkout => f.write_str("checkout"),
        }
    }
}

impl FromStr for CartAction {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseActionError(s.to_owned());
        let mut parts = s.split(':');
        let action = match (parts.next(), parts.next(), parts.next()) {
            (Some("checkout"), None, None) => Self::Checkout,
            (Some("remove"), Some(id), None) => Self::Remove {
                id: id.parse().map_err(|_| err())?,
            },
            (Some("quantity"), Some(id), Some(delta)) => Self::Adjust {
                id: id.parse().map_err(|_| err())?,
                delta: delta.parse().map_err(|_| err())?,
            },
            _ => return Err(err()),
        };
        if parts.next().is_some() {
            return Err(err());
        }
        Ok(action)
    }
}

/// Display data for one cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub id: CartItemId,
    pub image: String,
    pub title: String,
    pub description: String,
    pub price: String,
    pub quantity: u32,
    pub decrement: CartAction,
    pub increment: CartAction,
    pub remove: CartAction,
}

impl From<&CartItem> for CartLineView {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id,
            image: item.image.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
            price: item.price.clone(),
            quantity: item.quantity.get(),
            decrement: CartAction::Adjust {
                id: item.id,
                delta: -1,
            },
            increment: CartAction::Adjust {
                id: item.id,
                delta: 1,
            },
            remove: CartAction::Remove { id: item.id },
        }
    }
}

/// Display data for the whole cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartLineView>,
    /// Formatted total, e.g. `RD$250.50` (or `RD$NaN`).
    pub total: String,
    pub checkout: CartAction,
    pub empty_message: &'static str,
}

impl CartView {
    /// Build the view for `items`.
    #[must_use]
    pub fn build(items: &[CartItem], format: &PriceFormat) -> Self {
        Self {
            items: items.iter().map(CartLineView::from).collect(),
            total: format.format_total(compute_total(items, format)),
            checkout: CartAction::Checkout,
            empty_message: EMPTY_CART_MESSAGE,
        }
    }

    /// Whether the empty-state should be shown instead of the list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item-list markup for a web host's cart container.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn to_html(&self) -> askama::Result<String> {
        CartItemsTemplate {
            cart: self,
            checkout_label: CHECKOUT_LABEL,
            remove_label: REMOVE_LABEL,
        }
        .render()
    }

    /// Text summary for terminals.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn to_text(&self) -> askama::Result<String> {
        CartSummaryTemplate { cart: self }.render()
    }
}

/// Cart items fragment template.
#[derive(Template)]
#[template(path = "cart/items.html")]
struct CartItemsTemplate<'a> {
    cart: &'a CartView,
    checkout_label: &'static str,
    remove_label: &'static str,
}

/// Cart summary template.
#[derive(Template)]
#[template(path = "cart/summary.txt")]
struct CartSummaryTemplate<'a> {
    cart: &'a CartView,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ruja_core::Product;

    fn items() -> Vec<CartItem> {
        vec![
            CartItem::from_product(
                CartItemId::new(11),
                Product::new("img/a.jpg", "Mamajuana", "Botella curada", "RD$100.00"),
            ),
            CartItem::from_product(
                CartItemId::new(12),
                Product::new("img/b.jpg", "Larimar", "Pulsera <plata>", "RD$50.50"),
            ),
        ]
    }

    #[test]
    fn test_action_tokens() {
        let id = CartItemId::new(1_712_345_678_901);
        let cases = [
            (CartAction::Adjust { id, delta: -1 }, "quantity:1712345678901:-1"),
            (CartAction::Adjust { id, delta: 1 }, "quantity:1712345678901:1"),
            (CartAction::Remove { id }, "remove:1712345678901"),
            (CartAction::Checkout, "checkout"),
        ];
        for (action, token) in cases {
            assert_eq!(action.to_string(), token);
            assert_eq!(token.parse::<CartAction>().unwrap(), action);
        }
    }

    #[test]
    fn test_action_parse_errors() {
        for token in ["", "remove", "remove:x", "quantity:1", "quantity:1:a", "checkout:1", "remove:1:2"] {
            assert!(token.parse::<CartAction>().is_err(), "{token:?}");
        }
    }

    #[test]
    fn test_build_view() {
        let view = CartView::build(&items(), &PriceFormat::default());
        assert!(!view.is_empty());
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.total, "RD$150.50");
        let first = view.items.first().unwrap();
        assert_eq!(first.quantity, 1);
        assert_eq!(
            first.decrement,
            CartAction::Adjust {
                id: CartItemId::new(11),
                delta: -1
            }
        );
    }

    #[test]
    fn test_html_lists_items() {
        let html = CartView::build(&items(), &PriceFormat::default())
            .to_html()
            .unwrap();
        assert!(html.contains(r#"class="cart-item" data-id="11""#));
        assert!(html.contains("Mamajuana"));
        assert!(html.contains(r#"data-action="quantity:12:-1""#));
        assert!(html.contains(r#"data-action="remove:12""#));
        assert!(html.contains("Total: RD$150.50"));
        assert!(html.contains("Proceder al pago"));
    }

    #[test]
    fn test_html_escapes_fields() {
        let html = CartView::build(&items(), &PriceFormat::default())
            .to_html()
            .unwrap();
        assert!(html.contains("Pulsera &#60;plata&#62;"));
        assert!(!html.contains("<plata>"));
    }

    #[test]
    fn test_html_empty_state() {
        let html = CartView::build(&[], &PriceFormat::default())
            .to_html()
            .unwrap();
        assert!(html.contains("<p>No hay productos en el carrito</p>"));
        assert!(!html.contains("cart-total"));
    }

    #[test]
    fn test_text_summary() {
        let text = CartView::build(&items(), &PriceFormat::default())
            .to_text()
            .unwrap();
        assert!(text.contains("[11] Mamajuana - Botella curada"));
        assert!(text.contains("Pulsera <plata>"));
        assert!(text.contains("Total: RD$150.50"));

        let empty = CartView::build(&[], &PriceFormat::default())
            .to_text()
            .unwrap();
        assert!(empty.contains(EMPTY_CART_MESSAGE));
    }
}
