//! Catalog products and cart lines.

use serde::{Deserialize, Serialize};

use super::id::CartItemId;
use super::quantity::Quantity;

/// A product as shown on the listing page and in the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Image URL.
    pub image: String,
    pub title: String,
    pub description: String,
    /// Formatted price, e.g. `RD$1,234.56`.
    pub price: String,
}

impl Product {
    /// Create a product from its display fields.
    #[must_use]
    pub fn new(
        image: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            image: image.into(),
            title: title.into(),
            description: description.into(),
            price: price.into(),
        }
    }
}

/// One line of the cart.
///
/// Field names and order match the stored JSON record:
/// `{id, image, title, description, price, quantity}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CartItemId,
    pub image: String,
    pub title: String,
    pub description: String,
    pub price: String,
    pub quantity: Quantity,
}

impl CartItem {
    /// Create a line for `product` with a quantity of one.
    #[must_use]
    pub fn from_product(id: CartItemId, product: Product) -> Self {
        let Product {
            image,
            title,
            description,
            price,
        } = product;
        Self {
            id,
            image,
            title,
            description,
            price,
            quantity: Quantity::ONE,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn cafe() -> Product {
        Product::new(
            "img/cafe.jpg",
            "Café Santo Domingo",
            "Tostado molido 453g",
            "RD$350.00",
        )
    }

    #[test]
    fn test_from_product_starts_at_one() {
        let item = CartItem::from_product(CartItemId::new(1), cafe());
        assert_eq!(item.quantity, Quantity::ONE);
        assert_eq!(item.title, cafe().title);
        assert_eq!(item.price, "RD$350.00");
    }

    #[test]
    fn test_json_field_order() {
        let item = CartItem::from_product(CartItemId::new(1_712_345_678_901), cafe());
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"id":1712345678901,"image":"img/cafe.jpg","title":"Café Santo Domingo","description":"Tostado molido 453g","price":"RD$350.00","quantity":1}"#
        );
    }

    #[test]
    fn test_rejects_zero_quantity() {
        let json = r#"{"id":1,"image":"","title":"t","description":"d","price":"RD$1","quantity":0}"#;
        assert!(serde_json::from_str::<CartItem>(json).is_err());
    }
}
