//! Product detail overlay.
//!
//! The modal holds the currently viewed product. The cart manager owns the
//! holder, so "add to cart" always reads the product the modal last opened.

use askama::Template;
use url::Url;

use ruja_core::Product;

use crate::handoff::{HandoffError, WhatsAppLink};

/// Transient holder for the viewed product.
#[derive(Debug, Default, Clone)]
pub struct ProductModal {
    viewed: Option<Product>,
}

impl ProductModal {
    /// Create a closed modal.
    #[must_use]
    pub const fn new() -> Self {
        Self { viewed: None }
    }

    /// Show `product` and build its inquiry link.
    ///
    /// # Errors
    ///
    /// Returns an error if the inquiry link cannot be built; the modal stays
    /// closed in that case.
    pub fn open(
        &mut self,
        product: Product,
        link: &WhatsAppLink,
    ) -> Result<ProductModalView, HandoffError> {
        let inquiry_url = link.inquiry_url(&product)?;
        let view = ProductModalView {
            image: product.image.clone(),
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price.clone(),
            inquiry_url,
        };
        tracing::debug!(title = %product.title, "Opened product modal");
        self.viewed = Some(product);
        Ok(view)
    }

    /// Hide the overlay and forget the product.
    pub fn close(&mut self) {
        self.viewed = None;
    }

    /// The product currently shown, if any.
    #[must_use]
    pub const fn viewed(&self) -> Option<&Product> {
        self.viewed.as_ref()
    }

    /// Whether the overlay is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.viewed.is_some()
    }
}

/// What the overlay displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductModalView {
    pub image: String,
    pub title: String,
    pub description: String,
    pub price: String,
    /// Pre-filled WhatsApp link asking about this product.
    pub inquiry_url: Url,
}

impl ProductModalView {
    /// Text rendering for terminals.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn to_text(&self) -> askama::Result<String> {
        ProductModalTemplate { product: self }.render()
    }
}

#[derive(Template)]
#[template(path = "product/modal.txt")]
struct ProductModalTemplate<'a> {
    product: &'a ProductModalView,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::handoff::message_from_url;

    fn habichuelas() -> Product {
        Product::new(
            "img/dulce.jpg",
            "Habichuelas con dulce",
            "Frasco 16oz",
            "RD$275.00",
        )
    }

    #[test]
    fn test_open_sets_viewed() {
        let mut modal = ProductModal::new();
        assert!(!modal.is_open());

        let view = modal.open(habichuelas(), &WhatsAppLink::default()).unwrap();
        assert!(modal.is_open());
        assert_eq!(modal.viewed(), Some(&habichuelas()));
        assert_eq!(view.title, "Habichuelas con dulce");
        assert_eq!(view.price, "RD$275.00");
        assert_eq!(
            message_from_url(&view.inquiry_url).as_deref(),
            Some("Hola, estoy interesado en: Habichuelas con dulce - Frasco 16oz (RD$275.00)")
        );
    }

    #[test]
    fn test_open_replaces_previous() {
        let mut modal = ProductModal::new();
        modal.open(habichuelas(), &WhatsAppLink::default()).unwrap();
        let other = Product::new("img/x.jpg", "Casabe", "Paquete", "RD$90.00");
        modal.open(other.clone(), &WhatsAppLink::default()).unwrap();
        assert_eq!(modal.viewed(), Some(&other));
    }

    #[test]
    fn test_close_clears() {
        let mut modal = ProductModal::new();
        modal.open(habichuelas(), &WhatsAppLink::default()).unwrap();
        modal.close();
        assert!(modal.viewed().is_none());
    }

    #[test]
    fn test_to_text() {
        let mut modal = ProductModal::new();
        let text = modal
            .open(habichuelas(), &WhatsAppLink::default())
            .unwrap()
            .to_text()
            .unwrap();
        assert!(text.contains("Habichuelas con dulce"));
        assert!(text.contains("Precio: RD$275.00"));
        assert!(text.contains("https://wa.me/18094784211?text="));
    }
}
