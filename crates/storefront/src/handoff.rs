//! WhatsApp hand-off links.
//!
//! Orders are not submitted anywhere. Both the product inquiry in the modal and
//! the cart checkout open `https://wa.me/<number>?text=<message>` so a person
//! on the other end of the chat completes the sale.

use thiserror::Error;
use url::Url;

use ruja_core::Product;

/// Store contact number used when none is configured.
pub const DEFAULT_CONTACT_NUMBER: &str = "18094784211";

const WHATSAPP_BASE_URL: &str = "https://wa.me/";

/// Errors building a hand-off link.
#[derive(Debug, Error)]
pub enum HandoffError {
    /// wa.me expects the full international number, digits only.
    #[error("invalid WhatsApp number {0:?}: expected digits only")]
    InvalidNumber(String),

    #[error("invalid hand-off URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Builds deep links into a WhatsApp chat with the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppLink {
    number: String,
}

impl Default for WhatsAppLink {
    fn default() -> Self {
        Self {
            number: DEFAULT_CONTACT_NUMBER.to_owned(),
        }
    }
}

impl WhatsAppLink {
    /// Create a link builder for `number`.
    ///
    /// A leading `+` and spaces or dashes are tolerated and dropped.
    ///
    /// # Errors
    ///
    /// Returns [`HandoffError::InvalidNumber`] if anything but digits remains
    /// or the number is empty.
    pub fn new(number: &str) -> Result<Self, HandoffError> {
        let digits: String = number
            .trim()
            .trim_start_matches('+')
            .chars()
            .filter(|c| *c != ' ' && *c != '-')
            .collect();

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(HandoffError::InvalidNumber(number.to_owned()));
        }

        Ok(Self { number: digits })
    }

    /// The normalized contact number.
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Link that opens the chat with `message` pre-filled.
    ///
    /// Every byte outside `A-Z a-z 0-9 - . _ ~` is percent-encoded, so spaces
    /// become `%20` and line breaks `%0A`. Unlike `encodeURIComponent` this also
    /// escapes `!'()*`; the decoded text is the same.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting URL does not parse.
    pub fn url_for(&self, message: &str) -> Result<Url, HandoffError> {
        let mut url = Url::parse(WHATSAPP_BASE_URL)?.join(&self.number)?;
        url.set_query(Some(&format!("text={}", urlencoding::encode(message))));
        Ok(url)
    }

    /// Link for asking about a single product.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting URL does not parse.
    pub fn inquiry_url(&self, product: &Product) -> Result<Url, HandoffError> {
        self.url_for(&inquiry_message(product))
    }
}

/// Pre-filled message for a single product inquiry.
#[must_use]
pub fn inquiry_message(product: &Product) -> String {
    format!(
        "Hola, estoy interesado en: {} - {} ({})",
        product.title, product.description, product.price
    )
}

/// Decode the `text` parameter of a hand-off link.
#[must_use]
pub fn message_from_url(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == "text")
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_number() {
        assert_eq!(WhatsAppLink::default().number(), "18094784211");
    }

    #[test]
    fn test_number_normalization() {
        let link = WhatsAppLink::new("+1 809-478-4211").unwrap();
        assert_eq!(link.number(), "18094784211");
    }

    #[test]
    fn test_invalid_numbers() {
        for number in ["", "+", "809abc", "wa.me/1809"] {
            assert!(
                matches!(WhatsAppLink::new(number), Err(HandoffError::InvalidNumber(_))),
                "{number:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_url_for_encodes_message() {
        let link = WhatsAppLink::default();
        let url = link.url_for("Hola & adiós\nTotal: RD$5").unwrap();

        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/18094784211");
        assert_eq!(
            url.query(),
            Some("text=Hola%20%26%20adi%C3%B3s%0ATotal%3A%20RD%245")
        );
        assert_eq!(
            message_from_url(&url).as_deref(),
            Some("Hola & adiós\nTotal: RD$5")
        );
    }

    #[test]
    fn test_inquiry_url() {
        let product = Product::new("img/ron.jpg", "Ron Añejo", "Botella 700ml", "RD$1,250.00");
        let url = WhatsAppLink::default().inquiry_url(&product).unwrap();
        assert_eq!(
            message_from_url(&url).as_deref(),
            Some("Hola, estoy interesado en: Ron Añejo - Botella 700ml (RD$1,250.00)")
        );
        assert!(url.query().unwrap().ends_with("%28RD%241%2C250.00%29"));
    }
}
