//! Listing search filter.
//!
//! Stateless: on every query change each product card is shown if its name or
//! description contains the query, case-insensitively. An empty query shows
//! every card. There is no index and no debounce.

use ruja_core::Product;

/// Whether a card should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    #[must_use]
    pub const fn is_shown(self) -> bool {
        matches!(self, Self::Shown)
    }
}

impl From<bool> for Visibility {
    fn from(shown: bool) -> Self {
        if shown { Self::Shown } else { Self::Hidden }
    }
}

/// The searchable text of one card on the listing page.
///
/// Either element may be missing on a given page; a missing element simply
/// never matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductCard<'a> {
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
}

impl<'a> From<&'a Product> for ProductCard<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            name: Some(&product.title),
            description: Some(&product.description),
        }
    }
}

/// A lowercased query, ready to test many cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// Whether the query is empty (everything matches).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Whether `card` should be shown for this query.
    #[must_use]
    pub fn matches(&self, card: ProductCard<'_>) -> bool {
        if self.is_empty() {
            return true;
        }
        let contains = |field: Option<&str>| {
            field.is_some_and(|text| text.to_lowercase().contains(&self.needle))
        };
        contains(card.name) || contains(card.description)
    }

    /// Visibility of every card, in order.
    #[must_use]
    pub fn visibility<'a>(
        &self,
        cards: impl IntoIterator<Item = ProductCard<'a>>,
    ) -> Vec<Visibility> {
        cards
            .into_iter()
            .map(|card| Visibility::from(self.matches(card)))
            .collect()
    }
}

/// Products visible for `query`, with their 1-based listing position.
#[must_use]
pub fn filter_products<'a>(query: &str, products: &'a [Product]) -> Vec<(usize, &'a Product)> {
    let query = SearchQuery::new(query);
    let matches: Vec<_> = products
        .iter()
        .enumerate()
        .filter(|(_, product)| query.matches(ProductCard::from(*product)))
        .map(|(index, product)| (index + 1, product))
        .collect();
    tracing::debug!(
        query = %query.needle,
        shown = matches.len(),
        total = products.len(),
        "Filtered listing"
    );
    matches
}
