//! Product catalog.
//!
//! The listing page's products, loaded from a JSON array of
//! `{image, title, description, price}` records.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use ruja_core::Product;

use crate::search;

/// Errors loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Products offered on the listing page, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is not an array of products.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Load a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), products = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Product at a 1-based listing position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Product> {
        position.checked_sub(1).and_then(|index| self.products.get(index))
    }

    /// Products visible for `query`, with their listing positions.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<(usize, &Product)> {
        search::filter_products(query, &self.products)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const JSON: &str = r#"[
        {"image": "img/cafe.jpg", "title": "Café", "description": "Molido", "price": "RD$350.00"},
        {"image": "img/ron.jpg", "title": "Ron", "description": "Añejo", "price": "RD$1,250.00"}
    ]"#;

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(JSON).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(2).unwrap().title, "Ron");
    }

    #[test]
    fn test_get_is_one_based() {
        let catalog = Catalog::from_json(JSON).unwrap();
        assert!(catalog.get(0).is_none());
        assert_eq!(catalog.get(1).unwrap().title, "Café");
        assert!(catalog.get(3).is_none());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            Catalog::from_json(r#"{"title": "x"}"#),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, JSON).unwrap();
        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.search("añejo").len(), 1);
    }

    #[test]
    fn test_bundled_catalog_parses() {
        let json = include_str!("../content/catalog.json");
        let catalog = Catalog::from_json(json).unwrap();
        assert!(!catalog.is_empty());
    }
}
