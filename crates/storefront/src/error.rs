//! Unified error handling.
//!
//! Provides a unified `StorefrontError` type for everything the cart and its
//! collaborators can fail at. Expected conditions (empty cart, unknown line,
//! nothing viewed) are not errors; they are handled where they occur.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::handoff::HandoffError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Durable storage could not be read or written.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The cart could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration is missing or invalid.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The product catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// A WhatsApp link could not be built.
    #[error("Hand-off error: {0}")]
    Handoff(#[from] HandoffError),

    /// A template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
