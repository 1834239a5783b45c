//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `RUJA_DATA_DIR` - Directory for durable storage (default: `.ruja`)
//! - `RUJA_CATALOG_PATH` - Product catalog JSON
//!   (default: `crates/storefront/content/catalog.json`)
//! - `RUJA_WHATSAPP_NUMBER` - Store contact number, international format
//!   (default: 18094784211)
//! - `RUJA_CURRENCY_PREFIX` - Price prefix used in the catalog (default: `RD$`)

use std::path::PathBuf;

use thiserror::Error;

use ruja_core::PriceFormat;
use ruja_core::types::price::{DEFAULT_PREFIX, DEFAULT_SEPARATOR};

use crate::cart::CartSettings;
use crate::handoff::{DEFAULT_CONTACT_NUMBER, WhatsAppLink};

const DEFAULT_DATA_DIR: &str = ".ruja";
const DEFAULT_CATALOG_PATH: &str = "crates/storefront/content/catalog.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory holding the stored cart
    pub data_dir: PathBuf,
    /// Product catalog file
    pub catalog_path: PathBuf,
    /// WhatsApp hand-off target
    pub whatsapp: WhatsAppLink,
    /// How catalog prices are written
    pub price_format: PriceFormat,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let data_dir = get("RUJA_DATA_DIR").map_or_else(|| DEFAULT_DATA_DIR.into(), PathBuf::from);
        let catalog_path =
            get("RUJA_CATALOG_PATH").map_or_else(|| DEFAULT_CATALOG_PATH.into(), PathBuf::from);

        let number = get("RUJA_WHATSAPP_NUMBER").unwrap_or_else(|| DEFAULT_CONTACT_NUMBER.into());
        let whatsapp = WhatsAppLink::new(&number).map_err(|e| {
            ConfigError::InvalidEnvVar("RUJA_WHATSAPP_NUMBER".to_string(), e.to_string())
        })?;

        let prefix = get("RUJA_CURRENCY_PREFIX").unwrap_or_else(|| DEFAULT_PREFIX.into());
        if prefix.chars().any(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidEnvVar(
                "RUJA_CURRENCY_PREFIX".to_string(),
                "must not contain digits".to_string(),
            ));
        }

        Ok(Self {
            data_dir,
            catalog_path,
            whatsapp,
            price_format: PriceFormat::new(prefix.trim(), DEFAULT_SEPARATOR),
        })
    }

    /// Settings for the cart manager.
    #[must_use]
    pub fn cart_settings(&self) -> CartSettings {
        CartSettings {
            link: self.whatsapp.clone(),
            price_format: self.price_format.clone(),
        }
    }
}
