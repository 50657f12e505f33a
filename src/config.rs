// config.rs - Catalog configuration
//
// All fields have defaults, so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::web_app::format::DEFAULT_PLACEHOLDER_IMAGE;

/// Storage slot holding the serialized product collection
pub const DEFAULT_STORAGE_KEY: &str = "products";

/// Storage slot the role collaborator writes the current role to
pub const DEFAULT_ROLE_KEY: &str = "userRole";

/// Currency rendering for prices
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    /// Locale name understood by `num_format::Locale::from_name`
    pub locale: String,
    /// Symbol placed before the amount
    pub symbol: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            locale: "zh".to_string(),
            symbol: "¥".to_string(),
        }
    }
}

/// Settings for the catalog screen
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogConfig {
    pub storage_key: String,
    pub role_key: String,
    pub placeholder_image: String,
    pub currency: CurrencyFormat,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            role_key: DEFAULT_ROLE_KEY.to_string(),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            currency: CurrencyFormat::default(),
        }
    }
}

impl CatalogConfig {
    /// Parse a config from JSON, filling missing fields with defaults
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| CatalogError::Config(e.to_string()))
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_role_key(mut self, key: impl Into<String>) -> Self {
        self.role_key = key.into();
        self
    }

    pub fn with_placeholder_image(mut self, url: impl Into<String>) -> Self {
        self.placeholder_image = url.into();
        self
    }

    pub fn with_currency(mut self, currency: CurrencyFormat) -> Self {
        self.currency = currency;
        self
    }
}
