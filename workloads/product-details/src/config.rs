//! Page configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use turbo_catalog::global_id::PRODUCT_TYPE;

use crate::error::PageError;

/// Configuration for the product detail page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Catalog addressing.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Page metadata.
    #[serde(default)]
    pub meta: MetaConfig,

    /// Logging.
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl PageConfig {
    /// Load config from a file; `.json` files are read as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PageError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PageError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| {
                PageError::Config(format!("Failed to parse JSON config {}: {}", path.display(), e))
            })
        } else {
            Self::from_toml(&content)
        }
    }

    /// Parse TOML config text.
    pub fn from_toml(content: &str) -> Result<Self, PageError> {
        toml::from_str(content)
            .map_err(|e| PageError::Config(format!("Failed to parse TOML config: {}", e)))
    }
}

/// How route ids map to API ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Object type used when encoding product global ids.
    #[serde(default = "default_global_id_type")]
    pub global_id_type: String,
}

fn default_global_id_type() -> String {
    PRODUCT_TYPE.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            global_id_type: default_global_id_type(),
        }
    }
}

/// Fixed strings written into page metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaConfig {
    /// Content-type tag (`og:type`).
    #[serde(default = "default_content_type")]
    pub content_type: String,

    /// Availability label for purchasable products.
    #[serde(default = "default_in_stock")]
    pub in_stock_label: String,

    /// Availability label otherwise.
    #[serde(default = "default_out_of_stock")]
    pub out_of_stock_label: String,
}

fn default_content_type() -> String {
    "product.item".to_string()
}

fn default_in_stock() -> String {
    "in stock".to_string()
}

fn default_out_of_stock() -> String {
    "out of stock".to_string()
}

impl Default for MetaConfig {
    fn default() -> Self {
        Self {
            content_type: default_content_type(),
            in_stock_label: default_in_stock(),
            out_of_stock_label: default_out_of_stock(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format (for development).
    #[default]
    Human,
    /// JSON format (for log aggregation).
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: LogFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Defaults ===

    #[test]
    fn test_default_config() {
        let config = PageConfig::default();

        assert_eq!(config.catalog.global_id_type, "Product");
        assert_eq!(config.meta.content_type, "product.item");
        assert_eq!(config.meta.in_stock_label, "in stock");
        assert_eq!(config.meta.out_of_stock_label, "out of stock");
        assert_eq!(config.telemetry.filter, "info");
        assert_eq!(config.telemetry.format, LogFormat::Human);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = PageConfig::from_toml("").unwrap();
        assert_eq!(config, PageConfig::default());
    }

    // === Parsing ===

    #[test]
    fn test_partial_toml() {
        let config = PageConfig::from_toml(
            r#"
            [meta]
            content_type = "og:product"

            [telemetry]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.meta.content_type, "og:product");
        assert_eq!(config.meta.in_stock_label, "in stock");
        assert_eq!(config.telemetry.format, LogFormat::Json);
        assert_eq!(config.telemetry.filter, "info");
    }

    #[test]
    fn test_invalid_toml() {
        let err = PageConfig::from_toml("[meta").unwrap_err();
        assert!(matches!(err, PageError::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = PageConfig::load("/nonexistent/pdp.toml").unwrap_err();
        assert!(matches!(err, PageError::Config(_)));
    }

    #[test]
    fn test_load_json_file() {
        let path = std::env::temp_dir().join(format!("pdp-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"catalog": {"global_id_type": "Item"}}"#).unwrap();

        let config = PageConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.catalog.global_id_type, "Item");
        assert_eq!(config.meta, MetaConfig::default());
    }
}
