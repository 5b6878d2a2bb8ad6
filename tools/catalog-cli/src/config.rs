//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_catalog::catalog::Locale;
use storefront_catalog::search::DEFAULT_PER_PAGE;

/// Config file names searched for, in order, from the working directory up.
pub const CONFIG_NAMES: [&str; 3] = ["catalog.toml", ".catalog.toml", "catalog.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Dataset location.
    #[serde(default)]
    pub data: DataConfig,

    /// Listing defaults.
    #[serde(default)]
    pub listing: ListingConfig,
}

impl CatalogConfig {
    /// Load config from a file. `.json` files are JSON, anything else TOML.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Where the category dataset lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON array of categories, relative to the config file's directory.
    #[serde(default = "default_data_path")]
    pub path: String,

    /// Start from the seed dataset when the file does not exist yet.
    #[serde(default = "default_true")]
    pub seed_if_missing: bool,

    /// Optional JSON array of products used to recompute product counts.
    /// The seed products are used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products_path: Option<String>,
}

fn default_data_path() -> String {
    "categories.json".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
            seed_if_missing: true,
            products_path: None,
        }
    }
}

/// Defaults for `catalog list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    #[serde(default = "default_per_page")]
    pub per_page: usize,

    #[serde(default)]
    pub locale: Locale,

    #[serde(default)]
    pub include_inactive: bool,
}

fn default_per_page() -> usize {
    DEFAULT_PER_PAGE
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            locale: Locale::default(),
            include_inactive: false,
        }
    }
}

/// Generate a default catalog.toml.
pub fn generate_default_config() -> String {
    format!(
        r#"# Storefront catalog configuration

[data]
path = "categories.json"
seed_if_missing = true
# products_path = "products.json"

[listing]
per_page = {per_page}
locale = "vi"
include_inactive = false
"#,
        per_page = DEFAULT_PER_PAGE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CatalogConfig::parse("catalog.toml", "").unwrap();
        assert_eq!(config.data.path, "categories.json");
        assert!(config.data.seed_if_missing);
        assert_eq!(config.listing.per_page, DEFAULT_PER_PAGE);
        assert_eq!(config.listing.locale, Locale::Vi);
    }

    #[test]
    fn test_default_config_parses() {
        let config = CatalogConfig::parse("catalog.toml", &generate_default_config()).unwrap();
        assert_eq!(config.data.products_path, None);
        assert!(!config.listing.include_inactive);
    }

    #[test]
    fn test_toml_overrides() {
        let config = CatalogConfig::parse(
            "catalog.toml",
            r#"
[data]
path = "fixtures/cats.json"
seed_if_missing = false
products_path = "fixtures/products.json"

[listing]
per_page = 5
locale = "ja"
"#,
        )
        .unwrap();
        assert_eq!(config.data.path, "fixtures/cats.json");
        assert!(!config.data.seed_if_missing);
        assert_eq!(config.listing.per_page, 5);
        assert_eq!(config.listing.locale, Locale::Ja);
    }

    #[test]
    fn test_json_config() {
        let config = CatalogConfig::parse(
            "catalog.json",
            r#"{"listing": {"locale": "en", "include_inactive": true}}"#,
        )
        .unwrap();
        assert_eq!(config.listing.locale, Locale::En);
        assert!(config.listing.include_inactive);
        assert_eq!(config.data.path, "categories.json");
    }

    #[test]
    fn test_bad_locale_rejected() {
        assert!(CatalogConfig::parse("catalog.toml", "[listing]\nlocale = \"fr\"").is_err());
    }
}
