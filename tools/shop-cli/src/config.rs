//! CLI configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use shop_commerce::checkout::{MessageLink, DEFAULT_MESSAGE_BASE_URL};
use shop_commerce::Currency;
use shop_observability::{LogFormat, LogLevel, SessionId, StructuredLogger};

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["shop.toml", ".shop.toml", "shop.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Catalog source configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Checkout hand-off configuration.
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ShopConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Currency the catalog prices are in.
    pub fn currency(&self) -> Result<Currency> {
        Currency::from_code(&self.catalog.currency)
            .ok_or_else(|| anyhow!("Unsupported currency: {}", self.catalog.currency))
    }

    /// Link builder for the checkout hand-off.
    pub fn message_link(&self) -> MessageLink {
        MessageLink::new(&self.checkout.base_url, &self.checkout.recipient)
    }

    /// Build the session logger.
    ///
    /// `verbose` lowers the minimum level to debug.
    pub fn logger(&self, verbose: bool) -> Result<StructuredLogger> {
        let level: LogLevel = if verbose {
            LogLevel::Debug
        } else {
            self.logging.level.parse().map_err(|e: String| anyhow!(e))?
        };
        let format: LogFormat = self.logging.format.parse().map_err(|e: String| anyhow!(e))?;

        Ok(StructuredLogger::new(SessionId::generate())
            .with_component("shop")
            .with_min_level(level)
            .with_format(format))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Where the catalog comes from and how it is priced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// File path or http(s) URL of the catalog document.
    #[serde(default = "default_source")]
    pub source: String,

    /// ISO currency code of catalog prices.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Rewrite drive share links into direct image links.
    #[serde(default = "default_true")]
    pub rewrite_drive_links: bool,

    /// Request timeout for HTTP sources. No timeout when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl CatalogConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn default_source() -> String {
    "products.json".to_string()
}

fn default_currency() -> String {
    Currency::default().code().to_string()
}

fn default_true() -> bool {
    true
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            currency: default_currency(),
            rewrite_drive_links: true,
            timeout_secs: None,
        }
    }
}

/// Checkout deep-link configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Base URL of the messaging service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Recipient phone number, digits only. Empty lets the app pick.
    #[serde(default)]
    pub recipient: String,

    /// Open the link in the browser instead of only printing it.
    #[serde(default = "default_true")]
    pub open_browser: bool,
}

fn default_base_url() -> String {
    DEFAULT_MESSAGE_BASE_URL.to_string()
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            recipient: String::new(),
            open_browser: true,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level: trace, debug, info, warn or error.
    #[serde(default = "default_level")]
    pub level: String,

    /// Line format: json or human.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "human".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

/// Generate a default shop.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Storefront configuration

[catalog]
# Path or http(s) URL of the catalog document
source = "products.json"
currency = "INR"
rewrite_drive_links = true
# timeout_secs = 10

[checkout]
base_url = "{base_url}"
# Phone number in international form, digits only
recipient = ""
open_browser = true

[logging]
level = "warn"
format = "human"
"#,
        base_url = DEFAULT_MESSAGE_BASE_URL
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: ShopConfig = toml::from_str(&generate_default_config()).unwrap();
        let defaults = ShopConfig::default();

        assert_eq!(config.catalog.source, defaults.catalog.source);
        assert_eq!(config.catalog.currency, "INR");
        assert!(config.catalog.rewrite_drive_links);
        assert_eq!(config.catalog.timeout(), None);
        assert_eq!(config.checkout.base_url, "https://wa.me");
        assert_eq!(config.logging.level, defaults.logging.level);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ShopConfig = toml::from_str(
            r#"
            [catalog]
            source = "https://shop.example/products.json"
            timeout_secs = 5

            [checkout]
            recipient = "917671942511"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.currency().unwrap(), Currency::INR);
        assert_eq!(
            config.message_link().url_for("Hi"),
            "https://wa.me/917671942511?text=Hi"
        );
        assert!(config.checkout.open_browser);
    }

    #[test]
    fn test_unknown_currency_rejected() {
        let mut config = ShopConfig::default();
        config.catalog.currency = "XYZ".to_string();
        assert!(config.currency().is_err());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = ShopConfig::default();
        config.logging.level = "loud".to_string();
        assert!(config.logger(false).is_err());
        assert!(config.logger(true).is_ok());
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.json");

        let mut config = ShopConfig::default();
        config.checkout.recipient = "15550100".to_string();
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = ShopConfig::load(&path).unwrap();
        assert_eq!(loaded.checkout.recipient, "15550100");
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.toml");
        std::fs::write(&path, "[catalog\nsource = 1").unwrap();

        let err = ShopConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse TOML config"));
    }
}
