//! CLI configuration.

use affiliate_commerce::LinkSettings;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Catalog used when neither `--catalog` nor the config names one.
pub const DEFAULT_CATALOG_PATH: &str = "data/products.json";

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Link generation settings.
    #[serde(default)]
    pub links: LinkSettings,

    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Self = if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))?
        };

        config
            .links
            .validate()
            .with_context(|| format!("Invalid link settings in {}", path))?;

        Ok(config)
    }

    /// Catalog path, preferring an explicit override.
    pub fn catalog_path<'a>(&'a self, override_path: Option<&'a str>) -> &'a str {
        override_path
            .or(self.catalog.path.as_deref())
            .unwrap_or(DEFAULT_CATALOG_PATH)
    }
}

/// Where the product catalog lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the catalog JSON file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_toml() {
        let file = write_config(
            ".toml",
            r#"
[links]
base_url = "https://partners.test"
token_length = 8

[catalog]
path = "catalog.json"
"#,
        );
        let config = CliConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.links.base_url, "https://partners.test");
        assert_eq!(config.links.token_length, 8);
        assert_eq!(config.catalog_path(None), "catalog.json");
    }

    #[test]
    fn test_load_json() {
        let file = write_config(".json", r#"{"links": {"base_url": "http://local.test"}}"#);
        let config = CliConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.links.base_url, "http://local.test");
        assert_eq!(config.links.token_length, 6);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = write_config(".toml", "");
        let config = CliConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.links, LinkSettings::default());
        assert_eq!(config.catalog_path(None), DEFAULT_CATALOG_PATH);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let file = write_config(".toml", "[links]\ntoken_length = 2\n");
        let err = CliConfig::load(file.path().to_str().unwrap()).unwrap_err();
        assert!(format!("{:#}", err).contains("token_length"));
    }

    #[test]
    fn test_override_wins() {
        let config = CliConfig {
            catalog: CatalogConfig {
                path: Some("from-config.json".to_string()),
            },
            ..Default::default()
        };
        assert_eq!(config.catalog_path(Some("cli.json")), "cli.json");
    }
}
