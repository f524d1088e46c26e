//! Link generation settings.

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// Shortest token the generator will produce.
pub const MIN_TOKEN_LENGTH: usize = 5;
/// Longest token the generator will produce.
pub const MAX_TOKEN_LENGTH: usize = 8;

/// Settings that shape generated affiliate links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSettings {
    /// Base URL links are built on (e.g. `https://example.com`).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Number of characters in the random token.
    #[serde(default = "default_token_length")]
    pub token_length: usize,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token_length: default_token_length(),
        }
    }
}

impl LinkSettings {
    /// Check that the settings can produce well-formed links.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let base = self.base_url.trim();
        if base.is_empty() {
            return Err(CommerceError::InvalidConfig("base_url is empty".to_string()));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(CommerceError::InvalidConfig(format!(
                "base_url must start with http:// or https://, got {}",
                base
            )));
        }
        if !(MIN_TOKEN_LENGTH..=MAX_TOKEN_LENGTH).contains(&self.token_length) {
            return Err(CommerceError::InvalidConfig(format!(
                "token_length must be between {} and {}, got {}",
                MIN_TOKEN_LENGTH, MAX_TOKEN_LENGTH, self.token_length
            )));
        }
        Ok(())
    }

    /// Base URL without surrounding whitespace or trailing slashes.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }
}

fn default_base_url() -> String {
    "https://example.com".to_string()
}

fn default_token_length() -> usize {
    6
}
