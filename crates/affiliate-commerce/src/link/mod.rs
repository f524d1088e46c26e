//! Simulated affiliate link generation.
//!
//! Links have the shape `<base>/affiliate/<token>/<product id>`. They are
//! built locally and never registered anywhere.

mod token;

#[cfg(feature = "rand")]
pub use token::RandomTokenSource;
pub use token::{FixedTokenSource, TokenSource, TOKEN_ALPHABET};

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Product;
use crate::settings::LinkSettings;

/// Path segment between the base URL and the token.
pub const AFFILIATE_SEGMENT: &str = "affiliate";

/// A generated affiliate link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffiliateLink {
    url: String,
    token: String,
}

impl AffiliateLink {
    pub fn as_str(&self) -> &str {
        &self.url
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn into_url(self) -> String {
        self.url
    }
}

impl fmt::Display for AffiliateLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl AsRef<str> for AffiliateLink {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

/// Builds affiliate links from a base URL and a token source.
#[derive(Debug, Clone)]
pub struct LinkGenerator<T> {
    base_url: String,
    tokens: T,
}

impl<T: TokenSource> LinkGenerator<T> {
    /// Create a generator from settings.
    ///
    /// Settings are assumed validated; see [`LinkSettings::validate`].
    pub fn new(settings: &LinkSettings, tokens: T) -> Self {
        Self {
            base_url: settings.normalized_base_url().to_string(),
            tokens,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generate a link for a product.
    ///
    /// Returns `None` for out-of-stock products; nothing is drawn from the
    /// token source in that case.
    pub fn generate(&mut self, product: &Product) -> Option<AffiliateLink> {
        if !product.in_stock {
            debug!(product_id = %product.id, "not generating link for out-of-stock product");
            return None;
        }

        let token = self.tokens.next_token();
        let url = format!(
            "{}/{}/{}/{}",
            self.base_url, AFFILIATE_SEGMENT, token, product.id
        );
        debug!(product_id = %product.id, %url, "generated affiliate link");

        Some(AffiliateLink { url, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(tokens: &[&str]) -> LinkGenerator<FixedTokenSource> {
        LinkGenerator::new(
            &LinkSettings::default(),
            FixedTokenSource::new(tokens.iter().copied()),
        )
    }

    #[test]
    fn test_generate_in_stock() {
        let mut links = generator(&["k3x9q"]);
        let link = links.generate(&Product::new("1", "Widget", 10.0)).unwrap();
        assert_eq!(link.as_str(), "https://example.com/affiliate/k3x9q/1");
        assert_eq!(link.token(), "k3x9q");
    }

    #[test]
    fn test_out_of_stock_yields_nothing() {
        let mut links = generator(&["aaaaa"]);
        let product = Product::new("2", "Gadget", 5.0).with_in_stock(false);
        assert!(links.generate(&product).is_none());
        assert_eq!(links.tokens.issued(), 0);
    }

    #[test]
    fn test_base_url_slash_not_doubled() {
        let settings = LinkSettings {
            base_url: "https://partners.test/".to_string(),
            ..Default::default()
        };
        let mut links = LinkGenerator::new(&settings, FixedTokenSource::new(["t0k3n"]));
        let link = links.generate(&Product::new("sku-7", "Mug", 3.0)).unwrap();
        assert_eq!(link.to_string(), "https://partners.test/affiliate/t0k3n/sku-7");
    }

    #[test]
    fn test_fresh_token_each_time() {
        let mut links = generator(&["first", "secnd"]);
        let product = Product::new("1", "Widget", 10.0);
        let a = links.generate(&product).unwrap();
        let b = links.generate(&product).unwrap();
        assert_ne!(a, b);
        assert!(b.as_str().ends_with("/secnd/1"));
    }
}
