//! Read-only product catalog.

use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;
use tracing::warn;

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;

/// An ordered, immutable list of products with unique ids.
///
/// Order is the display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    products: Vec<Product>,
}

/// A catalog entry that was left out while loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    /// Position of the entry in the source array.
    pub index: usize,
    /// Why it was skipped.
    pub reason: String,
}

/// Result of loading a catalog document.
#[derive(Debug, Clone, Default)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    pub skipped: Vec<SkippedEntry>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(&product.id) {
                return Err(CommerceError::DuplicateProduct(product.id.to_string()));
            }
        }
        Ok(Self { products })
    }

    /// Parse a JSON array of products.
    ///
    /// Entries are decoded one at a time; malformed or duplicate entries are
    /// skipped and reported instead of failing the whole catalog.
    pub fn from_json(json: &str) -> Result<CatalogLoad, CommerceError> {
        let entries: Vec<serde_json::Value> = serde_json::from_str(json)?;

        let mut products: Vec<Product> = Vec::with_capacity(entries.len());
        let mut seen: HashSet<ProductId> = HashSet::with_capacity(entries.len());
        let mut skipped = Vec::new();

        for (index, entry) in entries.into_iter().enumerate() {
            let reason = match serde_json::from_value::<Product>(entry) {
                Err(e) => Some(e.to_string()),
                Ok(product) => match product.validation_error() {
                    Some(reason) => Some(reason),
                    None if seen.contains(&product.id) => {
                        Some(format!("duplicate product id {}", product.id))
                    }
                    None => {
                        seen.insert(product.id.clone());
                        products.push(product);
                        None
                    }
                },
            };

            if let Some(reason) = reason {
                warn!(index, %reason, "skipping catalog entry");
                skipped.push(SkippedEntry { index, reason });
            }
        }

        Ok(CatalogLoad {
            catalog: Self { products },
            skipped,
        })
    }

    /// Read and parse a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<CatalogLoad, CommerceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CommerceError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Products in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
