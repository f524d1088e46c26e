//! Product catalog module.
//!
//! Contains the product record and the read-only catalog built from the
//! static data file.

mod product;
mod store;

pub use product::{ActionAvailability, Product, StockStatus};
pub use store::{Catalog, CatalogLoad, SkippedEntry};
