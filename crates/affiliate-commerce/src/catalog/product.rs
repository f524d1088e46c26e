//! Product record and derived availability.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Whether a product's link actions can be used.
///
/// The generate button and the out-of-stock overlay both read this value,
/// so they cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionAvailability {
    /// Link generation is allowed.
    Available,
    /// Link generation is blocked (product out of stock).
    Disabled,
}

impl ActionAvailability {
    /// Derive availability from a product.
    pub fn for_product(product: &Product) -> Self {
        if product.in_stock {
            ActionAvailability::Available
        } else {
            ActionAvailability::Disabled
        }
    }

    pub fn is_available(&self) -> bool {
        *self == ActionAvailability::Available
    }

    /// Whether the card shows the "Out of Stock" overlay.
    pub fn shows_unavailable_overlay(&self) -> bool {
        *self == ActionAvailability::Disabled
    }
}

/// Stock status shown in the detail popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    InStock,
    OutOfStock,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

/// A product in the affiliate catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Short description shown on the card.
    #[serde(default)]
    pub description: String,
    /// URL of the product image.
    #[serde(default)]
    pub image_url: String,
    /// Commission percentage paid to the affiliate, 0 to 100.
    pub commission: f64,
    /// Whether links can be generated for this product.
    #[serde(default)]
    pub in_stock: bool,
    /// Marketing copy shown in the detail popup.
    #[serde(default)]
    pub marketing_materials: String,
}

impl Product {
    /// Create an in-stock product with empty display strings.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, commission: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            image_url: String::new(),
            commission,
            in_stock: true,
            marketing_materials: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_marketing_materials(mut self, materials: impl Into<String>) -> Self {
        self.marketing_materials = materials.into();
        self
    }

    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    pub fn availability(&self) -> ActionAvailability {
        ActionAvailability::for_product(self)
    }

    pub fn stock_status(&self) -> StockStatus {
        if self.in_stock {
            StockStatus::InStock
        } else {
            StockStatus::OutOfStock
        }
    }

    /// Card label, e.g. `Commission: 10%`.
    pub fn commission_label(&self) -> String {
        format!("Commission: {}%", self.commission)
    }

    /// Why this record cannot be shown, if anything.
    pub(crate) fn validation_error(&self) -> Option<String> {
        if self.id.is_empty() {
            return Some("product id is empty".to_string());
        }
        if !self.commission.is_finite() || !(0.0..=100.0).contains(&self.commission) {
            return Some(format!(
                "commission {} for product {} is outside 0-100",
                self.commission, self.id
            ));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_creation() {
        let product = Product::new("1", "Widget", 10.0);
        assert_eq!(product.id.as_str(), "1");
        assert!(product.in_stock);
        assert_eq!(product.availability(), ActionAvailability::Available);
    }

    #[test]
    fn test_availability_and_overlay_agree() {
        for in_stock in [true, false] {
            let product = Product::new("1", "Widget", 10.0).with_in_stock(in_stock);
            let availability = product.availability();
            assert_eq!(availability.is_available(), in_stock);
            assert_ne!(availability.is_available(), availability.shows_unavailable_overlay());
        }
    }

    #[test]
    fn test_commission_label() {
        assert_eq!(Product::new("1", "A", 10.0).commission_label(), "Commission: 10%");
        assert_eq!(Product::new("1", "A", 12.5).commission_label(), "Commission: 12.5%");
    }

    #[test]
    fn test_stock_status_label() {
        let product = Product::new("2", "Gadget", 5.0).with_in_stock(false);
        assert_eq!(product.stock_status().label(), "Out of Stock");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": 4,
            "name": "Lamp",
            "description": "A desk lamp",
            "imageUrl": "https://img.test/lamp.png",
            "commission": 7.5,
            "inStock": true,
            "marketingMaterials": "Light up your desk"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new("4"));
        assert_eq!(product.image_url, "https://img.test/lamp.png");
        assert_eq!(product.marketing_materials, "Light up your desk");
    }

    #[test]
    fn test_missing_stock_flag_means_out_of_stock() {
        let product: Product =
            serde_json::from_str(r#"{"id": "x", "name": "X", "commission": 1}"#).unwrap();
        assert!(!product.in_stock);
        assert!(product.description.is_empty());
    }

    #[test]
    fn test_validation_error() {
        assert!(Product::new("1", "A", 0.0).validation_error().is_none());
        assert!(Product::new("1", "A", 100.0).validation_error().is_none());
        assert!(Product::new("1", "A", 101.0).validation_error().is_some());
        assert!(Product::new("1", "A", -1.0).validation_error().is_some());
        assert!(Product::new("1", "A", f64::NAN).validation_error().is_some());
        assert!(Product::new("", "A", 1.0).validation_error().is_some());
    }
}
