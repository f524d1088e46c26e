//! Ephemeral interaction state.
//!
//! Holds the links generated so far (one per product id) and the product
//! currently open in the detail popup. Nothing here is persisted and no
//! operation can fail.

use std::collections::HashMap;

use tracing::debug;

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::link::AffiliateLink;

/// Generated links and popup selection for one session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    links: HashMap<ProductId, AffiliateLink>,
    selected: Option<ProductId>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a link for a product, replacing any previous one.
    pub fn set_link(&mut self, product_id: ProductId, link: AffiliateLink) {
        if let Some(previous) = self.links.insert(product_id.clone(), link) {
            debug!(%product_id, previous = %previous, "replaced affiliate link");
        }
    }

    pub fn link(&self, product_id: &ProductId) -> Option<&AffiliateLink> {
        self.links.get(product_id)
    }

    pub fn has_link(&self, product_id: &ProductId) -> bool {
        self.links.contains_key(product_id)
    }

    /// Number of products with a stored link.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Open the popup on `product`, replacing any current selection.
    pub fn select(&mut self, product: &Product) {
        debug!(product_id = %product.id, "selected product");
        self.selected = Some(product.id.clone());
    }

    /// Close the popup.
    pub fn clear_selection(&mut self) {
        if let Some(product_id) = self.selected.take() {
            debug!(%product_id, "cleared selection");
        }
    }

    pub fn selected(&self) -> Option<&ProductId> {
        self.selected.as_ref()
    }

    pub fn is_popup_open(&self) -> bool {
        self.selected.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::{FixedTokenSource, LinkGenerator};
    use crate::settings::LinkSettings;

    fn link_for(product: &Product, token: &str) -> AffiliateLink {
        LinkGenerator::new(&LinkSettings::default(), FixedTokenSource::new([token]))
            .generate(product)
            .unwrap()
    }

    #[test]
    fn test_set_link_overwrites() {
        let product = Product::new("1", "Widget", 10.0);
        let mut state = InteractionState::new();

        state.set_link(product.id.clone(), link_for(&product, "aaaaa"));
        state.set_link(product.id.clone(), link_for(&product, "bbbbb"));

        assert_eq!(state.link_count(), 1);
        assert_eq!(state.link(&product.id).unwrap().token(), "bbbbb");
    }

    #[test]
    fn test_select_replaces() {
        let widget = Product::new("1", "Widget", 10.0);
        let gadget = Product::new("2", "Gadget", 5.0);
        let mut state = InteractionState::new();

        state.select(&gadget);
        state.select(&widget);
        assert_eq!(state.selected(), Some(&widget.id));
    }

    #[test]
    fn test_clear_selection_is_total() {
        let mut state = InteractionState::new();
        state.clear_selection();
        assert!(!state.is_popup_open());

        state.select(&Product::new("1", "Widget", 10.0));
        state.clear_selection();
        assert!(state.selected().is_none());
    }
}
