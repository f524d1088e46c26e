//! Product view: page model and action dispatch.
//!
//! `ProductView` ties the catalog, the interaction state and a link
//! generator together. Front-ends render [`PageModel`] and feed user input
//! back through [`ProductView::dispatch`].
//!
//! # Popup events
//!
//! The detail popup has two stacked click targets. The backdrop (and the
//! close button) dismiss the popup. The panel does not: a click inside the
//! panel is delivered as [`PopupTarget::Panel`] and leaves the selection
//! alone. Front-ends must report the innermost target they saw and must not
//! also forward the same click as a backdrop click.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::catalog::{ActionAvailability, Catalog, Product, StockStatus};
use crate::clipboard::{Clipboard, CopyNotice};
use crate::ids::ProductId;
use crate::interaction::InteractionState;
use crate::link::{LinkGenerator, TokenSource};

/// Heading shown above the product grid.
pub const PAGE_TITLE: &str = "Affiliate Marketing Products";

/// Where a click on the open popup landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PopupTarget {
    /// The dimmed overlay around the panel.
    Backdrop,
    /// Anywhere inside the detail panel.
    Panel,
    /// The panel's close button.
    CloseButton,
}

impl PopupTarget {
    /// Whether a click on this target closes the popup.
    pub fn dismisses(&self) -> bool {
        match self {
            PopupTarget::Backdrop | PopupTarget::CloseButton => true,
            PopupTarget::Panel => false,
        }
    }
}

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    ShowDetails(ProductId),
    GenerateLink(ProductId),
    CopyLink(ProductId),
    PopupClick(PopupTarget),
}

/// What a dispatched action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// State changed; re-render.
    StateChanged,
    /// Nothing happened.
    Ignored,
    /// The caller should write this text to the clipboard.
    WriteClipboard(String),
}

/// One product card in the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub product_id: ProductId,
    pub name: String,
    pub image_url: String,
    pub description: String,
    pub commission_label: String,
    pub availability: ActionAvailability,
    /// Generated link, shown read-only with a copy action.
    pub link: Option<String>,
}

impl ProductCard {
    fn from_product(product: &Product, state: &InteractionState) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            description: product.description.clone(),
            commission_label: product.commission_label(),
            availability: product.availability(),
            link: state.link(&product.id).map(|l| l.to_string()),
        }
    }

    pub fn generate_enabled(&self) -> bool {
        self.availability.is_available()
    }

    pub fn shows_out_of_stock(&self) -> bool {
        self.availability.shows_unavailable_overlay()
    }
}

/// Full detail of the selected product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailPopup {
    pub product_id: ProductId,
    pub name: String,
    pub image_url: String,
    pub description: String,
    pub commission_label: String,
    pub marketing_materials: String,
    pub stock: StockStatus,
}

impl DetailPopup {
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            description: product.description.clone(),
            commission_label: product.commission_label(),
            marketing_materials: product.marketing_materials.clone(),
            stock: product.stock_status(),
        }
    }

    pub fn stock_label(&self) -> &'static str {
        self.stock.label()
    }
}

/// Everything a front-end needs to draw the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageModel {
    pub title: &'static str,
    pub cards: Vec<ProductCard>,
    pub popup: Option<DetailPopup>,
}

/// Catalog plus interaction state for one session.
#[derive(Debug, Clone)]
pub struct ProductView<T> {
    catalog: Arc<Catalog>,
    state: InteractionState,
    generator: LinkGenerator<T>,
}

impl<T: TokenSource> ProductView<T> {
    pub fn new(catalog: Arc<Catalog>, generator: LinkGenerator<T>) -> Self {
        Self {
            catalog,
            state: InteractionState::new(),
            generator,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Apply a user action. Never fails and performs no I/O.
    pub fn dispatch(&mut self, action: UserAction) -> ActionOutcome {
        match action {
            UserAction::ShowDetails(id) => match self.catalog.get(&id) {
                Some(product) => {
                    self.state.select(product);
                    ActionOutcome::StateChanged
                }
                None => ignore("show details", &id),
            },
            UserAction::GenerateLink(id) => {
                let Some(product) = self.catalog.get(&id) else {
                    return ignore("generate link", &id);
                };
                match self.generator.generate(product) {
                    Some(link) => {
                        self.state.set_link(id, link);
                        ActionOutcome::StateChanged
                    }
                    None => ActionOutcome::Ignored,
                }
            }
            UserAction::CopyLink(id) => match self.state.link(&id) {
                Some(link) => ActionOutcome::WriteClipboard(link.to_string()),
                None => ignore("copy link", &id),
            },
            UserAction::PopupClick(target) => {
                if self.state.is_popup_open() && target.dismisses() {
                    self.state.clear_selection();
                    ActionOutcome::StateChanged
                } else {
                    ActionOutcome::Ignored
                }
            }
        }
    }

    /// Copy a product's stored link with a synchronous clipboard.
    ///
    /// Returns `None` when the product has no link yet.
    pub fn copy_link<C: Clipboard>(
        &mut self,
        product_id: &ProductId,
        clipboard: &mut C,
    ) -> Option<CopyNotice> {
        match self.dispatch(UserAction::CopyLink(product_id.clone())) {
            ActionOutcome::WriteClipboard(text) => {
                Some(CopyNotice::from_result(clipboard.write_text(&text)))
            }
            _ => None,
        }
    }

    /// Build the page model from the current state.
    pub fn render(&self) -> PageModel {
        let cards = self
            .catalog
            .iter()
            .map(|product| ProductCard::from_product(product, &self.state))
            .collect();

        PageModel {
            title: PAGE_TITLE,
            cards,
            popup: self.selected_product().map(DetailPopup::from_product),
        }
    }

    /// The product open in the popup, if any.
    pub fn selected_product(&self) -> Option<&Product> {
        self.state.selected().and_then(|id| self.catalog.get(id))
    }
}

fn ignore(action: &str, id: &ProductId) -> ActionOutcome {
    debug!(action, product_id = %id, "ignoring action for unknown product");
    ActionOutcome::Ignored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{ClipboardError, RecordingClipboard};
    use crate::link::FixedTokenSource;
    use crate::settings::LinkSettings;

    fn view() -> ProductView<FixedTokenSource> {
        let catalog = Catalog::new(vec![
            Product::new(1u64, "Widget", 10.0)
                .with_description("A useful widget")
                .with_marketing_materials("Buy two"),
            Product::new(2u64, "Gadget", 5.0).with_in_stock(false),
        ])
        .unwrap();
        let generator = LinkGenerator::new(
            &LinkSettings::default(),
            FixedTokenSource::new(["tok01", "tok02"]),
        );
        ProductView::new(Arc::new(catalog), generator)
    }

    fn id(n: u64) -> ProductId {
        ProductId::from(n)
    }

    #[test]
    fn test_render_initial() {
        let page = view().render();
        assert_eq!(page.title, "Affiliate Marketing Products");
        assert_eq!(page.cards.len(), 2);
        assert!(page.popup.is_none());
        assert!(page.cards.iter().all(|c| c.link.is_none()));
        assert_eq!(page.cards[0].commission_label, "Commission: 10%");
    }

    #[test]
    fn test_card_controls_agree_with_stock() {
        let page = view().render();
        for card in &page.cards {
            assert_ne!(card.generate_enabled(), card.shows_out_of_stock());
        }
        assert!(page.cards[0].generate_enabled());
        assert!(page.cards[1].shows_out_of_stock());
    }

    #[test]
    fn test_generate_then_render_link() {
        let mut view = view();
        assert_eq!(view.dispatch(UserAction::GenerateLink(id(1))), ActionOutcome::StateChanged);
        let page = view.render();
        assert_eq!(
            page.cards[0].link.as_deref(),
            Some("https://example.com/affiliate/tok01/1")
        );
        assert!(page.cards[1].link.is_none());
    }

    #[test]
    fn test_generate_out_of_stock_ignored() {
        let mut view = view();
        assert_eq!(view.dispatch(UserAction::GenerateLink(id(2))), ActionOutcome::Ignored);
        assert!(!view.state().has_link(&id(2)));
    }

    #[test]
    fn test_unknown_product_ignored() {
        let mut view = view();
        assert_eq!(view.dispatch(UserAction::ShowDetails(id(99))), ActionOutcome::Ignored);
        assert_eq!(view.dispatch(UserAction::GenerateLink(id(99))), ActionOutcome::Ignored);
        assert!(!view.state().is_popup_open());
    }

    #[test]
    fn test_copy_without_link_ignored() {
        let mut view = view();
        let mut clipboard = RecordingClipboard::new();
        assert!(view.copy_link(&id(1), &mut clipboard).is_none());
        assert!(clipboard.writes().is_empty());
    }

    #[test]
    fn test_copy_failure_is_notice() {
        let mut view = view();
        view.dispatch(UserAction::GenerateLink(id(1)));
        let mut clipboard =
            RecordingClipboard::failing(ClipboardError::Denied("permission denied".to_string()));
        let notice = view.copy_link(&id(1), &mut clipboard).unwrap();
        assert!(notice.is_error());
        assert!(view.state().has_link(&id(1)));
    }

    #[test]
    fn test_popup_detail() {
        let mut view = view();
        view.dispatch(UserAction::ShowDetails(id(1)));
        let popup = view.render().popup.unwrap();
        assert_eq!(popup.name, "Widget");
        assert_eq!(popup.marketing_materials, "Buy two");
        assert_eq!(popup.stock_label(), "In Stock");
    }

    #[test]
    fn test_popup_click_when_closed() {
        let mut view = view();
        assert_eq!(
            view.dispatch(UserAction::PopupClick(PopupTarget::Backdrop)),
            ActionOutcome::Ignored
        );
    }

    #[test]
    fn test_close_button_dismisses() {
        let mut view = view();
        view.dispatch(UserAction::ShowDetails(id(2)));
        view.dispatch(UserAction::PopupClick(PopupTarget::CloseButton));
        assert!(view.render().popup.is_none());
    }

    #[test]
    fn test_popup_target_dismissal() {
        assert!(PopupTarget::Backdrop.dismisses());
        assert!(PopupTarget::CloseButton.dismisses());
        assert!(!PopupTarget::Panel.dismisses());
    }
}
