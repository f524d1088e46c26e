//! Affiliate catalog domain types and interaction logic.
//!
//! This crate holds everything a front-end needs to present an affiliate
//! product catalog:
//!
//! - **Catalog**: Products loaded from a static JSON file
//! - **Link**: Simulated affiliate link generation with pluggable token sources
//! - **Interaction**: Generated links per product and the popup selection
//! - **View**: Page model rendering and user action dispatch
//! - **Clipboard**: The copy contract and user-facing notices
//!
//! # Example
//!
//! ```rust,ignore
//! use affiliate_commerce::prelude::*;
//!
//! let load = Catalog::from_json(include_str!("../../../data/products.json"))?;
//! let settings = LinkSettings::default();
//! let generator = LinkGenerator::new(&settings, RandomTokenSource::new(settings.token_length));
//! let mut view = ProductView::new(load.catalog.into(), generator);
//!
//! view.dispatch(UserAction::GenerateLink(ProductId::new("1")));
//! let page = view.render();
//! println!("{}", page.cards[0].link.as_deref().unwrap_or("no link yet"));
//! ```

pub mod error;
pub mod ids;
pub mod settings;

pub mod catalog;
pub mod clipboard;
pub mod interaction;
pub mod link;
pub mod view;

pub use error::CommerceError;
pub use ids::ProductId;
pub use settings::LinkSettings;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::settings::LinkSettings;

    // Catalog
    pub use crate::catalog::{
        ActionAvailability, Catalog, CatalogLoad, Product, SkippedEntry, StockStatus,
    };

    // Links
    #[cfg(feature = "rand")]
    pub use crate::link::RandomTokenSource;
    pub use crate::link::{AffiliateLink, FixedTokenSource, LinkGenerator, TokenSource};

    // State and view
    pub use crate::clipboard::{Clipboard, ClipboardError, CopyNotice, RecordingClipboard};
    pub use crate::interaction::InteractionState;
    pub use crate::view::{
        ActionOutcome, DetailPopup, PageModel, PopupTarget, ProductCard, ProductView, UserAction,
    };
}
