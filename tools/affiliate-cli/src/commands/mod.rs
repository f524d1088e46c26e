//! CLI command implementations.

pub mod browse;
pub mod link;
pub mod list;
pub mod show;

use affiliate_commerce::ProductId;
use clap::Args;

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product id.
    pub id: String,
}

/// Arguments for the link command.
#[derive(Args)]
pub struct LinkArgs {
    /// Product id.
    pub id: String,

    /// Copy the link to the clipboard.
    #[arg(long)]
    pub copy: bool,
}

impl ShowArgs {
    pub fn product_id(&self) -> ProductId {
        ProductId::new(self.id.trim())
    }
}

impl LinkArgs {
    pub fn product_id(&self) -> ProductId {
        ProductId::new(self.id.trim())
    }
}
