//! Product detail.

use affiliate_commerce::view::{ActionOutcome, DetailPopup, UserAction};
use anyhow::{bail, Result};

use super::ShowArgs;
use crate::context::Context;
use crate::output::Output;

/// Run the show command.
pub fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let id = args.product_id();
    let mut view = ctx.product_view();

    if view.dispatch(UserAction::ShowDetails(id.clone())) == ActionOutcome::Ignored {
        bail!("Product '{}' not found", id);
    }

    let Some(popup) = view.render().popup else {
        bail!("Product '{}' not found", id);
    };

    if ctx.output.is_json() {
        ctx.output.json(&popup);
        return Ok(());
    }

    print_detail(&ctx.output, &popup);
    Ok(())
}

/// Print the detail panel for a product.
pub fn print_detail(output: &Output, popup: &DetailPopup) {
    output.header(&popup.name);
    output.kv("ID", popup.product_id.as_str());
    if !popup.image_url.is_empty() {
        output.kv("Image", &popup.image_url);
    }
    if !popup.description.is_empty() {
        output.kv("Description", &popup.description);
    }
    output.kv("Commission", popup.commission_label.trim_start_matches("Commission: "));
    if !popup.marketing_materials.is_empty() {
        output.kv("Marketing", &popup.marketing_materials);
    }
    output.kv("Stock", popup.stock_label());
}
