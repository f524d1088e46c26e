//! Link generation.

use affiliate_commerce::catalog::Product;
use affiliate_commerce::view::{ActionOutcome, UserAction};
use anyhow::{bail, Result};
use serde::Serialize;

use super::LinkArgs;
use crate::clipboard::SystemClipboard;
use crate::context::Context;

#[derive(Serialize)]
struct LinkReport<'a> {
    product_id: &'a str,
    link: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    copy: Option<affiliate_commerce::clipboard::CopyNotice>,
}

/// Run the link command.
pub fn run(args: LinkArgs, ctx: &Context) -> Result<()> {
    let id = args.product_id();

    let Some(product) = ctx.catalog.get(&id) else {
        bail!("Product '{}' not found", id);
    };
    if let Some(warning) = out_of_stock_warning(product) {
        ctx.output.warn(&warning);
        std::process::exit(1);
    }

    let mut view = ctx.product_view();
    if view.dispatch(UserAction::GenerateLink(id.clone())) != ActionOutcome::StateChanged {
        bail!("No link generated for '{}'", id);
    }

    let link = match view.state().link(&id) {
        Some(link) => link.to_string(),
        None => bail!("No link generated for '{}'", id),
    };

    let copy = if args.copy {
        view.copy_link(&id, &mut SystemClipboard)
    } else {
        None
    };

    if ctx.output.is_json() {
        ctx.output.json(&LinkReport {
            product_id: id.as_str(),
            link: &link,
            copy,
        });
        return Ok(());
    }

    ctx.output.success(&format!("Affiliate link for {}", product.name));
    println!("{}", link);

    if let Some(notice) = &copy {
        ctx.output.notice(notice);
    }

    Ok(())
}

/// Warning printed instead of a link for products that cannot have one.
fn out_of_stock_warning(product: &Product) -> Option<String> {
    (!product.availability().is_available())
        .then(|| format!("'{}' is out of stock; no link generated", product.name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_stock_warning() {
        let gadget = Product::new("2", "Gadget", 5.0).with_in_stock(false);
        assert_eq!(
            out_of_stock_warning(&gadget).as_deref(),
            Some("'Gadget' is out of stock; no link generated")
        );
        assert!(out_of_stock_warning(&Product::new("1", "Widget", 10.0)).is_none());
    }
}
