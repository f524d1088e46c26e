//! Product listing.

use affiliate_commerce::catalog::SkippedEntry;
use affiliate_commerce::view::ProductCard;
use anyhow::Result;
use serde::Serialize;

use crate::context::Context;
use crate::output::stock_badge;

const WIDTHS: [usize; 4] = [8, 28, 12, 12];

#[derive(Serialize)]
struct ListReport<'a> {
    products: &'a [ProductCard],
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    skipped: &'a [SkippedEntry],
}

/// Run the list command.
pub fn run(ctx: &Context) -> Result<()> {
    let page = ctx.product_view().render();

    if ctx.output.is_json() {
        ctx.output.json(&ListReport {
            products: &page.cards,
            skipped: &ctx.skipped,
        });
        return Ok(());
    }

    ctx.output.header(page.title);

    if page.cards.is_empty() {
        ctx.output.info("The catalog is empty.");
        return Ok(());
    }

    ctx.output
        .table_row(&["ID", "NAME", "COMMISSION", "STOCK"], &WIDTHS);

    for card in &page.cards {
        let commission = card
            .commission_label
            .trim_start_matches("Commission: ")
            .to_string();
        let stock = stock_badge(card.availability);
        ctx.output.table_row(
            &[card.product_id.as_str(), &card.name, &commission, &stock],
            &WIDTHS,
        );
    }

    ctx.output.info("");
    ctx.output.info(&format!("Total: {} product(s)", page.cards.len()));

    Ok(())
}
