//! Interactive catalog session.
//!
//! One `ProductView` lives for the whole session, so generated links stay
//! visible until the command exits.

use affiliate_commerce::link::TokenSource;
use affiliate_commerce::view::{PopupTarget, ProductCard, ProductView, UserAction};
use anyhow::{bail, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

use super::show::print_detail;
use crate::clipboard::SystemClipboard;
use crate::context::Context;

/// Actions offered for a single product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardChoice {
    ShowDetails,
    GenerateLink,
    CopyLink,
    Back,
}

impl CardChoice {
    fn label(&self) -> &'static str {
        match self {
            CardChoice::ShowDetails => "Show Details",
            CardChoice::GenerateLink => "Generate Link",
            CardChoice::CopyLink => "Copy",
            CardChoice::Back => "Back",
        }
    }
}

/// Run the browse command.
pub fn run(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("browse is interactive and does not support --json");
    }

    let mut view = ctx.product_view();
    let theme = ColorfulTheme::default();

    loop {
        let page = view.render();
        if page.cards.is_empty() {
            ctx.output.info("The catalog is empty.");
            return Ok(());
        }

        let mut items: Vec<String> = page.cards.iter().map(card_line).collect();
        items.push("Quit".to_string());

        let Some(index) = Select::with_theme(&theme)
            .with_prompt(page.title)
            .items(&items)
            .default(0)
            .interact_opt()?
        else {
            return Ok(());
        };

        let Some(card) = page.cards.get(index) else {
            return Ok(());
        };

        product_menu(ctx, &mut view, card, &theme)?;
    }
}

fn product_menu<T: TokenSource>(
    ctx: &Context,
    view: &mut ProductView<T>,
    card: &ProductCard,
    theme: &ColorfulTheme,
) -> Result<()> {
    let id = card.product_id.clone();

    loop {
        let current = view
            .render()
            .cards
            .into_iter()
            .find(|c| c.product_id == id);
        let Some(current) = current else {
            return Ok(());
        };

        if let Some(link) = &current.link {
            ctx.output.kv("Link", link);
        }

        let choices = card_choices(&current);
        let labels: Vec<&str> = choices.iter().map(CardChoice::label).collect();

        let Some(index) = Select::with_theme(theme)
            .with_prompt(&current.name)
            .items(&labels)
            .default(0)
            .interact_opt()?
        else {
            return Ok(());
        };

        match choices.get(index).copied().unwrap_or(CardChoice::Back) {
            CardChoice::ShowDetails => {
                view.dispatch(UserAction::ShowDetails(id.clone()));
                if let Some(popup) = view.render().popup {
                    print_detail(&ctx.output, &popup);
                }
                view.dispatch(UserAction::PopupClick(PopupTarget::CloseButton));
            }
            CardChoice::GenerateLink => {
                view.dispatch(UserAction::GenerateLink(id.clone()));
            }
            CardChoice::CopyLink => {
                if let Some(notice) = view.copy_link(&id, &mut SystemClipboard) {
                    ctx.output.notice(&notice);
                }
            }
            CardChoice::Back => return Ok(()),
        }
    }
}

/// Choices for a card; generation is only offered when it is available.
fn card_choices(card: &ProductCard) -> Vec<CardChoice> {
    let mut choices = vec![CardChoice::ShowDetails];
    if card.generate_enabled() {
        choices.push(CardChoice::GenerateLink);
    }
    if card.link.is_some() {
        choices.push(CardChoice::CopyLink);
    }
    choices.push(CardChoice::Back);
    choices
}

fn card_line(card: &ProductCard) -> String {
    let stock = if card.shows_out_of_stock() {
        " [Out of Stock]"
    } else {
        ""
    };
    let linked = if card.link.is_some() { " (link ready)" } else { "" };
    format!("{} - {}{}{}", card.name, card.commission_label, stock, linked)
}
