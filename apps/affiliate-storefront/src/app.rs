//! Application components.

use std::sync::Arc;

use affiliate_commerce::prelude::*;
use affiliate_commerce::view::PAGE_TITLE;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_meta::*;
use tracing::{error, warn};

use crate::browser::{write_clipboard, PageTokenSource};

/// Catalog bundled into the page.
const CATALOG_JSON: &str = include_str!("../../../data/products.json");

type StoreView = ProductView<PageTokenSource>;

// ============================================================================
// State
// ============================================================================

/// Build the page state from a catalog document.
///
/// Returns the view and the number of catalog entries that were skipped.
pub fn build_view(
    catalog_json: &str,
    settings: &LinkSettings,
) -> Result<(StoreView, usize), CommerceError> {
    settings.validate()?;
    let load = Catalog::from_json(catalog_json)?;
    if !load.skipped.is_empty() {
        warn!(skipped = load.skipped.len(), "catalog entries left out of the page");
    }
    let generator = LinkGenerator::new(settings, PageTokenSource::new(settings.token_length));
    Ok((
        ProductView::new(Arc::new(load.catalog), generator),
        load.skipped.len(),
    ))
}

fn notice_class(notice: &CopyNotice) -> &'static str {
    if notice.is_error() {
        "notice notice-error"
    } else {
        "notice notice-success"
    }
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let content = match build_view(CATALOG_JSON, &LinkSettings::default()) {
        Ok((view, skipped)) => view! { <ProductList view=view skipped=skipped/> }.into_any(),
        Err(e) => {
            error!(error = %e, "failed to build product page");
            view! {
                <div class="load-error">
                    <p>"Could not load products: " {e.to_string()}</p>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/affiliate_storefront.css"/>
        <Meta name="description" content="Generate affiliate links for catalog products"/>
        <Title text=PAGE_TITLE/>

        <main class="app-container">
            <h1 class="title">{PAGE_TITLE}</h1>
            {content}
        </main>
    }
}

// ============================================================================
// Product Components
// ============================================================================

#[component]
fn ProductList(view: StoreView, skipped: usize) -> impl IntoView {
    let store = RwSignal::new(view);
    let notice = RwSignal::new(None::<CopyNotice>);
    let page = Memo::new(move |_| store.with(|v| v.render()));

    let on_action = Callback::new(move |action: UserAction| {
        let outcome = store.try_update(|v| v.dispatch(action));
        if let Some(ActionOutcome::WriteClipboard(text)) = outcome {
            leptos::task::spawn_local(async move {
                let result = write_clipboard(text).await;
                notice.set(Some(CopyNotice::from_result(result)));
            });
        }
    });

    view! {
        {(skipped > 0).then(|| view! {
            <p class="catalog-warning">
                {skipped.to_string()} " catalog entries could not be shown."
            </p>
        })}
        <NoticeBanner notice=notice/>
        <div class="product-grid">
            {move || page.get().cards.into_iter().map(|card| {
                view! { <ProductCardView card=card on_action=on_action/> }
            }).collect::<Vec<_>>()}
        </div>
        {move || page.get().popup.map(|popup| {
            view! { <DetailPopupView popup=popup on_action=on_action/> }
        })}
    }
}

#[component]
fn ProductCardView(card: ProductCard, on_action: Callback<UserAction>) -> impl IntoView {
    let details_id = card.product_id.clone();
    let generate_id = card.product_id.clone();
    let copy_id = card.product_id.clone();
    let generate_disabled = !card.generate_enabled();
    let out_of_stock = card.shows_out_of_stock();
    let image_alt = card.name.clone();

    view! {
        <div class="product-card">
            <img class="product-image" src=card.image_url alt=image_alt/>
            <div class="product-info">
                <h2 class="product-name">{card.name}</h2>
                <p class="product-description">{card.description}</p>
                <p class="product-commission">{card.commission_label}</p>
                <div class="button-row">
                    <button
                        class="btn"
                        on:click=move |_| on_action.run(UserAction::ShowDetails(details_id.clone()))
                    >
                        "Show Details"
                    </button>
                    <button
                        class="btn btn-primary"
                        disabled=generate_disabled
                        on:click=move |_| on_action.run(UserAction::GenerateLink(generate_id.clone()))
                    >
                        "Generate Link"
                    </button>
                </div>
                {card.link.map(|link| view! {
                    <div class="link-row">
                        <input class="link-input" type="text" readonly=true value=link/>
                        <button
                            class="btn btn-copy"
                            on:click=move |_| on_action.run(UserAction::CopyLink(copy_id.clone()))
                        >
                            "Copy"
                        </button>
                    </div>
                })}
            </div>
            {out_of_stock.then(|| view! { <div class="out-of-stock">"Out of Stock"</div> })}
        </div>
    }
}

/// Detail overlay.
///
/// The backdrop and the close button report dismissing targets. The panel
/// stops propagation and reports itself, so a click inside it never reaches
/// the backdrop handler.
#[component]
fn DetailPopupView(popup: DetailPopup, on_action: Callback<UserAction>) -> impl IntoView {
    let stock_class = match popup.stock {
        StockStatus::InStock => "stock in-stock",
        StockStatus::OutOfStock => "stock out-of-stock-text",
    };
    let stock_label = popup.stock_label();
    let title = popup.name.clone();

    view! {
        <div
            class="popup-overlay"
            on:click=move |_| on_action.run(UserAction::PopupClick(PopupTarget::Backdrop))
        >
            <div
                class="popup-content"
                on:click=move |ev: MouseEvent| {
                    ev.stop_propagation();
                    on_action.run(UserAction::PopupClick(PopupTarget::Panel));
                }
            >
                <button
                    class="popup-close"
                    on:click=move |ev: MouseEvent| {
                        ev.stop_propagation();
                        on_action.run(UserAction::PopupClick(PopupTarget::CloseButton));
                    }
                >
                    "×"
                </button>
                <h2 class="popup-title">{title}</h2>
                <img class="product-image" src=popup.image_url alt=popup.name/>
                <p class="popup-description">{popup.description}</p>
                <p class="product-commission">{popup.commission_label}</p>
                <p class="popup-description">{popup.marketing_materials}</p>
                <p class=stock_class>{stock_label}</p>
            </div>
        </div>
    }
}

#[component]
fn NoticeBanner(notice: RwSignal<Option<CopyNotice>>) -> impl IntoView {
    move || {
        notice.get().map(|current| {
            view! {
                <div class=notice_class(&current) role="status">
                    <span>{current.message()}</span>
                    <button class="notice-dismiss" on:click=move |_| notice.set(None)>"×"</button>
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_builds() {
        let (view, skipped) = build_view(CATALOG_JSON, &LinkSettings::default()).unwrap();
        assert_eq!(skipped, 0);
        assert_eq!(view.render().cards.len(), view.catalog().len());
    }

    #[test]
    fn test_generated_link_uses_base_url() {
        let settings = LinkSettings {
            base_url: "https://shop.test".to_string(),
            token_length: 7,
        };
        let (mut view, _) = build_view(CATALOG_JSON, &settings).unwrap();
        let product = view.catalog().iter().find(|p| p.in_stock).unwrap().clone();

        view.dispatch(UserAction::GenerateLink(product.id.clone()));

        let link = view.state().link(&product.id).unwrap();
        assert_eq!(link.token().len(), 7);
        assert_eq!(
            link.as_str(),
            format!("https://shop.test/affiliate/{}/{}", link.token(), product.id)
        );
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = LinkSettings {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(build_view(CATALOG_JSON, &settings).is_err());
    }

    #[test]
    fn test_skipped_entries_counted() {
        let json = r#"[{"id": 1, "name": "A", "commission": 3}, {"name": "broken"}]"#;
        let (_, skipped) = build_view(json, &LinkSettings::default()).unwrap();
        assert_eq!(skipped, 1);
    }

    #[test]
    fn test_notice_class() {
        assert_eq!(notice_class(&CopyNotice::Copied), "notice notice-success");
        assert_eq!(
            notice_class(&CopyNotice::Failed("denied".to_string())),
            "notice notice-error"
        );
    }
}
