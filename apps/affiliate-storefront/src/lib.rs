//! Affiliate Storefront
//!
//! Renders the affiliate product grid with Leptos:
//! - Product cards with commission, stock overlay and link generation
//! - Copy-to-clipboard with a status notice
//! - Detail popup dismissed by the backdrop or the close button

mod app;
mod browser;

pub use app::{build_view, App};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
