//! Browser capabilities: link tokens and the clipboard.

use affiliate_commerce::clipboard::ClipboardError;

#[cfg(target_arch = "wasm32")]
pub use wasm::BrowserTokenSource as PageTokenSource;

#[cfg(not(target_arch = "wasm32"))]
pub use affiliate_commerce::link::RandomTokenSource as PageTokenSource;

/// Write `text` with `navigator.clipboard.writeText`.
#[cfg(target_arch = "wasm32")]
pub async fn write_clipboard(text: String) -> Result<(), ClipboardError> {
    let window =
        web_sys::window().ok_or_else(|| ClipboardError::Unavailable("no window".to_string()))?;
    let promise = window.navigator().clipboard().write_text(&text);

    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| ClipboardError::Denied(wasm::js_value_message(e, "write rejected")))
}

/// Outside the browser there is no clipboard to write to.
#[cfg(not(target_arch = "wasm32"))]
pub async fn write_clipboard(_text: String) -> Result<(), ClipboardError> {
    Err(ClipboardError::Unavailable(
        "not running in a browser".to_string(),
    ))
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use affiliate_commerce::link::{TokenSource, TOKEN_ALPHABET};

    /// Tokens drawn from `Math.random()`.
    #[derive(Debug, Clone, Copy)]
    pub struct BrowserTokenSource {
        length: usize,
    }

    impl BrowserTokenSource {
        pub fn new(length: usize) -> Self {
            Self { length }
        }
    }

    impl TokenSource for BrowserTokenSource {
        fn next_token(&mut self) -> String {
            let last = TOKEN_ALPHABET.len() - 1;
            (0..self.length)
                .map(|_| {
                    let index = (js_sys::Math::random() * TOKEN_ALPHABET.len() as f64) as usize;
                    TOKEN_ALPHABET[index.min(last)] as char
                })
                .collect()
        }
    }

    pub fn js_value_message(error: wasm_bindgen::JsValue, fallback: &str) -> String {
        error.as_string().unwrap_or_else(|| fallback.to_string())
    }
}
