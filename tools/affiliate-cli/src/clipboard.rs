//! System clipboard backed by `arboard`.
//!
//! The clipboard handle is created fresh for each write so nothing is held
//! between commands.

use affiliate_commerce::clipboard::{Clipboard, ClipboardError};

/// Clipboard for the desktop session running the CLI.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Denied(e.to_string()))
    }
}
