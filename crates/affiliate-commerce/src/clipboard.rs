//! Clipboard contract and copy notices.
//!
//! The core only ever writes one string at a time and never reads the
//! clipboard. A failed write is reported back to the user as a notice.

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// Message shown after a successful copy.
pub const COPIED_MESSAGE: &str = "Link copied to clipboard!";

/// Why a clipboard write failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard is reachable (headless session, missing browser API).
    #[error("Clipboard is unavailable: {0}")]
    Unavailable(String),

    /// The platform refused the write.
    #[error("Clipboard write was denied: {0}")]
    Denied(String),
}

/// A sink that accepts text for the system clipboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl<C: Clipboard + ?Sized> Clipboard for &mut C {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_text(text)
    }
}

/// User-visible outcome of a copy action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "lowercase")]
pub enum CopyNotice {
    Copied,
    Failed(String),
}

impl CopyNotice {
    /// Turn a clipboard result into a notice, logging failures.
    pub fn from_result(result: Result<(), ClipboardError>) -> Self {
        match result {
            Ok(()) => CopyNotice::Copied,
            Err(e) => {
                warn!(error = %e, "clipboard write failed");
                CopyNotice::Failed(e.to_string())
            }
        }
    }

    pub fn message(&self) -> String {
        match self {
            CopyNotice::Copied => COPIED_MESSAGE.to_string(),
            CopyNotice::Failed(reason) => format!("Could not copy link: {}", reason),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, CopyNotice::Failed(_))
    }
}

/// In-memory clipboard that records every write.
#[derive(Debug, Clone, Default)]
pub struct RecordingClipboard {
    writes: Vec<String>,
    failure: Option<ClipboardError>,
}

impl RecordingClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes always fail with `error`.
    pub fn failing(error: ClipboardError) -> Self {
        Self {
            writes: Vec::new(),
            failure: Some(error),
        }
    }

    pub fn writes(&self) -> &[String] {
        &self.writes
    }

    /// Most recent successful write.
    pub fn contents(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }
}

impl Clipboard for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}
