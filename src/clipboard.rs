//! Clipboard export capability
//!
//! The controller copies analysis results through this seam so tests can
//! substitute an in-memory sink. The platform implementation acquires the
//! clipboard per call and releases it when the write returns.

use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("clipboard write failed: {0}")]
pub struct ClipboardError(pub String);

/// Write-only clipboard capability.
pub trait ClipboardSink: Send {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Platform clipboard backed by `arboard`.
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError(e.to_string()))
    }
}

/// In-memory sink for tests and dry runs. Clones share the same backing
/// store, so a caller can keep a handle and inspect writes after handing the
/// sink to the controller.
#[derive(Clone, Default)]
pub struct MemoryClipboard {
    writes: Arc<Mutex<Vec<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.writes.lock().unwrap().last().cloned()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
