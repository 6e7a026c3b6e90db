//! In-memory clipboard for tests and headless runs (no display server).

use std::sync::Mutex;

use crate::domain::DomainError;
use crate::ports::ClipboardPort;

/// Records every written text; `last()` returns the most recent one.
pub struct MemoryClipboard {
    writes: Mutex<Vec<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
        }
    }

    pub fn last(&self) -> Option<String> {
        self.writes
            .lock()
            .ok()
            .and_then(|writes| writes.last().cloned())
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().map(|writes| writes.len()).unwrap_or(0)
    }
}

impl Default for MemoryClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardPort for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), DomainError> {
        self.writes
            .lock()
            .map_err(|_| DomainError::Clipboard("poisoned clipboard buffer".to_string()))?
            .push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_writes_in_order() {
        let clipboard = MemoryClipboard::new();
        clipboard.write_text("first").unwrap();
        clipboard.write_text("second").unwrap();
        assert_eq!(clipboard.last().as_deref(), Some("second"));
        assert_eq!(clipboard.write_count(), 2);
    }
}
