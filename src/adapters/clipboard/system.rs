//! System clipboard via arboard (NSPasteboard on macOS, X11/Wayland on Linux).

use crate::domain::DomainError;
use crate::ports::ClipboardPort;

pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardPort for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), DomainError> {
        if text.is_empty() {
            return Err(DomainError::Clipboard("nothing to copy".to_string()));
        }

        // Fresh handle per write; a long-lived one holds the X11 selection.
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| DomainError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| DomainError::Clipboard(e.to_string()))
    }
}
