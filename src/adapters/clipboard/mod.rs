//! Clipboard adapters. Implement ClipboardPort.
//!
//! System clipboard via arboard, plus an in-memory adapter for tests and
//! headless environments.

pub mod memory;
pub mod system;

pub use memory::MemoryClipboard;
pub use system::SystemClipboard;
