//! Infrastructure adapters. Implement outbound ports.
//!
//! Gemini, clipboard, image files, terminal UI. Map errors to DomainError.

pub mod ai;
pub mod clipboard;
pub mod media;
pub mod ui;
