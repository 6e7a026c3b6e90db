//! AI adapter module. Implements GenerationPort for the Gemini API.
//!
//! Provides the REST adapter and a mock adapter for key-less runs and tests.

pub mod gemini;
pub mod mock;

pub use gemini::{GeminiAdapter, PLACEHOLDER_IMAGE_URI};
pub use mock::MockGenerationAdapter;
