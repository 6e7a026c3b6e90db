//! Core domain layer. No external I/O dependencies.
//!
//! Entities, business rules and post-text templates live here.
//! Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod post_text;

pub use entities::{
    CategoryType, EducationalContent, MovementArticle, MovementArticleRequest, MovementSummary,
    WeeklyAnalysis, DEFAULT_LOCATION,
};
pub use errors::DomainError;
