//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

use crate::domain::entities::CategoryType;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Network, auth or quota failure at the generation boundary.
    #[error("Generation service error: {0}")]
    ServiceCall(String),

    /// Service response did not conform to the expected structured schema.
    #[error("Response parse error: {0}")]
    Parse(String),

    /// Category with no valid prompt mapping for this operation.
    #[error("Category {0} is not supported by educational content")]
    UnsupportedCategory(CategoryType),

    /// Required user input missing before submission. Blocks the service call.
    #[error("{0}")]
    Validation(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Image file could not be read, recognized or decoded.
    #[error("Media error: {0}")]
    Media(String),

    /// Terminal prompt failure or cancellation.
    #[error("Input error: {0}")]
    Input(String),
}
