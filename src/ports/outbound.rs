//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{
    CategoryType, DomainError, EducationalContent, MovementArticle, MovementArticleRequest,
    MovementSummary, WeeklyAnalysis,
};

/// Generation service gateway. Five independent, stateless, single-shot
/// request/response operations; no retry, no caching, no rate limiting.
#[async_trait::async_trait]
pub trait GenerationPort: Send + Sync {
    /// Analyze a weekly assembly photo. `image_data_uri` is a
    /// `data:<mime>;base64,<payload>` string; the adapter strips the header
    /// before sending. Unparsable output fails with `DomainError::Parse`;
    /// an empty result is never invented.
    async fn analyze_weekly_image(&self, image_data_uri: &str)
        -> Result<WeeklyAnalysis, DomainError>;

    /// Generate the movement announcement. The caller has already validated
    /// the request; this performs no validation. The returned article's
    /// `name` equals `request.name` verbatim.
    async fn generate_movement_article(
        &self,
        request: &MovementArticleRequest,
    ) -> Result<MovementArticle, DomainError>;

    /// Fetch library content for a category. `CategoryType::Movement` fails
    /// with `DomainError::UnsupportedCategory` and performs no service call.
    async fn fetch_educational_content(
        &self,
        category: CategoryType,
    ) -> Result<EducationalContent, DomainError>;

    /// Fetch the movement directory. Five items by service contract
    /// (not locally enforced).
    async fn fetch_movement_list(&self) -> Result<Vec<MovementSummary>, DomainError>;

    /// Generate an illustration for a prompt. Returns a `data:` URI with the
    /// inline image payload, or the fixed placeholder URI when the service
    /// returns no image part. Never empty.
    async fn generate_illustration(&self, prompt: &str) -> Result<String, DomainError>;
}

/// System clipboard. Sync on purpose: the write is a sub-millisecond OS call
/// with no await point.
pub trait ClipboardPort: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), DomainError>;
}
