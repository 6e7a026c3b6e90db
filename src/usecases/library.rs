//! Library service. Educational content, the movement directory, and
//! illustration generation.
//!
//! Generated inline images cannot be rendered in a terminal, so they are
//! decoded and saved as PNG files under the media directory; placeholder
//! URIs are passed through for the caller to print.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::fs;
use tracing::{info, warn};

use crate::adapters::media::decode_data_uri;
use crate::domain::{CategoryType, DomainError, EducationalContent, MovementSummary};
use crate::ports::GenerationPort;

/// What the illustration step produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Illustration {
    /// Inline image decoded and written to this path.
    Saved(PathBuf),
    /// No inline image returned; the service placeholder URI.
    Remote(String),
}

pub struct LibraryService {
    generation: Arc<dyn GenerationPort>,
    media_dir: PathBuf,
}

impl LibraryService {
    pub fn new(generation: Arc<dyn GenerationPort>, media_dir: PathBuf) -> Self {
        Self {
            generation,
            media_dir,
        }
    }

    /// Fetch library content for a category. MOVEMENT is rejected by the
    /// port before any service call.
    pub async fn fetch_content(
        &self,
        category: CategoryType,
    ) -> Result<EducationalContent, DomainError> {
        info!(%category, "fetching educational content");
        let content = self.generation.fetch_educational_content(category).await?;
        info!(title = %content.title, "educational content ready");
        Ok(content)
    }

    /// Fetch the read-only movement directory.
    pub async fn fetch_movements(&self) -> Result<Vec<MovementSummary>, DomainError> {
        let movements = self.generation.fetch_movement_list().await?;
        info!(count = movements.len(), "movement directory ready");
        Ok(movements)
    }

    /// Generate an illustration for a content prompt and persist it when the
    /// service returns an inline payload.
    pub async fn illustrate(&self, prompt: &str) -> Result<Illustration, DomainError> {
        let uri = self.generation.generate_illustration(prompt).await?;

        let Some(image) = decode_data_uri(&uri) else {
            // Placeholder fallback: nothing to save.
            return Ok(Illustration::Remote(uri));
        };

        fs::create_dir_all(&self.media_dir)
            .await
            .map_err(|e| DomainError::Media(format!("create media dir: {e}")))?;

        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let path = self.media_dir.join(format!("illustration_{stamp}.png"));
        if let Err(e) = fs::write(&path, &image.bytes).await {
            // Degrade like the placeholder path: the URI is still usable.
            warn!(error = %e, "could not save illustration, returning data URI");
            return Ok(Illustration::Remote(uri));
        }

        info!(path = %path.display(), bytes = image.bytes.len(), "illustration saved");
        Ok(Illustration::Saved(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockGenerationAdapter;

    fn service(dir: &std::path::Path) -> LibraryService {
        LibraryService::new(
            Arc::new(MockGenerationAdapter::with_delay(0)),
            dir.to_path_buf(),
        )
    }

    #[tokio::test]
    async fn movement_category_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = service(dir.path())
            .fetch_content(CategoryType::Movement)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::UnsupportedCategory(_)));
    }

    #[tokio::test]
    async fn directory_has_five_movements() {
        let dir = tempfile::tempdir().unwrap();
        let movements = service(dir.path()).fetch_movements().await.unwrap();
        assert_eq!(movements.len(), 5);
    }

    #[tokio::test]
    async fn illustration_saves_inline_payloads() {
        let dir = tempfile::tempdir().unwrap();
        // The mock returns a data URI, so the bytes land on disk.
        match service(dir.path()).illustrate("a reading corner").await.unwrap() {
            Illustration::Saved(path) => {
                assert!(path.starts_with(dir.path()));
                assert!(tokio::fs::metadata(&path).await.unwrap().len() > 0);
            }
            Illustration::Remote(uri) => panic!("expected saved file, got {uri}"),
        }
    }
}
