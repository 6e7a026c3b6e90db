//! Domain entities. Pure data structures for the core business.
//!
//! Field names mirror the generation-service wire contract exactly; serde
//! renames cover the places where Rust naming differs. No I/O types here.

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Prefilled venue for the movement form. Re-applied on every flow reset.
pub const DEFAULT_LOCATION: &str = "Sân trường của trường tiểu học Giồng Trôm";

/// Which prompt template to use for educational content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CategoryType {
    Story,
    Book,
    Example,
    Movement,
}

impl std::fmt::Display for CategoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CategoryType::Story => "STORY",
            CategoryType::Book => "BOOK",
            CategoryType::Example => "EXAMPLE",
            CategoryType::Movement => "MOVEMENT",
        };
        f.write_str(s)
    }
}

/// Result of analyzing a weekly assembly photo. All seven fields are required
/// by the response schema and every one is user-editable afterward.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyAnalysis {
    pub week: String,
    pub date: String,
    pub topic: String,
    pub presenter: String,
    pub lesson: String,
    pub feedback: String,
    pub spread: String,
}

/// User-supplied input for the movement announcement flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementArticleRequest {
    pub name: String,
    pub date: String,
    pub location: String,
    pub participants: String,
    pub content: String,
}

impl Default for MovementArticleRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            date: String::new(),
            location: DEFAULT_LOCATION.to_string(),
            participants: String::new(),
            content: String::new(),
        }
    }
}

impl MovementArticleRequest {
    /// Checked at the UI boundary before any service call. Location and
    /// participants are optional; name, date and content are mandatory.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty()
            || self.date.trim().is_empty()
            || self.content.trim().is_empty()
        {
            return Err(DomainError::Validation(
                "Vui lòng nhập đầy đủ Tên phong trào, Ngày và Nội dung!".to_string(),
            ));
        }
        Ok(())
    }
}

/// Generated movement announcement. `name` always equals the request's name;
/// whatever the service returned in that field is discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementArticle {
    pub name: String,
    pub introduction: String,
    #[serde(rename = "detailedContent")]
    pub detailed_content: String,
    pub significance: String,
}

/// Library content for one category (story / book / role model).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationalContent {
    pub title: String,
    pub summary: String,
    pub content: String,
    #[serde(rename = "imagePrompt")]
    pub image_prompt: String,
    #[serde(rename = "authorOrTarget", skip_serializing_if = "Option::is_none")]
    pub author_or_target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lessons: Option<Vec<String>>,
}

/// One entry of the read-only movement directory (five by service contract).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementSummary {
    pub name: String,
    pub description: String,
    pub activities: Vec<String>,
    pub impact: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_request() -> MovementArticleRequest {
        MovementArticleRequest {
            name: "Kế hoạch nhỏ".to_string(),
            date: "10/03/2025".to_string(),
            content: "Thu gom giấy vụn".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn default_request_prefills_location() {
        let req = MovementArticleRequest::default();
        assert_eq!(req.location, DEFAULT_LOCATION);
        assert!(req.name.is_empty());
    }

    #[test]
    fn validate_accepts_defaults_for_optional_fields() {
        assert!(filled_request().validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_mandatory_fields() {
        for field in ["name", "date", "content"] {
            let mut req = filled_request();
            match field {
                "name" => req.name = "  ".to_string(),
                "date" => req.date = String::new(),
                _ => req.content = String::new(),
            }
            assert!(matches!(req.validate(), Err(DomainError::Validation(_))));
        }
    }

    #[test]
    fn movement_article_wire_names() {
        let article: MovementArticle = serde_json::from_str(
            r#"{"name":"A","introduction":"B","detailedContent":"C","significance":"D"}"#,
        )
        .unwrap();
        assert_eq!(article.detailed_content, "C");
    }

    #[test]
    fn educational_content_optional_fields_absent() {
        let content: EducationalContent =
            serde_json::from_str(r#"{"title":"T","summary":"S","content":"C","imagePrompt":"P"}"#)
                .unwrap();
        assert!(content.author_or_target.is_none());
        assert!(content.lessons.is_none());
    }
}
