//! Mock generation adapter for testing and key-less runs.
//!
//! Returns hardcoded responses without making API calls and upholds the same
//! contracts as the real adapter: name forcing, five movements, MOVEMENT
//! rejection, never-empty illustration references.

use std::time::Duration;

use tracing::info;

use crate::domain::{
    CategoryType, DomainError, EducationalContent, MovementArticle, MovementArticleRequest,
    MovementSummary, WeeklyAnalysis,
};
use crate::ports::GenerationPort;

/// A 1x1 transparent PNG, so illustration consumers get a decodable payload.
const TINY_PNG_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

/// Mock generation adapter.
///
/// Simulates network latency with a configurable delay.
pub struct MockGenerationAdapter {
    delay_ms: u64,
}

impl MockGenerationAdapter {
    /// Create a new mock adapter with default delay (300ms).
    pub fn new() -> Self {
        Self { delay_ms: 300 }
    }

    /// Create a mock adapter with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }

    async fn simulate_latency(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }
}

impl Default for MockGenerationAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl GenerationPort for MockGenerationAdapter {
    async fn analyze_weekly_image(
        &self,
        image_data_uri: &str,
    ) -> Result<WeeklyAnalysis, DomainError> {
        info!(
            payload_len = image_data_uri.len(),
            "[MOCK] simulating weekly photo analysis"
        );
        self.simulate_latency().await;

        Ok(WeeklyAnalysis {
            week: "21".to_string(),
            date: "26/01/2026".to_string(),
            topic: "Dế Mèn phiêu lưu ký".to_string(),
            presenter: "Nguyễn Văn A - Lớp 5A".to_string(),
            lesson: "Lòng can đảm và tinh thần ham học hỏi".to_string(),
            feedback: "Giọng kể truyền cảm, buổi sinh hoạt sôi nổi".to_string(),
            spread: "Lan tỏa tinh thần đọc sách đến toàn Liên đội".to_string(),
        })
    }

    async fn generate_movement_article(
        &self,
        request: &MovementArticleRequest,
    ) -> Result<MovementArticle, DomainError> {
        info!(name = %request.name, "[MOCK] simulating movement article");
        self.simulate_latency().await;

        Ok(MovementArticle {
            // Same contract as the real adapter: request name, verbatim.
            name: request.name.clone(),
            introduction: format!(
                "Ngày {}, tại {}, Liên đội đã tổ chức phong trào với sự tham gia của {}.",
                request.date,
                request.location,
                if request.participants.is_empty() {
                    "đông đảo đội viên"
                } else {
                    &request.participants
                }
            ),
            detailed_content: format!(
                "{} Các hoạt động diễn ra sôi nổi và nhận được sự hưởng ứng nhiệt tình.",
                request.content
            ),
            significance: "Phong trào góp phần giáo dục ý thức trách nhiệm và tinh thần \
                           đoàn kết cho các em đội viên."
                .to_string(),
        })
    }

    async fn fetch_educational_content(
        &self,
        category: CategoryType,
    ) -> Result<EducationalContent, DomainError> {
        if category == CategoryType::Movement {
            return Err(DomainError::UnsupportedCategory(category));
        }
        info!(%category, "[MOCK] simulating educational content");
        self.simulate_latency().await;

        Ok(EducationalContent {
            title: "Chú bé chăn cừu và cây đa làng".to_string(),
            summary: "Một câu chuyện về lòng trung thực dành cho thiếu nhi.".to_string(),
            content: "Ngày xưa, ở một ngôi làng nhỏ có một chú bé chăn cừu...".to_string(),
            image_prompt: "A shepherd boy under a banyan tree in a Vietnamese village".to_string(),
            author_or_target: Some("Truyện dân gian".to_string()),
            lessons: Some(vec![
                "Trung thực là đức tính quý giá".to_string(),
                "Lời nói dối làm mất lòng tin".to_string(),
            ]),
        })
    }

    async fn fetch_movement_list(&self) -> Result<Vec<MovementSummary>, DomainError> {
        info!("[MOCK] simulating movement directory");
        self.simulate_latency().await;

        let names = [
            "Kế hoạch nhỏ",
            "Nghìn việc tốt",
            "Đền ơn đáp nghĩa",
            "Nuôi heo đất",
            "Vì bạn nghèo",
        ];
        Ok(names
            .into_iter()
            .map(|name| MovementSummary {
                name: name.to_string(),
                description: format!("Phong trào {name} của Liên đội trường học."),
                activities: vec![
                    "Sinh hoạt đầu tuần".to_string(),
                    "Hoạt động theo chi đội".to_string(),
                ],
                impact: "Rèn luyện phẩm chất và kỹ năng cho đội viên.".to_string(),
            })
            .collect())
    }

    async fn generate_illustration(&self, prompt: &str) -> Result<String, DomainError> {
        info!(prompt_len = prompt.len(), "[MOCK] simulating illustration");
        self.simulate_latency().await;
        Ok(format!("data:image/png;base64,{TINY_PNG_BASE64}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn movement_article_echoes_request_name() {
        let adapter = MockGenerationAdapter::with_delay(0);
        let request = MovementArticleRequest {
            name: "Nuôi heo đất".to_string(),
            date: "05/09/2025".to_string(),
            content: "Tiết kiệm giúp bạn".to_string(),
            ..Default::default()
        };
        let article = adapter.generate_movement_article(&request).await.unwrap();
        assert_eq!(article.name, "Nuôi heo đất");
        assert!(article.introduction.contains("05/09/2025"));
    }

    #[tokio::test]
    async fn directory_contract_is_five_items() {
        let adapter = MockGenerationAdapter::with_delay(0);
        assert_eq!(adapter.fetch_movement_list().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn illustration_is_never_empty() {
        let adapter = MockGenerationAdapter::with_delay(0);
        let uri = adapter.generate_illustration("anything").await.unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
    }
}
