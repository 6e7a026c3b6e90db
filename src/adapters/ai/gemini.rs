//! Gemini adapter for content generation.
//!
//! Talks to the `generateContent` REST endpoint: inline image parts for
//! photo analysis, system instructions and structured-output schemas for the
//! text operations, and part scanning for image generation. Implements
//! `GenerationPort` with robust JSON parsing and markdown stripping.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::{
    CategoryType, DomainError, EducationalContent, MovementArticle, MovementArticleRequest,
    MovementSummary, WeeklyAnalysis,
};
use crate::ports::GenerationPort;

/// Returned by `generate_illustration` when the service yields no image part.
/// Non-fatal degrade: callers always get a displayable reference.
pub const PLACEHOLDER_IMAGE_URI: &str = "https://picsum.photos/800/450";

/// Gemini generation adapter.
///
/// One configured `reqwest::Client` is reused across calls; every operation
/// is still a fully self-contained request with no shared session state.
pub struct GeminiAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    text_model: String,
    image_model: String,
}

impl GeminiAdapter {
    /// Create a new Gemini adapter.
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g. "https://generativelanguage.googleapis.com/v1beta")
    /// * `api_key` - Gemini API key
    /// * `text_model` - model for analysis and article generation
    /// * `image_model` - model for illustration generation
    pub fn new(base_url: String, api_key: String, text_model: String, image_model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
            text_model,
            image_model,
        }
    }

    // ── Prompts (kept in Vietnamese, the language of the fanpage) ───────────

    fn weekly_system_instruction() -> &'static str {
        "Bạn là Tổng phụ trách Đội. Hãy phân tích ảnh và trả về thông tin chi tiết \
         để đăng bài lên fanpage nhà trường theo đúng format truyền thống của Đội \
         TNTP Hồ Chí Minh."
    }

    fn weekly_prompt() -> &'static str {
        "Hãy phân tích hình ảnh buổi sinh hoạt dưới cờ này và viết nội dung cho \
         phong trào 'Mỗi tuần một câu chuyện đẹp, một cuốn sách hay, một tấm gương \
         sáng'. Hãy sáng tạo tên câu chuyện, tên học sinh (nếu không thấy rõ) và \
         bài học nhân văn dựa trên bối cảnh trong ảnh."
    }

    fn movement_system_instruction() -> &'static str {
        "Bạn là Tổng phụ trách Đội chuyên nghiệp. Hãy viết bài đăng fanpage.\n\
         1. 'introduction': Viết một đoạn văn mượt mà lồng ghép ngày tháng, địa điểm và số lượng tham gia.\n\
         2. 'detailedContent': Phát triển nội dung cơ bản thành một đoạn văn lôi cuốn, truyền cảm hứng.\n\
         3. 'significance': Tự viết một đoạn văn sâu sắc về ý nghĩa và giá trị giáo dục của phong trào này.\n\
         Lưu ý: Chỉ trả về text thuần trong các đoạn văn, KHÔNG kèm icon ở đây (icon sẽ được thêm ở UI)."
    }

    fn movement_prompt(request: &MovementArticleRequest) -> String {
        format!(
            "Tạo bài viết phong trào với thông tin sau:\n\
             Tên phong trào: {}\n\
             Ngày: {}\n\
             Địa điểm: {}\n\
             Số lượng tham gia: {}\n\
             Nội dung cơ bản: {}",
            request.name, request.date, request.location, request.participants, request.content
        )
    }

    fn content_system_instruction() -> &'static str {
        "Bạn là một trợ lý giáo dục chuyên viết nội dung truyền cảm hứng cho phong \
         trào Đội Thiếu niên Tiền phong Hồ Chí Minh. Ngôn ngữ: Tiếng Việt."
    }

    /// Fixed prompt per category. MOVEMENT has no mapping here by design; the
    /// caller fails before any request is built.
    fn content_prompt(category: CategoryType) -> Option<&'static str> {
        match category {
            CategoryType::Story => Some(
                "Hãy viết một câu chuyện đẹp, nhân văn về tình bạn, lòng tốt hoặc \
                 sự trung thực dành cho thiếu nhi Việt Nam.",
            ),
            CategoryType::Book => Some(
                "Hãy giới thiệu một cuốn sách hay phù hợp với lứa tuổi học sinh \
                 (VD: Cho tôi xin một vé đi tuổi thơ, Dế Mèn phiêu lưu ký...).",
            ),
            CategoryType::Example => Some(
                "Hãy giới thiệu một tấm gương sáng (anh hùng trẻ tuổi hoặc học sinh \
                 tiêu biểu) vượt khó học giỏi hoặc có hành động dũng cảm.",
            ),
            CategoryType::Movement => None,
        }
    }

    fn movement_list_system_instruction() -> &'static str {
        "Bạn là Tổng phụ trách Đội giỏi. Hãy mô tả chi tiết các phong trào hoạt \
         động thiếu nhi tại Việt Nam."
    }

    fn movement_list_prompt() -> &'static str {
        "Hãy liệt kê 5 phong trào tiêu biểu của Liên đội trường học hiện nay \
         (VD: Kế hoạch nhỏ, Nghìn việc tốt, Đền ơn đáp nghĩa...)."
    }

    fn illustration_prompt(prompt: &str) -> String {
        format!(
            "Cute 2D illustration for children school activity, pastel colors, soft lighting: {prompt}"
        )
    }

    // ── Structured-output schemas (bit-exact field contract) ────────────────

    fn weekly_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "OBJECT",
            "properties": {
                "week": { "type": "STRING", "description": "Số tuần, ví dụ: 21" },
                "date": { "type": "STRING", "description": "Ngày tháng năm, ví dụ: 26/01/2026" },
                "topic": { "type": "STRING", "description": "Tên câu chuyện/cuốn sách/tấm gương" },
                "presenter": { "type": "STRING", "description": "Họ tên học sinh và lớp" },
                "lesson": { "type": "STRING", "description": "Bài học rút ra từ nội dung" },
                "feedback": { "type": "STRING", "description": "Lời nhận xét về giọng kể/buổi sinh hoạt" },
                "spread": { "type": "STRING", "description": "Thông điệp lan tỏa phong trào" }
            },
            "required": ["week", "date", "topic", "presenter", "lesson", "feedback", "spread"]
        })
    }

    fn movement_article_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING" },
                "introduction": { "type": "STRING", "description": "Đoạn văn giới thiệu tổng hợp ngày, địa điểm, số lượng." },
                "detailedContent": { "type": "STRING", "description": "Đoạn văn chi tiết, hấp dẫn dựa trên nội dung cơ bản." },
                "significance": { "type": "STRING", "description": "Đoạn văn về ý nghĩa của phong trào." }
            },
            "required": ["name", "introduction", "detailedContent", "significance"]
        })
    }

    fn content_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING" },
                "summary": { "type": "STRING" },
                "content": { "type": "STRING" },
                "imagePrompt": { "type": "STRING", "description": "Mô tả hình ảnh bằng tiếng Anh để tạo hình minh họa" },
                "authorOrTarget": { "type": "STRING" },
                "lessons": { "type": "ARRAY", "items": { "type": "STRING" } }
            },
            "required": ["title", "summary", "content", "imagePrompt"]
        })
    }

    fn movement_list_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "ARRAY",
            "items": {
                "type": "OBJECT",
                "properties": {
                    "name": { "type": "STRING" },
                    "description": { "type": "STRING" },
                    "activities": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "impact": { "type": "STRING" }
                },
                "required": ["name", "description", "activities", "impact"]
            }
        })
    }

    // ── Plumbing ────────────────────────────────────────────────────────────

    /// Split a `data:<mime>;base64,<payload>` URI into mime type and payload.
    fn split_data_uri(uri: &str) -> Result<(String, &str), DomainError> {
        let (header, payload) = uri
            .split_once(',')
            .ok_or_else(|| DomainError::Media("not a data URI".to_string()))?;
        let mime = header
            .strip_prefix("data:")
            .and_then(|h| h.strip_suffix(";base64"))
            .filter(|m| !m.is_empty())
            .unwrap_or("image/jpeg")
            .to_string();
        Ok((mime, payload))
    }

    /// Sanitize JSON text from the model.
    ///
    /// Models sometimes wrap JSON in markdown code fences or prose. This
    /// strips fences and trims to the outermost object or array.
    fn sanitize_json(raw_text: &str) -> String {
        let trimmed = raw_text.trim();

        if trimmed.starts_with("```") {
            let without_prefix = trimmed
                .strip_prefix("```json")
                .or_else(|| trimmed.strip_prefix("```"))
                .unwrap_or(trimmed);
            if let Some(end_idx) = without_prefix.rfind("```") {
                return without_prefix[..end_idx].trim().to_string();
            }
            return without_prefix.trim().to_string();
        }

        // JSON embedded in prose: keep the outermost object or array,
        // whichever opens first.
        let open = match (trimmed.find('{'), trimmed.find('[')) {
            (Some(o), Some(a)) => Some(if o < a { (o, '}') } else { (a, ']') }),
            (Some(o), None) => Some((o, '}')),
            (None, Some(a)) => Some((a, ']')),
            (None, None) => None,
        };
        if let Some((start, close)) = open {
            if let Some(end) = trimmed.rfind(close) {
                if start < end {
                    return trimmed[start..=end].to_string();
                }
            }
        }

        trimmed.to_string()
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, DomainError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| DomainError::ServiceCall(format!("HTTP request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "generation API returned error");
            return Err(DomainError::ServiceCall(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| DomainError::Parse(format!("Failed to decode API response: {e}")))
    }

    /// First text part of the first candidate.
    fn first_text(response: GenerateContentResponse) -> Result<String, DomainError> {
        response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|content| content.parts.into_iter().find_map(|p| p.text))
            .ok_or_else(|| DomainError::Parse("No text content returned".to_string()))
    }

    /// Sanitize and parse a structured JSON payload. Fails with `Parse`
    /// rather than inventing a zero-valued default for the caller.
    fn parse_structured<T: serde::de::DeserializeOwned>(raw: &str) -> Result<T, DomainError> {
        let clean = Self::sanitize_json(raw);
        serde_json::from_str(&clean).map_err(|e| {
            warn!(error = %e, json = %clean.chars().take(200).collect::<String>(), "JSON parse failed");
            DomainError::Parse(format!("Response did not match schema: {e}"))
        })
    }
}

#[async_trait::async_trait]
impl GenerationPort for GeminiAdapter {
    async fn analyze_weekly_image(
        &self,
        image_data_uri: &str,
    ) -> Result<WeeklyAnalysis, DomainError> {
        let (mime_type, payload) = Self::split_data_uri(image_data_uri)?;
        info!(mime = %mime_type, payload_len = payload.len(), "sending photo for analysis");

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::inline(mime_type, payload.to_string()),
                    Part::text(Self::weekly_prompt()),
                ],
            }],
            system_instruction: Some(Content {
                parts: vec![Part::text(Self::weekly_system_instruction())],
            }),
            generation_config: Some(GenerationConfig::structured(Self::weekly_schema())),
        };

        let raw = Self::first_text(self.generate(&self.text_model, &request).await?)?;
        debug!(raw_len = raw.len(), "received analysis response");
        Self::parse_structured(&raw)
    }

    async fn generate_movement_article(
        &self,
        request: &MovementArticleRequest,
    ) -> Result<MovementArticle, DomainError> {
        info!(name = %request.name, "sending movement article request");

        let wire_request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::text(Self::movement_prompt(request))],
            }],
            system_instruction: Some(Content {
                parts: vec![Part::text(Self::movement_system_instruction())],
            }),
            generation_config: Some(GenerationConfig::structured(
                Self::movement_article_schema(),
            )),
        };

        let raw = Self::first_text(self.generate(&self.text_model, &wire_request).await?)?;
        let mut article: MovementArticle = Self::parse_structured(&raw)?;
        // The displayed title must match user input verbatim; the model's
        // rendition of the name is discarded.
        article.name = request.name.clone();
        Ok(article)
    }

    async fn fetch_educational_content(
        &self,
        category: CategoryType,
    ) -> Result<EducationalContent, DomainError> {
        let prompt = Self::content_prompt(category)
            .ok_or(DomainError::UnsupportedCategory(category))?;
        info!(%category, "fetching educational content");

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::text(prompt)],
            }],
            system_instruction: Some(Content {
                parts: vec![Part::text(Self::content_system_instruction())],
            }),
            generation_config: Some(GenerationConfig::structured(Self::content_schema())),
        };

        let raw = Self::first_text(self.generate(&self.text_model, &request).await?)?;
        Self::parse_structured(&raw)
    }

    async fn fetch_movement_list(&self) -> Result<Vec<MovementSummary>, DomainError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::text(Self::movement_list_prompt())],
            }],
            system_instruction: Some(Content {
                parts: vec![Part::text(Self::movement_list_system_instruction())],
            }),
            generation_config: Some(GenerationConfig::structured(Self::movement_list_schema())),
        };

        let raw = Self::first_text(self.generate(&self.text_model, &request).await?)?;
        Self::parse_structured(&raw)
    }

    async fn generate_illustration(&self, prompt: &str) -> Result<String, DomainError> {
        info!(prompt_len = prompt.len(), "generating illustration");

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::text(Self::illustration_prompt(prompt))],
            }],
            system_instruction: None,
            generation_config: Some(GenerationConfig::image("16:9")),
        };

        let response = self.generate(&self.image_model, &request).await?;

        // Scan all parts of the first candidate for an inline image payload.
        let inline = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|content| content.parts.into_iter().find_map(|p| p.inline_data));

        match inline {
            Some(data) => Ok(format!("data:{};base64,{}", data.mime_type, data.data)),
            None => {
                info!("no inline image in response, using placeholder");
                Ok(PLACEHOLDER_IMAGE_URI.to_string())
            }
        }
    }
}

// ── Wire types (generateContent REST shapes) ────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    fn inline(mime_type: String, data: String) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData { mime_type, data }),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_config: Option<ImageConfig>,
}

impl GenerationConfig {
    fn structured(schema: serde_json::Value) -> Self {
        Self {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(schema),
            image_config: None,
        }
    }

    fn image(aspect_ratio: &str) -> Self {
        Self {
            response_mime_type: None,
            response_schema: None,
            image_config: Some(ImageConfig {
                aspect_ratio: aspect_ratio.to_string(),
            }),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig {
    aspect_ratio: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TEXT_MODEL: &str = "gemini-3-flash-preview";
    const IMAGE_MODEL: &str = "gemini-2.5-flash-image";

    fn adapter(base_url: String) -> GeminiAdapter {
        GeminiAdapter::new(
            base_url,
            "test-key".to_string(),
            TEXT_MODEL.to_string(),
            IMAGE_MODEL.to_string(),
        )
    }

    fn text_response(text: &str) -> serde_json::Value {
        json!({ "candidates": [ { "content": { "parts": [ { "text": text } ] } } ] })
    }

    fn sample_request() -> MovementArticleRequest {
        MovementArticleRequest {
            name: "Kế hoạch nhỏ".to_string(),
            date: "10/03/2025".to_string(),
            content: "Thu gom giấy vụn".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn sanitize_json_clean() {
        let input = r#"{"summary": "test"}"#;
        assert_eq!(GeminiAdapter::sanitize_json(input), input);
    }

    #[test]
    fn sanitize_json_markdown() {
        let input = "```json\n{\"summary\": \"test\"}\n```";
        assert_eq!(
            GeminiAdapter::sanitize_json(input),
            r#"{"summary": "test"}"#
        );
    }

    #[test]
    fn sanitize_json_with_prose() {
        let input = "Here is the result:\n{\"week\": \"21\"}";
        assert_eq!(GeminiAdapter::sanitize_json(input), r#"{"week": "21"}"#);
    }

    #[test]
    fn sanitize_json_top_level_array() {
        let input = "The movements are: [{\"name\": \"A\"}]";
        assert_eq!(
            GeminiAdapter::sanitize_json(input),
            r#"[{"name": "A"}]"#
        );
    }

    #[test]
    fn split_data_uri_extracts_mime_and_payload() {
        let (mime, payload) =
            GeminiAdapter::split_data_uri("data:image/png;base64,QUJD").unwrap();
        assert_eq!(mime, "image/png");
        assert_eq!(payload, "QUJD");

        assert!(GeminiAdapter::split_data_uri("no comma here").is_err());
    }

    #[tokio::test]
    async fn analyze_weekly_image_parses_all_seven_fields() {
        let server = MockServer::start().await;
        let analysis = json!({
            "week": "21", "date": "26/01/2026", "topic": "Dế Mèn phiêu lưu ký",
            "presenter": "Nguyễn Văn A - Lớp 5A", "lesson": "Lòng can đảm",
            "feedback": "Giọng kể truyền cảm", "spread": "Lan tỏa tinh thần đọc sách"
        });
        Mock::given(method("POST"))
            .and(path(format!("/models/{TEXT_MODEL}:generateContent")))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "generationConfig": { "responseMimeType": "application/json" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_response(&analysis.to_string())))
            .expect(1)
            .mount(&server)
            .await;

        let result = adapter(server.uri())
            .analyze_weekly_image("data:image/jpeg;base64,QUJD")
            .await
            .unwrap();
        assert_eq!(result.week, "21");
        assert_eq!(result.topic, "Dế Mèn phiêu lưu ký");
        assert_eq!(result.spread, "Lan tỏa tinh thần đọc sách");
    }

    #[tokio::test]
    async fn movement_name_is_forced_to_request_name() {
        let server = MockServer::start().await;
        let body = json!({
            "name": "Tên do mô hình bịa ra",
            "introduction": "Ngày 10/03/2025 tại sân trường",
            "detailedContent": "Toàn Liên đội thu gom giấy vụn",
            "significance": "Rèn luyện ý thức tiết kiệm"
        });
        Mock::given(method("POST"))
            .and(path(format!("/models/{TEXT_MODEL}:generateContent")))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_response(&body.to_string())))
            .expect(1)
            .mount(&server)
            .await;

        let article = adapter(server.uri())
            .generate_movement_article(&sample_request())
            .await
            .unwrap();
        assert_eq!(article.name, "Kế hoạch nhỏ");
        assert_eq!(article.detailed_content, "Toàn Liên đội thu gom giấy vụn");
    }

    #[tokio::test]
    async fn unparsable_output_is_a_parse_error_not_a_default() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(text_response("xin lỗi, không rõ")),
            )
            .mount(&server)
            .await;

        let err = adapter(server.uri())
            .analyze_weekly_image("data:image/jpeg;base64,QUJD")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[tokio::test]
    async fn markdown_fenced_output_is_accepted() {
        let server = MockServer::start().await;
        let fenced = "```json\n[{\"name\":\"Kế hoạch nhỏ\",\"description\":\"d\",\"activities\":[\"a\"],\"impact\":\"i\"}]\n```";
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_response(fenced)))
            .mount(&server)
            .await;

        let movements = adapter(server.uri()).fetch_movement_list().await.unwrap();
        assert_eq!(movements.len(), 1);
        assert_eq!(movements[0].name, "Kế hoạch nhỏ");
    }

    #[tokio::test]
    async fn movement_category_fails_without_any_service_call() {
        let server = MockServer::start().await;
        // Zero expected requests: the guard fires before HTTP.
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = adapter(server.uri())
            .fetch_educational_content(CategoryType::Movement)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::UnsupportedCategory(CategoryType::Movement)
        ));
    }

    #[tokio::test]
    async fn illustration_returns_data_uri_for_inline_payload() {
        let server = MockServer::start().await;
        let body = json!({
            "candidates": [ { "content": { "parts": [
                { "text": "here is your image" },
                { "inlineData": { "mimeType": "image/png", "data": "QUJD" } }
            ] } } ]
        });
        Mock::given(method("POST"))
            .and(path(format!("/models/{IMAGE_MODEL}:generateContent")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let uri = adapter(server.uri())
            .generate_illustration("a reading corner")
            .await
            .unwrap();
        assert_eq!(uri, "data:image/png;base64,QUJD");
    }

    #[tokio::test]
    async fn illustration_falls_back_to_placeholder() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(text_response("no image today")),
            )
            .mount(&server)
            .await;

        let uri = adapter(server.uri())
            .generate_illustration("a reading corner")
            .await
            .unwrap();
        assert_eq!(uri, PLACEHOLDER_IMAGE_URI);
    }

    #[tokio::test]
    async fn http_error_maps_to_service_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
            .mount(&server)
            .await;

        let err = adapter(server.uri())
            .fetch_movement_list()
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ServiceCall(ref msg) if msg.contains("429")));
    }
}
