//! Application configuration. Service credential, models, paths.

use serde::Deserialize;

/// Default API root for the generation service.
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model for analysis and article generation.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";

/// Default model for illustration generation.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Gemini API key. Read from FANPOST_API_KEY (or GEMINI_API_KEY).
    #[serde(default)]
    pub api_key: Option<String>,

    /// API root URL. Read from FANPOST_API_URL.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Text model name. Read from FANPOST_TEXT_MODEL.
    #[serde(default)]
    pub text_model: Option<String>,

    /// Image model name. Read from FANPOST_IMAGE_MODEL.
    #[serde(default)]
    pub image_model: Option<String>,

    /// Directory for saved illustrations. Read from FANPOST_MEDIA_DIR.
    #[serde(default)]
    pub media_dir: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("FANPOST"));
        if let Ok(path) = std::env::var("FANPOST_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the API key if configured. Falls back to the conventional
    /// GEMINI_API_KEY variable.
    pub fn api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
    }

    /// Returns true if the real generation service can be used.
    pub fn is_ai_configured(&self) -> bool {
        self.api_key().is_some()
    }

    pub fn api_url_or_default(&self) -> String {
        self.api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    pub fn text_model_or_default(&self) -> String {
        self.text_model
            .clone()
            .unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string())
    }

    pub fn image_model_or_default(&self) -> String {
        self.image_model
            .clone()
            .unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string())
    }

    pub fn media_dir_or_default(&self) -> String {
        self.media_dir
            .clone()
            .unwrap_or_else(|| "./media".to_string())
    }
}
