//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use std::path::PathBuf;
use std::sync::Arc;

use dotenv::dotenv;
use fanpost::adapters::ai::{GeminiAdapter, MockGenerationAdapter};
use fanpost::adapters::clipboard::SystemClipboard;
use fanpost::adapters::ui::TuiInputPort;
use fanpost::ports::{ClipboardPort, GenerationPort, InputPort};
use fanpost::shared::config::AppConfig;
use fanpost::usecases::{ComposerService, LibraryService};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Ok(path) = &env_loaded {
        info!(path = %path.display(), "loaded .env");
    }

    fanpost::adapters::ui::init_ui();

    let cfg = AppConfig::load().unwrap_or_default();

    // --- Generation adapter: real Gemini when a key is present, mock otherwise ---
    let generation: Arc<dyn GenerationPort> = if cfg.is_ai_configured() {
        info!(
            model = %cfg.text_model_or_default(),
            url = %cfg.api_url_or_default(),
            "generation enabled with Gemini adapter"
        );
        Arc::new(GeminiAdapter::new(
            cfg.api_url_or_default(),
            cfg.api_key().unwrap_or_default(),
            cfg.text_model_or_default(),
            cfg.image_model_or_default(),
        ))
    } else {
        warn!("FANPOST_API_KEY/GEMINI_API_KEY not set, using mock generation adapter");
        Arc::new(MockGenerationAdapter::new())
    };

    let clipboard: Arc<dyn ClipboardPort> = Arc::new(SystemClipboard::new());

    // --- Services ---
    let composer = Arc::new(ComposerService::new(
        Arc::clone(&generation),
        Arc::clone(&clipboard),
    ));
    let library = Arc::new(LibraryService::new(
        Arc::clone(&generation),
        PathBuf::from(cfg.media_dir_or_default()),
    ));

    // --- Run (main menu -> weekly bulletin / movements / library) ---
    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(composer, library));
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
