use anyhow::Result;
use genai::config::AppConfig;
use genai::ui::GenAiApp;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Pick up GENAI_API_KEY from .env when present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "genai=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Starting GenAI ({:?})", config.service);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("GenAI")
            .with_inner_size([900.0, 720.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "GenAI",
        options,
        Box::new(move |cc| Ok(Box::new(GenAiApp::new(cc, config)?))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
