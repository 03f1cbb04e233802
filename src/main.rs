use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use inkwell::domain::{KeyValueStorePort, Route};
use inkwell::infrastructure::{
    AppConfig, CliArgs, FileKeyValueStore, HttpPostApi, MemoryKeyValueStore, StorageManager,
};
use inkwell::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config(storage: Option<&StorageManager>, args: CliArgs) -> Result<AppConfig> {
    let mut config = match storage {
        Some(storage) => storage.load_config(args.config.as_deref())?,
        None => AppConfig::default(),
    };
    config.merge_with_args(args);
    Ok(config)
}

fn initial_route(config: &AppConfig) -> Route {
    let Some(path) = config.route.as_deref() else {
        return Route::Home;
    };

    Route::parse(path).unwrap_or_else(|| {
        warn!(path, "Unknown start route, opening the reader");
        Route::Home
    })
}

fn create_app() -> Result<App> {
    let args = CliArgs::parse();
    let storage = StorageManager::new().ok();
    let config = load_config(storage.as_ref(), args)?;

    init_logging(&config)?;

    info!(version = inkwell::VERSION, api = %config.api.base_url, "Starting Inkwell");

    let api = Arc::new(HttpPostApi::with_timeout(
        &config.api.base_url,
        config.api.timeout(),
    )?);

    let store: Arc<dyn KeyValueStorePort> = if let Some(storage) = storage {
        Arc::new(FileKeyValueStore::open(storage))
    } else {
        warn!("No config directory available, theme will not be persisted");
        Arc::new(MemoryKeyValueStore::new())
    };

    Ok(App::new(
        api,
        store,
        initial_route(&config),
        config.ui.notification_duration(),
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    color_eyre::install()?;

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
