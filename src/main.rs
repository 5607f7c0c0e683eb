use anyhow::Result;
use clap::Parser;
use speakmate::{create_router, AppState, Config, JsonFileBackend, ResultsStore};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "speakmate", about = "Spoken-English coaching service")]
struct Args {
    /// Path to the configuration file (without extension)
    #[arg(long, default_value = "config/speakmate")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("SpeakMate v0.1.0");
    info!("Loaded config: {}", cfg.service.name);
    info!("Results file: {}", cfg.storage.results_path);

    let backend = JsonFileBackend::new(&cfg.storage.results_path);
    let store = ResultsStore::open(Box::new(backend)).await?;
    info!("Results store ready ({} results)", store.len());

    let state = AppState::new(store);
    let router = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
