use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use textmill::config::Config;

#[derive(Parser)]
#[command(name = "textmill")]
#[command(about = "Extracts text from uploaded PDF, image, DOCX, and spreadsheet files")]
#[command(version)]
struct Cli {
    /// Path to a settings.toml (defaults to the standard search paths)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Listen address (overrides config)
    #[arg(long)]
    bind: Option<String>,

    /// Upload working directory (overrides config)
    #[arg(long)]
    upload_dir: Option<PathBuf>,

    /// Tesseract language set, e.g. "eng+hin+mar" (overrides config)
    #[arg(long)]
    ocr_languages: Option<String>,
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "textmill=info,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };

    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }
    if let Some(dir) = cli.upload_dir {
        config.storage.upload_dir = dir;
    }
    if let Some(languages) = cli.ocr_languages {
        config.ocr.languages = languages;
    }

    textmill::server::serve(config, shutdown_signal()).await
}
