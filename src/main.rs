use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use hostaway_occupancy::adapters::hostaway::client::HostawayClient;
use hostaway_occupancy::adapters::sink::stdout::StdoutSink;
use hostaway_occupancy::config::types::LoggingConfig;
use hostaway_occupancy::config::{apply_env_overrides, load_config};
use hostaway_occupancy::pipeline;

fn find_config_path() -> PathBuf {
    // Check common locations for config file
    let candidates = [PathBuf::from("config.yaml"), exe_dir().join("config.yaml")];

    for path in &candidates {
        if path.exists() {
            return path.clone();
        }
    }

    candidates[0].clone()
}

fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Logs go to stderr; stdout carries only the report.
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false);

    match config.format.as_str() {
        "json" => builder.json().init(),
        _ => builder.init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let mut config = load_config(&find_config_path())?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    init_logging(&config.logging);

    info!("Starting Hostaway occupancy report");

    let today = chrono::Local::now().date_naive();
    let client = HostawayClient::new(&config.hostaway)?;
    let sink = StdoutSink::stdout();

    match pipeline::run(&config, &client, &sink, today).await {
        Ok(Some(_)) => info!("Report finished successfully"),
        Ok(None) => info!("Nothing to report"),
        Err(e) => {
            error!(error = %e, "Run failed with a critical error");
            return Err(e.into());
        }
    }

    Ok(())
}
