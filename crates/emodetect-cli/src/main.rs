//! Emodetect CLI - Emotion Detector
//!
//! Classifies text with the Watson NLP emotion model and serves the web front end.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::{Cli, Commands};

/// Initialize tracing.
///
/// The server logs to stdout (and optionally a file). One-shot commands log
/// to stderr so their stdout stays clean for piping.
fn init_tracing(log_file: Option<&std::path::Path>, server_mode: bool, verbose: bool) {
    let default_filter = if verbose {
        "emodetect=debug,emodetect_web=debug,emodetect_client=debug,tower_http=debug"
    } else if server_mode {
        "emodetect=info,emodetect_web=debug,emodetect_client=debug"
    } else {
        "emodetect=warn,emodetect_client=warn"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .expect("Failed to open log file");

        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .init();
    } else if server_mode {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (log_file, server_mode) = match &cli.command {
        Commands::Serve(args) => (args.log_file.clone(), true),
        _ => (None, false),
    };
    init_tracing(log_file.as_deref(), server_mode, cli.verbose);

    cli.execute().await
}
