//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use emodetect_core::ClassifierConfig;
use emodetect_web::state::AppState;
use std::path::PathBuf;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "EMODETECT_PORT", default_value = "5000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "EMODETECT_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Also append logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs, config: &ClassifierConfig) -> Result<()> {
    println!();
    println!("  {} {}", "Emotion".cyan().bold(), "Detector".bold());
    println!();
    println!("  {}      http://{}:{}", "Page".green(), args.host, args.port);
    println!(
        "  {}       http://{}:{}/emotionDetector?textToAnalyze=...",
        "API".green(),
        args.host,
        args.port
    );
    println!("  {}  {}", "Upstream".green(), config.endpoint.dimmed());
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    emodetect_web::run_server(AppState::from_config(config), &args.host, args.port).await?;

    Ok(())
}
