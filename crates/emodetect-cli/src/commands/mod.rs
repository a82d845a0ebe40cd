//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use emodetect_core::config::{DEFAULT_ENDPOINT, DEFAULT_MODEL_ID, DEFAULT_TIMEOUT_SECS};
use emodetect_core::ClassifierConfig;
use std::time::Duration;

pub mod analyze;
pub mod check;
pub mod serve;

/// Emotion Detector - classify the emotions expressed in text
#[derive(Parser)]
#[command(name = "emodetect")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub classifier: ClassifierArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where to reach the emotion classifier.
#[derive(Args)]
pub struct ClassifierArgs {
    /// Emotion prediction endpoint URL
    #[arg(long, global = true, env = "EMODETECT_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Model id sent in the model header
    #[arg(long, global = true, env = "EMODETECT_MODEL_ID", default_value = DEFAULT_MODEL_ID)]
    pub model_id: String,

    /// Upstream request timeout in seconds
    #[arg(long, global = true, env = "EMODETECT_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl ClassifierArgs {
    /// Build and validate the classifier configuration.
    pub fn to_config(&self) -> Result<ClassifierConfig> {
        let config = ClassifierConfig::new(
            &self.endpoint,
            &self.model_id,
            Duration::from_secs(self.timeout_secs),
        );
        config.validate()?;
        Ok(config)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(serve::ServeArgs),

    /// Classify a single statement
    Analyze(analyze::AnalyzeArgs),

    /// Run the reference statements and show their dominant emotions
    Check,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let config = self.classifier.to_config()?;

        match self.command {
            Commands::Serve(args) => serve::execute(args, &config).await,
            Commands::Analyze(args) => analyze::execute(args, &config).await,
            Commands::Check => check::execute(&config).await,
        }
    }
}
