//! Single statement analysis command.

use anyhow::Result;
use clap::Args;
use emodetect_client::{EmotionClassifier, WatsonClient};
use emodetect_core::{AnalysisResult, ClassifierConfig};
use tracing::debug;

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Text to classify
    pub text: String,

    /// Print the score report as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: AnalyzeArgs, config: &ClassifierConfig) -> Result<()> {
    debug!(endpoint = %config.endpoint, "Analyzing single statement");
    let client = WatsonClient::new(config);
    let result = client.analyze(&args.text).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result.report())?);
    } else {
        output::print_result(&args.text, &result);
    }

    match result {
        AnalysisResult::Scores(_) => Ok(()),
        AnalysisResult::Failed(failure) => Err(failure.into()),
    }
}
