//! Reference statement check.
//!
//! Classifies one statement per emotion so a human can eyeball whether the
//! upstream model still behaves.

use anyhow::{bail, Result};
use colored::Colorize;
use emodetect_client::{EmotionClassifier, WatsonClient};
use emodetect_core::{ClassifierConfig, Emotion};
use tracing::debug;

use crate::output;

/// Statements paired with the emotion they are expected to trigger.
pub const REFERENCE_STATEMENTS: [(&str, Emotion); 5] = [
    ("I am glad this happened", Emotion::Joy),
    ("I am really mad about this", Emotion::Anger),
    ("I feel disgusted just hearing about this", Emotion::Disgust),
    ("I am so sad about this", Emotion::Sadness),
    ("I am really afraid that this will happen", Emotion::Fear),
];

pub async fn execute(config: &ClassifierConfig) -> Result<()> {
    let client = WatsonClient::new(config);
    let mut mismatches = 0;

    output::print_check_header();
    for (statement, expected) in REFERENCE_STATEMENTS {
        let result = client.analyze(statement).await;
        if result.dominant_emotion() != Some(expected) {
            debug!(statement, expected = %expected, "Unexpected dominant emotion");
            mismatches += 1;
        }
        output::print_check_row(statement, &result);
    }

    println!();
    if mismatches > 0 {
        bail!(
            "{} of {} statements did not match their expected emotion",
            mismatches,
            REFERENCE_STATEMENTS.len()
        );
    }
    println!("{} All reference statements matched", "✓".green().bold());
    Ok(())
}
