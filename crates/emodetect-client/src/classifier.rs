//! Classifier abstraction shared by the web server and the CLI.

use async_trait::async_trait;
use emodetect_core::AnalysisResult;

/// Anything that can turn text into emotion scores.
///
/// Implementations never fail outright: every problem is reported through
/// `AnalysisResult::Failed`.
#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    async fn analyze(&self, text: &str) -> AnalysisResult;
}
