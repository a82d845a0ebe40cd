//! Emotion analysis outcomes and their human-readable rendering.

pub mod model;

use crate::error::AnalysisFailure;
use model::{Emotion, EmotionReport, EmotionScores};

/// Outcome of classifying one piece of text.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisResult {
    Scores(EmotionScores),
    Failed(AnalysisFailure),
}

impl AnalysisResult {
    pub fn scores(&self) -> Option<&EmotionScores> {
        match self {
            Self::Scores(scores) => Some(scores),
            Self::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&AnalysisFailure> {
        match self {
            Self::Scores(_) => None,
            Self::Failed(failure) => Some(failure),
        }
    }

    /// Dominant emotion, absent on failure.
    pub fn dominant_emotion(&self) -> Option<Emotion> {
        self.scores().map(EmotionScores::dominant_emotion)
    }

    /// Flat nullable view; failures become the all-`null` sentinel.
    pub fn report(&self) -> EmotionReport {
        match self {
            Self::Scores(scores) => EmotionReport::from(scores),
            Self::Failed(_) => EmotionReport::sentinel(),
        }
    }
}

impl From<Result<EmotionScores, AnalysisFailure>> for AnalysisResult {
    fn from(result: Result<EmotionScores, AnalysisFailure>) -> Self {
        match result {
            Ok(scores) => Self::Scores(scores),
            Err(failure) => Self::Failed(failure),
        }
    }
}

/// Render a score unrounded, always keeping a fractional part.
///
/// Shortest round-trip digits; magnitudes below `1e-4` use a signed exponent
/// of at least two digits (`0.0`, `0.95`, `1.23e-05`).
pub fn format_score(score: f64) -> String {
    let repr = format!("{:?}", score);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

/// Sentence shown to end users for a successful analysis.
pub fn format_statement(scores: &EmotionScores) -> String {
    format!(
        "For the given statement, the system response is 'anger': {}, 'disgust': {}, \
         'fear': {}, 'joy': {} and 'sadness': {}. The dominant emotion is {}.",
        format_score(scores.anger),
        format_score(scores.disgust),
        format_score(scores.fear),
        format_score(scores.joy),
        format_score(scores.sadness),
        scores.dominant_emotion(),
    )
}
