//! Emotion domain models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five emotion categories returned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Anger,
    Disgust,
    Fear,
    Joy,
    Sadness,
}

impl Emotion {
    /// All emotions in reporting order. Argmax ties resolve to the earliest entry.
    pub const ALL: [Emotion; 5] = [
        Emotion::Anger,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Joy,
        Emotion::Sadness,
    ];

    /// Wire name, as used by the upstream API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anger => "anger",
            Self::Disgust => "disgust",
            Self::Fear => "fear",
            Self::Joy => "joy",
            Self::Sadness => "sadness",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-emotion scores for one piece of text.
///
/// Each score is nominally in `[0, 1]`; the five do not have to sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmotionScores {
    pub anger: f64,
    pub disgust: f64,
    pub fear: f64,
    pub joy: f64,
    pub sadness: f64,
}

impl EmotionScores {
    /// Score for a single emotion.
    pub fn get(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Anger => self.anger,
            Emotion::Disgust => self.disgust,
            Emotion::Fear => self.fear,
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
        }
    }

    /// The emotion with the strictly greatest score.
    ///
    /// Scans `Emotion::ALL` in order and only replaces the current best on a
    /// strictly greater value, so ties go to the first emotion in that order.
    pub fn dominant_emotion(&self) -> Emotion {
        let mut best = Emotion::ALL[0];
        for emotion in Emotion::ALL.into_iter().skip(1) {
            if self.get(emotion) > self.get(best) {
                best = emotion;
            }
        }
        best
    }

    /// Iterate `(emotion, score)` pairs in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f64)> + '_ {
        Emotion::ALL.into_iter().map(move |e| (e, self.get(e)))
    }
}

/// Flat, nullable view of an analysis outcome.
///
/// A failed analysis serializes as the all-`null` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmotionReport {
    pub anger: Option<f64>,
    pub disgust: Option<f64>,
    pub fear: Option<f64>,
    pub joy: Option<f64>,
    pub sadness: Option<f64>,
    pub dominant_emotion: Option<Emotion>,
}

impl EmotionReport {
    /// The all-absent sentinel.
    pub fn sentinel() -> Self {
        Self::default()
    }

    /// True when every field is absent.
    pub fn is_sentinel(&self) -> bool {
        *self == Self::sentinel()
    }
}

impl From<&EmotionScores> for EmotionReport {
    fn from(scores: &EmotionScores) -> Self {
        Self {
            anger: Some(scores.anger),
            disgust: Some(scores.disgust),
            fear: Some(scores.fear),
            joy: Some(scores.joy),
            sadness: Some(scores.sadness),
            dominant_emotion: Some(scores.dominant_emotion()),
        }
    }
}
