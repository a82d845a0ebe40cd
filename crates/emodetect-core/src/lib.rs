//! Emodetect Core Library
//!
//! Emotion data model, failure taxonomy and classifier configuration.

pub mod config;
pub mod emotion;
pub mod error;

pub use config::ClassifierConfig;
pub use emotion::model::{Emotion, EmotionReport, EmotionScores};
pub use emotion::{format_statement, AnalysisResult};
pub use error::{AnalysisFailure, ConfigError, ConfigResult};
