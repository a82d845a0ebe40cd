//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use emodetect_core::emotion::format_score;
use emodetect_core::{AnalysisResult, Emotion, EmotionScores};
use unicode_width::UnicodeWidthStr;

/// Width of the bar drawn for a score of 1.0.
const BAR_WIDTH: usize = 30;

/// Print one analysis result.
pub fn print_result(text: &str, result: &AnalysisResult) {
    println!("{} {}", "Statement:".bold(), text.cyan());
    println!();

    match result {
        AnalysisResult::Scores(scores) => print_scores(scores),
        AnalysisResult::Failed(failure) => {
            println!("{} {}", "✗".red().bold(), failure);
        }
    }
}

/// Print the five scores as bars, highlighting the dominant emotion.
pub fn print_scores(scores: &EmotionScores) {
    let dominant = scores.dominant_emotion();

    for (emotion, score) in scores.iter() {
        let filled = ((score.clamp(0.0, 1.0) * BAR_WIDTH as f64).round()) as usize;
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
        let name = pad_right(emotion.as_str(), 8);

        if emotion == dominant {
            println!("  {} {} {}", name.bold(), emotion_color(emotion, &bar), format_score(score).bold());
        } else {
            println!("  {} {} {}", name, bar.dimmed(), format_score(score));
        }
    }

    println!();
    println!("{} {}", "Dominant emotion:".bold(), emotion_color(dominant, dominant.as_str()).bold());
}

/// Print the header of the statement / dominant emotion table.
pub fn print_check_header() {
    println!("{} | {}", pad_right("Statement", 50), pad_right("Dominant Emotion", 20));
    println!("{} | {}", "-".repeat(50), "-".repeat(20));
}

/// Print one row of the statement / dominant emotion table.
pub fn print_check_row(statement: &str, result: &AnalysisResult) {
    let statement = pad_right(&truncate(statement, 50), 50);
    match result.dominant_emotion() {
        Some(emotion) => println!("{} | {}", statement, emotion_color(emotion, emotion.as_str())),
        None => println!("{} | {}", statement, "N/A".dimmed()),
    }
}

fn emotion_color(emotion: Emotion, s: &str) -> ColoredString {
    match emotion {
        Emotion::Anger => s.red(),
        Emotion::Disgust => s.green(),
        Emotion::Fear => s.magenta(),
        Emotion::Joy => s.yellow(),
        Emotion::Sadness => s.blue(),
    }
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Truncate a string to a visual width, ending with "..." when cut.
fn truncate(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > max_width.saturating_sub(3) {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push_str("...");
    out
}
