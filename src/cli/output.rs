//! Output formatting for CLI commands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cli::args::{GlossaArgs, OutputFormat};
use crate::detector::{Detection, DetectorKind, LanguageScore};
use crate::error::Result;

/// Result of detecting one text.
#[derive(Debug, Serialize, Deserialize)]
pub struct DetectionResult {
    pub method: DetectorKind,
    pub detection: Detection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<Vec<LanguageScore>>,
}

/// One line of a batch run.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchEntry {
    pub line: usize,
    pub detection: Detection,
}

/// Result of a batch run.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResult {
    pub method: DetectorKind,
    pub entries: Vec<BatchEntry>,
    pub summary: BTreeMap<String, usize>,
    pub determined: usize,
    pub duration_ms: u64,
}

/// Result of running every detector on one text.
#[derive(Debug, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub text: String,
    pub detections: Vec<MethodDetection>,
}

/// One detector's answer in a comparison.
#[derive(Debug, Serialize, Deserialize)]
pub struct MethodDetection {
    pub method: DetectorKind,
    pub detection: Detection,
}

/// A (possibly truncated) language profile.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileView {
    pub language: String,
    pub kind: String,
    pub total_entries: usize,
    pub entries: Vec<ProfileEntry>,
}

/// One profile entry: a letter or a word with its weight.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileEntry {
    pub key: String,
    pub weight: f64,
}

/// Print a detection.
pub fn output_detection(result: &DetectionResult, args: &GlossaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("Method: {}", result.method);
            }
            println!("{}", result.detection);
            if let Some(scores) = &result.scores {
                print_scores(scores);
            }
            Ok(())
        }
    }
}

/// Print a batch run.
pub fn output_batch(result: &BatchResult, args: &GlossaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            for entry in &result.entries {
                println!("{:>6}  {}", entry.line, entry.detection);
            }
            if args.verbosity() > 0 {
                println!();
                println!(
                    "{} texts with '{}' in {}ms ({} determined)",
                    result.entries.len(),
                    result.method,
                    result.duration_ms,
                    result.determined
                );
                for (label, count) in &result.summary {
                    println!("  {label}: {count}");
                }
            }
            Ok(())
        }
    }
}

/// Print a comparison.
pub fn output_comparison(result: &ComparisonResult, args: &GlossaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("Text: {}", result.text);
            }
            for entry in &result.detections {
                println!("{:<10} {}", entry.method.as_str(), entry.detection);
            }
            Ok(())
        }
    }
}

/// Print a profile.
pub fn output_profile(view: &ProfileView, args: &GlossaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(view, args),
        OutputFormat::Human => {
            println!(
                "{} profile for '{}' ({} entries)",
                view.kind, view.language, view.total_entries
            );
            for entry in &view.entries {
                println!("  {:<20} {:.6}", entry.key, entry.weight);
            }
            Ok(())
        }
    }
}

fn print_scores(scores: &[LanguageScore]) {
    for score in scores {
        println!("  {:<20} {:.6}", score.language, score.score);
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &GlossaArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
