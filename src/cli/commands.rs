//! Command implementations for the Glossa CLI.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Read};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::GlossaConfig;
use crate::detector::{AlphabetDetector, DetectorKind, WordFrequencyDetector, build_detector};
use crate::identifier::LanguageIdentifier;

/// Execute a CLI command.
pub fn execute_command(args: GlossaArgs) -> Result<()> {
    let config = load_config(&args)?;
    match &args.command {
        Command::Detect(detect_args) => detect(detect_args, &config, &args),
        Command::Batch(batch_args) => batch(batch_args, &config, &args),
        Command::Compare(compare_args) => compare(compare_args, &config, &args),
        Command::Profile(profile_args) => profile(profile_args, &config, &args),
    }
}

/// Read the configuration file, or fall back to the built-in defaults.
pub fn load_config(args: &GlossaArgs) -> Result<GlossaConfig> {
    match &args.config {
        Some(path) => {
            info!("loading configuration from {}", path.display());
            GlossaConfig::from_file(path)
                .with_context(|| format!("failed to load configuration {}", path.display()))
        }
        None => {
            debug!("no configuration file given; using defaults");
            Ok(GlossaConfig::default())
        }
    }
}

/// Detect the language of one text.
fn detect(args: &DetectArgs, config: &GlossaConfig, cli_args: &GlossaArgs) -> Result<()> {
    let text = match (&args.text, &args.input) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read text from stdin")?;
            buffer
        }
    };

    let kind = DetectorKind::from(args.method);
    let detector = build_detector(kind, config)
        .with_context(|| format!("failed to build the {kind} detector"))?;

    let detection = detector.detect(&text)?;
    let scores = if args.scores {
        detector.scores(&text)
    } else {
        None
    };

    output_detection(
        &DetectionResult {
            method: kind,
            detection,
            scores,
        },
        cli_args,
    )?;
    Ok(())
}

/// Detect the language of every line of a file.
fn batch(args: &BatchArgs, config: &GlossaConfig, cli_args: &GlossaArgs) -> Result<()> {
    let content = fs::read_to_string(&args.input_file)
        .with_context(|| format!("failed to read {}", args.input_file.display()))?;

    let lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !args.skip_blank || !line.trim().is_empty())
        .collect();
    let texts: Vec<&str> = lines.iter().map(|(_, line)| *line).collect();

    let kind = DetectorKind::from(args.method);
    let identifier = LanguageIdentifier::new().with_detector(
        kind,
        build_detector(kind, config)
            .with_context(|| format!("failed to build the {kind} detector"))?,
    );

    let start = Instant::now();
    let detections = identifier.identify_batch(kind, &texts)?;
    let duration_ms = start.elapsed().as_millis() as u64;

    let mut summary: BTreeMap<String, usize> = BTreeMap::new();
    for detection in &detections {
        *summary.entry(detection.to_string()).or_insert(0) += 1;
    }
    let determined = detections.iter().filter(|d| d.is_determined()).count();

    let entries = lines
        .iter()
        .zip(detections)
        .map(|((line, _), detection)| BatchEntry {
            line: *line,
            detection,
        })
        .collect();

    output_batch(
        &BatchResult {
            method: kind,
            entries,
            summary,
            determined,
            duration_ms,
        },
        cli_args,
    )?;
    Ok(())
}

/// Run every configured detector on one text.
fn compare(args: &CompareArgs, config: &GlossaConfig, cli_args: &GlossaArgs) -> Result<()> {
    let identifier =
        LanguageIdentifier::from_config(config).context("failed to build the detectors")?;

    let detections = identifier
        .identify_all(&args.text)?
        .into_iter()
        .map(|(method, detection)| MethodDetection { method, detection })
        .collect();

    output_comparison(
        &ComparisonResult {
            text: args.text.clone(),
            detections,
        },
        cli_args,
    )?;
    Ok(())
}

/// Show the letter or word profile of one language.
fn profile(args: &ProfileArgs, config: &GlossaConfig, cli_args: &GlossaArgs) -> Result<()> {
    let view = match args.method {
        ProfileMethod::Alphabet => {
            let detector = AlphabetDetector::new(&config.languages)?;
            let Some(profile) = detector.profile(&args.language) else {
                bail!(
                    "no letter profile for '{}' (known: {})",
                    args.language,
                    detector.languages().join(", ")
                );
            };

            let mut entries: Vec<ProfileEntry> = profile
                .frequencies()
                .iter()
                .map(|(letter, weight)| ProfileEntry {
                    key: letter.to_string(),
                    weight: *weight,
                })
                .collect();
            entries.sort_by(|a, b| b.weight.total_cmp(&a.weight));
            let total_entries = entries.len();
            entries.truncate(args.limit);

            ProfileView {
                language: args.language.clone(),
                kind: DetectorKind::Alphabet.to_string(),
                total_entries,
                entries,
            }
        }
        ProfileMethod::Frequency => {
            let detector = WordFrequencyDetector::with_profile_size(
                &config.languages,
                config.frequency.profile_size,
            )?;
            let Some(profile) = detector.profile(&args.language) else {
                bail!(
                    "no word profile for '{}' (known: {})",
                    args.language,
                    detector.languages().join(", ")
                );
            };

            ProfileView {
                language: args.language.clone(),
                kind: DetectorKind::Frequency.to_string(),
                total_entries: profile.len(),
                entries: profile
                    .top(args.limit)
                    .iter()
                    .map(|(word, weight)| ProfileEntry {
                        key: word.clone(),
                        weight: *weight,
                    })
                    .collect(),
            }
        }
    };

    output_profile(&view, cli_args)?;
    Ok(())
}
