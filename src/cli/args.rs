//! Command line argument parsing for the Glossa CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::detector::DetectorKind;

/// Glossa - identify the language of short texts
#[derive(Parser, Debug, Clone)]
#[command(name = "glossa")]
#[command(about = "Identify the language of short texts")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct GlossaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Configuration file (JSON); built-in defaults are used when absent
    #[arg(short, long, value_name = "CONFIG_FILE", env = "GLOSSA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl GlossaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Detect the language of one text
    Detect(DetectArgs),

    /// Detect the language of every line of a file
    Batch(BatchArgs),

    /// Run every configured detector on one text
    Compare(CompareArgs),

    /// Show a language profile
    Profile(ProfileArgs),
}

/// Detection strategy
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    /// Letter-frequency cosine similarity
    Alphabet,
    /// Weighted word-frequency scoring
    Frequency,
    /// Pretrained neural classifier
    Neural,
}

impl From<Method> for DetectorKind {
    fn from(method: Method) -> Self {
        match method {
            Method::Alphabet => DetectorKind::Alphabet,
            Method::Frequency => DetectorKind::Frequency,
            Method::Neural => DetectorKind::Neural,
        }
    }
}

/// Profile-based detection strategy
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileMethod {
    /// Letter frequencies
    Alphabet,
    /// Top-N word weights
    Frequency,
}

/// Arguments for detecting one text
#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    /// Detection strategy
    #[arg(short, long, default_value = "alphabet")]
    pub method: Method,

    /// Text to analyze (read from --input or stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    pub input: Option<PathBuf>,

    /// Include per-language scores
    #[arg(short, long)]
    pub scores: bool,
}

/// Arguments for batch detection
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// Detection strategy
    #[arg(short, long, default_value = "alphabet")]
    pub method: Method,

    /// File with one text per line
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Skip blank lines
    #[arg(long)]
    pub skip_blank: bool,
}

/// Arguments for comparing detectors
#[derive(Parser, Debug, Clone)]
pub struct CompareArgs {
    /// Text to analyze
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for showing a profile
#[derive(Parser, Debug, Clone)]
pub struct ProfileArgs {
    /// Profile kind
    #[arg(short, long, default_value = "frequency")]
    pub method: ProfileMethod,

    /// Language name as configured
    #[arg(short, long)]
    pub language: String,

    /// Maximum number of entries to show
    #[arg(short = 'n', long, default_value = "20")]
    pub limit: usize,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
