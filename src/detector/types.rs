//! Common types for language detection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GlossaError;

/// Outcome of a detection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "language", rename_all = "snake_case")]
pub enum Detection {
    /// A language label.
    Language(String),
    /// No confident classification was possible.
    Undetermined,
    /// The neural classifier predicted a class with no label.
    UnknownClass,
}

impl Detection {
    /// Whether a language was detected.
    pub fn is_determined(&self) -> bool {
        matches!(self, Detection::Language(_))
    }
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Detection::Language(language) => f.write_str(language),
            Detection::Undetermined => f.write_str("undetermined"),
            Detection::UnknownClass => f.write_str("unknown class"),
        }
    }
}

/// Detection strategy selector.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DetectorKind {
    /// Letter-frequency cosine similarity.
    Alphabet,
    /// Weighted word-frequency scoring.
    Frequency,
    /// Pretrained TF-IDF neural classifier.
    Neural,
}

impl DetectorKind {
    /// All kinds, in dispatch order.
    pub const ALL: [DetectorKind; 3] = [
        DetectorKind::Alphabet,
        DetectorKind::Frequency,
        DetectorKind::Neural,
    ];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectorKind::Alphabet => "alphabet",
            DetectorKind::Frequency => "frequency",
            DetectorKind::Neural => "neural",
        }
    }
}

impl fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetectorKind {
    type Err = GlossaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "alphabet" => Ok(DetectorKind::Alphabet),
            "frequency" | "word_frequency" => Ok(DetectorKind::Frequency),
            "neural" => Ok(DetectorKind::Neural),
            other => Err(GlossaError::invalid_argument(format!(
                "unknown detector '{other}' (expected alphabet, frequency or neural)"
            ))),
        }
    }
}

/// Score of one candidate language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageScore {
    /// Language name.
    pub language: String,
    /// Similarity or summed weight, depending on the detector.
    pub score: f64,
}

impl LanguageScore {
    /// Create a new language score.
    pub fn new<S: Into<String>>(language: S, score: f64) -> Self {
        Self {
            language: language.into(),
            score,
        }
    }
}

/// What to report when the best candidate scored zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroScorePolicy {
    /// Report the first candidate in configured order anyway.
    Fallback,
    /// Report [`Detection::Undetermined`].
    Undetermined,
}
