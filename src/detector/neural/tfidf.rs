//! TF-IDF vectorizer for text feature extraction.
//!
//! The vectorizer is fitted offline and shipped as a JSON artifact; this
//! module only transforms text with the frozen vocabulary and IDF weights.
//!
//! ```json
//! {
//!   "vocabulary": {"the": 0, "der": 1, "и": 2},
//!   "idf": [1.2, 1.7, 1.4],
//!   "analyzer": "word",
//!   "ngram_range": [1, 1],
//!   "norm": "l2"
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use ahash::AHashMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{GlossaError, Result};

/// Default token pattern: words of two or more word characters.
pub const DEFAULT_TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

/// How terms are extracted from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermAnalyzer {
    /// Word n-grams over tokens matched by the token pattern.
    #[default]
    Word,
    /// Character n-grams over the whole text.
    Char,
    /// Character n-grams inside space-padded words.
    CharWb,
}

/// Row normalization applied after IDF weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Norm {
    /// Divide by the sum of absolute values.
    L1,
    /// Divide by the Euclidean length.
    L2,
}

/// Serialized form of a fitted vectorizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerArtifact {
    /// Term -> feature column.
    pub vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per column.
    pub idf: Vec<f64>,
    #[serde(default)]
    pub analyzer: TermAnalyzer,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    #[serde(default = "default_true")]
    pub lowercase: bool,
    #[serde(default = "default_token_pattern")]
    pub token_pattern: String,
    #[serde(default = "default_norm")]
    pub norm: Option<Norm>,
    #[serde(default)]
    pub sublinear_tf: bool,
    /// Declared output width; must equal `idf.len()` when present.
    #[serde(default)]
    pub max_features: Option<usize>,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_true() -> bool {
    true
}

fn default_token_pattern() -> String {
    DEFAULT_TOKEN_PATTERN.to_string()
}

fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

/// A fitted TF-IDF vectorizer with a fixed output width.
pub struct TfIdfVectorizer {
    /// Term -> feature column.
    vocabulary: AHashMap<String, usize>,
    /// Inverse document frequency for each column.
    idf: Vec<f64>,
    analyzer: TermAnalyzer,
    ngram_range: (usize, usize),
    lowercase: bool,
    token_pattern: Regex,
    norm: Option<Norm>,
    sublinear_tf: bool,
    white_spaces: Regex,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("feature_count", &self.idf.len())
            .field("analyzer", &self.analyzer)
            .field("ngram_range", &self.ngram_range)
            .field("norm", &self.norm)
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Load a vectorizer artifact from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let artifact: VectorizerArtifact = serde_json::from_str(&content)?;
        Self::from_artifact(artifact)
    }

    /// Build a vectorizer from its artifact, validating its shape.
    pub fn from_artifact(artifact: VectorizerArtifact) -> Result<Self> {
        let feature_count = artifact.idf.len();
        if feature_count == 0 {
            return Err(GlossaError::model("vectorizer has no features"));
        }
        if let Some(declared) = artifact.max_features {
            if declared != feature_count {
                return Err(GlossaError::model(format!(
                    "vectorizer declares {declared} features but has {feature_count} idf weights"
                )));
            }
        }
        if let Some((term, index)) = artifact
            .vocabulary
            .iter()
            .find(|(_, index)| **index >= feature_count)
        {
            return Err(GlossaError::model(format!(
                "vocabulary term '{term}' maps to column {index}, beyond {feature_count} features"
            )));
        }
        let (min_n, max_n) = artifact.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(GlossaError::model(format!(
                "invalid ngram range ({min_n}, {max_n})"
            )));
        }

        let token_pattern = Regex::new(&artifact.token_pattern)
            .map_err(|e| GlossaError::model(format!("Invalid token pattern: {e}")))?;
        let white_spaces = Regex::new(r"\s\s+")
            .map_err(|e| GlossaError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(Self {
            vocabulary: artifact.vocabulary.into_iter().collect(),
            idf: artifact.idf,
            analyzer: artifact.analyzer,
            ngram_range: artifact.ngram_range,
            lowercase: artifact.lowercase,
            token_pattern,
            norm: artifact.norm,
            sublinear_tf: artifact.sublinear_tf,
            white_spaces,
        })
    }

    /// Transform a document into a dense TF-IDF feature vector.
    ///
    /// Terms outside the vocabulary contribute nothing.
    pub fn transform(&self, document: &str) -> Vec<f32> {
        let document = if self.lowercase {
            document.to_lowercase()
        } else {
            document.to_string()
        };

        // Count term frequencies
        let mut counts: AHashMap<usize, f64> = AHashMap::new();
        for term in self.terms(&document) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut features = vec![0.0f64; self.idf.len()];
        for (idx, count) in counts {
            let tf = if self.sublinear_tf {
                1.0 + count.ln()
            } else {
                count
            };
            features[idx] = tf * self.idf[idx];
        }

        let length = match self.norm {
            Some(Norm::L2) => features.iter().map(|x| x * x).sum::<f64>().sqrt(),
            Some(Norm::L1) => features.iter().map(|x| x.abs()).sum::<f64>(),
            None => 0.0,
        };
        if length > 0.0 {
            for value in &mut features {
                *value /= length;
            }
        }

        features.into_iter().map(|x| x as f32).collect()
    }

    /// Number of output features.
    pub fn feature_count(&self) -> usize {
        self.idf.len()
    }

    /// Extract the terms of a (possibly lowercased) document.
    fn terms(&self, document: &str) -> Vec<String> {
        match self.analyzer {
            TermAnalyzer::Word => self.word_ngrams(document),
            TermAnalyzer::Char => self.char_ngrams(document),
            TermAnalyzer::CharWb => self.char_wb_ngrams(document),
        }
    }

    fn word_ngrams(&self, document: &str) -> Vec<String> {
        // A pattern with a capture group yields the group, not the whole match.
        let tokens: Vec<&str> = if self.token_pattern.captures_len() > 1 {
            self.token_pattern
                .captures_iter(document)
                .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
                .collect()
        } else {
            self.token_pattern
                .find_iter(document)
                .map(|m| m.as_str())
                .collect()
        };

        let (min_n, max_n) = self.ngram_range;
        let mut terms = Vec::new();
        for n in min_n..=max_n.min(tokens.len()) {
            for window in tokens.windows(n) {
                terms.push(window.join(" "));
            }
        }
        terms
    }

    fn char_ngrams(&self, document: &str) -> Vec<String> {
        let text: Vec<char> = self.white_spaces.replace_all(document, " ").chars().collect();

        let (min_n, max_n) = self.ngram_range;
        let mut terms = Vec::new();
        for n in min_n..=max_n.min(text.len()) {
            for window in text.windows(n) {
                terms.push(window.iter().collect());
            }
        }
        terms
    }

    fn char_wb_ngrams(&self, document: &str) -> Vec<String> {
        let text = self.white_spaces.replace_all(document, " ");

        let (min_n, max_n) = self.ngram_range;
        let mut terms = Vec::new();
        for word in text.split_whitespace() {
            let padded: Vec<char> = std::iter::once(' ')
                .chain(word.chars())
                .chain(std::iter::once(' '))
                .collect();

            for n in min_n..=max_n {
                if padded.len() <= n {
                    // A short word is counted once, as a whole.
                    terms.push(padded.iter().collect());
                    break;
                }
                for window in padded.windows(n) {
                    terms.push(window.iter().collect());
                }
            }
        }
        terms
    }
}
