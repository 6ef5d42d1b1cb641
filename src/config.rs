//! Configuration for language identification.
//!
//! A [`GlossaConfig`] names the training corpora, the profile options of the
//! two statistical detectors, and the pretrained artifacts of the neural
//! detector. It is usually read from a JSON file; every field is optional
//! and falls back to [`GlossaConfig::default`].
//!
//! # Examples
//!
//! ```
//! use glossa::config::GlossaConfig;
//!
//! // Use default configuration
//! let config = GlossaConfig::default();
//! assert_eq!(config.frequency.profile_size, 300);
//! assert_eq!(config.languages.len(), 3);
//!
//! // Override parts of it from JSON
//! let config = GlossaConfig::from_json(r#"{
//!     "languages": [
//!         {"language": "english", "path": "corpora/en.txt"},
//!         {"language": "german", "path": "corpora/de.txt"}
//!     ],
//!     "frequency": {"profile_size": 500},
//!     "neural": null
//! }"#).unwrap();
//! assert_eq!(config.languages[1].language, "german");
//! assert!(config.neural.is_none());
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::detector::{CorpusSource, DEFAULT_PROFILE_SIZE, NeuralArtifacts, ZeroScorePolicy};
use crate::error::{GlossaError, Result};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlossaConfig {
    /// Training corpora, in tie-break order.
    pub languages: Vec<CorpusSource>,
    /// Alphabet detector options.
    pub alphabet: AlphabetConfig,
    /// Word-frequency detector options.
    pub frequency: FrequencyConfig,
    /// Neural detector artifacts; `None` disables the neural detector.
    pub neural: Option<NeuralArtifacts>,
}

impl Default for GlossaConfig {
    fn default() -> Self {
        Self {
            languages: vec![
                CorpusSource::new("english", "./train_data/en_train.txt"),
                CorpusSource::new("russian", "./train_data/ru_train.txt"),
                CorpusSource::new("other", "./train_data/other_train.txt"),
            ],
            alphabet: AlphabetConfig::default(),
            frequency: FrequencyConfig::default(),
            neural: Some(NeuralArtifacts::default()),
        }
    }
}

impl GlossaConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Parse and validate a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GlossaConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check option values.
    pub fn validate(&self) -> Result<()> {
        if self.frequency.profile_size == 0 {
            return Err(GlossaError::config(
                "frequency.profile_size must be greater than zero",
            ));
        }
        if let Some(source) = self
            .languages
            .iter()
            .find(|source| source.language.trim().is_empty())
        {
            return Err(GlossaError::config(format!(
                "corpus {} has an empty language name",
                source.path.display()
            )));
        }
        Ok(())
    }
}

/// Alphabet detector options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlphabetConfig {
    /// What a best similarity of zero reports.
    pub zero_score: ZeroScorePolicy,
}

impl Default for AlphabetConfig {
    fn default() -> Self {
        Self {
            zero_score: ZeroScorePolicy::Fallback,
        }
    }
}

/// Word-frequency detector options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrequencyConfig {
    /// Number of most frequent words kept per language.
    pub profile_size: usize,
    /// What an all-zero score reports.
    pub zero_score: ZeroScorePolicy,
}

impl Default for FrequencyConfig {
    fn default() -> Self {
        Self {
            profile_size: DEFAULT_PROFILE_SIZE,
            zero_score: ZeroScorePolicy::Undetermined,
        }
    }
}
