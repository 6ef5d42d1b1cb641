//! Pretrained neural language classifier.
//!
//! Three artifacts produced by offline training are loaded read-only:
//! - a fitted TF-IDF vectorizer (JSON), see [`tfidf`]
//! - network weights (`.safetensors` or PyTorch `.pth`), see [`network`]
//! - a class index to label map (JSON), see [`labels`]
//!
//! All three are required; a missing or inconsistent artifact fails
//! construction.

pub mod labels;
pub mod network;
pub mod tfidf;

use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{GlossaError, Result};

use super::detector::LanguageDetector;
use super::types::Detection;

pub use labels::LabelMap;
pub use network::{HIDDEN_SIZE, LanguageNetwork};
pub use tfidf::{Norm, TermAnalyzer, TfIdfVectorizer, VectorizerArtifact};

/// Locations of the pretrained artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeuralArtifacts {
    /// Vectorizer JSON.
    pub vectorizer_path: PathBuf,
    /// Network weights.
    pub model_path: PathBuf,
    /// Class label map JSON.
    pub labels_path: PathBuf,
}

impl NeuralArtifacts {
    /// Create a new artifact set.
    pub fn new<P: AsRef<Path>>(vectorizer_path: P, model_path: P, labels_path: P) -> Self {
        Self {
            vectorizer_path: vectorizer_path.as_ref().to_path_buf(),
            model_path: model_path.as_ref().to_path_buf(),
            labels_path: labels_path.as_ref().to_path_buf(),
        }
    }
}

impl Default for NeuralArtifacts {
    fn default() -> Self {
        Self::new(
            "./lang_processors/tfidf_vectorizer.json",
            "./lang_processors/neurolang_processor_model.pth",
            "./lang_processors/lang_labels_map.json",
        )
    }
}

/// Classifies text with a TF-IDF vectorizer and a two-layer network.
#[derive(Debug)]
pub struct NeuralDetector {
    vectorizer: TfIdfVectorizer,
    network: LanguageNetwork,
    labels: LabelMap,
}

impl NeuralDetector {
    /// Load every artifact; any failure is fatal.
    pub fn load(artifacts: &NeuralArtifacts) -> Result<Self> {
        let vectorizer = TfIdfVectorizer::from_file(&artifacts.vectorizer_path)?;
        let labels = LabelMap::from_file(&artifacts.labels_path)?;
        let network = LanguageNetwork::load(
            &artifacts.model_path,
            vectorizer.feature_count(),
            labels.len(),
        )?;

        info!(
            "loaded neural classifier ({} features, {} classes) from {}",
            vectorizer.feature_count(),
            labels.len(),
            artifacts.model_path.display()
        );
        Self::from_parts(vectorizer, network, labels)
    }

    /// Assemble a detector from loaded parts, checking that their shapes agree.
    pub fn from_parts(
        vectorizer: TfIdfVectorizer,
        network: LanguageNetwork,
        labels: LabelMap,
    ) -> Result<Self> {
        if network.input_size() != vectorizer.feature_count() {
            return Err(GlossaError::model(format!(
                "network expects {} features but the vectorizer produces {}",
                network.input_size(),
                vectorizer.feature_count()
            )));
        }
        if network.classes() != labels.len() {
            return Err(GlossaError::model(format!(
                "network has {} classes but the label map has {} entries",
                network.classes(),
                labels.len()
            )));
        }

        Ok(Self {
            vectorizer,
            network,
            labels,
        })
    }

    /// Input width of the classifier.
    pub fn feature_count(&self) -> usize {
        self.vectorizer.feature_count()
    }

    /// Number of output classes.
    pub fn class_count(&self) -> usize {
        self.network.classes()
    }

    /// Class labels.
    pub fn labels(&self) -> &LabelMap {
        &self.labels
    }
}

impl LanguageDetector for NeuralDetector {
    fn detect(&self, text: &str) -> Result<Detection> {
        let features = self.vectorizer.transform(&text.to_lowercase());
        let index = self.network.predict(&features)?;

        match self.labels.get(index) {
            Some(label) => Ok(Detection::Language(label.to_string())),
            None => {
                debug!("predicted class {index} has no label");
                Ok(Detection::UnknownClass)
            }
        }
    }

    fn name(&self) -> &'static str {
        "neural"
    }
}
