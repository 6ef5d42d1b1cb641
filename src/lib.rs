//! # Glossa
//!
//! Language identification for short text snippets.
//!
//! ## Features
//!
//! - Letter-frequency profiles compared by cosine similarity
//! - Top-N word-frequency profiles with weighted overlap scoring
//! - A pretrained TF-IDF + feed-forward network classifier
//! - Deterministic tie-breaking in configured language order
//! - Read-only detectors, safe to share across threads

pub mod analysis;
pub mod cli;
pub mod config;
pub mod detector;
pub mod error;
pub mod identifier;

pub mod prelude {
    pub use crate::config::GlossaConfig;
    pub use crate::detector::{
        AlphabetDetector, CorpusSource, Detection, DetectorKind, LanguageDetector,
        LanguageScore, NeuralArtifacts, NeuralDetector, WordFrequencyDetector,
    };
    pub use crate::error::{GlossaError, Result};
    pub use crate::identifier::LanguageIdentifier;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
