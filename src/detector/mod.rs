//! Language detectors.
//!
//! This module provides three independent strategies for identifying the
//! language of a short text:
//! - Alphabet: cosine similarity between letter-frequency distributions
//! - Frequency: summed weights of known frequent words
//! - Neural: TF-IDF features fed to a small pretrained feed-forward network
//!
//! # Architecture
//!
//! - `LanguageDetector` trait: Common interface for all detectors
//! - `AlphabetDetector` / `LanguageProfile`: letter profiles
//! - `WordFrequencyDetector` / `WordProfile`: top-N word profiles
//! - `NeuralDetector`: vectorizer + network + label map
//! - `Detection`: the outcome, a language or a sentinel
//!
//! Candidate languages are always compared in the order their corpora were
//! configured; on equal scores the earlier language wins.
//!
//! # Example
//!
//! ```rust,no_run
//! use glossa::detector::{self, CorpusSource, Detection};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sources = vec![
//!     CorpusSource::new("english", "./train_data/en_train.txt"),
//!     CorpusSource::new("russian", "./train_data/ru_train.txt"),
//! ];
//!
//! let detector = detector::new_alphabet(&sources)?;
//! let detection = detector.detect("Это простой пример текста")?;
//! assert_eq!(detection, Detection::Language("russian".to_string()));
//! # Ok(())
//! # }
//! ```

mod alphabet;
mod core;
mod corpus;
mod detector;
mod frequency;
pub mod neural;
mod scoring;
mod types;

// Public exports
pub use alphabet::{AlphabetDetector, LanguageProfile};
pub use self::core::{build_detector, new_alphabet, new_frequency, new_neural};
pub use corpus::CorpusSource;
pub use detector::LanguageDetector;
pub use frequency::{DEFAULT_PROFILE_SIZE, WordFrequencyDetector, WordProfile};
pub use neural::{NeuralArtifacts, NeuralDetector};
pub use scoring::cosine_similarity;
pub use types::{Detection, DetectorKind, LanguageScore, ZeroScorePolicy};
