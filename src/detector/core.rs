//! Helper functions for creating language detectors.

use crate::config::GlossaConfig;
use crate::error::{GlossaError, Result};

use super::alphabet::AlphabetDetector;
use super::corpus::CorpusSource;
use super::detector::LanguageDetector;
use super::frequency::WordFrequencyDetector;
use super::neural::{NeuralArtifacts, NeuralDetector};
use super::types::DetectorKind;

/// Create a new alphabet detector from training corpora.
pub fn new_alphabet(sources: &[CorpusSource]) -> Result<Box<dyn LanguageDetector>> {
    Ok(Box::new(AlphabetDetector::new(sources)?))
}

/// Create a new word-frequency detector from training corpora.
pub fn new_frequency(
    sources: &[CorpusSource],
    profile_size: usize,
) -> Result<Box<dyn LanguageDetector>> {
    Ok(Box::new(WordFrequencyDetector::with_profile_size(
        sources,
        profile_size,
    )?))
}

/// Create a new neural detector from pretrained artifacts.
pub fn new_neural(artifacts: &NeuralArtifacts) -> Result<Box<dyn LanguageDetector>> {
    Ok(Box::new(NeuralDetector::load(artifacts)?))
}

/// Create the detector of the given kind as described by `config`.
pub fn build_detector(
    kind: DetectorKind,
    config: &GlossaConfig,
) -> Result<Box<dyn LanguageDetector>> {
    match kind {
        DetectorKind::Alphabet => Ok(Box::new(
            AlphabetDetector::new(&config.languages)?
                .with_zero_score_policy(config.alphabet.zero_score),
        )),
        DetectorKind::Frequency => Ok(Box::new(
            WordFrequencyDetector::with_profile_size(
                &config.languages,
                config.frequency.profile_size,
            )?
            .with_zero_score_policy(config.frequency.zero_score),
        )),
        DetectorKind::Neural => match &config.neural {
            Some(artifacts) => new_neural(artifacts),
            None => Err(GlossaError::DetectorUnavailable(DetectorKind::Neural)),
        },
    }
}
