//! Language identification service.
//!
//! [`LanguageIdentifier`] owns one detector per configured [`DetectorKind`]
//! and dispatches requests to the one the caller names. It is built once at
//! startup and shared by reference; every detector is read-only, so batch
//! detection fans out over a rayon thread pool without locking.

use std::collections::BTreeMap;
use std::fmt;

use log::info;
use rayon::prelude::*;

use crate::config::GlossaConfig;
use crate::detector::{Detection, DetectorKind, LanguageDetector, LanguageScore, build_detector};
use crate::error::{GlossaError, Result};

/// Dispatches detection requests to the configured detectors.
#[derive(Default)]
pub struct LanguageIdentifier {
    detectors: BTreeMap<DetectorKind, Box<dyn LanguageDetector>>,
}

impl fmt::Debug for LanguageIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageIdentifier")
            .field("detectors", &self.kinds())
            .finish()
    }
}

impl LanguageIdentifier {
    /// Create an identifier without detectors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every detector the configuration describes.
    ///
    /// The neural detector is built only when artifacts are configured, and
    /// then any artifact failure is returned.
    pub fn from_config(config: &GlossaConfig) -> Result<Self> {
        let mut identifier = Self::new();
        for kind in DetectorKind::ALL {
            if kind == DetectorKind::Neural && config.neural.is_none() {
                continue;
            }
            identifier = identifier.with_detector(kind, build_detector(kind, config)?);
        }

        info!("language identifier ready with {:?}", identifier.kinds());
        Ok(identifier)
    }

    /// Register (or replace) the detector for `kind`.
    pub fn with_detector(mut self, kind: DetectorKind, detector: Box<dyn LanguageDetector>) -> Self {
        self.detectors.insert(kind, detector);
        self
    }

    /// The detector registered for `kind`.
    pub fn detector(&self, kind: DetectorKind) -> Option<&dyn LanguageDetector> {
        self.detectors.get(&kind).map(|detector| detector.as_ref())
    }

    /// Registered kinds, in dispatch order.
    pub fn kinds(&self) -> Vec<DetectorKind> {
        self.detectors.keys().copied().collect()
    }

    /// Detect the language of `text` with the detector for `kind`.
    pub fn identify(&self, kind: DetectorKind, text: &str) -> Result<Detection> {
        self.detector(kind)
            .ok_or(GlossaError::DetectorUnavailable(kind))?
            .detect(text)
    }

    /// Per-language scores of the detector for `kind`, if it has any.
    pub fn scores(&self, kind: DetectorKind, text: &str) -> Result<Option<Vec<LanguageScore>>> {
        Ok(self
            .detector(kind)
            .ok_or(GlossaError::DetectorUnavailable(kind))?
            .scores(text))
    }

    /// Run every registered detector on `text`.
    pub fn identify_all(&self, text: &str) -> Result<Vec<(DetectorKind, Detection)>> {
        self.detectors
            .iter()
            .map(|(kind, detector)| Ok((*kind, detector.detect(text)?)))
            .collect()
    }

    /// Detect many texts in parallel; results keep the input order.
    pub fn identify_batch<S>(&self, kind: DetectorKind, texts: &[S]) -> Result<Vec<Detection>>
    where
        S: AsRef<str> + Sync,
    {
        let detector = self
            .detector(kind)
            .ok_or(GlossaError::DetectorUnavailable(kind))?;

        texts
            .par_iter()
            .map(|text| detector.detect(text.as_ref()))
            .collect()
    }
}
