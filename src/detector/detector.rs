//! Language detector trait definition.

use crate::error::Result;

use super::types::{Detection, LanguageScore};

/// Language detector trait.
///
/// Implementations hold immutable, pre-built models; `detect` never mutates
/// them, so one instance can serve concurrent callers.
pub trait LanguageDetector: Send + Sync {
    /// Detect the language of `text`.
    ///
    /// # Arguments
    /// * `text` - Raw, unnormalized input text
    ///
    /// # Returns
    /// The detected language, or a sentinel when no classification is possible
    fn detect(&self, text: &str) -> Result<Detection>;

    /// Per-language scores behind a detection, in candidate order.
    ///
    /// Returns `None` when the detector has no comparable scores for `text`,
    /// either because nothing survives normalization or because the detector
    /// does not score candidates individually.
    fn scores(&self, _text: &str) -> Option<Vec<LanguageScore>> {
        None
    }

    /// Get the name of this detector for debugging and logging.
    fn name(&self) -> &'static str;
}
