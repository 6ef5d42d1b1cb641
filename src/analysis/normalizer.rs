//! Letter-only and word-only text normalization.
//!
//! Both profile kinds agree on one alphabet: Latin `a-z` plus Cyrillic
//! `а-я` and `ё`, after lowercasing. Everything else is either dropped
//! (letter mode) or turned into a word separator (word mode).

use std::fmt;

use super::char_filter::CharFilter;
use super::char_filter::lowercase::LowercaseCharFilter;
use super::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::error::Result;

/// Characters that are not recognized letters.
const NON_LETTER: &str = r"[^a-zа-яё]";

/// Characters that are neither recognized letters nor whitespace.
const NON_LETTER_OR_SPACE: &str = r"[^a-zа-яё\s]";

/// Runs of whitespace.
const WHITESPACE_RUN: &str = r"\s+";

/// A chain of char filters producing normalized text.
pub struct Normalizer {
    name: &'static str,
    filters: Vec<Box<dyn CharFilter>>,
    trim: bool,
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("name", &self.name)
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .field("trim", &self.trim)
            .finish()
    }
}

impl Normalizer {
    /// Lowercase and keep only recognized letters, without whitespace.
    pub fn letters_only() -> Result<Self> {
        Ok(Self {
            name: "letters_only",
            filters: vec![
                Box::new(LowercaseCharFilter::new()),
                Box::new(PatternReplaceCharFilter::new(NON_LETTER, "")?),
            ],
            trim: false,
        })
    }

    /// Lowercase, turn every non-letter into a space, collapse whitespace and trim.
    pub fn words_only() -> Result<Self> {
        Ok(Self {
            name: "words_only",
            filters: vec![
                Box::new(LowercaseCharFilter::new()),
                Box::new(PatternReplaceCharFilter::new(NON_LETTER_OR_SPACE, " ")?),
                Box::new(PatternReplaceCharFilter::new(WHITESPACE_RUN, " ")?),
            ],
            trim: true,
        })
    }

    /// Normalize `text`.
    ///
    /// Returns `None` when nothing survives normalization.
    pub fn normalize(&self, text: &str) -> Option<String> {
        let mut output = text.to_string();
        for filter in &self.filters {
            output = filter.filter(&output);
        }
        if self.trim {
            output = output.trim().to_string();
        }

        if output.is_empty() {
            None
        } else {
            Some(output)
        }
    }

    /// Get the name of this normalizer.
    pub fn name(&self) -> &'static str {
        self.name
    }
}
