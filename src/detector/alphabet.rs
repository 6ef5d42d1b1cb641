//! Letter-frequency language detector.

use std::collections::BTreeMap;

use ahash::AHashMap;
use log::{debug, info};

use crate::analysis::normalizer::Normalizer;
use crate::error::Result;

use super::corpus::CorpusSource;
use super::detector::LanguageDetector;
use super::scoring::{cosine_similarity, select_best};
use super::types::{Detection, LanguageScore, ZeroScorePolicy};

/// Relative letter frequencies of one language.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageProfile {
    language: String,
    frequencies: BTreeMap<char, f64>,
}

impl LanguageProfile {
    /// Build a profile from raw text.
    ///
    /// Returns `None` when the text contains no recognized letters.
    pub fn build<S: Into<String>>(
        language: S,
        text: &str,
        normalizer: &Normalizer,
    ) -> Option<Self> {
        let letters = normalizer.normalize(text)?;
        Some(Self {
            language: language.into(),
            frequencies: letter_frequencies(&letters),
        })
    }

    /// Build a profile from raw text with the standard letter normalization.
    pub fn from_text<S: Into<String>>(language: S, text: &str) -> Result<Option<Self>> {
        let normalizer = Normalizer::letters_only()?;
        Ok(Self::build(language, text, &normalizer))
    }

    /// Language name.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Letter -> relative frequency.
    pub fn frequencies(&self) -> &BTreeMap<char, f64> {
        &self.frequencies
    }

    /// Relative frequency of one letter (0.0 when absent).
    pub fn frequency(&self, letter: char) -> f64 {
        self.frequencies.get(&letter).copied().unwrap_or(0.0)
    }

    /// Cosine similarity against another profile.
    pub fn similarity(&self, other: &LanguageProfile) -> f64 {
        cosine_similarity(&self.frequencies, &other.frequencies)
    }
}

/// Relative frequency of every letter in already-normalized text.
fn letter_frequencies(letters: &str) -> BTreeMap<char, f64> {
    let mut counts: AHashMap<char, usize> = AHashMap::new();
    let mut total = 0usize;
    for letter in letters.chars() {
        *counts.entry(letter).or_insert(0) += 1;
        total += 1;
    }

    counts
        .into_iter()
        .map(|(letter, count)| (letter, count as f64 / total as f64))
        .collect()
}

/// Detects languages by comparing letter distributions.
///
/// Profiles are kept in configured order, which is also the tie-break order.
#[derive(Debug)]
pub struct AlphabetDetector {
    normalizer: Normalizer,
    profiles: Vec<LanguageProfile>,
    zero_score: ZeroScorePolicy,
}

impl AlphabetDetector {
    /// Build profiles from the given corpora.
    ///
    /// Languages whose corpus is missing or has no recognized letters are
    /// skipped.
    pub fn new(sources: &[CorpusSource]) -> Result<Self> {
        let normalizer = Normalizer::letters_only()?;
        let mut profiles: Vec<LanguageProfile> = Vec::with_capacity(sources.len());

        for source in sources {
            let Some(text) = source.read()? else {
                continue;
            };
            let Some(profile) = LanguageProfile::build(&source.language, &text, &normalizer)
            else {
                info!(
                    "corpus for language '{}' has no letters; skipping",
                    source.language
                );
                continue;
            };

            info!(
                "built letter profile for '{}' ({} distinct letters)",
                profile.language,
                profile.frequencies.len()
            );
            upsert(&mut profiles, profile);
        }

        Ok(Self {
            normalizer,
            profiles,
            zero_score: ZeroScorePolicy::Fallback,
        })
    }

    /// Create a detector from prebuilt profiles, kept in the given order.
    pub fn from_profiles(profiles: Vec<LanguageProfile>) -> Result<Self> {
        let mut ordered = Vec::with_capacity(profiles.len());
        for profile in profiles {
            upsert(&mut ordered, profile);
        }
        Ok(Self {
            normalizer: Normalizer::letters_only()?,
            profiles: ordered,
            zero_score: ZeroScorePolicy::Fallback,
        })
    }

    /// Set what a best similarity of zero reports.
    pub fn with_zero_score_policy(mut self, policy: ZeroScorePolicy) -> Self {
        self.zero_score = policy;
        self
    }

    /// Profile of one language.
    pub fn profile(&self, language: &str) -> Option<&LanguageProfile> {
        self.profiles.iter().find(|p| p.language == language)
    }

    /// All profiles, in configured order.
    pub fn profiles(&self) -> &[LanguageProfile] {
        &self.profiles
    }

    /// Known language names, in configured order.
    pub fn languages(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.language.as_str()).collect()
    }
}

impl LanguageDetector for AlphabetDetector {
    fn detect(&self, text: &str) -> Result<Detection> {
        if self.profiles.is_empty() {
            return Ok(Detection::Undetermined);
        }
        match self.scores(text) {
            Some(scores) => Ok(select_best(&scores, self.zero_score)),
            None => Ok(Detection::Undetermined),
        }
    }

    /// Similarity of `text` to every profile, in configured order.
    ///
    /// Returns `None` when the text has no recognized letters.
    fn scores(&self, text: &str) -> Option<Vec<LanguageScore>> {
        let document = LanguageProfile::build("document", text, &self.normalizer)?;

        let scores: Vec<LanguageScore> = self
            .profiles
            .iter()
            .map(|profile| LanguageScore::new(&profile.language, document.similarity(profile)))
            .collect();

        for score in &scores {
            debug!("similarity with '{}': {:.6}", score.language, score.score);
        }
        Some(scores)
    }

    fn name(&self) -> &'static str {
        "alphabet"
    }
}

/// Replace a profile with the same language in place, or append.
fn upsert(profiles: &mut Vec<LanguageProfile>, profile: LanguageProfile) {
    match profiles.iter_mut().find(|p| p.language == profile.language) {
        Some(existing) => *existing = profile,
        None => profiles.push(profile),
    }
}
