//! Word-frequency language detector.

use std::collections::BTreeSet;

use ahash::AHashMap;
use log::{debug, info};

use crate::analysis::normalizer::Normalizer;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::{GlossaError, Result};

use super::corpus::CorpusSource;
use super::detector::LanguageDetector;
use super::scoring::select_best;
use super::types::{Detection, LanguageScore, ZeroScorePolicy};

/// Default number of words kept per language.
pub const DEFAULT_PROFILE_SIZE: usize = 300;

/// The most frequent words of one language with normalized weights.
///
/// The top word has weight 1.0; every other weight is its count divided by
/// the top word's count.
#[derive(Debug, Clone)]
pub struct WordProfile {
    language: String,
    ranking: Vec<(String, f64)>,
    weights: AHashMap<String, f64>,
}

impl WordProfile {
    /// Build a profile from word tokens in corpus order.
    ///
    /// Words are ranked by descending count; equal counts keep the order in
    /// which the words were first seen. Returns `None` when there are no
    /// tokens or `profile_size` is zero.
    pub fn from_tokens<S: Into<String>>(
        language: S,
        tokens: &[&str],
        profile_size: usize,
    ) -> Option<Self> {
        // word -> (count, first position)
        let mut counts: AHashMap<&str, (usize, usize)> = AHashMap::new();
        for (position, token) in tokens.iter().enumerate() {
            counts.entry(*token).or_insert((0, position)).0 += 1;
        }

        let mut ranked: Vec<(&str, usize, usize)> = counts
            .into_iter()
            .map(|(word, (count, first))| (word, count, first))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        ranked.truncate(profile_size);

        let max_count = ranked.first()?.1 as f64;
        let ranking: Vec<(String, f64)> = ranked
            .into_iter()
            .map(|(word, count, _)| (word.to_string(), count as f64 / max_count))
            .collect();
        let weights = ranking.iter().cloned().collect();

        Some(Self {
            language: language.into(),
            ranking,
            weights,
        })
    }

    /// Build a profile from raw text.
    pub fn build<S: Into<String>>(
        language: S,
        text: &str,
        normalizer: &Normalizer,
        tokenizer: &dyn Tokenizer,
        profile_size: usize,
    ) -> Option<Self> {
        let normalized = normalizer.normalize(text)?;
        let tokens = tokenizer.tokenize(&normalized);
        Self::from_tokens(language, &tokens, profile_size)
    }

    /// Build a profile from raw text with the standard word normalization.
    pub fn from_text<S: Into<String>>(
        language: S,
        text: &str,
        profile_size: usize,
    ) -> Result<Option<Self>> {
        let normalizer = Normalizer::words_only()?;
        Ok(Self::build(
            language,
            text,
            &normalizer,
            &WhitespaceTokenizer::new(),
            profile_size,
        ))
    }

    /// Language name.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Weight of a word, if it is in the profile.
    pub fn weight(&self, word: &str) -> Option<f64> {
        self.weights.get(word).copied()
    }

    /// The `n` highest ranked words with their weights.
    pub fn top(&self, n: usize) -> &[(String, f64)] {
        &self.ranking[..n.min(self.ranking.len())]
    }

    /// Number of words in the profile.
    pub fn len(&self) -> usize {
        self.ranking.len()
    }

    /// Whether the profile has no words.
    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty()
    }
}

/// Detects languages by summing the weights of known frequent words.
#[derive(Debug)]
pub struct WordFrequencyDetector {
    normalizer: Normalizer,
    tokenizer: WhitespaceTokenizer,
    profiles: Vec<WordProfile>,
    zero_score: ZeroScorePolicy,
}

impl WordFrequencyDetector {
    /// Build profiles of [`DEFAULT_PROFILE_SIZE`] words from the given corpora.
    pub fn new(sources: &[CorpusSource]) -> Result<Self> {
        Self::with_profile_size(sources, DEFAULT_PROFILE_SIZE)
    }

    /// Build profiles of at most `profile_size` words from the given corpora.
    ///
    /// Languages whose corpus is missing, empty, or has no words are skipped.
    pub fn with_profile_size(sources: &[CorpusSource], profile_size: usize) -> Result<Self> {
        if profile_size == 0 {
            return Err(GlossaError::invalid_argument(
                "profile size must be greater than zero",
            ));
        }

        let mut detector = Self::from_profiles(Vec::new())?;
        for source in sources {
            let Some(text) = source.read()? else {
                continue;
            };
            let Some(profile) = WordProfile::build(
                &source.language,
                &text,
                &detector.normalizer,
                &detector.tokenizer,
                profile_size,
            ) else {
                info!(
                    "corpus for language '{}' has no words; skipping",
                    source.language
                );
                continue;
            };

            info!(
                "built word profile for '{}' ({} words)",
                profile.language,
                profile.len()
            );
            detector.upsert(profile);
        }

        Ok(detector)
    }

    /// Create a detector from prebuilt profiles, kept in the given order.
    pub fn from_profiles(profiles: Vec<WordProfile>) -> Result<Self> {
        let mut detector = Self {
            normalizer: Normalizer::words_only()?,
            tokenizer: WhitespaceTokenizer::new(),
            profiles: Vec::with_capacity(profiles.len()),
            zero_score: ZeroScorePolicy::Undetermined,
        };
        for profile in profiles {
            detector.upsert(profile);
        }
        Ok(detector)
    }

    /// Set what an all-zero score reports.
    pub fn with_zero_score_policy(mut self, policy: ZeroScorePolicy) -> Self {
        self.zero_score = policy;
        self
    }

    /// Profile of one language.
    pub fn profile(&self, language: &str) -> Option<&WordProfile> {
        self.profiles.iter().find(|p| p.language == language)
    }

    /// All profiles, in configured order.
    pub fn profiles(&self) -> &[WordProfile] {
        &self.profiles
    }

    /// Known language names, in configured order.
    pub fn languages(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.language.as_str()).collect()
    }

    fn upsert(&mut self, profile: WordProfile) {
        match self
            .profiles
            .iter_mut()
            .find(|p| p.language == profile.language)
        {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile),
        }
    }
}

impl LanguageDetector for WordFrequencyDetector {
    fn detect(&self, text: &str) -> Result<Detection> {
        if self.profiles.is_empty() {
            return Ok(Detection::Undetermined);
        }
        match self.scores(text) {
            Some(scores) => Ok(select_best(&scores, self.zero_score)),
            None => Ok(Detection::Undetermined),
        }
    }

    /// Summed weight of the distinct words of `text` for every profile.
    ///
    /// Returns `None` when the text has no words.
    fn scores(&self, text: &str) -> Option<Vec<LanguageScore>> {
        let normalized = self.normalizer.normalize(text)?;
        // Ordered set: each word counts once and summation order is fixed.
        let words: BTreeSet<&str> = self.tokenizer.tokenize(&normalized).into_iter().collect();

        let scores: Vec<LanguageScore> = self
            .profiles
            .iter()
            .map(|profile| {
                let score: f64 = words.iter().filter_map(|word| profile.weight(word)).sum();
                LanguageScore::new(&profile.language, score)
            })
            .collect();

        for score in &scores {
            debug!("total weight for '{}': {:.4}", score.language, score.score);
        }
        Some(scores)
    }

    fn name(&self) -> &'static str {
        "frequency"
    }
}
