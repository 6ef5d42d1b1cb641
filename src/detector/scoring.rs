//! Score comparison shared by the profile-based detectors.

use std::collections::{BTreeMap, BTreeSet};

use super::types::{Detection, LanguageScore, ZeroScorePolicy};

/// Cosine similarity of two letter distributions.
///
/// The dot product and norms run over the union of letters present in either
/// distribution; a letter missing on one side counts as 0. Returns 0.0 when
/// either norm is zero.
pub fn cosine_similarity(a: &BTreeMap<char, f64>, b: &BTreeMap<char, f64>) -> f64 {
    let letters: BTreeSet<char> = a.keys().chain(b.keys()).copied().collect();

    let mut dot_product = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for letter in letters {
        let x = a.get(&letter).copied().unwrap_or(0.0);
        let y = b.get(&letter).copied().unwrap_or(0.0);
        dot_product += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a.sqrt() * norm_b.sqrt())
    }
}

/// Pick the highest score; the earliest candidate wins ties.
pub(crate) fn select_best(scores: &[LanguageScore], policy: ZeroScorePolicy) -> Detection {
    let mut best: Option<&LanguageScore> = None;
    for candidate in scores {
        match best {
            Some(current) if candidate.score <= current.score => {}
            _ => best = Some(candidate),
        }
    }

    match best {
        None => Detection::Undetermined,
        Some(best) if best.score <= 0.0 && policy == ZeroScorePolicy::Undetermined => {
            Detection::Undetermined
        }
        Some(best) => Detection::Language(best.language.clone()),
    }
}
