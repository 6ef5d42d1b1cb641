//! Lowercase char filter.

use super::CharFilter;

/// A char filter that lowercases the whole text.
///
/// Uses Unicode lowercasing so Cyrillic capitals (including `Ё`) fold the
/// same way Latin ones do.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        input.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
