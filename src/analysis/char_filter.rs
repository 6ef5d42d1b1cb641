//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the whole text string before any profile is
//! computed from it.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Unicode-aware lowercasing
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//!
//! # Examples
//!
//! ```
//! use glossa::analysis::char_filter::CharFilter;
//! use glossa::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new(r"\d+", "").unwrap();
//! assert_eq!(filter.filter("room 101"), "room ");
//! ```

pub mod lowercase;
pub mod pattern_replace;

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}
