//! Tokenizer implementations for text analysis.
//!
//! # Examples
//!
//! ```
//! use glossa::analysis::tokenizer::Tokenizer;
//! use glossa::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens = tokenizer.tokenize("hello world");
//! assert_eq!(tokens, vec!["hello", "world"]);
//! ```

pub mod whitespace;

/// Trait for tokenizers that split text into word tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text, borrowing tokens from it.
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
