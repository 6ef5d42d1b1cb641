//! Text analysis shared by the detectors.
//!
//! Normalization is built from small [`CharFilter`](char_filter::CharFilter)
//! stages chained inside a [`Normalizer`](normalizer::Normalizer). Two
//! normalizers exist, one for each profile kind:
//!
//! ```text
//! letters_only:  "Hello, Мир!"  ->  "helloмир"
//! words_only:    "Hello, Мир!"  ->  "hello мир"
//! ```
//!
//! Word-level consumers split the normalized text with
//! [`WhitespaceTokenizer`](tokenizer::whitespace::WhitespaceTokenizer).

pub mod char_filter;
pub mod normalizer;
pub mod tokenizer;

pub use char_filter::CharFilter;
pub use normalizer::Normalizer;
pub use tokenizer::Tokenizer;
pub use tokenizer::whitespace::WhitespaceTokenizer;
