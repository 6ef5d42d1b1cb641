//! Training corpus sources.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A plain UTF-8 training text for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusSource {
    /// Language name reported on detection.
    pub language: String,
    /// Path to the corpus file.
    pub path: PathBuf,
}

impl CorpusSource {
    /// Create a new corpus source.
    pub fn new<S: Into<String>, P: AsRef<Path>>(language: S, path: P) -> Self {
        Self {
            language: language.into(),
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the corpus text.
    ///
    /// A missing file is not an error: it is logged and `None` is returned so
    /// the caller can skip the language. Other I/O failures, including
    /// invalid UTF-8, are returned as errors.
    pub fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(
                    "corpus for language '{}' not found at {}; skipping",
                    self.language,
                    self.path.display()
                );
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_existing_corpus() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("en.txt");
        fs::write(&path, "hello world").unwrap();

        let source = CorpusSource::new("english", &path);
        assert_eq!(source.read().unwrap().as_deref(), Some("hello world"));
    }

    #[test]
    fn test_missing_corpus_is_skipped() {
        let dir = TempDir::new().unwrap();
        let source = CorpusSource::new("english", dir.path().join("missing.txt"));
        assert_eq!(source.read().unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();

        assert!(CorpusSource::new("bad", &path).read().is_err());
    }
}
