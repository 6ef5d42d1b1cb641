//! Class index to language label mapping.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use crate::error::{GlossaError, Result};

/// Maps predicted class indices to language labels.
///
/// Stored on disk as a JSON object keyed by stringified indices:
/// `{"0": "English", "1": "Russian"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelMap {
    labels: BTreeMap<usize, String>,
}

impl LabelMap {
    /// Load a label map from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let raw: HashMap<String, String> = serde_json::from_str(&content)?;
        Self::from_raw(raw)
    }

    /// Build a label map from stringified indices.
    pub fn from_raw(raw: HashMap<String, String>) -> Result<Self> {
        let mut labels = BTreeMap::new();
        for (key, label) in raw {
            let index = key.trim().parse::<usize>().map_err(|_| {
                GlossaError::model(format!("label map key '{key}' is not a class index"))
            })?;
            labels.insert(index, label);
        }

        if labels.is_empty() {
            return Err(GlossaError::model("label map is empty"));
        }
        Ok(Self { labels })
    }

    /// Label of a class index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(&index).map(String::as_str)
    }

    /// Number of labelled classes.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the map has no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.labels.iter().map(|(index, label)| (*index, label.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label_map() {
        let raw: HashMap<String, String> =
            serde_json::from_str(r#"{"1": "Russian", "0": "English"}"#).unwrap();
        let labels = LabelMap::from_raw(raw).unwrap();

        assert_eq!(labels.len(), 2);
        assert_eq!(labels.get(0), Some("English"));
        assert_eq!(labels.get(1), Some("Russian"));
        assert_eq!(labels.get(2), None);
        assert_eq!(
            labels.iter().collect::<Vec<_>>(),
            vec![(0, "English"), (1, "Russian")]
        );
    }

    #[test]
    fn test_invalid_keys() {
        let raw: HashMap<String, String> =
            serde_json::from_str(r#"{"en": "English"}"#).unwrap();
        assert!(LabelMap::from_raw(raw).is_err());
        assert!(LabelMap::from_raw(HashMap::new()).is_err());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = LabelMap::from_file(dir.path().join("labels.json")).unwrap_err();
        assert!(matches!(err, GlossaError::Io(_)));
    }
}
