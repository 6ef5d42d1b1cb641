//! Integration tests for the neural detector using small on-disk artifacts.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use candle_core::{DType, Device, Tensor};
use glossa::detector::neural::{HIDDEN_SIZE, NeuralArtifacts, NeuralDetector};
use glossa::detector::{self, DetectorKind};
use glossa::prelude::*;
use tempfile::TempDir;

const TERMS: [&str; 3] = ["the", "der", "что"];

/// Weights where class `i` fires for feature `i` (for `i < classes`).
fn write_weights(path: &Path, features: usize, classes: usize) {
    let device = Device::Cpu;
    let mut w1 = vec![0f32; HIDDEN_SIZE * features];
    for i in 0..features {
        w1[i * features + i] = 1.0;
    }
    let mut w2 = vec![0f32; classes * HIDDEN_SIZE];
    for i in 0..classes {
        w2[i * HIDDEN_SIZE + i] = 1.0;
    }

    let mut tensors = HashMap::new();
    tensors.insert(
        "layer_1.weight".to_string(),
        Tensor::from_vec(w1, (HIDDEN_SIZE, features), &device).unwrap(),
    );
    tensors.insert(
        "layer_1.bias".to_string(),
        Tensor::zeros(HIDDEN_SIZE, DType::F32, &device).unwrap(),
    );
    tensors.insert(
        "layer_2.weight".to_string(),
        Tensor::from_vec(w2, (classes, HIDDEN_SIZE), &device).unwrap(),
    );
    tensors.insert(
        "layer_2.bias".to_string(),
        Tensor::zeros(classes, DType::F32, &device).unwrap(),
    );
    candle_core::safetensors::save(&tensors, path).unwrap();
}

fn write_vectorizer(path: &Path, terms: &[&str]) {
    let vocabulary: HashMap<&str, usize> = terms.iter().enumerate().map(|(i, t)| (*t, i)).collect();
    let artifact = serde_json::json!({
        "vocabulary": vocabulary,
        "idf": vec![1.0; terms.len()],
        "analyzer": "word",
        "ngram_range": [1, 1],
        "norm": "l2"
    });
    fs::write(path, artifact.to_string()).unwrap();
}

fn write_labels(path: &Path, labels: &[(usize, &str)]) {
    let map: HashMap<String, &str> = labels.iter().map(|(i, l)| (i.to_string(), *l)).collect();
    fs::write(path, serde_json::to_string(&map).unwrap()).unwrap();
}

struct Fixture {
    _dir: TempDir,
    artifacts: NeuralArtifacts,
}

fn fixture(labels: &[(usize, &str)], classes: usize) -> Fixture {
    let dir = TempDir::new().unwrap();
    let vectorizer: PathBuf = dir.path().join("tfidf_vectorizer.json");
    let model = dir.path().join("model.safetensors");
    let label_map = dir.path().join("lang_labels_map.json");

    write_vectorizer(&vectorizer, &TERMS);
    write_weights(&model, TERMS.len(), classes);
    write_labels(&label_map, labels);

    Fixture {
        artifacts: NeuralArtifacts::new(vectorizer, model, label_map),
        _dir: dir,
    }
}

fn three_languages() -> Fixture {
    fixture(&[(0, "English"), (1, "German"), (2, "Russian")], 3)
}

/// PyTorch state dict (zip archive) with the same identity weights as
/// `write_weights(_, 3, 3)`.
const PTH_WEIGHTS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/identity_3x3.pth");

/// Artifacts whose weights are the PyTorch fixture, copied under the default name.
fn pth_fixture() -> Fixture {
    let fixture = three_languages();
    let model = fixture
        .artifacts
        .model_path
        .with_file_name("neurolang_processor_model.pth");
    fs::copy(PTH_WEIGHTS, &model).unwrap();

    let mut artifacts = fixture.artifacts.clone();
    artifacts.model_path = model;
    Fixture {
        artifacts,
        _dir: fixture._dir,
    }
}

#[test]
fn test_load_pytorch_state_dict() -> Result<()> {
    let fixture = pth_fixture();
    let detector = NeuralDetector::load(&fixture.artifacts)?;

    assert_eq!(detector.feature_count(), 3);
    assert_eq!(detector.class_count(), 3);
    assert_eq!(
        detector.detect("der Hund")?,
        Detection::Language("German".to_string())
    );
    assert_eq!(
        detector.detect("что the что")?,
        Detection::Language("Russian".to_string())
    );
    Ok(())
}

#[test]
fn test_pytorch_state_dict_shape_mismatch_is_fatal() {
    let fixture = pth_fixture();

    write_vectorizer(
        &fixture.artifacts.vectorizer_path,
        &["the", "der", "что", "und"],
    );
    assert!(NeuralDetector::load(&fixture.artifacts).is_err());

    write_vectorizer(&fixture.artifacts.vectorizer_path, &TERMS);
    write_labels(&fixture.artifacts.labels_path, &[(0, "English"), (1, "German")]);
    assert!(NeuralDetector::load(&fixture.artifacts).is_err());
}

#[test]
fn test_load_and_detect() -> Result<()> {
    let fixture = three_languages();
    let detector = NeuralDetector::load(&fixture.artifacts)?;

    assert_eq!(detector.feature_count(), 3);
    assert_eq!(detector.class_count(), 3);
    assert_eq!(detector.labels().get(2), Some("Russian"));
    assert_eq!(
        detector.detect("The cat sat on THE mat")?,
        Detection::Language("English".to_string())
    );
    assert_eq!(
        detector.detect("der Hund")?,
        Detection::Language("German".to_string())
    );
    assert_eq!(
        detector.detect("Что это?")?,
        Detection::Language("Russian".to_string())
    );
    Ok(())
}

#[test]
fn test_out_of_vocabulary_text_resolves_to_first_class() -> Result<()> {
    let fixture = three_languages();
    let detector = NeuralDetector::load(&fixture.artifacts)?;

    // all-zero features give all-zero logits; the first index wins
    assert_eq!(
        detector.detect("")?,
        Detection::Language("English".to_string())
    );
    assert_eq!(
        detector.detect("xyzzy plugh")?,
        Detection::Language("English".to_string())
    );
    Ok(())
}

#[test]
fn test_detection_is_deterministic() -> Result<()> {
    let fixture = three_languages();
    let detector = NeuralDetector::load(&fixture.artifacts)?;

    let first = detector.detect("der the что der")?;
    for _ in 0..10 {
        assert_eq!(detector.detect("der the что der")?, first);
    }
    assert_eq!(first, Detection::Language("German".to_string()));
    Ok(())
}

#[test]
fn test_missing_label_gives_unknown_class() -> Result<()> {
    // two classes, but the map only knows indices 0 and 2
    let fixture = fixture(&[(0, "English"), (2, "Russian")], 2);
    let detector = NeuralDetector::load(&fixture.artifacts)?;

    assert_eq!(detector.detect("der")?, Detection::UnknownClass);
    assert_eq!(
        detector.detect("the")?,
        Detection::Language("English".to_string())
    );
    Ok(())
}

#[test]
fn test_missing_artifact_is_fatal() {
    let fixture = three_languages();

    let mut artifacts = fixture.artifacts.clone();
    artifacts.model_path = artifacts.model_path.with_file_name("absent.safetensors");
    assert!(NeuralDetector::load(&artifacts).is_err());

    let mut artifacts = fixture.artifacts.clone();
    artifacts.vectorizer_path = artifacts.vectorizer_path.with_file_name("absent.json");
    assert!(NeuralDetector::load(&artifacts).is_err());

    let mut artifacts = fixture.artifacts.clone();
    artifacts.labels_path = artifacts.labels_path.with_file_name("absent_labels.json");
    assert!(NeuralDetector::load(&artifacts).is_err());
}

#[test]
fn test_shape_mismatch_is_fatal() {
    let fixture = three_languages();

    // four features against weights trained for three
    write_vectorizer(
        &fixture.artifacts.vectorizer_path,
        &["the", "der", "что", "und"],
    );
    assert!(NeuralDetector::load(&fixture.artifacts).is_err());
}

#[test]
fn test_label_count_mismatch_is_fatal() {
    let fixture = three_languages();
    write_labels(&fixture.artifacts.labels_path, &[(0, "English"), (1, "German")]);
    assert!(NeuralDetector::load(&fixture.artifacts).is_err());
}

#[test]
fn test_build_from_config() -> Result<()> {
    let fixture = three_languages();
    let config = GlossaConfig {
        neural: Some(fixture.artifacts.clone()),
        ..GlossaConfig::default()
    };

    let detector = detector::build_detector(DetectorKind::Neural, &config)?;
    assert_eq!(detector.name(), "neural");
    assert_eq!(
        detector.detect("der")?,
        Detection::Language("German".to_string())
    );

    let config = GlossaConfig {
        neural: None,
        ..GlossaConfig::default()
    };
    assert!(matches!(
        detector::build_detector(DetectorKind::Neural, &config),
        Err(GlossaError::DetectorUnavailable(DetectorKind::Neural))
    ));
    Ok(())
}
