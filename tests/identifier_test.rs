//! Integration tests for the identification service and configuration files.

use std::fs;

use glossa::prelude::*;
use tempfile::TempDir;

fn write_config(dir: &TempDir) -> std::path::PathBuf {
    let en = dir.path().join("en_train.txt");
    let ru = dir.path().join("ru_train.txt");
    fs::write(&en, "the cat sat on the mat and the dog sat on the log").unwrap();
    fs::write(&ru, "кошка сидела на ковре и собака сидела на полу").unwrap();

    let config = serde_json::json!({
        "languages": [
            {"language": "english", "path": en},
            {"language": "russian", "path": ru},
            {"language": "other", "path": dir.path().join("missing.txt")}
        ],
        "frequency": {"profile_size": 50},
        "neural": null
    });
    let path = dir.path().join("glossa.json");
    fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
    path
}

#[test]
fn test_identifier_from_config_file() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let config = GlossaConfig::from_file(write_config(&dir))?;
    let identifier = LanguageIdentifier::from_config(&config)?;

    assert_eq!(
        identifier.kinds(),
        vec![DetectorKind::Alphabet, DetectorKind::Frequency]
    );
    assert!(matches!(
        identifier.identify(DetectorKind::Neural, "the cat"),
        Err(GlossaError::DetectorUnavailable(DetectorKind::Neural))
    ));

    let all = identifier.identify_all("the dog sat")?;
    assert_eq!(
        all,
        vec![
            (DetectorKind::Alphabet, Detection::Language("english".into())),
            (DetectorKind::Frequency, Detection::Language("english".into())),
        ]
    );
    Ok(())
}

#[test]
fn test_batch_matches_single_detection() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let config = GlossaConfig::from_file(write_config(&dir))?;
    let identifier = LanguageIdentifier::from_config(&config)?;

    let texts = vec![
        "the cat",
        "собака на полу",
        "",
        "12345",
        "the кошка",
        "zzz",
    ];
    for kind in identifier.kinds() {
        let batch = identifier.identify_batch(kind, &texts)?;
        let single: Vec<Detection> = texts
            .iter()
            .map(|text| identifier.identify(kind, text))
            .collect::<Result<_>>()?;
        assert_eq!(batch, single, "{kind}");
    }
    Ok(())
}

#[test]
fn test_scores_by_kind() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let config = GlossaConfig::from_file(write_config(&dir))?;
    let identifier = LanguageIdentifier::from_config(&config)?;

    let scores = identifier
        .scores(DetectorKind::Frequency, "the cat")?
        .unwrap();
    assert_eq!(scores.len(), 2);
    assert_eq!(scores[0].language, "english");
    assert!(scores[0].score > 0.0);
    assert_eq!(scores[1].score, 0.0);

    assert!(identifier.scores(DetectorKind::Alphabet, "!!!")?.is_none());
    Ok(())
}

#[test]
fn test_invalid_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");

    fs::write(&path, "{not json").unwrap();
    assert!(matches!(
        GlossaConfig::from_file(&path),
        Err(GlossaError::Json(_))
    ));

    fs::write(&path, r#"{"frequency": {"profile_size": 0}}"#).unwrap();
    assert!(matches!(
        GlossaConfig::from_file(&path),
        Err(GlossaError::Config(_))
    ));

    assert!(matches!(
        GlossaConfig::from_file(dir.path().join("absent.json")),
        Err(GlossaError::Io(_))
    ));
}
