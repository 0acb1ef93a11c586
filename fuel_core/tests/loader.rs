use std::{fs, path::Path, sync::Arc};

use fuel_core::{
    encoder::REQUIRED_FEATURES, record::HORSEPOWER, Artifact, AssetError, AssetLoader, AssetPaths,
};
use tempfile::TempDir;

const MODEL: &str = r#"{ "type": "constant", "value": 24.5 }"#;
const ENCODERS: &str = r#"{
    "Horsepower": { "classes": ["165", "130", "150", "140"] },
    "Displacement": { "classes": ["307", "350", "318"] },
    "Model year": { "classes": ["70", "71", "72"] }
}"#;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn artifacts_dir(model: Option<&str>, encoders: Option<&str>) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    if let Some(m) = model {
        write(dir.path(), "model.json", m);
    }
    if let Some(e) = encoders {
        write(dir.path(), "label_encoder.json", e);
    }
    dir
}

#[test]
fn missing_model_is_reported_before_encoder_is_checked() {
    // neither file exists, so only the model may be named
    let dir = artifacts_dir(None, None);
    let loader = AssetLoader::new(AssetPaths::in_dir(dir.path()));

    let err = loader.load().unwrap_err();

    assert!(matches!(err, AssetError::MissingModel { .. }));
    assert!(err.to_string().contains("model artifact not found"));
}

#[test]
fn missing_encoder_is_reported_when_model_exists() {
    let dir = artifacts_dir(Some(MODEL), None);
    let loader = AssetLoader::new(AssetPaths::in_dir(dir.path()));

    let err = loader.load().unwrap_err();

    assert!(matches!(err, AssetError::MissingEncoder { .. }));
    assert!(err.to_string().contains("encoder artifact not found"));
}

#[test]
fn corrupt_artifacts_are_a_distinct_error() {
    let dir = artifacts_dir(Some("{ not json"), Some(ENCODERS));
    let err = AssetLoader::new(AssetPaths::in_dir(dir.path()))
        .load()
        .unwrap_err();
    assert!(matches!(
        err,
        AssetError::Deserialize {
            artifact: Artifact::Model,
            ..
        }
    ));

    let dir = artifacts_dir(Some(MODEL), Some(r#"{ "Horsepower": { "classes": [] } }"#));
    let err = AssetLoader::new(AssetPaths::in_dir(dir.path()))
        .load()
        .unwrap_err();
    assert!(matches!(
        err,
        AssetError::Deserialize {
            artifact: Artifact::Encoder,
            ..
        }
    ));
}

#[test]
fn second_load_reuses_cached_pair_without_disk_access() {
    let dir = artifacts_dir(Some(MODEL), Some(ENCODERS));
    let loader = AssetLoader::new(AssetPaths::in_dir(dir.path()));

    let first = loader.load().unwrap();

    fs::remove_file(dir.path().join("model.json")).unwrap();
    fs::remove_file(dir.path().join("label_encoder.json")).unwrap();

    let second = loader.load().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn concurrent_loads_share_one_pair() {
    let dir = artifacts_dir(Some(MODEL), Some(ENCODERS));
    let loader = AssetLoader::new(AssetPaths::in_dir(dir.path()));

    let loaded: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8).map(|_| s.spawn(|| loader.load().unwrap())).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for assets in &loaded[1..] {
        assert!(Arc::ptr_eq(&loaded[0], assets));
    }
}

#[test]
fn failed_load_is_retried_once_files_appear() {
    let dir = artifacts_dir(None, Some(ENCODERS));
    let loader = AssetLoader::new(AssetPaths::in_dir(dir.path()));
    assert!(loader.load().is_err());

    write(dir.path(), "model.json", MODEL);
    assert!(loader.load().is_ok());
}

#[test]
fn encoder_classes_match_artifact_exactly() {
    let dir = artifacts_dir(Some(MODEL), Some(ENCODERS));
    let assets = AssetLoader::new(AssetPaths::in_dir(dir.path()))
        .load()
        .unwrap();

    assert_eq!(
        assets.encoders.classes(HORSEPOWER).unwrap(),
        ["165", "130", "150", "140"]
    );
    for feature in REQUIRED_FEATURES {
        assert!(assets.encoders.get(feature).is_some());
    }
}
