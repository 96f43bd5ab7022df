mod common;

use linfa_bayes::GaussianNb;
use risk_predictor::{Classifier, ModelError, Predictor, RiskLevel, RiskModel};
use rmp_serde::encode::write_named;
use serde::Serialize;
use std::fs::File;

#[test]
fn saved_model_predicts_the_same_after_reload() {
    let tmp = tempfile::tempdir().expect("tmpdir");
    let original = common::risk_model();
    let path = tmp.path().join("risk_model.msgpack");
    original.save_to_file(&path).expect("save");

    let loaded = RiskModel::load_from_file(&path).expect("load");
    assert_eq!(
        loaded.feature_names(),
        ["temperature", "humidity", "soil_moisture", "rain_status"]
    );
    for (features, _) in common::class_centres() {
        assert_eq!(loaded.classify(&features), original.classify(&features));
    }
}

#[test]
fn loaded_model_separates_the_fitted_classes() {
    let tmp = tempfile::tempdir().expect("tmpdir");
    let path = common::write_artifact(tmp.path());
    let predictor = Predictor::from_model(RiskModel::load_from_file(&path).expect("load"));

    for (features, label) in common::class_centres() {
        let prediction = predictor.predict(&features).expect("predict");
        assert_eq!(prediction.risk_level.level() as usize, label);
    }
}

#[test]
fn well_formed_reading_scores_high_risk() {
    let predictor = Predictor::from_model(common::risk_model());
    let features = risk_predictor::FeatureVector::new(32.0, 85.0, 20.0, 1.0);

    let first = predictor.predict(&features).expect("predict");
    let second = predictor.predict(&features).expect("predict");
    assert_eq!(first, second);
    assert_eq!(first.risk_level, RiskLevel::HighRisk);
}

#[test]
fn missing_file_fails_to_load() {
    let tmp = tempfile::tempdir().expect("tmpdir");
    let err = RiskModel::load_from_file(&tmp.path().join("absent.msgpack"))
        .err()
        .expect("missing file must not load");
    assert!(matches!(err, ModelError::Open { .. }));
}

#[test]
fn corrupt_file_fails_to_load() {
    let tmp = tempfile::tempdir().expect("tmpdir");
    let path = tmp.path().join("risk_model.msgpack");
    std::fs::write(&path, b"definitely not messagepack").expect("write");

    let err = RiskModel::load_from_file(&path)
        .err()
        .expect("corrupt file must not load");
    assert!(matches!(err, ModelError::Decode { .. }));
}

#[test]
fn artifact_with_other_features_is_rejected() {
    #[derive(Serialize)]
    struct Artifact<'a> {
        model: &'a GaussianNb<f64, usize>,
        feature_names: Vec<String>,
    }

    let tmp = tempfile::tempdir().expect("tmpdir");
    let path = tmp.path().join("risk_model.msgpack");
    let model = common::fit_model();
    let artifact = Artifact {
        model: &model,
        feature_names: ["humidity", "temperature", "soil_moisture", "rain_status"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    };
    let mut file = File::create(&path).expect("create");
    write_named(&mut file, &artifact).expect("encode");

    let err = RiskModel::load_from_file(&path)
        .err()
        .expect("reordered features must not load");
    match err {
        ModelError::FeatureMismatch { found, .. } => assert_eq!(found[0], "humidity"),
        other => panic!("unexpected error: {other}"),
    }
}
