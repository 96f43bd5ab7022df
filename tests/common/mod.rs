#![allow(dead_code)]

use linfa::prelude::*;
use linfa_bayes::GaussianNb;
use ndarray::{Array1, Array2, array};
use risk_predictor::{FeatureVector, RiskModel};
use std::path::{Path, PathBuf};

/// Readings near the centre of each fitted class, as (features, label).
pub fn class_centres() -> [(FeatureVector, usize); 3] {
    [
        (FeatureVector::from([22.0, 65.0, 70.0, 0.0]), 0),
        (FeatureVector::from([28.0, 78.0, 45.0, 0.0]), 1),
        (FeatureVector::from([34.0, 90.0, 18.0, 1.0]), 2),
    ]
}

/// Fits a Gaussian Naive Bayes model on three well separated clusters.
pub fn fit_model() -> GaussianNb<f64, usize> {
    let records: Array2<f64> = array![
        [21.0, 63.0, 72.0, 0.0],
        [22.0, 65.0, 70.0, 0.0],
        [23.0, 66.0, 68.0, 0.0],
        [22.5, 64.0, 71.0, 0.0],
        [27.0, 77.0, 46.0, 0.0],
        [28.0, 78.0, 45.0, 0.0],
        [29.0, 79.0, 44.0, 1.0],
        [28.5, 77.5, 45.5, 0.0],
        [33.0, 88.0, 20.0, 1.0],
        [34.0, 90.0, 18.0, 1.0],
        [35.0, 92.0, 16.0, 1.0],
        [32.0, 85.0, 19.0, 1.0],
    ];
    let targets: Array1<usize> = array![0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2];

    GaussianNb::params()
        .fit(&Dataset::new(records, targets))
        .expect("fit gaussian nb")
}

pub fn risk_model() -> RiskModel {
    RiskModel::new(fit_model())
}

/// Writes a freshly fitted artifact into `dir` and returns its path.
pub fn write_artifact(dir: &Path) -> PathBuf {
    let path = dir.join("risk_model.msgpack");
    risk_model().save_to_file(&path).expect("save model");
    path
}
