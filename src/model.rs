//! The trained classifier artifact and the seam the predictor calls through.

use crate::features::{FEATURE_NAMES, FeatureVector};
use linfa::prelude::*;
use linfa_bayes::GaussianNb;
use ndarray::Array1;
use rmp_serde::{decode::from_read, encode::write_named};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Anything that can turn one feature vector into a class label.
///
/// Implementations are shared between request handlers without locking, so
/// `classify` must not mutate.
pub trait Classifier: Send + Sync {
    /// Returns the raw class label, or `None` if the model produced nothing.
    fn classify(&self, features: &FeatureVector) -> Option<usize>;
}

/// Errors raised while reading or writing a model artifact.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to open model file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode model file {path}: {source}")]
    Decode {
        path: PathBuf,
        source: rmp_serde::decode::Error,
    },
    #[error("failed to create model file {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to encode model to {path}: {source}")]
    Encode {
        path: PathBuf,
        source: rmp_serde::encode::Error,
    },
    #[error("model file {path} was fitted on features {found:?}, expected {expected:?}")]
    FeatureMismatch {
        path: PathBuf,
        found: Vec<String>,
        expected: Vec<String>,
    },
}

/// Trained risk classifier as stored on disk.
///
/// The artifact is a MessagePack document holding the Gaussian Naive Bayes
/// model and the feature names it was fitted on.
#[derive(Serialize, Deserialize)]
pub struct RiskModel {
    model: GaussianNb<f64, usize>,
    feature_names: Vec<String>,
}

impl RiskModel {
    /// Wraps an already fitted model; columns are assumed to follow [`FEATURE_NAMES`].
    pub fn new(model: GaussianNb<f64, usize>) -> Self {
        Self {
            model,
            feature_names: expected_feature_names(),
        }
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Loads the model from a binary `.msgpack` file.
    pub fn load_from_file(path: &Path) -> Result<Self, ModelError> {
        let file = File::open(path).map_err(|source| ModelError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        let model: RiskModel = from_read(reader).map_err(|source| ModelError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let expected = expected_feature_names();
        if model.feature_names != expected {
            return Err(ModelError::FeatureMismatch {
                path: path.to_path_buf(),
                found: model.feature_names,
                expected,
            });
        }
        Ok(model)
    }

    /// Saves the model to a binary `.msgpack` file.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ModelError> {
        let create_err = |source| ModelError::Create {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(create_err)?;
        let mut writer = BufWriter::new(file);
        write_named(&mut writer, self).map_err(|source| ModelError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
        writer.flush().map_err(create_err)
    }
}

impl Classifier for RiskModel {
    fn classify(&self, features: &FeatureVector) -> Option<usize> {
        let labels: Array1<usize> = self.model.predict(&features.to_records());
        labels.get(0).copied()
    }
}

fn expected_feature_names() -> Vec<String> {
    FEATURE_NAMES.iter().map(|name| name.to_string()).collect()
}
