use crate::features::FeatureVector;
use crate::model::{Classifier, RiskModel};
use crate::risk::{RiskLevel, UnknownRiskLevel};
use serde::Serialize;
use std::sync::Arc;

/// Failures on the predict path that are the service's fault, not the caller's.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error(transparent)]
    UnknownRiskLevel(#[from] UnknownRiskLevel),
    #[error("classifier returned no label")]
    NoPrediction,
}

/// Outcome of scoring one feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    pub risk_level: RiskLevel,
}

impl Prediction {
    pub fn recommendation(&self) -> &'static str {
        self.risk_level.recommendation()
    }
}

/// Body of a successful `POST /predict` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictResponse {
    pub risk_level: u8,
    pub recommendation: String,
}

impl From<Prediction> for PredictResponse {
    fn from(prediction: Prediction) -> Self {
        Self {
            risk_level: prediction.risk_level.level(),
            recommendation: prediction.recommendation().to_string(),
        }
    }
}

/// Shared handle on the loaded classifier. Cloning only bumps the refcount.
#[derive(Clone)]
pub struct Predictor {
    classifier: Arc<dyn Classifier>,
}

impl Predictor {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    pub fn from_model(model: RiskModel) -> Self {
        Self::new(Arc::new(model))
    }

    /// Scores one feature vector and attaches the matching recommendation.
    pub fn predict(&self, features: &FeatureVector) -> Result<Prediction, PredictError> {
        let label = self
            .classifier
            .classify(features)
            .ok_or(PredictError::NoPrediction)?;
        let risk_level = RiskLevel::try_from(label)?;
        tracing::debug!(?features, label, %risk_level, "scored sensor readings");
        Ok(Prediction { risk_level })
    }
}
