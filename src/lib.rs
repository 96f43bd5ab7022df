//! # risk-predictor 🌱
//!
//! Score greenhouse sensor readings into a risk level with a pre-trained
//! Gaussian Naive Bayes classifier, served over HTTP.
//!
//! The classifier is a [`linfa-bayes`](https://crates.io/crates/linfa-bayes)
//! model persisted with `rmp-serde` (MessagePack). It is loaded once at startup
//! and shared read-only by every request.
//!
//! ## Endpoints
//! - `POST /predict` takes `temperature`, `humidity`, `soil_moisture` and
//!   `rain_status` and answers with `risk_level` (0, 1 or 2) plus a fixed
//!   recommendation.
//! - `POST /analyze` takes the same readings and runs fixed threshold rules,
//!   answering with a score, prioritised advice and actuator requests.
//! - `GET /ranges` lists the optimal band for each reading.
//! - `GET /health` answers `{"status":"ok"}` once the model is loaded.
//!
//! ## Example
//! ```no_run
//! use std::path::Path;
//! use risk_predictor::{FeatureVector, Predictor, RiskModel};
//!
//! let model = RiskModel::load_from_file(Path::new("risk_model.msgpack")).unwrap();
//! let predictor = Predictor::from_model(model);
//! let prediction = predictor
//!     .predict(&FeatureVector::new(32.0, 85.0, 20.0, 1.0))
//!     .unwrap();
//! println!("{}: {}", prediction.risk_level.level(), prediction.recommendation());
//! ```

pub mod analysis;
pub mod config;
pub mod features;
pub mod logging;
pub mod model;
pub mod predictor;
pub mod risk;
pub mod server;

pub use analysis::{Assessment, ConditionLevel, analyze};
pub use features::{FEATURE_NAMES, FeatureVector, SensorReadings};
pub use model::{Classifier, ModelError, RiskModel};
pub use predictor::{PredictError, PredictResponse, Prediction, Predictor};
pub use risk::{RiskLevel, UnknownRiskLevel};
