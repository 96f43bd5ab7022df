use ndarray::Array2;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feature names in the column order the classifier was fitted on.
pub const FEATURE_NAMES: [&str; 4] = ["temperature", "humidity", "soil_moisture", "rain_status"];

/// Body of a `POST /predict` or `POST /analyze` request.
///
/// All four readings are required. Units and ranges are whatever the sensors
/// report; nothing is clamped here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensorReadings {
    pub temperature: f64,
    pub humidity: f64,
    pub soil_moisture: f64,
    pub rain_status: f64,
}

impl SensorReadings {
    pub fn into_features(self) -> FeatureVector {
        FeatureVector::new(
            self.temperature,
            self.humidity,
            self.soil_moisture,
            self.rain_status,
        )
    }

    pub fn is_raining(&self) -> bool {
        self.rain_status != 0.0
    }
}

// Readings are only accepted from a JSON object keyed by field name. The
// derived impl would also take a positional array.
impl<'de> Deserialize<'de> for SensorReadings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ReadingsVisitor)
    }
}

struct ReadingsVisitor;

impl<'de> Visitor<'de> for ReadingsVisitor {
    type Value = SensorReadings;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an object with numeric fields {}", FEATURE_NAMES.join(", "))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut values: [Option<f64>; 4] = [None; 4];
        while let Some(key) = map.next_key::<String>()? {
            match FEATURE_NAMES.iter().position(|name| *name == key) {
                Some(idx) => {
                    if values[idx].is_some() {
                        return Err(de::Error::duplicate_field(FEATURE_NAMES[idx]));
                    }
                    values[idx] = Some(map.next_value()?);
                }
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        let field = |idx: usize| -> Result<f64, A::Error> {
            values[idx].ok_or_else(|| de::Error::missing_field(FEATURE_NAMES[idx]))
        };
        Ok(SensorReadings {
            temperature: field(0)?,
            humidity: field(1)?,
            soil_moisture: field(2)?,
            rain_status: field(3)?,
        })
    }
}

/// One row of sensor readings, ordered as in [`FEATURE_NAMES`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; 4]);

impl FeatureVector {
    pub fn new(temperature: f64, humidity: f64, soil_moisture: f64, rain_status: f64) -> Self {
        Self([temperature, humidity, soil_moisture, rain_status])
    }

    pub fn as_array(&self) -> [f64; 4] {
        self.0
    }

    /// Single-row record matrix (1 x 4) suitable for `linfa` predictors.
    pub fn to_records(&self) -> Array2<f64> {
        Array2::from_shape_fn((1, FEATURE_NAMES.len()), |(_, col)| self.0[col])
    }
}

impl From<[f64; 4]> for FeatureVector {
    fn from(values: [f64; 4]) -> Self {
        Self(values)
    }
}
