//! Risk categories and their fixed recommendations.

use std::fmt;

/// Discrete risk category produced by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    Safe,
    Caution,
    HighRisk,
}

/// Class label that has no entry in the recommendation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("classifier returned unknown risk level {0}")]
pub struct UnknownRiskLevel(pub usize);

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Safe, RiskLevel::Caution, RiskLevel::HighRisk];

    /// Numeric label as used by the model and on the wire.
    pub fn level(self) -> u8 {
        match self {
            RiskLevel::Safe => 0,
            RiskLevel::Caution => 1,
            RiskLevel::HighRisk => 2,
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            RiskLevel::Safe => "Kondisi aman. Tidak diperlukan tindakan khusus.",
            RiskLevel::Caution => "Perlu perhatian. Pantau kelembapan dan sirkulasi udara.",
            RiskLevel::HighRisk => {
                "Risiko tinggi. Disarankan meningkatkan ventilasi dan mengurangi kelembapan."
            }
        }
    }
}

impl TryFrom<usize> for RiskLevel {
    type Error = UnknownRiskLevel;

    fn try_from(label: usize) -> Result<Self, Self::Error> {
        match label {
            0 => Ok(RiskLevel::Safe),
            1 => Ok(RiskLevel::Caution),
            2 => Ok(RiskLevel::HighRisk),
            other => Err(UnknownRiskLevel(other)),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskLevel::Safe => "safe",
            RiskLevel::Caution => "caution",
            RiskLevel::HighRisk => "high-risk",
        };
        f.write_str(name)
    }
}
