//! Rule-based assessment of greenhouse conditions.
//!
//! Independent of the trained classifier: every rule is a fixed threshold on
//! the same four readings. Each rule adds to a score on a 0..=20 scale, may
//! emit advice and may request an actuator change. The score is bucketed into
//! a [`ConditionLevel`].

use crate::features::SensorReadings;
use serde::Serialize;

/// How urgently a piece of advice should be acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    Warning,
    Info,
}

/// Actuator change requested by a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ControlAction {
    PumpOn,
    PumpOff,
    FanOn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub message: &'static str,
    pub priority: Priority,
    pub action: Option<&'static str>,
}

impl Advice {
    fn new(message: &'static str, priority: Priority, action: Option<&'static str>) -> Self {
        Self {
            message,
            priority,
            action,
        }
    }
}

/// Bucketed rule score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl ConditionLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            8.. => ConditionLevel::Critical,
            5..=7 => ConditionLevel::High,
            2..=4 => ConditionLevel::Moderate,
            _ => ConditionLevel::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConditionLevel::Low => "Rendah",
            ConditionLevel::Moderate => "Sedang",
            ConditionLevel::High => "Tinggi",
            ConditionLevel::Critical => "Kritis",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ConditionLevel::Low => "green",
            ConditionLevel::Moderate => "yellow",
            ConditionLevel::High => "orange",
            ConditionLevel::Critical => "red",
        }
    }
}

impl Serialize for ConditionLevel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Result of [`analyze`], also the `POST /analyze` response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub risk_level: ConditionLevel,
    pub risk_color: &'static str,
    pub risk_score: u32,
    pub recommendations: Vec<Advice>,
    pub critical_actions: Vec<ControlAction>,
    pub sensor_readings: SensorReadings,
}

#[derive(Default)]
struct Tally {
    score: u32,
    advice: Vec<Advice>,
    actions: Vec<ControlAction>,
}

impl Tally {
    fn add(&mut self, points: u32, advice: Advice) {
        self.score += points;
        self.advice.push(advice);
    }

    fn request(&mut self, action: ControlAction) {
        if !self.actions.contains(&action) {
            self.actions.push(action);
        }
    }
}

/// Applies the threshold rules to one set of readings.
pub fn analyze(readings: &SensorReadings) -> Assessment {
    let SensorReadings {
        temperature,
        humidity,
        soil_moisture,
        ..
    } = *readings;
    let mut tally = Tally::default();

    if soil_moisture < 30.0 {
        tally.add(
            6,
            Advice::new(
                "🚨 Tanah sangat kering (<30%)! Tanaman berisiko layu.",
                Priority::Critical,
                Some("Aktifkan pompa air segera"),
            ),
        );
        tally.request(ControlAction::PumpOn);
    } else if soil_moisture < 60.0 {
        tally.add(
            3,
            Advice::new(
                "⚠️ Kelembapan tanah di bawah optimal (30-60%). Penyiraman diperlukan.",
                Priority::Warning,
                Some("Siram tanaman dalam 1-2 jam"),
            ),
        );
    } else if soil_moisture > 85.0 {
        tally.add(
            4,
            Advice::new(
                "💧 Tanah terlalu basah (>85%)! Risiko busuk akar.",
                Priority::Warning,
                Some("Hentikan penyiraman, cek sistem drainase"),
            ),
        );
        tally.request(ControlAction::PumpOff);
    } else {
        tally.add(
            0,
            Advice::new("✅ Kelembapan tanah optimal (60-85%).", Priority::Info, None),
        );
    }

    if temperature > 32.0 {
        tally.add(
            5,
            Advice::new(
                "🔥 Suhu kritis (>32°C)! Tanaman stress panas.",
                Priority::Critical,
                Some("Nyalakan kipas & buka ventilasi maksimal"),
            ),
        );
        tally.request(ControlAction::FanOn);
    } else if temperature > 27.0 {
        tally.add(
            3,
            Advice::new(
                "🌡️ Suhu tinggi (27-32°C). Kurang ideal untuk pertumbuhan.",
                Priority::Warning,
                Some("Tingkatkan sirkulasi udara, tutup plastic mulsa"),
            ),
        );
    } else if temperature < 15.0 {
        tally.add(
            4,
            Advice::new(
                "❄️ Suhu terlalu dingin (<15°C). Pertumbuhan terhambat.",
                Priority::Warning,
                Some("Tutup ventilasi, gunakan heater jika tersedia"),
            ),
        );
    } else if temperature < 18.0 {
        tally.add(
            2,
            Advice::new(
                "🌤️ Suhu agak dingin (15-18°C). Kurangi ventilasi malam hari.",
                Priority::Info,
                None,
            ),
        );
    } else {
        tally.add(0, Advice::new("✅ Suhu optimal (18-27°C).", Priority::Info, None));
    }

    if humidity < 40.0 {
        tally.add(
            3,
            Advice::new(
                "🏜️ Kelembapan udara rendah (<40%). Tanaman bisa dehidrasi.",
                Priority::Warning,
                Some("Nyalakan misting system/sprayer"),
            ),
        );
    } else if humidity > 90.0 {
        tally.add(
            4,
            Advice::new(
                "💦 Kelembapan sangat tinggi (>90%)! Risiko jamur & penyakit.",
                Priority::Warning,
                Some("Nyalakan kipas untuk sirkulasi udara"),
            ),
        );
        tally.request(ControlAction::FanOn);
    } else if humidity > 85.0 && temperature > 25.0 {
        tally.add(
            2,
            Advice::new(
                "🌫️ Kombinasi lembap & hangat. Waspada jamur daun.",
                Priority::Info,
                Some("Pantau kesehatan tanaman"),
            ),
        );
    }

    // Combined effects, checked independently of the per-reading rules above.
    if readings.is_raining() && humidity > 80.0 {
        tally.add(
            2,
            Advice::new(
                "🌧️ Hujan & kelembapan tinggi. Risiko genangan air.",
                Priority::Warning,
                Some("Pastikan drainase berfungsi, tutup atap greenhouse"),
            ),
        );
    }
    if temperature > 28.0 && humidity < 50.0 {
        tally.add(
            3,
            Advice::new(
                "☀️ Panas & kering. Kondisi stress untuk tanaman.",
                Priority::Warning,
                Some("Kombinasi: kipas ON + misting ON"),
            ),
        );
    }
    if temperature < 18.0 && soil_moisture > 80.0 {
        tally.add(
            2,
            Advice::new(
                "🧊 Dingin & tanah basah. Risiko busuk akar meningkat.",
                Priority::Warning,
                Some("Kurangi frekuensi penyiraman"),
            ),
        );
    }

    if tally.advice.iter().all(|a| a.priority == Priority::Info) {
        tally.advice.push(Advice::new(
            "🌱 Semua parameter dalam kondisi baik. Lanjutkan perawatan rutin.",
            Priority::Info,
            Some("Monitoring berkala setiap 30 menit"),
        ));
    }

    let level = ConditionLevel::from_score(tally.score);
    Assessment {
        risk_level: level,
        risk_color: level.color(),
        risk_score: tally.score,
        recommendations: tally.advice,
        critical_actions: tally.actions,
        sensor_readings: *readings,
    }
}

/// Target band for one reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptimalRange {
    pub min: f64,
    pub max: f64,
    pub unit: &'static str,
    pub description: &'static str,
}

/// `GET /ranges` response body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptimalRanges {
    pub temperature: OptimalRange,
    pub humidity: OptimalRange,
    pub soil_moisture: OptimalRange,
}

pub const OPTIMAL_RANGES: OptimalRanges = OptimalRanges {
    temperature: OptimalRange {
        min: 18.0,
        max: 27.0,
        unit: "°C",
        description: "Suhu ideal untuk pertumbuhan sayuran greenhouse",
    },
    humidity: OptimalRange {
        min: 50.0,
        max: 85.0,
        unit: "%",
        description: "Kelembapan udara optimal",
    },
    soil_moisture: OptimalRange {
        min: 60.0,
        max: 80.0,
        unit: "%",
        description: "Kelembapan tanah ideal",
    },
};
