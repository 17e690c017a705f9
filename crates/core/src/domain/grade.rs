use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GradingService {
    Psa,
    Bgs,
    Sgc,
}

impl fmt::Display for GradingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GradingService::Psa => "PSA",
            GradingService::Bgs => "BGS",
            GradingService::Sgc => "SGC",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeResult {
    pub processing_time: String,
    pub confidence_score: f64,
    pub overall_grade: OverallGrade,
    pub subgrades: Subgrades,
    pub market_analysis: MarketAnalysis,
}

/// Grade on each service's 0-10 scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OverallGrade {
    pub psa: f64,
    pub bgs: f64,
    pub sgc: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Subgrades {
    pub centering: f64,
    pub corners: f64,
    pub edges: f64,
    pub surface: f64,
}

impl Subgrades {
    pub fn mean(&self) -> f64 {
        (self.centering + self.corners + self.edges + self.surface) / 4.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketAnalysis {
    pub raw_value: f64,
    pub graded_values: GradedValues,
    pub recommended_service: GradingService,
    pub profit_estimate: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GradedValues {
    pub psa10: f64,
    pub psa9: f64,
    pub psa8: f64,
}

impl GradedValues {
    /// Value of the tier a card with the given PSA grade would land in.
    pub fn for_psa_grade(&self, psa: f64) -> f64 {
        if psa >= 10.0 {
            self.psa10
        } else if psa >= 9.0 {
            self.psa9
        } else {
            self.psa8
        }
    }
}

/// Response of the upload-based grader. Keys stay snake_case for the
/// front-end that consumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradePrediction {
    pub predicted_grade: f64,
    pub confidence: f64,
    pub subgrades: Subgrades,
    pub filename: Option<String>,
    pub file_size: usize,
    pub model_version: String,
}
