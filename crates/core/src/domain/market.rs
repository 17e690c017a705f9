use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Momentum {
    #[serde(rename = "STRONG BUY")]
    StrongBuy,
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "HOLD")]
    Hold,
}

impl Momentum {
    pub const ALL: [Momentum; 3] = [Momentum::StrongBuy, Momentum::Buy, Momentum::Hold];

    pub fn as_str(self) -> &'static str {
        match self {
            Momentum::StrongBuy => "STRONG BUY",
            Momentum::Buy => "BUY",
            Momentum::Hold => "HOLD",
        }
    }

    pub fn from_ai_score(score: f64) -> Self {
        if score >= 90.0 {
            Momentum::StrongBuy
        } else if score >= 75.0 {
            Momentum::Buy
        } else {
            Momentum::Hold
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketListing {
    pub id: u32,
    pub name: String,
    pub sport: String,
    pub current_price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: u64,
    pub ai_score: f64,
    pub confidence: f64,
    pub momentum: Momentum,
}

/// Category filter for market listings. Matching is exact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketFilter {
    pub sport: Option<String>,
}

impl MarketFilter {
    /// Blank values and `all` (any case) mean "no filter".
    pub fn from_query(sport: Option<&str>) -> Self {
        let sport = sport
            .map(str::trim)
            .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("all"))
            .map(str::to_string);
        Self { sport }
    }

    pub fn matches(&self, listing_sport: &str) -> bool {
        match &self.sport {
            Some(sport) => sport == listing_sport,
            None => true,
        }
    }
}
