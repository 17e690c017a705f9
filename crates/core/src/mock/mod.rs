//! Deterministic in-memory data behind every API route.
//!
//! The provider holds no mutable state. Each call builds its own RNG, from the
//! configured seed when one is set (every call then returns identical values)
//! or from OS entropy otherwise.

mod grading;
mod market;
mod oracle;
mod portfolio;

use crate::domain::contract::CardImage;
use crate::domain::grade::{GradePrediction, GradeResult};
use crate::domain::market::{MarketFilter, MarketListing};
use crate::domain::oracle::OracleAnswer;
use crate::domain::portfolio::PortfolioSnapshot;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use grading::MODEL_VERSION;
pub use portfolio::DEMO_USER_ID;

#[derive(Debug, Clone, Copy, Default)]
pub struct MockDataProvider {
    seed: Option<u64>,
}

impl MockDataProvider {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn generate_grade(&self, image: &CardImage) -> GradeResult {
        grading::grade(&mut self.rng(), image)
    }

    pub fn predict_grade(&self, image: &CardImage) -> GradePrediction {
        grading::predict(&mut self.rng(), image)
    }

    pub fn list_market_top_picks(&self, filter: &MarketFilter) -> Vec<MarketListing> {
        market::top_picks(&mut self.rng(), filter)
    }

    pub fn get_portfolio(&self, user_id: &str) -> PortfolioSnapshot {
        portfolio::snapshot(&mut self.rng(), user_id)
    }

    pub fn ask_oracle(&self, question: &str) -> OracleAnswer {
        oracle::answer(&mut self.rng(), question)
    }
}

pub(crate) fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Nearest half point on a 0-10 grading scale.
pub(crate) fn round_half_grade(v: f64) -> f64 {
    ((v * 2.0).round() / 2.0).clamp(0.0, 10.0)
}
