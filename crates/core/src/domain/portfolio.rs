use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub card_name: String,
    pub quantity: u32,
    /// Total paid for all copies.
    pub cost_basis: f64,
    /// Total current value of all copies.
    pub current_value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub user_id: String,
    pub total_value: f64,
    pub total_cost: f64,
    pub total_gain: f64,
    pub total_gain_percent: f64,
    pub holdings: Vec<Holding>,
}

impl PortfolioSnapshot {
    pub fn empty(user_id: impl Into<String>) -> Self {
        Self::from_holdings(user_id, Vec::new())
    }

    /// Totals are derived from the holdings. `total_gain` is the exact float
    /// difference of the two cent-rounded totals, never rounded again, so
    /// `total_gain == total_value - total_cost` holds bit for bit.
    pub fn from_holdings(user_id: impl Into<String>, holdings: Vec<Holding>) -> Self {
        let total_value = round2(holdings.iter().map(|h| h.current_value).sum());
        let total_cost = round2(holdings.iter().map(|h| h.cost_basis).sum());
        let total_gain = total_value - total_cost;
        let total_gain_percent = if total_cost > 0.0 {
            round2(100.0 * total_gain / total_cost)
        } else {
            0.0
        };

        Self {
            user_id: user_id.into(),
            total_value,
            total_cost,
            total_gain,
            total_gain_percent,
            holdings,
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
