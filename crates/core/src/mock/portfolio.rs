use super::round2;
use crate::domain::portfolio::{Holding, PortfolioSnapshot};
use rand::Rng;

/// The only account with holdings; every other id gets an empty snapshot.
pub const DEMO_USER_ID: &str = "demo-user";

// (card, quantity, cost basis, current value)
const DEMO_HOLDINGS: &[(&str, u32, f64, f64)] = &[
    ("2018 Luka Doncic Prizm Silver PSA 10", 1, 1_450.0, 2_100.0),
    ("2018 Shohei Ohtani Topps Chrome PSA 10", 2, 1_300.0, 1_920.0),
    ("2020 Justin Herbert Prizm PSA 10", 3, 1_500.0, 1_230.0),
    ("2015 Connor McDavid Young Guns PSA 10", 1, 2_200.0, 2_750.0),
];

pub(crate) fn snapshot(rng: &mut impl Rng, user_id: &str) -> PortfolioSnapshot {
    let user_id = user_id.trim();
    if user_id != DEMO_USER_ID {
        tracing::debug!(user_id, "unknown portfolio user; returning empty snapshot");
        return PortfolioSnapshot::empty(user_id);
    }

    let holdings = DEMO_HOLDINGS
        .iter()
        .map(|&(card_name, quantity, cost_basis, value)| Holding {
            card_name: card_name.to_string(),
            quantity,
            cost_basis,
            current_value: round2(value * rng.gen_range(0.98..=1.02)),
        })
        .collect();

    PortfolioSnapshot::from_holdings(user_id, holdings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn unknown_user_is_empty_not_error() {
        let s = snapshot(&mut StdRng::seed_from_u64(0), "someone-else");
        assert_eq!(s.user_id, "someone-else");
        assert_eq!(s.total_value, 0.0);
        assert!(s.holdings.is_empty());
    }

    #[test]
    fn demo_totals_satisfy_gain_identity() {
        for seed in 0..2000 {
            let s = snapshot(&mut StdRng::seed_from_u64(seed), DEMO_USER_ID);
            assert_eq!(s.holdings.len(), DEMO_HOLDINGS.len());
            assert!(s.total_cost > 0.0);
            assert_eq!(s.total_gain, s.total_value - s.total_cost, "seed {seed}");
            let pct = 100.0 * s.total_gain / s.total_cost;
            assert!((s.total_gain_percent - pct).abs() < 0.01, "seed {seed}");
        }
    }
}
