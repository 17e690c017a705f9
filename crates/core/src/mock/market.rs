use super::{round1, round2};
use crate::domain::market::{MarketFilter, MarketListing, Momentum};
use rand::Rng;

struct CatalogEntry {
    name: &'static str,
    sport: &'static str,
    price: f64,
    // Never zero; jitter keeps the sign.
    change_percent: f64,
    volume: u64,
    ai_score: f64,
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "2003 LeBron James Topps Chrome Rookie PSA 10",
        sport: "Basketball",
        price: 4_850.0,
        change_percent: 6.4,
        volume: 142,
        ai_score: 94.0,
    },
    CatalogEntry {
        name: "2018 Luka Doncic Prizm Silver PSA 10",
        sport: "Basketball",
        price: 2_100.0,
        change_percent: 4.1,
        volume: 318,
        ai_score: 88.0,
    },
    CatalogEntry {
        name: "2011 Mike Trout Topps Update PSA 9",
        sport: "Baseball",
        price: 1_320.0,
        change_percent: -2.3,
        volume: 97,
        ai_score: 71.0,
    },
    CatalogEntry {
        name: "2018 Shohei Ohtani Topps Chrome PSA 10",
        sport: "Baseball",
        price: 960.0,
        change_percent: 8.7,
        volume: 455,
        ai_score: 92.0,
    },
    CatalogEntry {
        name: "2017 Patrick Mahomes Prizm PSA 10",
        sport: "Football",
        price: 3_400.0,
        change_percent: 3.2,
        volume: 210,
        ai_score: 83.0,
    },
    CatalogEntry {
        name: "2020 Justin Herbert Prizm PSA 10",
        sport: "Football",
        price: 410.0,
        change_percent: -4.8,
        volume: 388,
        ai_score: 66.0,
    },
    CatalogEntry {
        name: "2018 Kylian Mbappe Prizm World Cup PSA 10",
        sport: "Soccer",
        price: 1_150.0,
        change_percent: 5.5,
        volume: 174,
        ai_score: 86.0,
    },
    CatalogEntry {
        name: "2015 Connor McDavid Young Guns PSA 10",
        sport: "Hockey",
        price: 2_750.0,
        change_percent: -1.6,
        volume: 63,
        ai_score: 77.0,
    },
];

/// Listings ordered by AI score, best first.
pub(crate) fn top_picks(rng: &mut impl Rng, filter: &MarketFilter) -> Vec<MarketListing> {
    let mut listings: Vec<MarketListing> = CATALOG
        .iter()
        .enumerate()
        .filter(|(_, entry)| filter.matches(entry.sport))
        .map(|(idx, entry)| listing(rng, idx as u32 + 1, entry))
        .collect();

    listings.sort_by(|a, b| b.ai_score.total_cmp(&a.ai_score));

    tracing::debug!(
        sport = filter.sport.as_deref().unwrap_or("all"),
        count = listings.len(),
        "generated market listings"
    );
    listings
}

fn listing(rng: &mut impl Rng, id: u32, entry: &CatalogEntry) -> MarketListing {
    let current_price = round2(entry.price * rng.gen_range(0.97..=1.03));
    let change_percent = round2(entry.change_percent * rng.gen_range(0.8..=1.2));
    // Change relative to the previous price, so both signed fields agree.
    let change = round2(current_price * change_percent / (100.0 + change_percent));
    let volume = (entry.volume as f64 * rng.gen_range(0.85..=1.15)).round() as u64;
    let ai_score = round1((entry.ai_score + rng.gen_range(-2.0..=2.0)).clamp(0.0, 100.0));

    MarketListing {
        id,
        name: entry.name.to_string(),
        sport: entry.sport.to_string(),
        current_price,
        change,
        change_percent,
        volume,
        ai_score,
        confidence: round1(rng.gen_range(78.0..=96.0)),
        momentum: Momentum::from_ai_score(ai_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    const CATEGORIES: [&str; 5] = ["Basketball", "Baseball", "Football", "Soccer", "Hockey"];

    #[test]
    fn catalog_covers_every_category() {
        for category in CATEGORIES {
            assert!(CATALOG.iter().any(|e| e.sport == category), "{category}");
        }
        assert!(CATALOG.iter().all(|e| e.change_percent.abs() >= 1.0));
    }

    #[test]
    fn listings_hold_sign_and_range_invariants() {
        for seed in 0..100 {
            let listings = top_picks(&mut StdRng::seed_from_u64(seed), &MarketFilter::default());
            assert_eq!(listings.len(), CATALOG.len());

            let ids: HashSet<u32> = listings.iter().map(|l| l.id).collect();
            assert_eq!(ids.len(), listings.len());

            for l in &listings {
                assert!(l.change != 0.0 && l.change_percent != 0.0);
                assert_eq!(l.change.signum(), l.change_percent.signum(), "{l:?}");
                assert!(l.current_price >= 0.0);
                assert!((0.0..=100.0).contains(&l.ai_score));
                assert!((0.0..=100.0).contains(&l.confidence));
                assert!(Momentum::ALL.contains(&l.momentum));
            }
        }
    }

    #[test]
    fn listings_are_sorted_by_score() {
        let listings = top_picks(&mut StdRng::seed_from_u64(11), &MarketFilter::default());
        assert!(listings.windows(2).all(|w| w[0].ai_score >= w[1].ai_score));
    }

    #[test]
    fn filter_keeps_exact_category_only() {
        let filter = MarketFilter::from_query(Some("Baseball"));
        let listings = top_picks(&mut StdRng::seed_from_u64(1), &filter);
        assert_eq!(listings.len(), 2);
        assert!(listings.iter().all(|l| l.sport == "Baseball"));

        let none = top_picks(
            &mut StdRng::seed_from_u64(1),
            &MarketFilter::from_query(Some("Cricket")),
        );
        assert!(none.is_empty());
    }
}
