//! The balance ladder: one table maps a SOL balance to both its tier and
//! its estate, so the two can never disagree on a breakpoint.

use solciv_common::types::{Estate, Tier};

/// One rung of the ladder. A balance belongs to the first band whose
/// `upper` it is strictly below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub upper: f64,
    pub tier: Tier,
    pub estate: Estate,
}

pub const LADDER: [Band; 7] = [
    Band { upper: 0.1, tier: Tier::DustCamp, estate: Estate { name: "Tent", tiles: 4 } },
    Band { upper: 0.5, tier: Tier::MemeVillage, estate: Estate { name: "Hut", tiles: 6 } },
    Band { upper: 2.0, tier: Tier::ShitcoinBorough, estate: Estate { name: "House", tiles: 9 } },
    Band { upper: 10.0, tier: Tier::TraderTown, estate: Estate { name: "Town", tiles: 14 } },
    Band { upper: 50.0, tier: Tier::LiquidityKeep, estate: Estate { name: "City", tiles: 20 } },
    Band {
        upper: 200.0,
        tier: Tier::WhaleDistrict,
        estate: Estate { name: "Fortified City", tiles: 28 },
    },
    Band {
        upper: f64::INFINITY,
        tier: Tier::WhaleCitadel,
        estate: Estate { name: "Citadel", tiles: 36 },
    },
];

/// Tile count of the largest estate; map density is measured against it.
pub const MAX_TILES: u32 = LADDER[LADDER.len() - 1].estate.tiles;

/// The band a balance falls into. Breakpoints belong to the higher band;
/// negatives land in the lowest band and NaN (which compares false against
/// every breakpoint) in the highest.
pub fn band(balance: f64) -> &'static Band {
    LADDER
        .iter()
        .find(|b| balance < b.upper)
        .unwrap_or(&LADDER[LADDER.len() - 1])
}

pub fn tier(balance: f64) -> Tier {
    band(balance).tier
}

pub fn estate(balance: f64) -> Estate {
    band(balance).estate
}

#[cfg(test)]
mod tests {
    use super::*;

    const BREAKPOINTS: [f64; 6] = [0.1, 0.5, 2.0, 10.0, 50.0, 200.0];

    #[test]
    fn test_ladder_is_sorted_and_covers_all_tiers() {
        for pair in LADDER.windows(2) {
            assert!(pair[0].upper < pair[1].upper);
            assert!(pair[0].tier < pair[1].tier);
            assert!(pair[0].estate.tiles < pair[1].estate.tiles);
        }
        let tiers: Vec<Tier> = LADDER.iter().map(|b| b.tier).collect();
        assert_eq!(tiers, Tier::ALL.to_vec());
        assert_eq!(MAX_TILES, 36);
    }

    #[test]
    fn test_breakpoints_round_up() {
        for (i, bp) in BREAKPOINTS.iter().enumerate() {
            assert_eq!(tier(*bp), LADDER[i + 1].tier, "breakpoint {bp}");
            assert_eq!(estate(*bp), LADDER[i + 1].estate, "breakpoint {bp}");
            let below = bp - 1e-9;
            assert_eq!(tier(below), LADDER[i].tier, "just below {bp}");
        }
    }

    #[test]
    fn test_tier_and_estate_agree_everywhere() {
        let mut samples = vec![-5.0, 0.0, 1e-9, 0.05, 0.25, 1.0, 6.7, 42.0, 199.999, 250.0, 1e12];
        samples.extend(BREAKPOINTS);
        for b in samples {
            let idx_t = LADDER.iter().position(|x| x.tier == tier(b)).unwrap();
            let idx_e = LADDER.iter().position(|x| x.estate == estate(b)).unwrap();
            assert_eq!(idx_t, idx_e, "balance {b}");
        }
    }

    #[test]
    fn test_monotonic_in_balance() {
        let mut prev = tier(-1.0);
        let mut b = -1.0;
        while b < 300.0 {
            let t = tier(b);
            assert!(t >= prev, "tier decreased at {b}");
            prev = t;
            b += 0.05;
        }
    }

    #[test]
    fn test_examples() {
        assert_eq!(tier(0.05), Tier::DustCamp);
        assert_eq!(estate(0.05), Estate { name: "Tent", tiles: 4 });
        assert_eq!(tier(6.7), Tier::TraderTown);
        assert_eq!(estate(6.7), Estate { name: "Town", tiles: 14 });
        assert_eq!(tier(250.0), Tier::WhaleCitadel);
        assert_eq!(estate(250.0), Estate { name: "Citadel", tiles: 36 });
    }

    #[test]
    fn test_large_balances_hit_the_top() {
        for b in [200.0, 201.0, 1e6, f64::INFINITY] {
            assert_eq!(tier(b), Tier::WhaleCitadel);
            assert_eq!(estate(b).name, "Citadel");
        }
    }

    #[test]
    fn test_negative_and_nan() {
        assert_eq!(tier(-3.0), Tier::DustCamp);
        assert_eq!(tier(f64::NAN), Tier::WhaleCitadel);
        assert_eq!(estate(f64::NAN).tiles, 36);
    }
}
