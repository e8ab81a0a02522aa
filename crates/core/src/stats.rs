//! Derived stats: $SOLCIV starting currency and the low-balance boost.

use solciv_common::types::{WalletBalance, WalletProfile};

use crate::ladder;

pub const MIN_CURRENCY: u32 = 100;
pub const MAX_CURRENCY: u32 = 5000;

/// Boost for empty (or negative) wallets.
pub const EMPTY_WALLET_BOOST: f64 = 1.75;

/// `(upper, boost)`: first step whose `upper` the balance is below wins.
/// Only consulted for balances above zero.
const BOOST_STEPS: [(f64, f64); 6] = [
    (0.25, 1.6),
    (1.0, 1.35),
    (5.0, 1.15),
    (20.0, 1.0),
    (100.0, 0.95),
    (f64::INFINITY, 0.9),
];

/// Starting $SOLCIV: `floor(clamp(250 * log10(10 * sol + 1), 100, 5000))`.
///
/// `f64::max`/`min` discard NaN, so a NaN balance clamps to the floor.
pub fn derived_currency(balance: f64) -> u32 {
    if balance <= 0.0 {
        return MIN_CURRENCY;
    }
    let raw = 250.0 * (balance * 10.0 + 1.0).log10();
    raw.max(MIN_CURRENCY as f64).min(MAX_CURRENCY as f64).floor() as u32
}

/// Inclusivity boost: smaller wallets get a bigger multiplier.
pub fn boost(balance: f64) -> f64 {
    if balance <= 0.0 {
        return EMPTY_WALLET_BOOST;
    }
    BOOST_STEPS
        .iter()
        .find(|(upper, _)| balance < *upper)
        .map_or(0.9, |(_, b)| *b)
}

/// Full profile for a looked-up (or sampled) wallet.
pub fn derive_profile(wallet: WalletBalance) -> WalletProfile {
    let band = ladder::band(wallet.balance);
    WalletProfile {
        balance: wallet.balance,
        token_account_count: wallet.token_account_count,
        tier: band.tier,
        estate: band.estate,
        derived_currency: derived_currency(wallet.balance),
        boost: boost(wallet.balance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solciv_common::types::Tier;

    const BOOSTS: [f64; 7] = [1.75, 1.6, 1.35, 1.15, 1.0, 0.95, 0.9];

    #[test]
    fn test_currency_floor_for_empty_wallets() {
        assert_eq!(derived_currency(0.0), 100);
        assert_eq!(derived_currency(-4.2), 100);
        assert_eq!(derived_currency(0.05), 100);
        assert_eq!(derived_currency(0.1), 100);
    }

    #[test]
    fn test_currency_formula() {
        // floor(250 * log10(68))
        assert_eq!(derived_currency(6.7), 458);
        // floor(250 * log10(2501))
        assert_eq!(derived_currency(250.0), 849);
        assert_eq!(derived_currency(2.0), 330);
    }

    #[test]
    fn test_currency_always_in_range() {
        let samples = [
            -1.0, 0.0, 1e-12, 0.01, 0.5, 3.3, 77.0, 1e4, 1e12, 1e19, 1e30, f64::MAX,
            f64::INFINITY, f64::NAN,
        ];
        for b in samples {
            let c = derived_currency(b);
            assert!((MIN_CURRENCY..=MAX_CURRENCY).contains(&c), "balance {b} → {c}");
        }
        assert_eq!(derived_currency(1e30), 5000);
        assert_eq!(derived_currency(f64::INFINITY), 5000);
        assert_eq!(derived_currency(f64::NAN), 100);
    }

    #[test]
    fn test_boost_steps() {
        assert_eq!(boost(0.0), 1.75);
        assert_eq!(boost(-1.0), 1.75);
        assert_eq!(boost(0.05), 1.6);
        assert_eq!(boost(0.25), 1.35);
        assert_eq!(boost(1.0), 1.15);
        assert_eq!(boost(5.0), 1.0);
        assert_eq!(boost(6.7), 1.0);
        assert_eq!(boost(20.0), 0.95);
        assert_eq!(boost(100.0), 0.9);
        assert_eq!(boost(250.0), 0.9);
    }

    #[test]
    fn test_boost_non_increasing() {
        let mut prev = boost(-1.0);
        let mut b = -1.0;
        while b < 150.0 {
            let cur = boost(b);
            assert!(cur <= prev, "boost rose at {b}");
            assert!(BOOSTS.contains(&cur));
            prev = cur;
            b += 0.01;
        }
    }

    #[test]
    fn test_derive_profile_examples() {
        let p = derive_profile(WalletBalance::new(0.05, 0));
        assert_eq!(p.tier, Tier::DustCamp);
        assert_eq!((p.estate.name, p.estate.tiles), ("Tent", 4));
        assert_eq!(p.derived_currency, 100);
        assert_eq!(p.boost, 1.6);

        let p = derive_profile(WalletBalance::new(6.7, 9));
        assert_eq!(p.tier, Tier::TraderTown);
        assert_eq!((p.estate.name, p.estate.tiles), ("Town", 14));
        assert_eq!(p.token_account_count, 9);
        assert_eq!(p.boost, 1.0);
        assert_eq!(p.derived_currency, (250.0 * 68f64.log10()).floor() as u32);

        let p = derive_profile(WalletBalance::new(250.0, 1));
        assert_eq!(p.tier, Tier::WhaleCitadel);
        assert_eq!((p.estate.name, p.estate.tiles), ("Citadel", 36));
        assert_eq!(p.boost, 0.9);
    }

    #[test]
    fn test_profile_json_shape() {
        let p = derive_profile(WalletBalance::new(6.7, 9));
        let json = serde_json::to_value(p).unwrap();
        assert_eq!(json["balance"], 6.7);
        assert_eq!(json["tokenAccountCount"], 9);
        assert_eq!(json["tier"], "Trader Town");
        assert_eq!(json["estate"]["name"], "Town");
        assert_eq!(json["estate"]["tiles"], 14);
        assert_eq!(json["derivedCurrency"], 458);
        assert_eq!(json["boost"], 1.0);
    }
}
