//! Wallet types shared across crates.
//!
//! The ledger module produces a [`WalletBalance`]; core derives a
//! [`WalletProfile`] from it. CLI, TUI and HTTP consume only these.

use serde::{Deserialize, Serialize};

use crate::constants::LAMPORTS_PER_SOL;

/// Raw lookup result: SOL balance plus the number of SPL token accounts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalance {
    #[serde(alias = "sol")]
    pub balance: f64,
    #[serde(alias = "tokenAccounts", default)]
    pub token_account_count: u64,
}

impl WalletBalance {
    pub fn new(balance: f64, token_account_count: u64) -> Self {
        Self { balance, token_account_count }
    }

    /// Build from a lamport balance.
    pub fn from_lamports(lamports: u64, token_account_count: u64) -> Self {
        Self::new(lamports_to_sol(lamports), token_account_count)
    }
}

/// Convert lamports → SOL.
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// Named balance band, ordered from smallest to largest wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "Dust Camp")]
    DustCamp,
    #[serde(rename = "Meme Village")]
    MemeVillage,
    #[serde(rename = "Shitcoin Borough")]
    ShitcoinBorough,
    #[serde(rename = "Trader Town")]
    TraderTown,
    #[serde(rename = "Liquidity Keep")]
    LiquidityKeep,
    #[serde(rename = "Whale District")]
    WhaleDistrict,
    #[serde(rename = "Whale Citadel")]
    WhaleCitadel,
}

impl Tier {
    pub const ALL: [Tier; 7] = [
        Tier::DustCamp,
        Tier::MemeVillage,
        Tier::ShitcoinBorough,
        Tier::TraderTown,
        Tier::LiquidityKeep,
        Tier::WhaleDistrict,
        Tier::WhaleCitadel,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tier::DustCamp => "Dust Camp",
            Tier::MemeVillage => "Meme Village",
            Tier::ShitcoinBorough => "Shitcoin Borough",
            Tier::TraderTown => "Trader Town",
            Tier::LiquidityKeep => "Liquidity Keep",
            Tier::WhaleDistrict => "Whale District",
            Tier::WhaleCitadel => "Whale Citadel",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Settlement size that goes with a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Estate {
    pub name: &'static str,
    pub tiles: u32,
}

/// Everything derived from a [`WalletBalance`].
///
/// ```json
/// {
///   "balance": 6.7,
///   "tokenAccountCount": 9,
///   "tier": "Trader Town",
///   "estate": { "name": "Town", "tiles": 14 },
///   "derivedCurrency": 458,
///   "boost": 1.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletProfile {
    pub balance: f64,
    pub token_account_count: u64,
    pub tier: Tier,
    pub estate: Estate,
    pub derived_currency: u32,
    pub boost: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lamports_to_sol() {
        assert_eq!(lamports_to_sol(0), 0.0);
        assert_eq!(lamports_to_sol(1_000_000_000), 1.0);
        assert_eq!(lamports_to_sol(6_700_000_000), 6.7);
    }

    #[test]
    fn test_wallet_balance_accepts_legacy_field_names() {
        let b: WalletBalance = serde_json::from_str(r#"{"sol": 1.3, "tokenAccounts": 4}"#).unwrap();
        assert_eq!(b, WalletBalance::new(1.3, 4));

        let b: WalletBalance =
            serde_json::from_str(r#"{"balance": 0.5, "tokenAccountCount": 2}"#).unwrap();
        assert_eq!(b, WalletBalance::new(0.5, 2));
    }

    #[test]
    fn test_wallet_balance_serializes_camel_case() {
        let json = serde_json::to_value(WalletBalance::new(2.0, 7)).unwrap();
        assert_eq!(json["balance"], 2.0);
        assert_eq!(json["tokenAccountCount"], 7);
    }

    #[test]
    fn test_tier_serializes_as_display_name() {
        assert_eq!(serde_json::to_value(Tier::ShitcoinBorough).unwrap(), "Shitcoin Borough");
        assert_eq!(Tier::WhaleCitadel.to_string(), "Whale Citadel");
    }

    #[test]
    fn test_tiers_are_ordered() {
        for pair in Tier::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
