//! Interactive session state shared by the TUI: the loaded wallet, its
//! address, the session seed and an activity log.

use std::collections::VecDeque;

use rand::Rng;
use tracing::{info, warn};

use solciv_common::error::SolcivResult;
use solciv_common::traits::LedgerClient;
use solciv_common::types::WalletProfile;

use crate::empire::Empire;
use crate::{guest, render, rng, stats};

/// Entries beyond this are dropped, oldest first.
pub const MAX_LOG_ENTRIES: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Local wall-clock time, `HH:MM:SS`.
    pub at: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Session {
    wallet: Option<WalletProfile>,
    address: Option<String>,
    seed: u32,
    log: VecDeque<LogEntry>,
}

impl Session {
    pub fn new(seed: u32) -> Self {
        Self {
            wallet: None,
            address: None,
            seed,
            log: VecDeque::with_capacity(MAX_LOG_ENTRIES),
        }
    }

    pub fn with_random_seed<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng::random_seed(rng))
    }

    pub fn wallet(&self) -> Option<&WalletProfile> {
        self.wallet.as_ref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Log entries, newest first.
    pub fn log(&self) -> impl Iterator<Item = &LogEntry> {
        self.log.iter()
    }

    pub fn add_log(&mut self, message: impl Into<String>) {
        self.log.push_front(LogEntry {
            at: chrono::Local::now().format("%H:%M:%S").to_string(),
            message: message.into(),
        });
        self.log.truncate(MAX_LOG_ENTRIES);
    }

    /// Replace the session with a random sample wallet and a fresh seed.
    pub fn load_guest<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &WalletProfile {
        let profile = stats::derive_profile(guest::guest_sample(rng));
        self.address = None;
        self.seed = rng::random_seed(rng);
        self.add_log("Guest entered. Empire forged.");
        info!(balance = profile.balance, seed = self.seed, "guest session");
        self.wallet.insert(profile)
    }

    /// Look up `address` and make it the current wallet. A failed lookup is
    /// logged and leaves the previous wallet in place.
    pub async fn load_wallet(
        &mut self,
        ledger: &dyn LedgerClient,
        address: &str,
        program_id: &str,
    ) -> SolcivResult<&WalletProfile> {
        let address = address.trim();
        match ledger.wallet_balance(address, program_id).await {
            Ok(balance) => {
                let profile = stats::derive_profile(balance);
                self.address = Some(address.to_string());
                self.add_log(format!(
                    "Wallet loaded: {} • SOL {:.4}",
                    render::display_name(Some(address)),
                    profile.balance
                ));
                info!(address, balance = profile.balance, tier = %profile.tier, "wallet loaded");
                Ok(&*self.wallet.insert(profile))
            }
            Err(e) => {
                warn!(address, error = %e, "wallet load failed");
                self.add_log(format!("Wallet load failed: {e}"));
                Err(e)
            }
        }
    }

    /// `GUEST` until an address is loaded.
    pub fn display_name(&self) -> String {
        render::display_name(self.address.as_deref())
    }

    /// Address-bound seed when an address is loaded, else the session seed.
    pub fn map_seed(&self) -> u32 {
        match self.address.as_deref() {
            Some(addr) if !addr.is_empty() => rng::seed_for_address(addr),
            _ => self.seed,
        }
    }

    pub fn empire(&self) -> Option<Empire> {
        self.wallet
            .map(|profile| Empire::build(profile, self.address.as_deref(), self.map_seed()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use solciv_common::error::SolcivError;
    use solciv_common::types::Tier;

    const ADDR: &str = "So11111111111111111111111111111111111111112";

    struct MockLedger;

    #[async_trait]
    impl LedgerClient for MockLedger {
        fn name(&self) -> &str {
            "mock"
        }

        async fn balance_lamports(&self, address: &str) -> SolcivResult<u64> {
            if address == ADDR {
                Ok(6_700_000_000)
            } else {
                Err(SolcivError::InvalidAddress("Invalid public key input".into()))
            }
        }

        async fn token_account_count(&self, _address: &str, _program_id: &str) -> SolcivResult<u64> {
            Ok(9)
        }
    }

    #[test]
    fn test_new_session_is_empty() {
        let s = Session::new(42);
        assert!(s.wallet().is_none());
        assert!(s.empire().is_none());
        assert_eq!(s.display_name(), "GUEST");
        assert_eq!(s.map_seed(), 42);
        assert_eq!(s.log().count(), 0);
    }

    #[test]
    fn test_log_newest_first_and_capped() {
        let mut s = Session::new(0);
        for i in 0..25 {
            s.add_log(format!("entry {i}"));
        }
        let msgs: Vec<&str> = s.log().map(|e| e.message.as_str()).collect();
        assert_eq!(msgs.len(), MAX_LOG_ENTRIES);
        assert_eq!(msgs[0], "entry 24");
        assert_eq!(msgs[19], "entry 5");
        assert_eq!(s.log().next().unwrap().at.len(), 8);
    }

    #[test]
    fn test_load_guest() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut s = Session::new(0);
        let profile = *s.load_guest(&mut rng);
        assert!(guest::GUEST_BALANCES.contains(&profile.balance));
        assert_eq!(s.address(), None);
        assert_eq!(s.display_name(), "GUEST");
        assert_eq!(s.map_seed(), s.seed());
        assert_eq!(s.log().next().unwrap().message, "Guest entered. Empire forged.");
        assert_eq!(s.empire().unwrap().name, "GUEST");
    }

    #[tokio::test]
    async fn test_load_wallet_success() {
        let mut s = Session::new(0);
        let p = *s.load_wallet(&MockLedger, ADDR, "prog").await.unwrap();
        assert_eq!(p.tier, Tier::TraderTown);
        assert_eq!(p.token_account_count, 9);
        assert_eq!(s.display_name(), "So11…1112");
        assert_eq!(s.map_seed(), 9_035_594);
        assert_eq!(
            s.log().next().unwrap().message,
            "Wallet loaded: So11…1112 • SOL 6.7000"
        );
        let empire = s.empire().unwrap();
        assert_eq!(empire.seed, 9_035_594);
    }

    #[tokio::test]
    async fn test_load_wallet_failure_keeps_previous() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut s = Session::new(0);
        let before = *s.load_guest(&mut rng);
        let err = s.load_wallet(&MockLedger, "nope", "prog").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid public key input");
        assert_eq!(s.wallet(), Some(&before));
        assert_eq!(s.address(), None);
        assert_eq!(
            s.log().next().unwrap().message,
            "Wallet load failed: Invalid public key input"
        );
    }
}
