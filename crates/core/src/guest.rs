//! Sample wallets for guest mode.

use rand::seq::SliceRandom;
use rand::Rng;

use solciv_common::types::WalletBalance;

/// Balances a guest wallet is drawn from, one per lower band.
pub const GUEST_BALANCES: [f64; 5] = [0.03, 0.12, 0.42, 1.3, 6.7];

pub const MIN_GUEST_TOKEN_ACCOUNTS: u64 = 1;
pub const MAX_GUEST_TOKEN_ACCOUNTS: u64 = 14;

/// A random sample wallet: one of [`GUEST_BALANCES`] and 1–14 token accounts.
pub fn guest_sample<R: Rng + ?Sized>(rng: &mut R) -> WalletBalance {
    let balance = *GUEST_BALANCES.choose(rng).unwrap_or(&GUEST_BALANCES[0]);
    let accounts = rng.gen_range(MIN_GUEST_TOKEN_ACCOUNTS..=MAX_GUEST_TOKEN_ACCOUNTS);
    WalletBalance::new(balance, accounts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_guest_sample_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let w = guest_sample(&mut rng);
            assert!(GUEST_BALANCES.contains(&w.balance));
            assert!((1..=14).contains(&w.token_account_count));
        }
    }

    #[test]
    fn test_guest_sample_covers_all_balances() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 5];
        for _ in 0..500 {
            let w = guest_sample(&mut rng);
            let i = GUEST_BALANCES.iter().position(|b| *b == w.balance).unwrap();
            seen[i] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
