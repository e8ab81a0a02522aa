//! Ledger collaborator trait: every balance source implements this.
//!
//! Read-only by contract: there is no method that writes, signs, or sends.

use async_trait::async_trait;

use crate::error::SolcivResult;
use crate::types::WalletBalance;

/// Read-only view of an external ledger.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Human-readable backend name (for logs and `doctor`).
    fn name(&self) -> &str;

    /// Native balance of `address`, in lamports.
    async fn balance_lamports(&self, address: &str) -> SolcivResult<u64>;

    /// Number of token accounts owned by `address` under `program_id`.
    async fn token_account_count(&self, address: &str, program_id: &str) -> SolcivResult<u64>;

    /// Balance + token-account count in one go. Any failure aborts the
    /// whole lookup; there are no partial results.
    async fn wallet_balance(&self, address: &str, program_id: &str) -> SolcivResult<WalletBalance> {
        let lamports = self.balance_lamports(address).await?;
        let token_accounts = self.token_account_count(address, program_id).await?;
        Ok(WalletBalance::from_lamports(lamports, token_accounts))
    }
}
