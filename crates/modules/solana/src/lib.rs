//! Solana ledger module: read-only JSON-RPC lookups behind [`LedgerClient`].
//!
//! [`LedgerClient`]: solciv_common::traits::LedgerClient

pub mod client;

pub use client::SolanaRpcClient;
