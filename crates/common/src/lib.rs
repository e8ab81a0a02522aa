//! Shared building blocks for SolCiv: constants, errors, the ledger
//! collaborator trait, and the wallet types every crate speaks.

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;
