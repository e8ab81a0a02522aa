//! Universal constants for SolCiv.

/// Lamports per SOL (10^9).
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// SPL Token program: token accounts are counted under this owner program.
pub const TOKEN_PROGRAM_ID: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

/// Default public mainnet RPC endpoint.
pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// Default commitment level for read queries.
pub const DEFAULT_COMMITMENT: &str = "confirmed";

/// Commitment levels accepted by the JSON-RPC API.
pub const COMMITMENTS: &[&str] = &["processed", "confirmed", "finalized"];

/// Default HTTP bind address for `solciv-server`.
pub const DEFAULT_BIND: &str = "0.0.0.0:3001";

/// Layout seeds live in `[0, SEED_SPACE)`.
pub const SEED_SPACE: u32 = 10_000_000;

/// Display name used when no address is loaded.
pub const GUEST_NAME: &str = "GUEST";

/// Footer line of the empire map.
pub const DEFAULT_MAP_CREDIT: &str = "Built by @Obbicial • Ireland • Jan 2026";

/// Closing line of the share text.
pub const DEFAULT_SHARE_CREDIT: &str = "Built by @Obbicial";

/// Filename of the downloadable share text.
pub const SHARE_FILENAME: &str = "solciv_share.txt";
