mod commands;
mod factory;
mod tui;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use solciv_common::error::SolcivError;
use solciv_utils::output::OutputFormat;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "solciv",
    about = "SolCiv: turn a Solana wallet into a pixel empire.\nDerives tier, estate, $SOLCIV and boost from a balance; renders an SVG map and share text.",
    version,
    propagate_version = true
)]
struct Cli {
    #[arg(long, short = 'o', global = true, default_value = "table")]
    output: CliOutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat { Table, Json, JsonPretty }

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> OutputFormat {
        match f {
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::JsonPretty => OutputFormat::JsonPretty,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  TOP-LEVEL
// ═══════════════════════════════════════════════════════════════════════

#[derive(Subcommand)]
enum Commands {
    // ── DERIVE ──────────────────────────────────────────────────

    /// Derive tier, estate, $SOLCIV and boost from a SOL balance (offline).
    Profile {
        /// Balance in SOL.
        #[arg(allow_negative_numbers = true)]
        balance: f64,
        #[arg(long, default_value_t = 0)]
        token_accounts: u64,
    },

    /// Look up a wallet on the ledger and derive its profile.
    Wallet {
        /// Base58 public key.
        address: String,
    },

    // ── RENDER ──────────────────────────────────────────────────

    /// Render the empire map and share text to files.
    Map {
        /// Base58 public key. Looked up unless --balance is given.
        address: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        balance: Option<f64>,
        #[arg(long)]
        token_accounts: Option<u64>,
        /// Layout seed (default: address hash, else random).
        #[arg(long)]
        seed: Option<u32>,
        /// Output directory (default: ~/.solciv/maps).
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print the share text.
    Share {
        address: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        balance: Option<f64>,
        #[arg(long)]
        token_accounts: Option<u64>,
    },

    /// Enter as a guest: random sample wallet, random seed.
    Guest {
        #[arg(long)]
        out: Option<PathBuf>,
    },

    // ── SYSTEM ──────────────────────────────────────────────────

    /// View or change configuration.
    Configure {
        #[command(subcommand)]
        action: ConfigureAction,
    },

    /// Check config and RPC health.
    Doctor,

    /// Launch interactive Terminal UI.
    Tui,
}

#[derive(Subcommand)]
enum ConfigureAction {
    /// Show all current configuration.
    Show,
    /// Set the Solana JSON-RPC endpoint.
    Rpc { url: String },
    /// Toggle verbose mode.
    Verbose { enabled: bool },
    /// Set the map footer (or, with --share, the share-text credit).
    Credit {
        text: String,
        #[arg(long)]
        share: bool,
    },
}

// ═══════════════════════════════════════════════════════════════════════
//  ENTRYPOINT
// ═══════════════════════════════════════════════════════════════════════

#[tokio::main]
async fn main() -> Result<()> {
    solciv_core::init_workspace()?;

    let verbose = solciv_core::workspace::load_config()
        .map(|c| c.system.verbose)
        .unwrap_or(false);
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let fmt: OutputFormat = cli.output.into();

    let result = match cli.command {
        Commands::Profile { balance, token_accounts } => {
            commands::profile::run(balance, token_accounts, fmt)
        }
        Commands::Wallet { address } => commands::profile::wallet(&address, fmt).await,

        Commands::Map { address, balance, token_accounts, seed, out } => {
            commands::empire::map(address.as_deref(), balance, token_accounts, seed, out, fmt).await
        }
        Commands::Share { address, balance, token_accounts } => {
            commands::empire::share(address.as_deref(), balance, token_accounts, fmt).await
        }
        Commands::Guest { out } => commands::empire::guest(out, fmt),

        Commands::Configure { action } => match action {
            ConfigureAction::Show => commands::configure::run(fmt),
            ConfigureAction::Rpc { url } => commands::configure::set_rpc(&url),
            ConfigureAction::Verbose { enabled } => commands::configure::set_verbose(enabled),
            ConfigureAction::Credit { text, share } => commands::configure::set_credit(&text, share),
        },

        Commands::Doctor => commands::doctor::run(fmt).await,
        Commands::Tui => tui::run().await,
    };

    // Structured errors get their category's exit code (and JSON body when asked).
    if let Err(e) = result {
        if let Some(err) = e.downcast_ref::<SolcivError>() {
            if fmt == OutputFormat::Table {
                eprintln!("Error: {err}");
            } else {
                println!("{}", err.to_json());
            }
            std::process::exit(err.exit_code());
        }
        return Err(e);
    }
    Ok(())
}
