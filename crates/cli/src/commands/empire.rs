//! `solciv map` / `solciv share` / `solciv guest`: render empires.

use std::path::{Path, PathBuf};

use anyhow::Result;

use solciv_core::empire::resolve_seed;
use solciv_core::{guest, rng, Empire, RenderOptions};
use solciv_types::output::EmpireOutput;
use solciv_utils::output::{render, render_json_or, OutputFormat};

use super::helpers::{output_dir, resolve_wallet, write_artifacts};

fn empire_output(empire: &Empire, opts: &RenderOptions, svg: &Path, share: &Path) -> EmpireOutput {
    EmpireOutput {
        name: empire.name.clone(),
        seed: empire.seed,
        shapes: empire.shapes.len(),
        profile: empire.profile,
        share_text: empire.share(opts),
        svg_path: Some(svg.display().to_string()),
        share_path: Some(share.display().to_string()),
    }
}

/// `solciv map [<address>] [--balance B] [--token-accounts N] [--seed S] [--out DIR]`
pub async fn map(
    address: Option<&str>,
    balance: Option<f64>,
    token_accounts: Option<u64>,
    seed: Option<u32>,
    out: Option<PathBuf>,
    fmt: OutputFormat,
) -> Result<()> {
    let config = solciv_core::workspace::load_config()?;
    let address = address.map(str::trim);
    let wallet = resolve_wallet(address, balance, token_accounts, &config).await?;

    let seed = resolve_seed(address, seed, &mut rand::thread_rng());
    let empire = Empire::build(solciv_core::derive_profile(wallet), address, seed);
    let opts = RenderOptions::from(&config.render);

    let (svg, share) = write_artifacts(&output_dir(out)?, &empire, &opts)?;
    render(fmt, &empire_output(&empire, &opts, &svg, &share))
}

/// `solciv share [<address>] [--balance B] [--token-accounts N]`
pub async fn share(
    address: Option<&str>,
    balance: Option<f64>,
    token_accounts: Option<u64>,
    fmt: OutputFormat,
) -> Result<()> {
    let config = solciv_core::workspace::load_config()?;
    let wallet = resolve_wallet(address.map(str::trim), balance, token_accounts, &config).await?;
    let profile = solciv_core::derive_profile(wallet);
    let text = solciv_core::render::share_text(&profile, &config.render.share_credit);

    if !render_json_or(fmt, &serde_json::json!({ "shareText": text }))? {
        println!("{text}");
    }
    Ok(())
}

/// `solciv guest [--out DIR]`: a random sample wallet with a random seed.
pub fn guest(out: Option<PathBuf>, fmt: OutputFormat) -> Result<()> {
    let config = solciv_core::workspace::load_config()?;
    let mut r = rand::thread_rng();
    let wallet = guest::guest_sample(&mut r);
    let seed = rng::random_seed(&mut r);
    let empire = Empire::build(solciv_core::derive_profile(wallet), None, seed);
    let opts = RenderOptions::from(&config.render);

    let (svg, share) = write_artifacts(&output_dir(out)?, &empire, &opts)?;
    if fmt == OutputFormat::Table {
        println!("Guest entered. Empire forged.");
    }
    render(fmt, &empire_output(&empire, &opts, &svg, &share))
}
