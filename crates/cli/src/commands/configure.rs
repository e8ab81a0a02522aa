use anyhow::Result;
use solciv_types::config::AppConfig;
use solciv_utils::output::{render_json_or, OutputFormat};

/// `solciv configure show`: display current config (non-interactive).
pub fn run(fmt: OutputFormat) -> Result<()> {
    let config = solciv_core::workspace::load_config()?;

    if !render_json_or(fmt, &config)? {
        print!("{}", config.to_toml_string()?);
        println!();
        println!("Tip: Edit settings with `solciv configure rpc|verbose|credit`.");
    }

    Ok(())
}

/// Apply `edit`, validate, then persist. Nothing is written if the result
/// is invalid.
fn update(edit: impl FnOnce(&mut AppConfig)) -> Result<AppConfig> {
    let mut config = solciv_core::workspace::load_config()?;
    edit(&mut config);
    config.validate()?;
    solciv_core::workspace::save_config(&config)?;
    Ok(config)
}

/// `solciv configure rpc <url>`
pub fn set_rpc(url: &str) -> Result<()> {
    let config = update(|c| c.ledger.rpc_url = url.trim().to_string())?;
    println!("✓ RPC endpoint set to {}", config.ledger.rpc_url);
    Ok(())
}

/// `solciv configure verbose <bool>`
pub fn set_verbose(enabled: bool) -> Result<()> {
    update(|c| c.system.verbose = enabled)?;
    println!("✓ verbose = {enabled}");
    Ok(())
}

/// `solciv configure credit <text> [--share]`
pub fn set_credit(text: &str, share: bool) -> Result<()> {
    update(|c| {
        if share {
            c.render.share_credit = text.to_string();
        } else {
            c.render.credit = text.to_string();
        }
    })?;
    let which = if share { "Share credit" } else { "Map credit" };
    println!("✓ {which} set to \"{text}\"");
    Ok(())
}
