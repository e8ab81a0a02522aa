use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use solciv_types::config::AppConfig;
use tracing::info;

/// Dotfolder name under `$HOME`.
const DOTFOLDER: &str = ".solciv";

/// Required subdirectories inside the dotfolder.
const SUBDIRS: &[&str] = &["maps"];

const CONFIG_FILE: &str = "config.toml";

/// Resolve the root path: `$HOME/.solciv/`.
pub fn root_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(DOTFOLDER))
}

/// Default output directory for saved maps.
pub fn maps_dir() -> Result<PathBuf> {
    Ok(root_dir()?.join("maps"))
}

/// Ensure the dotfolder exists with a default config. Idempotent.
///
/// ```text
/// $HOME/.solciv/
/// ├── config.toml
/// └── maps/
/// ```
pub fn init_workspace() -> Result<()> {
    init_workspace_at(&root_dir()?)
}

pub fn init_workspace_at(root: &Path) -> Result<()> {
    for sub in SUBDIRS {
        let dir = root.join(sub);
        if !dir.exists() {
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
            info!("created directory: {}", dir.display());
        }
    }

    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        save_config_at(root, &AppConfig::default())?;
        info!("created default config: {}", config_path.display());
    }

    Ok(())
}

/// Load `~/.solciv/config.toml`.
pub fn load_config() -> Result<AppConfig> {
    load_config_at(&root_dir()?)
}

/// Load the config under `root`. An outdated file (missing or mistyped
/// fields) is rewritten with defaults, keeping `ledger.rpc_url`.
pub fn load_config_at(root: &Path) -> Result<AppConfig> {
    let config_path = root.join(CONFIG_FILE);
    let raw = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    match AppConfig::from_toml_str(&raw) {
        Ok(config) => Ok(config),
        Err(_) => {
            info!("config.toml outdated, migrating to new schema");
            let mut new_config = AppConfig::default();

            if let Ok(old) = raw.parse::<toml::Table>() {
                if let Some(rpc) = old
                    .get("ledger")
                    .and_then(|v| v.as_table())
                    .and_then(|t| t.get("rpc_url"))
                    .and_then(|v| v.as_str())
                {
                    new_config.ledger.rpc_url = rpc.to_string();
                }
            }

            save_config_at(root, &new_config)?;
            info!("config migrated successfully");
            Ok(new_config)
        }
    }
}

/// Write the config back to `~/.solciv/config.toml`.
pub fn save_config(config: &AppConfig) -> Result<()> {
    save_config_at(&root_dir()?, config)
}

pub fn save_config_at(root: &Path, config: &AppConfig) -> Result<()> {
    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory: {}", root.display()))?;
    let config_path = root.join(CONFIG_FILE);
    let toml_str = config
        .to_toml_string()
        .context("Failed to serialize config")?;
    fs::write(&config_path, &toml_str)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_dir_under_home() {
        let root = root_dir().unwrap();
        let home = dirs::home_dir().unwrap();
        assert_eq!(root, home.join(".solciv"));
        assert_eq!(maps_dir().unwrap(), root.join("maps"));
    }

    #[test]
    fn test_init_workspace_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        init_workspace_at(dir.path()).unwrap();
        init_workspace_at(dir.path()).unwrap();
        assert!(dir.path().join("config.toml").is_file());
        for sub in SUBDIRS {
            assert!(dir.path().join(sub).is_dir(), "{sub} directory should exist");
        }
    }

    #[test]
    fn test_init_does_not_overwrite_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.system.verbose = true;
        save_config_at(dir.path(), &config).unwrap();
        init_workspace_at(dir.path()).unwrap();
        assert!(load_config_at(dir.path()).unwrap().system.verbose);
    }

    #[test]
    fn test_load_and_save_config() {
        let dir = tempfile::tempdir().unwrap();
        init_workspace_at(dir.path()).unwrap();
        let mut config = load_config_at(dir.path()).unwrap();
        assert_eq!(config, AppConfig::default());

        config.ledger.rpc_url = "http://127.0.0.1:8899".into();
        config.render.credit = "hand drawn".into();
        save_config_at(dir.path(), &config).unwrap();
        assert_eq!(load_config_at(dir.path()).unwrap(), config);
    }

    #[test]
    fn test_outdated_config_migrates_keeping_rpc_url() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "[general]\nactive_profile = \"x\"\n\n[ledger]\nrpc_url = \"http://localhost:8899\"\ncommitment = 7\n",
        )
        .unwrap();

        let config = load_config_at(dir.path()).unwrap();
        assert_eq!(config.ledger.rpc_url, "http://localhost:8899");
        assert_eq!(config.ledger.commitment, "confirmed");

        // Migrated file is now current.
        let raw = fs::read_to_string(dir.path().join("config.toml")).unwrap();
        assert_eq!(AppConfig::from_toml_str(&raw).unwrap(), config);
    }

    #[test]
    fn test_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config_at(dir.path()).is_err());
    }
}
