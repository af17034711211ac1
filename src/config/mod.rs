mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::scoring::{builtin_domains, DomainConfig};

/// Get the config directory path (~/.config/distritos/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("distritos")
}

/// Get the default config file path (~/.config/distritos/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Ensure the config directory exists
pub fn ensure_config_dir() -> Result<()> {
    let config_dir = get_config_dir();
    if !config_dir.exists() {
        fs::create_dir_all(&config_dir).with_context(|| {
            format!(
                "Failed to create config directory at {}",
                config_dir.display()
            )
        })?;
    }
    Ok(())
}

/// Load configuration from a YAML file.
///
/// With an explicit `path` the file must exist. At the default path
/// (~/.config/distritos/config.yaml) a missing file simply means no
/// overrides: the built-in domain weight sets apply unchanged.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let (config_path, explicit) = match path {
        Some(p) => (p, true),
        None => (get_config_path(), false),
    };

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    Ok(config)
}

/// The domain set the process actually scores with: built-ins, with config
/// domains replacing same-named built-ins and new names appended.
pub fn effective_domains(config: &Config) -> Vec<DomainConfig> {
    let mut domains = builtin_domains();
    for custom in &config.domains {
        match domains.iter_mut().find(|d| d.name == custom.name) {
            Some(existing) => *existing = custom.clone(),
            None => domains.push(custom.clone()),
        }
    }
    domains
}
