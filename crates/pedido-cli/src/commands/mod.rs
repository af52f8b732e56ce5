//! CLI subcommands.

pub mod config;
pub mod convert;
pub mod inspect;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use pedido_core::PedidoConfig;

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pedido")
        .join("config.json")
}

/// Resolve the configuration file: `--config` if given, else the default path.
pub fn config_path(explicit: Option<&str>) -> PathBuf {
    explicit.map(PathBuf::from).unwrap_or_else(default_config_path)
}

/// Load configuration. An explicit path must exist; a missing default file
/// falls back to built-in defaults.
pub fn load_config(explicit: Option<&str>) -> anyhow::Result<PedidoConfig> {
    let path = config_path(explicit);

    if path.exists() {
        debug!("Loading config from {}", path.display());
        Ok(PedidoConfig::from_file(&path)?)
    } else if explicit.is_some() {
        anyhow::bail!("Config file not found: {}", path.display());
    } else {
        Ok(PedidoConfig::default())
    }
}

/// Read an input PDF, rejecting missing files and other extensions.
pub fn read_pdf(input: &Path) -> anyhow::Result<Vec<u8>> {
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    let extension = input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if extension != "pdf" {
        anyhow::bail!("Unsupported file format: {}", input.display());
    }

    Ok(fs::read(input)?)
}
