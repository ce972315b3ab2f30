use crate::config::{EstimatorConfig, CONFIG_FILE_NAME};
use crate::errors::EstimatorError;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

const CONFIG_HEADER: &str = "# AutoOps ROI estimator configuration
#
# Every value below is the built-in default. Delete what you do not
# want to change; missing keys fall back to these values.

";

/// The starter file: a header followed by the fully resolved defaults.
pub fn default_config_contents() -> Result<String> {
    let body = toml::to_string_pretty(&EstimatorConfig::default().resolved())
        .map_err(EstimatorError::from)?;
    Ok(format!("{}{}", CONFIG_HEADER, body))
}

/// Write a starter configuration into `dir`, returning its path.
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        return Err(EstimatorError::ConfigExists(config_path).into());
    }

    io::write_file(&config_path, &default_config_contents()?)?;
    Ok(config_path)
}

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}
