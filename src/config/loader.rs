use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::core::EstimatorConfig;
use super::model::ModelParameters;
use crate::errors::EstimatorError;
use crate::estimator::EstimatorInputs;

pub const CONFIG_FILE_NAME: &str = ".autoops.toml";

/// How many directories (starting with the current one) are searched.
pub const MAX_TRAVERSAL_DEPTH: usize = 10;

/// A configuration together with the file it came from, if any.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: EstimatorConfig,
    pub source: Option<PathBuf>,
}

pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

pub fn parse_config(contents: &str) -> Result<EstimatorConfig, EstimatorError> {
    toml::from_str::<EstimatorConfig>(contents)
        .map_err(|e| EstimatorError::ConfigParse(e.to_string()))
}

/// Parse TOML and validate the model and defaults sections.
///
/// Invalid values are not fatal: they are reported and the
/// built-in set is used instead.
pub fn parse_and_validate_config(contents: &str) -> Result<EstimatorConfig, EstimatorError> {
    let mut config = parse_config(contents)?;

    if let Some(ref model) = config.model {
        if let Err(errors) = model.validate() {
            warn!(
                "Invalid [model] parameters: {}. Using defaults.",
                errors.join("; ")
            );
            config.model = Some(ModelParameters::default());
        }
    }

    if let Some(ref defaults) = config.defaults {
        if let Err(errors) = defaults.validate() {
            warn!(
                "Invalid [defaults] values: {}. Using page defaults.",
                errors.join("; ")
            );
            config.defaults = Some(EstimatorInputs::page_defaults());
        }
    }

    Ok(config)
}

/// Load a file the user named explicitly.
///
/// Unlike the directory search, any failure here is an error, including
/// invalid model parameters and non-finite default inputs.
pub fn load_config_file(path: &Path) -> Result<LoadedConfig, EstimatorError> {
    let contents =
        read_config_file(path).map_err(|e| EstimatorError::io_with_path(e, path))?;
    let config = parse_config(&contents)?;
    if let Some(ref model) = config.model {
        model.validate().map_err(EstimatorError::InvalidParameters)?;
    }
    if let Some(ref defaults) = config.defaults {
        defaults.validate().map_err(EstimatorError::InvalidParameters)?;
    }
    debug!("Loaded config from {}", path.display());

    Ok(LoadedConfig {
        config,
        source: Some(path.to_path_buf()),
    })
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<EstimatorConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            warn!("{} in {}. Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Only log actual errors, not "file not found"
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file.
pub fn load_config_from(start: PathBuf) -> LoadedConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| {
            try_load_config_from_path(&path).map(|config| LoadedConfig {
                config,
                source: Some(path),
            })
        })
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            LoadedConfig::default()
        })
}

pub fn load_config() -> LoadedConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            LoadedConfig::default()
        }
    }
}
