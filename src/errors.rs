//! Error types for the estimator's edges.
//!
//! The estimator itself never fails: bad input degrades to zero and a
//! currency value that cannot be grouped is printed without grouping.
//! Errors only arise where the crate touches the outside world, i.e.
//! configuration files, report files and the `init` command.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EstimatorError {
    /// File system related errors
    #[error("I/O error: {source}{}", path_suffix(.path))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),

    #[error("Invalid model parameters: {}", .0.join("; "))]
    InvalidParameters(Vec<String>),

    #[error("Configuration file already exists: {}. Use --force to overwrite.", .0.display())]
    ConfigExists(PathBuf),

    /// A figure that could not be rendered with digit grouping
    #[error("Cannot format {0} as a grouped amount")]
    Format(f64),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" (path: {})", p.display()))
        .unwrap_or_default()
}

impl EstimatorError {
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::Io {
            path: Some(path.as_ref().to_path_buf()),
            source,
        }
    }

    /// Get the error category name.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io { .. } => "I/O",
            Self::ConfigParse(_) | Self::InvalidParameters(_) | Self::ConfigExists(_) => "Config",
            Self::Format(_) => "Format",
            Self::Serialization(_) => "Serialization",
        }
    }

    /// Whether the user can fix this by editing a file or a flag.
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Self::ConfigParse(_) | Self::InvalidParameters(_) | Self::ConfigExists(_)
        )
    }
}

impl From<std::io::Error> for EstimatorError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { path: None, source }
    }
}

impl From<serde_json::Error> for EstimatorError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

impl From<toml::ser::Error> for EstimatorError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
