// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod estimator;
pub mod formatting;
pub mod host;
pub mod io;

// Re-export commonly used types
pub use crate::config::{load_config, EstimatorConfig, LoadedConfig, ModelParameters};

pub use crate::errors::EstimatorError;

pub use crate::estimator::{
    calculate, explain, speed_factor, Breakdown, DisplayOutputs, Estimator, EstimatorInputs,
    EstimatorOutputs, RawInputs, ResetState, Summary,
};

pub use crate::host::{EstimatorHost, InputField, MemoryHost, OutputField, TextKind, Trigger};

pub use crate::io::output::{create_writer, EstimateReport, OutputFormat, OutputWriter};
