use serde::{Deserialize, Serialize};

use super::display::DisplayConfig;
use super::model::ModelParameters;
use crate::estimator::EstimatorInputs;

/// Root configuration structure for the estimator
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EstimatorConfig {
    /// Tunable model parameters
    #[serde(default)]
    pub model: Option<ModelParameters>,

    /// Values the input fields hold on page load and after a reset
    #[serde(default)]
    pub defaults: Option<EstimatorInputs>,

    /// Currency and text conventions for output fields
    #[serde(default)]
    pub display: Option<DisplayConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl EstimatorConfig {
    /// Model parameters, falling back to the built-in set.
    ///
    /// # Examples
    ///
    /// ```
    /// use autoops_roi::config::EstimatorConfig;
    /// let config = EstimatorConfig::default();
    /// assert_eq!(config.model().reference_monthly_cost, 6500.0);
    /// ```
    pub fn model(&self) -> ModelParameters {
        self.model.clone().unwrap_or_default()
    }

    pub fn default_inputs(&self) -> EstimatorInputs {
        self.defaults.unwrap_or_else(EstimatorInputs::page_defaults)
    }

    pub fn display(&self) -> DisplayConfig {
        self.display.clone().unwrap_or_default()
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|output| output.default_format.as_deref())
    }

    /// Every section filled in, as written by `init` and `show-config`.
    pub fn resolved(&self) -> Self {
        Self {
            model: Some(self.model()),
            defaults: Some(self.default_inputs()),
            display: Some(self.display()),
            output: Some(self.output.clone().unwrap_or_default()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// One of terminal, json, markdown, html
    pub default_format: Option<String>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}
