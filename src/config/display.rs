use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY_SYMBOL: &str = "R";
pub const DEFAULT_GROUP_SEPARATOR: &str = ",";
pub const DEFAULT_HOURS_SUFFIX: &str = " hrs";
pub const DEFAULT_MULTIPLE_SUFFIX: &str = "×";
pub const DEFAULT_PRODUCT_NAME: &str = "AutoOps";
pub const DEFAULT_PROMPT: &str = "Enter your numbers and click \"Calculate opportunity\".";

/// How the estimator's figures are written into output fields.
///
/// Covers a single grouping convention only: a symbol prefix and one
/// separator between groups of three digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    #[serde(default = "default_group_separator")]
    pub group_separator: String,

    /// Appended to the saved-hours figure
    #[serde(default = "default_hours_suffix")]
    pub hours_suffix: String,

    /// Appended to the ROI multiple
    #[serde(default = "default_multiple_suffix")]
    pub multiple_suffix: String,

    /// Product named in the summary sentence
    #[serde(default = "default_product_name")]
    pub product_name: String,

    /// Summary text shown before the first calculation and after a reset
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            group_separator: default_group_separator(),
            hours_suffix: default_hours_suffix(),
            multiple_suffix: default_multiple_suffix(),
            product_name: default_product_name(),
            prompt: default_prompt(),
        }
    }
}

pub fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}
pub fn default_group_separator() -> String {
    DEFAULT_GROUP_SEPARATOR.to_string()
}
pub fn default_hours_suffix() -> String {
    DEFAULT_HOURS_SUFFIX.to_string()
}
pub fn default_multiple_suffix() -> String {
    DEFAULT_MULTIPLE_SUFFIX.to_string()
}
pub fn default_product_name() -> String {
    DEFAULT_PRODUCT_NAME.to_string()
}
pub fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}
