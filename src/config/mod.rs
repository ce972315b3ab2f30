//! Configuration for the estimator.
//!
//! Loaded from `.autoops.toml` in the current directory or one of its
//! ancestors. Every section is optional and falls back to built-in values.

mod core;
mod display;
mod loader;
mod model;

pub use self::core::{EstimatorConfig, OutputConfig};
pub use display::{
    default_currency_symbol, default_group_separator, default_hours_suffix,
    default_multiple_suffix, default_product_name, default_prompt, DisplayConfig,
    DEFAULT_CURRENCY_SYMBOL, DEFAULT_GROUP_SEPARATOR, DEFAULT_HOURS_SUFFIX,
    DEFAULT_MULTIPLE_SUFFIX, DEFAULT_PRODUCT_NAME, DEFAULT_PROMPT,
};
pub use loader::{
    directory_ancestors, load_config, load_config_file, load_config_from, parse_and_validate_config,
    parse_config, LoadedConfig, CONFIG_FILE_NAME, MAX_TRAVERSAL_DEPTH,
};
pub use model::{
    default_after_hours_boost, default_deal_cap_minimum, default_deal_cap_per_unit,
    default_deal_floor, default_fallback_rate, default_hours_per_block, default_leads_per_block,
    default_max_hours_per_salesperson, default_min_hours_per_salesperson,
    default_reference_monthly_cost, default_risk_multiplier, default_speed_tiers,
    ModelParameters, SpeedTier, DEFAULT_AFTER_HOURS_BOOST, DEFAULT_DEAL_CAP_MINIMUM,
    DEFAULT_DEAL_CAP_PER_UNIT, DEFAULT_DEAL_FLOOR, DEFAULT_FALLBACK_RATE, DEFAULT_HOURS_PER_BLOCK,
    DEFAULT_LEADS_PER_BLOCK, DEFAULT_MAX_HOURS_PER_SALESPERSON, DEFAULT_MIN_HOURS_PER_SALESPERSON,
    DEFAULT_REFERENCE_MONTHLY_COST, DEFAULT_RISK_MULTIPLIER, DEFAULT_SPEED_TIERS,
};
