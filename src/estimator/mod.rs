//! The ROI estimator.
//!
//! A pure pipeline from six business metrics to five figures and a summary
//! sentence:
//!
//! 1. pick a recovery rate from the lead response time
//! 2. scale by units sold and by the after-hours boost
//! 3. clamp recovered deals into `[floor, max(cap_minimum, cars * cap_per_unit)]`
//! 4. derive recovered money, risk-adjusted value and the ROI multiple
//! 5. estimate hours saved from lead volume and headcount
//!
//! Nothing here fails or keeps state between calls. Field binding lives in
//! [`crate::host`].

pub mod display;
pub mod inputs;
pub mod summary;

pub use display::DisplayOutputs;
pub use inputs::{parse_numeric, RawInputs};
pub use summary::{Summary, SummaryFigures, SummaryStyle};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{DisplayConfig, EstimatorConfig, ModelParameters, SpeedTier};

/// Business metrics entered on the page, already coerced to numbers.
///
/// Fields missing from a `[defaults]` section take the page defaults;
/// [`EstimatorInputs::zeros`] is what a page of blank fields reads as.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default = "EstimatorInputs::page_defaults")]
pub struct EstimatorInputs {
    /// Monthly lead count
    pub leads: f64,
    /// Monthly units sold
    pub cars: f64,
    /// Average gross profit per unit
    pub gross: f64,
    pub salespeople: f64,
    /// Fraction of leads arriving after business hours, nominally 0..=1
    pub after_hours_share: f64,
    /// Average lead response time in minutes
    pub response_minutes: f64,
}

impl EstimatorInputs {
    pub const PAGE_DEFAULTS: Self = Self {
        leads: 1500.0,
        cars: 30.0,
        gross: 35000.0,
        salespeople: 5.0,
        after_hours_share: 0.30,
        response_minutes: 180.0,
    };

    pub const ZEROS: Self = Self {
        leads: 0.0,
        cars: 0.0,
        gross: 0.0,
        salespeople: 0.0,
        after_hours_share: 0.0,
        response_minutes: 0.0,
    };

    /// The values the page's fields start with.
    pub fn page_defaults() -> Self {
        Self::PAGE_DEFAULTS
    }

    /// Every field blank or unparsable.
    pub fn zeros() -> Self {
        Self::ZEROS
    }

    /// Every value must be finite; a field cannot show NaN or infinity.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let fields = [
            ("leads", self.leads),
            ("cars", self.cars),
            ("gross", self.gross),
            ("salespeople", self.salespeople),
            ("after_hours_share", self.after_hours_share),
            ("response_minutes", self.response_minutes),
        ];
        let errors: Vec<String> = fields
            .iter()
            .filter(|(_, value)| !value.is_finite())
            .map(|(name, value)| format!("defaults.{} must be a finite number (got {})", name, value))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EstimatorOutputs {
    /// Extra deals per month
    pub recovered_deals: f64,
    /// Extra gross profit per month
    pub recovered_money: f64,
    pub time_saved_hours: f64,
    pub risk_adjusted_value: f64,
    /// Recovered money over the reference monthly cost
    pub roi_multiple: f64,
    pub summary: Summary,
}

impl EstimatorOutputs {
    /// What the output fields show before any calculation.
    pub fn zero_state() -> Self {
        Self {
            recovered_deals: 0.0,
            recovered_money: 0.0,
            time_saved_hours: 0.0,
            risk_adjusted_value: 0.0,
            roi_multiple: 0.0,
            summary: Summary::Prompt,
        }
    }
}

/// Intermediate values of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Breakdown {
    pub speed_factor: f64,
    pub after_boost: f64,
    /// Recovered deals before clamping
    pub unclamped_deals: f64,
    pub deal_floor: f64,
    pub deal_cap: f64,
    pub time_per_salesperson_hours: f64,
}

impl Breakdown {
    pub fn was_clamped(&self) -> bool {
        self.unclamped_deals < self.deal_floor || self.unclamped_deals > self.deal_cap
    }
}

/// Result of a reset: the field defaults and the zero-state outputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResetState {
    pub inputs: EstimatorInputs,
    pub outputs: EstimatorOutputs,
}

/// `max(min, min(max, value))`.
///
/// Unlike `f64::clamp` this never panics; when `min > max` the lower
/// bound wins.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Recovery rate for a response time.
///
/// The first tier whose bound is at or above `response_minutes` wins, so a
/// value sitting exactly on a boundary gets the faster (lower) tier.
pub fn speed_factor(response_minutes: f64, tiers: &[SpeedTier], fallback_rate: f64) -> f64 {
    tiers
        .iter()
        .find(|tier| response_minutes <= tier.max_minutes)
        .map_or(fallback_rate, |tier| tier.rate)
}

pub fn explain(inputs: &EstimatorInputs, model: &ModelParameters) -> Breakdown {
    let speed_factor = speed_factor(
        inputs.response_minutes,
        &model.speed_tiers,
        model.fallback_rate,
    );
    let after_boost = 1.0 + inputs.after_hours_share * model.after_hours_boost;
    let unclamped_deals = inputs.cars * speed_factor * after_boost;
    let deal_cap = model
        .deal_cap_minimum
        .max(inputs.cars * model.deal_cap_per_unit);

    let time_per_salesperson_hours = clamp(
        (inputs.leads / model.leads_per_block) * model.hours_per_block,
        model.min_hours_per_salesperson,
        model.max_hours_per_salesperson,
    );

    Breakdown {
        speed_factor,
        after_boost,
        unclamped_deals,
        deal_floor: model.deal_floor,
        deal_cap,
        time_per_salesperson_hours,
    }
}

/// Evaluate the model for one set of inputs.
pub fn calculate(inputs: &EstimatorInputs, model: &ModelParameters) -> EstimatorOutputs {
    let breakdown = explain(inputs, model);
    outputs_from_breakdown(inputs, &breakdown, model)
}

fn outputs_from_breakdown(
    inputs: &EstimatorInputs,
    breakdown: &Breakdown,
    model: &ModelParameters,
) -> EstimatorOutputs {
    let recovered_deals = clamp(
        breakdown.unclamped_deals,
        breakdown.deal_floor,
        breakdown.deal_cap,
    );
    let recovered_money = recovered_deals * inputs.gross;
    let risk_adjusted_value = recovered_money * model.risk_multiplier;
    let time_saved_hours = inputs.salespeople * breakdown.time_per_salesperson_hours;
    let roi_multiple = recovered_money / model.reference_monthly_cost;

    debug!(
        speed_factor = breakdown.speed_factor,
        after_boost = breakdown.after_boost,
        unclamped_deals = breakdown.unclamped_deals,
        recovered_deals,
        clamped = breakdown.was_clamped(),
        "Evaluated ROI model"
    );

    EstimatorOutputs {
        recovered_deals,
        recovered_money,
        time_saved_hours,
        risk_adjusted_value,
        roi_multiple,
        summary: Summary::Estimate(SummaryFigures {
            recovered_deals,
            recovered_money,
            time_saved_hours,
            roi_multiple,
            reference_monthly_cost: model.reference_monthly_cost,
        }),
    }
}

/// The estimator with its parameters bound.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimator {
    model: ModelParameters,
    defaults: EstimatorInputs,
    display: DisplayConfig,
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(
            ModelParameters::default(),
            EstimatorInputs::page_defaults(),
            DisplayConfig::default(),
        )
    }
}

impl Estimator {
    pub fn new(model: ModelParameters, defaults: EstimatorInputs, display: DisplayConfig) -> Self {
        Self {
            model,
            defaults,
            display,
        }
    }

    pub fn from_config(config: &EstimatorConfig) -> Self {
        Self::new(config.model(), config.default_inputs(), config.display())
    }

    pub fn model(&self) -> &ModelParameters {
        &self.model
    }

    pub fn defaults(&self) -> &EstimatorInputs {
        &self.defaults
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    pub fn calculate(&self, inputs: &EstimatorInputs) -> EstimatorOutputs {
        calculate(inputs, &self.model)
    }

    pub fn explain(&self, inputs: &EstimatorInputs) -> Breakdown {
        explain(inputs, &self.model)
    }

    /// Default inputs and zero-state outputs. Does not evaluate the model.
    pub fn reset(&self) -> ResetState {
        ResetState {
            inputs: self.defaults,
            outputs: EstimatorOutputs::zero_state(),
        }
    }

    pub fn render(&self, outputs: &EstimatorOutputs) -> DisplayOutputs {
        DisplayOutputs::render(outputs, &self.display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn inputs(cars: f64, gross: f64, response_minutes: f64) -> EstimatorInputs {
        EstimatorInputs {
            leads: 0.0,
            cars,
            gross,
            salespeople: 0.0,
            after_hours_share: 0.0,
            response_minutes,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_speed_factor_tiers() {
        let model = ModelParameters::default();
        let factor = |m: f64| speed_factor(m, &model.speed_tiers, model.fallback_rate);

        assert_eq!(factor(0.0), 0.01);
        assert_eq!(factor(5.0), 0.01);
        assert_eq!(factor(5.5), 0.02);
        assert_eq!(factor(15.0), 0.02);
        assert_eq!(factor(30.0), 0.035);
        assert_eq!(factor(60.0), 0.035);
        assert_eq!(factor(180.0), 0.06);
        assert_eq!(factor(181.0), 0.08);
        assert_eq!(factor(-10.0), 0.01);
    }

    #[test]
    fn test_speed_factor_falls_back_without_tiers() {
        assert_eq!(speed_factor(1.0, &[], 0.5), 0.5);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 6.0, 14.0), 6.0);
        assert_eq!(clamp(18.0, 6.0, 14.0), 14.0);
        assert_eq!(clamp(10.0, 6.0, 14.0), 10.0);
        assert_eq!(clamp(1.0, 3.0, 2.0), 3.0);
    }

    #[test]
    fn test_page_defaults_scenario() {
        let model = ModelParameters::default();
        let breakdown = explain(&EstimatorInputs::page_defaults(), &model);

        assert_eq!(breakdown.speed_factor, 0.06);
        assert!(approx(breakdown.after_boost, 1.105));
        assert!(approx(breakdown.unclamped_deals, 1.989));
        assert!(approx(breakdown.deal_cap, 3.6));
        assert_eq!(breakdown.time_per_salesperson_hours, 14.0);
        assert!(!breakdown.was_clamped());

        let outputs = calculate(&EstimatorInputs::page_defaults(), &model);
        assert!(approx(outputs.recovered_deals, 1.989));
        assert!((outputs.recovered_money - 69615.0).abs() < 1e-6);
        assert!((outputs.risk_adjusted_value - 80057.25).abs() < 1e-6);
        assert!(approx(outputs.roi_multiple, 69615.0 / 6500.0));
        assert_eq!(outputs.time_saved_hours, 70.0);
    }

    #[test]
    fn test_all_zero_inputs_hit_the_floor() {
        let outputs = calculate(&EstimatorInputs::zeros(), &ModelParameters::default());

        assert_eq!(outputs.recovered_deals, 0.3);
        assert_eq!(outputs.recovered_money, 0.0);
        assert_eq!(outputs.risk_adjusted_value, 0.0);
        assert_eq!(outputs.roi_multiple, 0.0);
        assert_eq!(outputs.time_saved_hours, 0.0);
    }

    #[test]
    fn test_slow_tier_stays_under_cap() {
        // 10 cars at the slowest tier: 10 * 0.08 * 1.35 = 1.08, under max(1.2, 1.2)
        let mut slow = inputs(10.0, 1000.0, 500.0);
        slow.after_hours_share = 1.0;
        let outputs = calculate(&slow, &ModelParameters::default());
        assert!(approx(outputs.recovered_deals, 1.08));

        // 20 cars: 20 * 0.08 * 1.35 = 2.16, cap is max(1.2, 2.4)
        slow.cars = 20.0;
        let outputs = calculate(&slow, &ModelParameters::default());
        assert!(approx(outputs.recovered_deals, 2.16));
    }

    #[test]
    fn test_cap_scales_with_volume() {
        // An after-hours share far outside 0..=1 is not rejected, only capped
        let mut heavy = inputs(100.0, 1.0, 500.0);
        heavy.after_hours_share = 10.0;
        let breakdown = explain(&heavy, &ModelParameters::default());
        let outputs = calculate(&heavy, &ModelParameters::default());

        assert!(breakdown.was_clamped());
        assert!(approx(outputs.recovered_deals, 12.0));
    }

    #[test]
    fn test_time_per_salesperson_bounds() {
        let model = ModelParameters::default();
        let mut few_leads = EstimatorInputs::zeros();
        few_leads.leads = 100.0;
        few_leads.salespeople = 2.0;
        assert_eq!(calculate(&few_leads, &model).time_saved_hours, 12.0);

        let mut mid = few_leads;
        mid.leads = 750.0; // 750 / 250 * 3 = 9
        assert_eq!(calculate(&mid, &model).time_saved_hours, 18.0);
    }

    #[test]
    fn test_summary_embeds_reference_cost() {
        let outputs = calculate(&EstimatorInputs::page_defaults(), &ModelParameters::default());
        match outputs.summary {
            Summary::Estimate(figures) => {
                assert_eq!(figures.reference_monthly_cost, 6500.0);
                assert_eq!(figures.recovered_deals, outputs.recovered_deals);
            }
            Summary::Prompt => panic!("calculate must produce an estimate summary"),
        }
    }

    #[test]
    fn test_reset_returns_defaults_without_evaluating() {
        let estimator = Estimator::default();
        let state = estimator.reset();

        assert_eq!(state.inputs, EstimatorInputs::page_defaults());
        assert_eq!(state.outputs, EstimatorOutputs::zero_state());
    }

    #[test]
    fn test_custom_parameters_flow_through() {
        let model = ModelParameters {
            reference_monthly_cost: 10000.0,
            risk_multiplier: 1.0,
            ..ModelParameters::default()
        };
        let outputs = calculate(&EstimatorInputs::page_defaults(), &model);

        assert!((outputs.roi_multiple - 6.9615).abs() < 1e-9);
        assert_eq!(outputs.risk_adjusted_value, outputs.recovered_money);
    }

    #[test]
    fn test_defaults_section_fills_missing_fields() {
        let parsed: EstimatorInputs = toml::from_str("cars = 12.0").unwrap();
        assert_eq!(parsed.cars, 12.0);
        assert_eq!(parsed.leads, 1500.0);
        assert_eq!(parsed.response_minutes, 180.0);
        assert_ne!(parsed, EstimatorInputs::zeros());
    }

    #[test]
    fn test_zeros_is_what_blank_fields_read_as() {
        assert_eq!(RawInputs::default().parse(), EstimatorInputs::zeros());
    }

    #[test]
    fn test_validate_rejects_non_finite_inputs() {
        assert!(EstimatorInputs::page_defaults().validate().is_ok());

        let broken = EstimatorInputs {
            gross: f64::NAN,
            after_hours_share: f64::INFINITY,
            ..EstimatorInputs::page_defaults()
        };
        let errors = broken.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("defaults.gross"));
    }
}
