use serde::Serialize;

use super::{EstimatorOutputs, SummaryStyle};
use crate::config::DisplayConfig;
use crate::formatting::{format_currency, format_hours, format_multiple, format_one_decimal};

/// The text written into each output field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayOutputs {
    pub recovered_money: String,
    pub recovered_deals: String,
    pub time_saved_hours: String,
    pub risk_adjusted_value: String,
    pub roi_multiple: String,
    /// HTML after a calculation, the plain prompt otherwise
    pub summary: String,
}

impl DisplayOutputs {
    pub fn render(outputs: &EstimatorOutputs, display: &DisplayConfig) -> Self {
        Self {
            recovered_money: format_currency(outputs.recovered_money, display),
            recovered_deals: format_one_decimal(outputs.recovered_deals),
            time_saved_hours: format_hours(outputs.time_saved_hours, display),
            risk_adjusted_value: format_currency(outputs.risk_adjusted_value, display),
            roi_multiple: format_multiple(outputs.roi_multiple, display),
            summary: outputs.summary.render(SummaryStyle::Html, display),
        }
    }

    pub fn zero_state(display: &DisplayConfig) -> Self {
        Self::render(&EstimatorOutputs::zero_state(), display)
    }
}
