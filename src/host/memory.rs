use std::collections::BTreeMap;

use super::{EstimatorHost, InputField, OutputField, TextKind};
use crate::config::DisplayConfig;
use crate::estimator::{DisplayOutputs, EstimatorInputs, RawInputs};

/// A page held in memory: input text, output text and panel visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHost {
    inputs: BTreeMap<InputField, String>,
    outputs: BTreeMap<OutputField, (String, TextKind)>,
    results_visible: bool,
}

impl MemoryHost {
    /// A page as first loaded: fields hold `defaults`, outputs are in
    /// zero state and the results panel is hidden.
    pub fn new(defaults: &EstimatorInputs, display: &DisplayConfig) -> Self {
        let mut host = Self::default();
        let raw = RawInputs::from_inputs(defaults);
        let values = [
            (InputField::Leads, raw.leads),
            (InputField::Cars, raw.cars),
            (InputField::Gross, raw.gross),
            (InputField::Salespeople, raw.salespeople),
            (InputField::AfterHours, raw.after_hours_share),
            (InputField::ResponseTime, raw.response_minutes),
        ];
        for (field, value) in values {
            if let Some(value) = value {
                host.inputs.insert(field, value);
            }
        }

        let zero = DisplayOutputs::zero_state(display);
        let texts = [
            (OutputField::Money, zero.recovered_money),
            (OutputField::Deals, zero.recovered_deals),
            (OutputField::Time, zero.time_saved_hours),
            (OutputField::Risk, zero.risk_adjusted_value),
            (OutputField::Roi, zero.roi_multiple),
            (OutputField::Summary, zero.summary),
        ];
        for (field, text) in texts {
            host.outputs.insert(field, (text, TextKind::Plain));
        }

        host
    }

    /// Type into a field, as a user would.
    pub fn set_input(&mut self, field: InputField, text: impl Into<String>) {
        self.inputs.insert(field, text.into());
    }

    /// Remove a field from the page entirely.
    #[cfg(test)]
    pub(crate) fn remove_input(&mut self, field: InputField) {
        self.inputs.remove(&field);
    }

    pub fn input(&self, field: InputField) -> Option<&str> {
        self.inputs.get(&field).map(String::as_str)
    }

    pub fn output(&self, field: OutputField) -> Option<&str> {
        self.outputs.get(&field).map(|(text, _)| text.as_str())
    }

    pub fn output_kind(&self, field: OutputField) -> Option<TextKind> {
        self.outputs.get(&field).map(|(_, kind)| *kind)
    }

    pub fn is_results_visible(&self) -> bool {
        self.results_visible
    }

    /// Current output text of every field, in page order.
    pub fn display_outputs(&self) -> DisplayOutputs {
        let text = |field| self.output(field).unwrap_or_default().to_string();
        DisplayOutputs {
            recovered_money: text(OutputField::Money),
            recovered_deals: text(OutputField::Deals),
            time_saved_hours: text(OutputField::Time),
            risk_adjusted_value: text(OutputField::Risk),
            roi_multiple: text(OutputField::Roi),
            summary: text(OutputField::Summary),
        }
    }
}

impl EstimatorHost for MemoryHost {
    fn read_input(&self, field: InputField) -> Option<String> {
        self.inputs.get(&field).cloned()
    }

    fn write_input(&mut self, field: InputField, value: &str) {
        self.inputs.insert(field, value.to_string());
    }

    fn write_output(&mut self, field: OutputField, text: &str, kind: TextKind) {
        self.outputs.insert(field, (text.to_string(), kind));
    }

    fn show_results(&mut self) {
        self.results_visible = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::{Estimator, EstimatorOutputs};
    use crate::host::Trigger;
    use pretty_assertions::assert_eq;

    fn page() -> (Estimator, MemoryHost) {
        let estimator = Estimator::default();
        let host = MemoryHost::new(estimator.defaults(), estimator.display());
        (estimator, host)
    }

    #[test]
    fn test_fresh_page_state() {
        let (_, host) = page();
        assert_eq!(host.input(InputField::Leads), Some("1500"));
        assert_eq!(host.input(InputField::AfterHours), Some("0.30"));
        assert_eq!(host.output(OutputField::Money), Some("R0"));
        assert!(!host.is_results_visible());
    }

    #[test]
    fn test_calculate_fills_outputs_and_reveals_panel() {
        let (estimator, mut host) = page();

        estimator.dispatch(Trigger::Calculate, &mut host);

        assert!(host.is_results_visible());
        assert_eq!(host.output(OutputField::Money), Some("R69,615"));
        assert_eq!(host.output(OutputField::Deals), Some("2.0"));
        assert_eq!(host.output(OutputField::Time), Some("70 hrs"));
        assert_eq!(host.output(OutputField::Risk), Some("R80,057"));
        assert_eq!(host.output(OutputField::Roi), Some("10.7×"));
        assert_eq!(host.output_kind(OutputField::Summary), Some(TextKind::Rich));
        assert_eq!(host.output_kind(OutputField::Money), Some(TextKind::Plain));
    }

    #[test]
    fn test_blank_and_missing_fields_read_as_zero() {
        let (estimator, mut host) = page();
        for field in InputField::ALL {
            host.set_input(field, "");
        }
        host.remove_input(InputField::Gross);

        let outputs = estimator.on_calculate(&mut host);

        assert_eq!(outputs.recovered_deals, 0.3);
        assert_eq!(host.output(OutputField::Money), Some("R0"));
        assert_eq!(host.output(OutputField::Deals), Some("0.3"));
        assert_eq!(host.output(OutputField::Roi), Some("0.0×"));
    }

    #[test]
    fn test_reset_restores_fields_but_keeps_panel() {
        let (estimator, mut host) = page();
        host.set_input(InputField::Cars, "80");
        host.set_input(InputField::ResponseTime, "4");
        estimator.on_calculate(&mut host);

        let outputs = estimator.dispatch(Trigger::Reset, &mut host);

        assert_eq!(outputs, EstimatorOutputs::zero_state());
        assert_eq!(host.input(InputField::Cars), Some("30"));
        assert_eq!(host.input(InputField::ResponseTime), Some("180"));
        assert_eq!(host.display_outputs(), DisplayOutputs::zero_state(estimator.display()));
        assert_eq!(host.output_kind(OutputField::Summary), Some(TextKind::Plain));
        assert!(host.is_results_visible());
    }

    #[test]
    fn test_reset_recreates_removed_fields() {
        let (estimator, mut host) = page();
        host.remove_input(InputField::Salespeople);

        estimator.on_reset(&mut host);

        assert_eq!(host.input(InputField::Salespeople), Some("5"));
    }

    #[test]
    fn test_reset_then_calculate_uses_configured_defaults_exactly() {
        let defaults = EstimatorInputs {
            after_hours_share: 0.125,
            cars: 100.0,
            response_minutes: 500.0,
            ..EstimatorInputs::page_defaults()
        };
        let estimator = Estimator::new(
            crate::config::ModelParameters::default(),
            defaults,
            DisplayConfig::default(),
        );
        let mut host = MemoryHost::new(estimator.defaults(), estimator.display());
        host.set_input(InputField::AfterHours, "0.9");

        estimator.on_reset(&mut host);
        let outputs = estimator.on_calculate(&mut host);

        assert_eq!(host.input(InputField::AfterHours), Some("0.125"));
        assert_eq!(outputs, estimator.calculate(&defaults));
    }
}
