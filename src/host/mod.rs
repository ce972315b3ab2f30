//! Binding between the estimator and the page that hosts it.
//!
//! The page owns the fields; the estimator only reads inputs and writes
//! outputs during a single `calculate` or `reset`. Hosts implement
//! [`EstimatorHost`]; [`MemoryHost`] is an in-memory page used by the CLI
//! and by tests.

mod memory;

pub use memory::MemoryHost;

use std::fmt;

use tracing::{debug, info};

use crate::estimator::{DisplayOutputs, Estimator, EstimatorOutputs, RawInputs, ResetState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InputField {
    Leads,
    Cars,
    Gross,
    Salespeople,
    AfterHours,
    ResponseTime,
}

impl InputField {
    pub const ALL: [InputField; 6] = [
        Self::Leads,
        Self::Cars,
        Self::Gross,
        Self::Salespeople,
        Self::AfterHours,
        Self::ResponseTime,
    ];

    /// Element id on the page
    pub fn id(self) -> &'static str {
        match self {
            Self::Leads => "leads",
            Self::Cars => "cars",
            Self::Gross => "gross",
            Self::Salespeople => "salespeople",
            Self::AfterHours => "after-hours",
            Self::ResponseTime => "response-time",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Leads => "Monthly leads",
            Self::Cars => "Cars sold per month",
            Self::Gross => "Average gross per car",
            Self::Salespeople => "Salespeople",
            Self::AfterHours => "After-hours lead share",
            Self::ResponseTime => "Average response time (min)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutputField {
    Money,
    Deals,
    Time,
    Risk,
    Roi,
    Summary,
}

impl OutputField {
    pub const ALL: [OutputField; 6] = [
        Self::Money,
        Self::Deals,
        Self::Time,
        Self::Risk,
        Self::Roi,
        Self::Summary,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Money => "result-money",
            Self::Deals => "result-deals",
            Self::Time => "result-time",
            Self::Risk => "result-risk",
            Self::Roi => "result-roi",
            Self::Summary => "result-summary",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Money => "Recovered gross profit / month",
            Self::Deals => "Extra deals / month",
            Self::Time => "Time saved / month",
            Self::Risk => "Risk-adjusted value",
            Self::Roi => "ROI multiple",
            Self::Summary => "Summary",
        }
    }

    fn select(self, display: &DisplayOutputs) -> &str {
        match self {
            Self::Money => display.recovered_money.as_str(),
            Self::Deals => display.recovered_deals.as_str(),
            Self::Time => display.time_saved_hours.as_str(),
            Self::Risk => display.risk_adjusted_value.as_str(),
            Self::Roi => display.roi_multiple.as_str(),
            Self::Summary => display.summary.as_str(),
        }
    }
}

/// Whether output text is to be set as markup or as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    Plain,
    Rich,
}

/// The two buttons the estimator binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Calculate,
    Reset,
}

impl Trigger {
    pub fn id(self) -> &'static str {
        match self {
            Self::Calculate => "calculate-button",
            Self::Reset => "reset-button",
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The page-side collaborators the estimator reads and writes.
pub trait EstimatorHost {
    /// Current text of an input field; `None` when the field is absent
    fn read_input(&self, field: InputField) -> Option<String>;

    fn write_input(&mut self, field: InputField, value: &str);

    fn write_output(&mut self, field: OutputField, text: &str, kind: TextKind);

    /// Make the results panel visible
    fn show_results(&mut self);
}

/// Collect the six input fields.
pub fn read_inputs<H: EstimatorHost + ?Sized>(host: &H) -> RawInputs {
    RawInputs {
        leads: host.read_input(InputField::Leads),
        cars: host.read_input(InputField::Cars),
        gross: host.read_input(InputField::Gross),
        salespeople: host.read_input(InputField::Salespeople),
        after_hours_share: host.read_input(InputField::AfterHours),
        response_minutes: host.read_input(InputField::ResponseTime),
    }
}

fn write_inputs<H: EstimatorHost + ?Sized>(host: &mut H, raw: &RawInputs) {
    let values = [
        (InputField::Leads, &raw.leads),
        (InputField::Cars, &raw.cars),
        (InputField::Gross, &raw.gross),
        (InputField::Salespeople, &raw.salespeople),
        (InputField::AfterHours, &raw.after_hours_share),
        (InputField::ResponseTime, &raw.response_minutes),
    ];
    for (field, value) in values {
        host.write_input(field, value.as_deref().unwrap_or_default());
    }
}

/// Only an estimate's summary is written as markup.
fn write_outputs<H: EstimatorHost + ?Sized>(
    host: &mut H,
    outputs: &EstimatorOutputs,
    display: &DisplayOutputs,
) {
    for field in OutputField::ALL {
        let kind = if field == OutputField::Summary && outputs.summary.is_rich() {
            TextKind::Rich
        } else {
            TextKind::Plain
        };
        host.write_output(field, field.select(display), kind);
    }
}

impl Estimator {
    /// Read the fields, evaluate, write every output and reveal the results.
    pub fn on_calculate<H: EstimatorHost + ?Sized>(&self, host: &mut H) -> EstimatorOutputs {
        let inputs = read_inputs(host).parse();
        let outputs = self.calculate(&inputs);
        let rendered = self.render(&outputs);

        write_outputs(host, &outputs, &rendered);
        host.show_results();
        debug!(
            "Wrote results: {} / {}",
            rendered.recovered_money, rendered.roi_multiple
        );

        outputs
    }

    /// Restore default field text and zero-state outputs.
    ///
    /// The results panel keeps whatever visibility it had.
    pub fn on_reset<H: EstimatorHost + ?Sized>(&self, host: &mut H) -> ResetState {
        let state = self.reset();
        write_inputs(host, &RawInputs::from_inputs(&state.inputs));

        let rendered = self.render(&state.outputs);
        write_outputs(host, &state.outputs, &rendered);

        state
    }

    pub fn dispatch<H: EstimatorHost + ?Sized>(
        &self,
        trigger: Trigger,
        host: &mut H,
    ) -> EstimatorOutputs {
        info!("Handling {}", trigger);
        match trigger {
            Trigger::Calculate => self.on_calculate(host),
            Trigger::Reset => self.on_reset(host).outputs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_ids_match_page() {
        let ids: Vec<_> = InputField::ALL.iter().map(|f| f.id()).collect();
        assert_eq!(
            ids,
            ["leads", "cars", "gross", "salespeople", "after-hours", "response-time"]
        );
        assert_eq!(OutputField::Summary.id(), "result-summary");
    }

    #[test]
    fn test_trigger_displays_button_id() {
        assert_eq!(Trigger::Calculate.to_string(), "calculate-button");
        assert_eq!(Trigger::Reset.to_string(), "reset-button");
    }
}
