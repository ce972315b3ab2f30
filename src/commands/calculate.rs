use anyhow::Result;
use std::path::PathBuf;

use super::{emit_report, resolve_format};
use crate::config::EstimatorConfig;
use crate::estimator::Estimator;
use crate::formatting::FormattingConfig;
use crate::host::{read_inputs, InputField, MemoryHost, Trigger};
use crate::io::{EstimateReport, OutputFormat, ReportKind};

/// Field text supplied on the command line. `None` leaves the field
/// holding its default text.
#[derive(Debug, Clone, Default)]
pub struct FieldOverrides {
    pub leads: Option<String>,
    pub cars: Option<String>,
    pub gross: Option<String>,
    pub salespeople: Option<String>,
    pub after_hours: Option<String>,
    pub response_time: Option<String>,
}

impl FieldOverrides {
    fn entries(&self) -> [(InputField, Option<&str>); 6] {
        [
            (InputField::Leads, self.leads.as_deref()),
            (InputField::Cars, self.cars.as_deref()),
            (InputField::Gross, self.gross.as_deref()),
            (InputField::Salespeople, self.salespeople.as_deref()),
            (InputField::AfterHours, self.after_hours.as_deref()),
            (InputField::ResponseTime, self.response_time.as_deref()),
        ]
    }

    /// Type each supplied value into its field.
    pub fn apply(&self, host: &mut MemoryHost) {
        for (field, value) in self.entries() {
            if let Some(value) = value {
                host.set_input(field, value);
            }
        }
    }
}

pub struct CalculateConfig {
    pub fields: FieldOverrides,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub explain: bool,
}

/// Press calculate on a page holding the configured defaults plus any
/// overrides, and build the resulting report.
pub fn build_calculation_report(
    estimator: &Estimator,
    fields: &FieldOverrides,
    explain: bool,
) -> EstimateReport {
    let mut host = MemoryHost::new(estimator.defaults(), estimator.display());
    fields.apply(&mut host);

    let outputs = estimator.dispatch(Trigger::Calculate, &mut host);
    let inputs = read_inputs(&host).parse();
    let breakdown = explain.then(|| estimator.explain(&inputs));
    if let Some(ref breakdown) = breakdown {
        if breakdown.was_clamped() {
            tracing::debug!(
                "Recovered deals clamped from {:.3} into [{}, {}]",
                breakdown.unclamped_deals,
                breakdown.deal_floor,
                breakdown.deal_cap
            );
        }
    }

    EstimateReport {
        kind: ReportKind::Calculation,
        inputs,
        outputs,
        display: host.display_outputs(),
        breakdown,
    }
}

pub fn run_calculate(
    config: CalculateConfig,
    settings: &EstimatorConfig,
    formatting: FormattingConfig,
) -> Result<()> {
    let estimator = Estimator::from_config(settings);
    let report = build_calculation_report(&estimator, &config.fields, config.explain);
    let format = resolve_format(config.format, settings);

    emit_report(
        &report,
        format,
        config.output.as_deref(),
        estimator.display().clone(),
        formatting,
    )
}
