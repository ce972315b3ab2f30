use anyhow::Result;
use std::path::PathBuf;

use super::{emit_report, resolve_format};
use crate::config::EstimatorConfig;
use crate::estimator::Estimator;
use crate::formatting::FormattingConfig;
use crate::host::MemoryHost;
use crate::io::{EstimateReport, OutputFormat, ReportKind};

pub struct ResetConfig {
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

pub fn build_reset_report(estimator: &Estimator) -> EstimateReport {
    let mut host = MemoryHost::new(estimator.defaults(), estimator.display());
    let state = estimator.on_reset(&mut host);

    EstimateReport {
        kind: ReportKind::Reset,
        inputs: state.inputs,
        outputs: state.outputs,
        display: host.display_outputs(),
        breakdown: None,
    }
}

pub fn run_reset(
    config: ResetConfig,
    settings: &EstimatorConfig,
    formatting: FormattingConfig,
) -> Result<()> {
    let estimator = Estimator::from_config(settings);
    let report = build_reset_report(&estimator);
    let format = resolve_format(config.format, settings);

    emit_report(
        &report,
        format,
        config.output.as_deref(),
        estimator.display().clone(),
        formatting,
    )
}
