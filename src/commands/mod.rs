//! CLI command implementations.
//!
//! Available commands:
//! - **calculate**: Fill the page fields, press calculate, report the results
//! - **reset**: Press reset on a fresh page and report what it shows
//! - **init**: Write a starter `.autoops.toml`
//! - **show-config**: Print the effective configuration

pub mod calculate;
pub mod init;
pub mod reset;
pub mod show_config;

pub use calculate::{run_calculate, CalculateConfig};
pub use init::init_config;
pub use reset::{run_reset, ResetConfig};
pub use show_config::{render_config, show_config};

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self as stdio, BufWriter, Write};
use std::path::Path;

use crate::config::{DisplayConfig, EstimatorConfig};
use crate::formatting::FormattingConfig;
use crate::io::{create_writer, ensure_dir, EstimateReport, OutputFormat};

/// Explicit flag, then the configured default, then terminal.
pub fn resolve_format(flag: Option<OutputFormat>, config: &EstimatorConfig) -> OutputFormat {
    if let Some(format) = flag {
        return format;
    }

    match config.default_format().map(str::parse::<OutputFormat>) {
        Some(Ok(format)) => format,
        Some(Err(e)) => {
            tracing::warn!("Ignoring configured default_format: {}", e);
            OutputFormat::Terminal
        }
        None => OutputFormat::Terminal,
    }
}

/// Write a report to `output`, or to stdout when no path is given.
///
/// Files never receive color codes.
pub fn emit_report(
    report: &EstimateReport,
    format: OutputFormat,
    output: Option<&Path>,
    display: DisplayConfig,
    formatting: FormattingConfig,
) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                ensure_dir(parent)?;
            }
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            let mut buffered = BufWriter::new(file);
            create_writer(
                format,
                Box::new(&mut buffered),
                display,
                FormattingConfig::plain(),
            )
            .write_report(report)?;
            buffered.flush()?;
            tracing::info!("Wrote {} report to {}", format, path.display());
        }
        None => {
            let mut stdout = stdio::stdout().lock();
            create_writer(format, Box::new(&mut stdout), display, formatting)
                .write_report(report)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;

    fn config_with_format(format: &str) -> EstimatorConfig {
        EstimatorConfig {
            output: Some(OutputConfig {
                default_format: Some(format.to_string()),
                use_color: None,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_flag_wins_over_config() {
        let config = config_with_format("json");
        assert_eq!(
            resolve_format(Some(OutputFormat::Html), &config),
            OutputFormat::Html
        );
    }

    #[test]
    fn test_configured_format_used_without_flag() {
        assert_eq!(
            resolve_format(None, &config_with_format("Markdown")),
            OutputFormat::Markdown
        );
    }

    #[test]
    fn test_unknown_configured_format_falls_back() {
        assert_eq!(
            resolve_format(None, &config_with_format("yaml")),
            OutputFormat::Terminal
        );
        assert_eq!(
            resolve_format(None, &EstimatorConfig::default()),
            OutputFormat::Terminal
        );
    }
}
