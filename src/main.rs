use anyhow::Result;
use autoops_roi::cli::{self, Cli, Commands};
use autoops_roi::commands::calculate::FieldOverrides;
use autoops_roi::commands::{self, CalculateConfig, ResetConfig};
use autoops_roi::config::{load_config, load_config_file, LoadedConfig};
use autoops_roi::errors::EstimatorError;
use autoops_roi::formatting::FormattingConfig;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

// Main orchestrator function
fn main() -> Result<()> {
    let cli = cli::parse_args();
    init_tracing(cli.verbosity);

    let result = run(cli);
    if let Err(ref e) = result {
        if let Some(err) = e.downcast_ref::<EstimatorError>() {
            debug!(
                category = err.category(),
                user_fixable = err.is_user_fixable(),
                "Command failed"
            );
        }
    }
    result
}

fn run(cli: Cli) -> Result<()> {
    let loaded = load_settings(cli.config.as_deref())?;
    let formatting = create_formatting_config(cli.plain, &loaded);

    match cli.command {
        Commands::Calculate {
            leads,
            cars,
            gross,
            salespeople,
            after_hours,
            response_time,
            format,
            output,
            explain,
        } => {
            let config = CalculateConfig {
                fields: FieldOverrides {
                    leads,
                    cars,
                    gross,
                    salespeople,
                    after_hours,
                    response_time,
                },
                format,
                output,
                explain,
            };
            commands::run_calculate(config, &loaded.config, formatting)
        }
        Commands::Reset { format, output } => {
            commands::run_reset(ResetConfig { format, output }, &loaded.config, formatting)
        }
        Commands::Init { force } => commands::init_config(force),
        Commands::ShowConfig => commands::show_config(&loaded),
    }
}

/// Logs go to stderr. `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn default_log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

fn load_settings(explicit: Option<&Path>) -> Result<LoadedConfig> {
    match explicit {
        Some(path) => Ok(load_config_file(path)?),
        None => Ok(load_config()),
    }
}

fn create_formatting_config(plain: bool, loaded: &LoadedConfig) -> FormattingConfig {
    if plain {
        return FormattingConfig::plain();
    }
    let use_color = loaded
        .config
        .output
        .as_ref()
        .and_then(|output| output.use_color);
    FormattingConfig::from_env().with_preference(use_color)
}
