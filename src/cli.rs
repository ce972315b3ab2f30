use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::io::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "autoops-roi")]
#[command(about = "Dealership lead-automation ROI estimator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Configuration file (defaults to the nearest .autoops.toml)
    #[arg(long, global = true, env = "AUTOOPS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colors in terminal output
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate the monthly opportunity from dealership figures
    Calculate {
        /// Monthly leads
        #[arg(long, allow_hyphen_values = true)]
        leads: Option<String>,

        /// Cars sold per month
        #[arg(long, allow_hyphen_values = true)]
        cars: Option<String>,

        /// Average gross profit per car
        #[arg(long, allow_hyphen_values = true)]
        gross: Option<String>,

        /// Number of salespeople
        #[arg(long, allow_hyphen_values = true)]
        salespeople: Option<String>,

        /// Share of leads arriving after hours (0.0 - 1.0)
        #[arg(long = "after-hours", allow_hyphen_values = true)]
        after_hours: Option<String>,

        /// Average response time in minutes
        #[arg(long = "response-time", allow_hyphen_values = true)]
        response_time: Option<String>,

        /// Output format (defaults to the configured format, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Include intermediate values of the model
        #[arg(long)]
        explain: bool,
    },

    /// Show the default inputs and zero-state results
    Reset {
        /// Output format (defaults to the configured format, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Initialize an estimator configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Print the effective configuration as TOML
    ShowConfig,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
