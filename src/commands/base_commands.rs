use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::period::Period;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate synthetic sales for every manager and period
    Generate {
        /// Output file (.yaml, .yml or .json)
        #[arg(short, long)]
        output: String,
        /// Optional dashboard config YAML
        #[arg(short, long)]
        config: Option<String>,
        /// Seed for reproducible series
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print summary cards and period totals
    Summary {
        /// Previously generated sales file; generates in memory when omitted
        #[arg(short, long)]
        input: Option<String>,
        /// Optional dashboard config YAML
        #[arg(short, long)]
        config: Option<String>,
        /// Seed for reproducible series
        #[arg(long)]
        seed: Option<u64>,
        /// Period for the totals table
        #[arg(short, long, value_enum, default_value_t = Period::Month)]
        period: Period,
    },
    /// Render total, daily and comparison charts as PNG files
    Render {
        /// Output directory
        #[arg(short, long)]
        output: String,
        /// Previously generated sales file; generates in memory when omitted
        #[arg(short, long)]
        input: Option<String>,
        /// Optional dashboard config YAML
        #[arg(short, long)]
        config: Option<String>,
        /// Seed for reproducible series
        #[arg(long)]
        seed: Option<u64>,
        /// Period shown in the charts
        #[arg(short, long, value_enum, default_value_t = Period::Month)]
        period: Period,
        /// Manager id for the daily chart (defaults to the first manager)
        #[arg(short, long)]
        manager: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
