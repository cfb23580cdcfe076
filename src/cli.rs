use crate::config::DEFAULT_DATABASE;
use crate::report::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "skelstats")]
#[command(about = "Summarize polyhedron and straight-skeleton statistics from a skeleton database")]
#[command(version)]
pub struct CliArgs {
    /// SQLite database written by the skeleton computation
    #[arg(value_name = "DATABASE", default_value = DEFAULT_DATABASE)]
    pub database: PathBuf,

    /// Output format for every table
    #[arg(long, value_enum, default_value_t = OutputFormat::Latex)]
    pub format: OutputFormat,

    /// Also print the complete skeleton table (all 20 columns)
    #[arg(long)]
    pub full_skeletons: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }
}
