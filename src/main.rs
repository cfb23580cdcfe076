mod cli;
mod config;
mod db;
mod error;
mod report;
mod runner;
mod transform;
mod types;
mod ui;

#[cfg(test)]
mod test_support;

use error::StatsError;
use report::TableWriter;
use std::io;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Resolve the plan; a missing database is the one expected failure
    let plan = match config::build_report_plan(&args) {
        Ok(plan) => plan,
        Err(e @ StatsError::DatabaseMissing(_)) => {
            ui::print_missing_database(&e.to_string());
            std::process::exit(1);
        }
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(2);
        }
    };

    let stdout = io::stdout();
    let mut writer = TableWriter::new(stdout.lock(), plan.format);

    if let Err(e) = runner::run_report(&plan, &mut writer) {
        ui::print_error(&e.to_string());
        std::process::exit(2);
    }
}
