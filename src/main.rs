//! two-value-form CLI
//!
//! Ask for two values, then show them in a table.

use std::process::ExitCode;

use clap::Parser;

use two_value_form::logging::init_logging;
use two_value_form::tui::run::run;
use two_value_form::types::FormConfig;

#[derive(Parser)]
#[command(name = "two-value-form")]
#[command(about = "Enter two values and see them side by side")]
#[command(version)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    if let Err(e) = init_logging() {
        eprintln!("Warning: {}", e);
    }

    match run(FormConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error running program: {}", e);
            ExitCode::FAILURE
        }
    }
}
