// hdentropy/src/main.rs
//! hdentropy entry point.
//!
//! Parses the command line, initializes logging and dispatches to the
//! selected command.

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use hdentropy::cli::{Cli, Commands};
use hdentropy::commands::{self, estimate::EstimateOptions};
use hdentropy::logger;

fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    logger::init_logger(logger::level_from_flags(args.quiet, args.debug));

    match &args.command {
        Commands::Estimate(cmd) => {
            let opts = EstimateOptions::from_command(cmd, args.quiet)?;
            let report = commands::estimate::run_estimate(&opts)?;
            if !report.is_clean() {
                if !args.quiet {
                    commands::error_msg(format!("{} corpora failed", report.failures.len()));
                }
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::File(cmd) => commands::file::run_file_stdout(cmd)?,
        Commands::Fetch(cmd) => {
            commands::fetch::run_fetch(cmd, args.quiet)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
