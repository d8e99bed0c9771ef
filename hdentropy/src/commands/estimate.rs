// hdentropy/src/commands/estimate.rs
//! `hdentropy estimate`: batch measurement of a corpus directory.

use anyhow::{bail, Result};
use log::{debug, info};
use std::io;
use std::path::PathBuf;

use hdentropy_core::{
    merge_overrides, run_batch, write_results_file, BatchReport, ConfigOverrides, EstimatorConfig,
};

use crate::cli::EstimateCommand;
use crate::commands::{info_msg, success_msg, warn_msg};
use crate::ui::summary_table;

/// Resolved options for one batch run.
#[derive(Debug, Clone)]
pub struct EstimateOptions {
    pub corpora_dir: PathBuf,
    pub output_dir: PathBuf,
    pub config: EstimatorConfig,
    pub show_summary: bool,
    pub quiet: bool,
}

impl EstimateOptions {
    /// Combines the settings file (if any), defaults and command-line flags.
    pub fn from_command(cmd: &EstimateCommand, quiet: bool) -> Result<Self> {
        let base = match &cmd.config {
            Some(path) => EstimatorConfig::load_from_file(path)?,
            None => EstimatorConfig::default(),
        };
        let overrides = ConfigOverrides {
            corpus_extension: cmd.extension.clone(),
            sentence_cap: cmd.cap,
            flush_trailing: cmd.flush_trailing.then_some(true),
            fail_fast: cmd.fail_fast.then_some(true),
        };
        let config = merge_overrides(base, &overrides)?;
        debug!("Effective settings: {:?}", config);

        Ok(Self {
            corpora_dir: cmd.corpora.clone(),
            output_dir: cmd.output.clone(),
            config,
            show_summary: !cmd.no_summary,
            quiet,
        })
    }
}

/// Runs the batch and writes the CSV. Returns the report so the caller can
/// choose the exit status.
pub fn run_estimate(opts: &EstimateOptions) -> Result<BatchReport> {
    info!("Starting estimate over {}", opts.corpora_dir.display());
    let report = run_batch(&opts.corpora_dir, &opts.config)?;

    if report.results.is_empty() && report.failures.is_empty() {
        bail!(
            "No '.{}' corpora found in {}",
            opts.config.corpus_extension,
            opts.corpora_dir.display()
        );
    }

    let path = write_results_file(
        &report.results,
        opts.config.sentence_cap,
        &opts.output_dir,
        &opts.config.output_file_name,
    )?;

    if !opts.quiet {
        if opts.show_summary {
            summary_table::print_summary(&mut io::stderr(), &report.results, opts.config.sentence_cap)?;
        }
        for failure in &report.failures {
            if failure.error.is_empty_corpus() {
                warn_msg(format!("skipped '{}': no qualifying dependents", failure.language));
            } else {
                warn_msg(format!("'{}' failed: {}", failure.language, failure.error));
            }
        }
        info_msg(format!("results written to {}", path.display()));
        if report.is_clean() {
            success_msg(format!("measured {} corpora", report.results.len()));
        }
    }

    Ok(report)
}
