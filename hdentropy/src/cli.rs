// hdentropy/src/cli.rs
//! Command-line interface definition for the `hdentropy` binary.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "hdentropy",
    version = env!("CARGO_PKG_VERSION"),
    about = "Measure Head Direction Entropy of dependency treebanks",
    long_about = "hdentropy estimates the Head Direction Entropy (Futrell et al., 2015) of CoNLL-U treebanks: the conditional entropy, in bits, of whether a dependent precedes or follows its head given the dependent's POS tag, the head's POS tag and their relation.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `hdentropy` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Measures every corpus in a directory and writes a CSV of results.
    #[command(about = "Measure every corpus in a directory and write a CSV of results.")]
    Estimate(EstimateCommand),

    /// Measures a single corpus file and prints the result.
    #[command(about = "Measure a single corpus file and print the result.")]
    File(FileCommand),

    /// Downloads the corpora listed in a YAML sources file.
    #[command(about = "Download the corpora listed in a YAML sources file.")]
    Fetch(FetchCommand),
}

/// Arguments for the `estimate` command.
#[derive(Parser, Debug)]
pub struct EstimateCommand {
    /// Directory holding the corpus files.
    #[arg(long = "corpora", short = 'c', alias = "corpora_folder", value_name = "DIR", help = "Directory holding the corpus files.")]
    pub corpora: PathBuf,

    /// Directory the results CSV is written into.
    #[arg(long = "output", short = 'o', alias = "output_path", value_name = "DIR", help = "Directory the results CSV is written into (created if missing).")]
    pub output: PathBuf,

    /// Path to a YAML settings file.
    #[arg(long = "config", value_name = "FILE", help = "Path to a YAML settings file.")]
    pub config: Option<PathBuf>,

    /// Number of sentences in the bounded pass.
    #[arg(long = "cap", value_name = "N", help = "Number of leading sentences used for the bounded estimate (default: 1000).")]
    pub cap: Option<usize>,

    /// Extension used to discover corpus files.
    #[arg(long = "extension", value_name = "EXT", help = "Extension used to discover corpus files (default: conllu).")]
    pub extension: Option<String>,

    /// Count a final sentence that lacks a terminating blank line.
    #[arg(long = "flush-trailing", help = "Count a final sentence that lacks a terminating blank line.")]
    pub flush_trailing: bool,

    /// Stop at the first corpus that fails.
    #[arg(long = "fail-fast", help = "Stop at the first corpus that fails instead of skipping it.")]
    pub fail_fast: bool,

    /// Suppress the results table printed to stderr.
    #[arg(long = "no-summary", help = "Suppress the results table printed to stderr.")]
    pub no_summary: bool,
}

/// Arguments for the `file` command.
#[derive(Parser, Debug)]
pub struct FileCommand {
    /// Corpus file to measure.
    #[arg(long = "input", short = 'i', value_name = "FILE", help = "Corpus file to measure.")]
    pub input: PathBuf,

    /// Number of sentences in the bounded pass.
    #[arg(long = "cap", value_name = "N", default_value_t = hdentropy_core::DEFAULT_SENTENCE_CAP, help = "Number of leading sentences used for the bounded estimate.")]
    pub cap: usize,

    /// Count a final sentence that lacks a terminating blank line.
    #[arg(long = "flush-trailing", help = "Count a final sentence that lacks a terminating blank line.")]
    pub flush_trailing: bool,
}

/// Arguments for the `fetch` command.
#[derive(Parser, Debug)]
pub struct FetchCommand {
    /// YAML file mapping each language to its corpus URLs.
    #[arg(long = "config", short = 'c', alias = "configs", value_name = "FILE", help = "YAML file mapping each language to its corpus URLs.")]
    pub config: PathBuf,

    /// Directory the corpora are written into.
    #[arg(long = "output", short = 'o', alias = "output_directory", value_name = "DIR", help = "Directory the corpora are written into (created if missing).")]
    pub output: PathBuf,
}
