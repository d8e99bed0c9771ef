// hdentropy/src/commands/file.rs
//! `hdentropy file`: one-shot measurement of a single corpus.
//!
//! Streams the file once per pass instead of holding it in memory.

use anyhow::{bail, Context, Result};
use std::io::{self, Write};

use hdentropy_core::{language_id, HeadDirectionEntropy, ReaderOptions};

use crate::cli::FileCommand;

/// Prints `language<TAB>entropy_capped<TAB>entropy_all` to `writer`.
pub fn run_file<W: Write>(cmd: &FileCommand, mut writer: W) -> Result<()> {
    if cmd.cap == 0 {
        bail!("--cap must be at least 1");
    }

    let estimator = HeadDirectionEntropy::new(ReaderOptions {
        flush_trailing: cmd.flush_trailing,
    });
    let language = language_id(&cmd.input);

    let capped = estimator
        .estimate_file(&cmd.input, Some(cmd.cap))
        .with_context(|| format!("Failed to measure {}", cmd.input.display()))?;
    let all = estimator
        .estimate_file(&cmd.input, None)
        .with_context(|| format!("Failed to measure {}", cmd.input.display()))?;

    writeln!(writer, "{}\t{}\t{}", language, capped, all)?;
    writer.flush()?;
    Ok(())
}

/// Runs the command against stdout.
pub fn run_file_stdout(cmd: &FileCommand) -> Result<()> {
    let stdout = io::stdout();
    run_file(cmd, stdout.lock())
}
