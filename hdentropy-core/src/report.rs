//! CSV output of batch results.
//!
//! One header row, then one row per measured corpus:
//! `language,entropy_<cap>,entropy_all`.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::info;
use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::corpus::CorpusResult;

/// Quotes a field when it holds a comma, quote or line break.
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Writes the results table to any writer.
pub fn write_results_csv<W: Write>(records: &[CorpusResult], sentence_cap: usize, mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "language,entropy_{},entropy_all", sentence_cap)?;
    for record in records {
        writeln!(
            writer,
            "{},{},{}",
            csv_field(&record.language),
            record.entropy_capped,
            record.entropy_all
        )?;
    }
    writer.flush()
}

/// Creates `output_dir` if needed and writes `output_dir/file_name`.
pub fn write_results_file(
    records: &[CorpusResult],
    sentence_cap: usize,
    output_dir: &Path,
    file_name: &str,
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    let path = output_dir.join(file_name);
    let file = File::create(&path)
        .with_context(|| format!("Failed to create results file {}", path.display()))?;
    write_results_csv(records, sentence_cap, BufWriter::new(file))
        .with_context(|| format!("Failed to write results file {}", path.display()))?;

    info!("Wrote {} result rows to {}", records.len(), path.display());
    Ok(path)
}
