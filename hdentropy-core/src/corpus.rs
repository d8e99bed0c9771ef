//! Batch processing of a directory of treebanks.
//!
//! Each corpus is parsed once into memory, then counted twice: over its first
//! `sentence_cap` sentences and over all of them. Corpora are independent;
//! a failure in one is recorded and the batch moves on unless `fail_fast`
//! is set.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::EstimatorConfig;
use crate::conllu::{read_sentences, ReaderOptions};
use crate::counts::count_sentences;
use crate::errors::{HdeError, HdeResult};
use crate::estimator::head_direction_entropy;

/// Per-corpus measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusResult {
    /// Corpus file name without extension.
    pub language: String,
    /// Entropy over the first `sentence_cap` sentences.
    pub entropy_capped: f64,
    /// Entropy over every sentence.
    pub entropy_all: f64,
    /// Number of sentences read from the corpus.
    pub sentences: usize,
    /// Number of qualifying dependents over the whole corpus.
    pub observations: u64,
}

/// A corpus that could not be measured.
#[derive(Debug)]
pub struct CorpusFailure {
    pub language: String,
    pub path: PathBuf,
    pub error: HdeError,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub results: Vec<CorpusResult>,
    pub failures: Vec<CorpusFailure>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Identifier written to the results for a corpus file.
pub fn language_id(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Lists the files in `dir` whose extension equals `extension`, sorted by name.
pub fn discover_corpora(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read corpus directory {}", dir.display()))?;

    let mut corpora = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to list corpus directory {}", dir.display()))?
            .path();
        let matches = path.is_file()
            && path.extension().is_some_and(|ext| ext.to_string_lossy() == extension);
        if matches {
            corpora.push(path);
        }
    }
    corpora.sort();

    info!("Discovered {} '.{}' corpora in {}", corpora.len(), extension, dir.display());
    Ok(corpora)
}

/// Measures one corpus file.
pub fn process_corpus(path: &Path, config: &EstimatorConfig) -> HdeResult<CorpusResult> {
    let language = language_id(path);
    let options = ReaderOptions {
        flush_trailing: config.flush_trailing,
    };

    let sentences = read_sentences(path, options)?;
    let capped = count_sentences(&sentences, Some(config.sentence_cap))?;
    let all = count_sentences(&sentences, None)?;

    let result = CorpusResult {
        entropy_capped: head_direction_entropy(&capped)?,
        entropy_all: head_direction_entropy(&all)?,
        sentences: sentences.len(),
        observations: all.total(),
        language,
    };

    info!(
        "{}: {} sentences, entropy_{} = {:.6}, entropy_all = {:.6}",
        result.language, result.sentences, config.sentence_cap, result.entropy_capped, result.entropy_all
    );
    Ok(result)
}

/// Measures every corpus in `dir`.
///
/// With `fail_fast` the first failure is returned as an error; otherwise
/// failures are collected in the report alongside the successful results.
pub fn run_batch(dir: &Path, config: &EstimatorConfig) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for path in discover_corpora(dir, &config.corpus_extension)? {
        match process_corpus(&path, config) {
            Ok(result) => report.results.push(result),
            Err(error) => {
                let language = language_id(&path);
                if config.fail_fast {
                    return Err(error)
                        .with_context(|| format!("Failed to process corpus '{}' ({})", language, path.display()));
                }
                info!("Recording failure of corpus '{}': {}", language, error);
                report.failures.push(CorpusFailure { language, path, error });
            }
        }
    }

    Ok(report)
}
