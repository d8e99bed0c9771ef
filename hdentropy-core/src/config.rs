//! Configuration management for `hdentropy-core`.
//!
//! Defines the settings that drive a batch run: how corpora are discovered,
//! how large the bounded pass is, and how the reader treats an undelimited
//! final sentence. Settings load from YAML and can be overridden from the CLI.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Size of the bounded pass used by the reference measurements.
pub const DEFAULT_SENTENCE_CAP: usize = 1000;

/// Extension of Universal Dependencies treebank files.
pub const DEFAULT_CORPUS_EXTENSION: &str = "conllu";

pub const DEFAULT_OUTPUT_FILE_NAME: &str = "results.csv";

/// Settings for one estimation batch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// File extension (without the dot) used to discover corpora.
    pub corpus_extension: String,
    /// Number of leading sentences counted by the bounded pass.
    pub sentence_cap: usize,
    /// Emit a final sentence that is not followed by a blank or comment line.
    pub flush_trailing: bool,
    /// Abort the whole batch on the first failing corpus.
    pub fail_fast: bool,
    /// Name of the CSV file written into the output directory.
    pub output_file_name: String,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            corpus_extension: DEFAULT_CORPUS_EXTENSION.to_string(),
            sentence_cap: DEFAULT_SENTENCE_CAP,
            flush_trailing: false,
            fail_fast: false,
            output_file_name: DEFAULT_OUTPUT_FILE_NAME.to_string(),
        }
    }
}

/// Values supplied on the command line. `None` keeps the configured value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub corpus_extension: Option<String>,
    pub sentence_cap: Option<usize>,
    pub flush_trailing: Option<bool>,
    pub fail_fast: Option<bool>,
}

impl EstimatorConfig {
    /// Loads settings from a YAML file. Missing keys take their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading estimator settings from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: EstimatorConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        debug!("Loaded settings: {:?}", config);
        Ok(config)
    }

    /// Checks every setting and reports all problems in one error.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        let extension = self.corpus_extension.trim();
        if extension.is_empty() {
            errors.push("`corpus_extension` must not be empty.".to_string());
        } else if extension.starts_with('.') {
            errors.push(format!(
                "`corpus_extension` must not start with a dot (found '{}').",
                extension
            ));
        }

        if self.sentence_cap == 0 {
            errors.push("`sentence_cap` must be at least 1.".to_string());
        }

        let name = self.output_file_name.trim();
        if name.is_empty() {
            errors.push("`output_file_name` must not be empty.".to_string());
        } else if name.contains('/') || name.contains('\\') {
            errors.push(format!(
                "`output_file_name` must be a bare file name (found '{}').",
                name
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow!("Configuration validation failed:\n{}", errors.join("\n")))
        }
    }
}

/// Applies command-line overrides on top of file or default settings.
pub fn merge_overrides(base: EstimatorConfig, overrides: &ConfigOverrides) -> Result<EstimatorConfig> {
    let mut merged = base;

    if let Some(extension) = &overrides.corpus_extension {
        debug!("Overriding corpus extension with '{}'", extension);
        merged.corpus_extension = extension.trim_start_matches('.').to_string();
    }
    if let Some(cap) = overrides.sentence_cap {
        debug!("Overriding sentence cap with {}", cap);
        merged.sentence_cap = cap;
    }
    if let Some(flush) = overrides.flush_trailing {
        merged.flush_trailing = flush;
    }
    if let Some(fail_fast) = overrides.fail_fast {
        merged.fail_fast = fail_fast;
    }

    merged.validate()?;
    Ok(merged)
}
