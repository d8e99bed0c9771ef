//! Head Direction Entropy (Futrell et al., 2015).
//!
//! The measure is the plug-in conditional entropy `H(Direction | LocalTree)`
//! in bits. It is `0` when every relation fixes the order of dependent and
//! head, and reaches `1` when order is a coin flip for every relation.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info};
use std::io::BufRead;
use std::path::Path;

use hdentropy_entropy::conditional::conditional_entropy;

use crate::conllu::{ReaderOptions, Sentence, TreeReader};
use crate::counts::{count_sentences, joint_counts, JointCountTable};
use crate::errors::{HdeError, HdeResult};

/// Computes `H(Direction | LocalTree)` from a joint count table.
///
/// Fails with [`HdeError::EmptyCorpus`] when the table holds no
/// observations, since the feature probabilities are then undefined.
pub fn head_direction_entropy(table: &JointCountTable) -> HdeResult<f64> {
    let rows = table.rows();
    let entropy = conditional_entropy(&rows).ok_or(HdeError::EmptyCorpus)?;
    debug!(
        "Head direction entropy {:.6} bits over {} features, {} observations",
        entropy,
        rows.len(),
        table.total()
    );
    Ok(entropy)
}

/// One-shot estimator bundling reading, counting and the entropy computation.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadDirectionEntropy {
    options: ReaderOptions,
}

impl HeadDirectionEntropy {
    pub fn new(options: ReaderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ReaderOptions {
        self.options
    }

    /// Streams a corpus file once and returns the entropy over at most
    /// `max_sentences` sentences. Each call reopens the file.
    pub fn estimate_file<P: AsRef<Path>>(&self, path: P, max_sentences: Option<usize>) -> HdeResult<f64> {
        let path = path.as_ref();
        info!("Estimating head direction entropy for {} (cap: {:?})", path.display(), max_sentences);
        let reader = TreeReader::open(path, self.options)?;
        let table = joint_counts(reader, max_sentences)?;
        head_direction_entropy(&table)
    }

    /// Same as [`estimate_file`](Self::estimate_file) over any buffered source.
    pub fn estimate_reader<R: BufRead>(
        &self,
        reader: R,
        source_name: &str,
        max_sentences: Option<usize>,
    ) -> HdeResult<f64> {
        let table = joint_counts(TreeReader::new(reader, source_name, self.options), max_sentences)?;
        head_direction_entropy(&table)
    }

    /// Entropy over the first `max_sentences` of already parsed sentences.
    pub fn estimate_sentences(&self, sentences: &[Sentence], max_sentences: Option<usize>) -> HdeResult<f64> {
        let table = count_sentences(sentences, max_sentences)?;
        head_direction_entropy(&table)
    }
}
