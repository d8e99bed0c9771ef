//! errors.rs - Custom error types for the hdentropy-core library.
//!
//! Every failure that ends the processing of a single corpus is a variant of
//! [`HdeError`], so callers driving a batch can record it and move on.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `hdentropy-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum HdeError {
    /// A corpus line could not be interpreted.
    #[error("{source_name}:{line}: {reason}")]
    Parse {
        source_name: String,
        line: usize,
        reason: String,
    },

    /// A token names a head position that does not exist in its sentence.
    #[error("sentence {sentence}, token {token}: head {head} is out of range for a sentence of {len} tokens")]
    HeadOutOfRange {
        sentence: usize,
        token: usize,
        head: usize,
        len: usize,
    },

    /// A token names itself as its own head.
    #[error("sentence {sentence}, token {token}: token is attached to itself")]
    SelfAttachment { sentence: usize, token: usize },

    /// The count table holds no qualifying (non-root, non-punctuation) dependents.
    #[error("corpus contains no qualifying dependents; head direction entropy is undefined")]
    EmptyCorpus,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to fetch corpus: {0}")]
    Fetch(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),
}

impl HdeError {
    /// True for the empty-corpus condition, which batch drivers usually report
    /// as a skipped corpus rather than a malformed one.
    pub fn is_empty_corpus(&self) -> bool {
        matches!(self, HdeError::EmptyCorpus)
    }

    /// True for errors caused by malformed corpus content.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            HdeError::Parse { .. } | HdeError::HeadOutOfRange { .. } | HdeError::SelfAttachment { .. }
        )
    }
}

/// Shorthand used across the core crate.
pub type HdeResult<T> = Result<T, HdeError>;
