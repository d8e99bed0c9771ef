// hdentropy-core/src/lib.rs
//! # hdentropy Core Library
//!
//! `hdentropy-core` measures the Head Direction Entropy (Futrell et al., 2015)
//! of dependency treebanks: how predictable the order of a dependent and its
//! head is, given the dependent's POS tag, the head's POS tag and the relation
//! between them.
//!
//! ## Modules
//!
//! * `conllu`: Streams sentences out of CoNLL-U style files.
//! * `counts`: Builds the joint count table of local tree features against direction.
//! * `estimator`: Computes the plug-in conditional entropy from a count table.
//! * `corpus`: Discovers corpora in a directory and measures each one.
//! * `report`: Writes batch results as CSV.
//! * `config`: Batch settings, loadable from YAML.
//! * `fetch`: Downloads treebanks listed in a YAML sources file.
//! * `errors`: The `HdeError` type shared by all of the above.
//!
//! ## Usage Example
//!
//! ```rust
//! use hdentropy_core::{HeadDirectionEntropy, ReaderOptions};
//! use std::io::Cursor;
//!
//! fn main() -> Result<(), hdentropy_core::HdeError> {
//!     let corpus = "1\tdogs\tdog\tNOUN\t_\t_\t2\tnsubj\t_\t_\n\
//!                   2\tbark\tbark\tVERB\t_\t_\t0\troot\t_\t_\n\n";
//!
//!     let estimator = HeadDirectionEntropy::new(ReaderOptions::default());
//!     let entropy = estimator.estimate_reader(Cursor::new(corpus), "example", None)?;
//!     assert_eq!(entropy, 0.0);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Corpus-level operations return `HdeError`. An input with no qualifying
//! dependents yields `HdeError::EmptyCorpus`, which batch drivers can tell
//! apart from malformed input via `HdeError::is_empty_corpus`. Batch and
//! file-level helpers use `anyhow::Result` with context.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod conllu;
pub mod corpus;
pub mod counts;
pub mod errors;
pub mod estimator;
pub mod fetch;
pub mod report;

/// Re-exports batch settings.
pub use config::{
    merge_overrides,
    ConfigOverrides,
    EstimatorConfig,
    DEFAULT_CORPUS_EXTENSION,
    DEFAULT_SENTENCE_CAP,
};

/// Re-exports the error type.
pub use errors::{HdeError, HdeResult};

/// Re-exports the tree reader and its data model.
pub use conllu::{read_sentences, ReaderOptions, Sentence, Token, TreeReader};

/// Re-exports the joint counter.
pub use counts::{
    count_sentences,
    joint_counts,
    Direction,
    DirectionCounts,
    JointCountTable,
    JointCounter,
    LocalTree,
    PUNCT_TAG,
};

/// Re-exports the estimator.
pub use estimator::{head_direction_entropy, HeadDirectionEntropy};

/// Re-exports batch processing and output.
pub use corpus::{discover_corpora, language_id, process_corpus, run_batch, BatchReport, CorpusFailure, CorpusResult};
pub use report::{write_results_csv, write_results_file};

/// Re-exports corpus download.
pub use fetch::{
    fetch_corpora,
    fetch_corpora_with,
    load_sources,
    CorpusFetcher,
    CorpusSources,
    FetchProgress,
    FetchedCorpus,
};
