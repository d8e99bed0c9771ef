// hdentropy/src/commands/fetch.rs
//! `hdentropy fetch`: download corpora listed in a YAML sources file.

use anyhow::Result;

use hdentropy_core::{fetch_corpora_with, FetchedCorpus};

use crate::cli::FetchCommand;
use crate::commands::{info_msg, success_msg};
use crate::ui::progress::{fetch_progress_bar, record_fetch_progress};

pub fn run_fetch(cmd: &FetchCommand, quiet: bool) -> Result<Vec<FetchedCorpus>> {
    let bar = fetch_progress_bar(quiet);
    let result = fetch_corpora_with(&cmd.config, &cmd.output, |event| record_fetch_progress(&bar, event));
    bar.finish_and_clear();
    let fetched = result?;

    if !quiet {
        for corpus in &fetched {
            info_msg(format!("{}: {} bytes -> {}", corpus.language, corpus.bytes, corpus.path.display()));
        }
        success_msg(format!("fetched {} corpora into {}", fetched.len(), cmd.output.display()));
    }
    Ok(fetched)
}
