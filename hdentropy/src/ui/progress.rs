// hdentropy/src/ui/progress.rs
//! Per-language progress bar for `hdentropy fetch`.

use indicatif::{ProgressBar, ProgressStyle};

use hdentropy_core::FetchProgress;

/// Bar drawn on stderr, or a hidden one when `quiet` is set.
/// indicatif also stays silent when stderr is not a terminal.
pub fn fetch_progress_bar(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(0);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    bar.set_style(style);
    bar
}

/// Moves the bar along for one download event.
pub fn record_fetch_progress(bar: &ProgressBar, event: FetchProgress<'_>) {
    match event {
        FetchProgress::Planned(languages) => bar.set_length(languages as u64),
        FetchProgress::Started(language) => bar.set_message(format!("downloading {}", language)),
        FetchProgress::Finished(_) => bar.inc(1),
    }
}
