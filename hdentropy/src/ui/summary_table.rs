// hdentropy/src/ui/summary_table.rs
//! Results table printed after a batch run.

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{CellAlignment, Table};
use std::io::{self, Write};

use hdentropy_core::CorpusResult;

/// Builds the table of measured corpora.
pub fn build_results_table(results: &[CorpusResult], sentence_cap: usize) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED).set_header(vec![
        "Language".to_string(),
        "Sentences".to_string(),
        "Dependents".to_string(),
        format!("Entropy ({})", sentence_cap),
        "Entropy (all)".to_string(),
    ]);

    for r in results {
        table.add_row(vec![
            r.language.clone(),
            r.sentences.to_string(),
            r.observations.to_string(),
            format!("{:.4}", r.entropy_capped),
            format!("{:.4}", r.entropy_all),
        ]);
    }

    for index in 1..5 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

/// Prints the results table. Nothing is printed when no corpus was measured.
pub fn print_summary<W: Write + ?Sized>(writer: &mut W, results: &[CorpusResult], sentence_cap: usize) -> io::Result<()> {
    if !results.is_empty() {
        writeln!(writer, "{}", build_results_table(results, sentence_cap))?;
    }
    Ok(())
}
