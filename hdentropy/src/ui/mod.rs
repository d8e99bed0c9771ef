// hdentropy/src/ui/mod.rs
//! Terminal output helpers.

pub mod output_format;
pub mod summary_table;
pub mod progress;
