// hdentropy/src/lib.rs
//! # hdentropy CLI Application
//!
//! Command-line front end for `hdentropy-core`: batch estimation over a
//! directory of treebanks, one-shot estimation of a single file, and corpus
//! download.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
