//! Command-line integration tests for the `hdentropy` binary.
//!
//! Each test writes corpora into a temporary directory, runs the compiled
//! binary with `assert_cmd` and checks the CSV, stdout and exit status.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn token(idx: usize, pos: &str, head: usize, rel: &str) -> String {
    format!("{idx}\tw\tl\t{pos}\t_\t_\t{head}\t{rel}\t_\t_\n")
}

/// `initial` subject-first sentences followed by `final_` verb-first ones.
fn corpus(initial: usize, final_: usize) -> String {
    let mut text = String::from("# newdoc id = test\n");
    for _ in 0..initial {
        text.push_str(&token(1, "NOUN", 2, "nsubj"));
        text.push_str(&token(2, "VERB", 0, "root"));
        text.push_str(&token(3, "PUNCT", 2, "punct"));
        text.push('\n');
    }
    for _ in 0..final_ {
        text.push_str(&token(1, "VERB", 0, "root"));
        text.push_str(&token(2, "NOUN", 1, "nsubj"));
        text.push('\n');
    }
    text
}

fn hdentropy() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("hdentropy"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write(dir: &Path, name: &str, text: &str) -> Result<()> {
    fs::write(dir.join(name), text)?;
    Ok(())
}

#[test]
fn test_no_arguments_prints_help() {
    hdentropy()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_estimate_writes_results_csv() -> Result<()> {
    let corpora = tempdir()?;
    write(corpora.path(), "en.conllu", &corpus(3, 0))?;
    write(corpora.path(), "ga.conllu", &corpus(2, 2))?;
    let out = tempdir()?;

    hdentropy()
        .args(["estimate", "-c"])
        .arg(corpora.path())
        .arg("-o")
        .arg(out.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Entropy (1000)"));

    let csv = fs::read_to_string(out.path().join("results.csv"))?;
    assert_eq!(csv, "language,entropy_1000,entropy_all\nen,0,0\nga,1,1\n");
    Ok(())
}

#[test]
fn test_estimate_cap_changes_bounded_column() -> Result<()> {
    let corpora = tempdir()?;
    write(corpora.path(), "ga.conllu", &corpus(2, 2))?;
    let out = tempdir()?;

    hdentropy()
        .args(["-q", "estimate", "--cap", "2", "--corpora"])
        .arg(corpora.path())
        .arg("--output")
        .arg(out.path())
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    let csv = fs::read_to_string(out.path().join("results.csv"))?;
    assert_eq!(csv, "language,entropy_2,entropy_all\nga,0,1\n");
    Ok(())
}

#[test]
fn test_estimate_reads_settings_file() -> Result<()> {
    let corpora = tempdir()?;
    write(corpora.path(), "ga.conll", &corpus(2, 2))?;
    write(corpora.path(), "ignored.conllu", &corpus(1, 0))?;
    let out = tempdir()?;
    let settings = out.path().join("settings.yaml");
    fs::write(&settings, "corpus_extension: conll\nsentence_cap: 1\noutput_file_name: hde.csv\n")?;

    hdentropy()
        .args(["-q", "estimate", "-c"])
        .arg(corpora.path())
        .arg("-o")
        .arg(out.path())
        .arg("--config")
        .arg(&settings)
        .assert()
        .success();

    let csv = fs::read_to_string(out.path().join("hde.csv"))?;
    assert_eq!(csv, "language,entropy_1,entropy_all\nga,0,1\n");
    Ok(())
}

#[test]
fn test_estimate_isolates_failures_and_exits_non_zero() -> Result<()> {
    let corpora = tempdir()?;
    write(corpora.path(), "broken.conllu", "1\tnot\tenough\tfields\n\n")?;
    write(corpora.path(), "en.conllu", &corpus(1, 1))?;
    let out = tempdir()?;

    hdentropy()
        .args(["estimate", "-c"])
        .arg(corpora.path())
        .arg("-o")
        .arg(out.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("'broken' failed").count(1))
        .stderr(predicate::str::contains("broken.conllu:1").count(1));

    let csv = fs::read_to_string(out.path().join("results.csv"))?;
    assert_eq!(csv, "language,entropy_1000,entropy_all\nen,1,1\n");
    Ok(())
}

#[test]
fn test_estimate_empty_directory_is_an_error() -> Result<()> {
    let corpora = tempdir()?;
    let out = tempdir()?;

    hdentropy()
        .args(["estimate", "-c"])
        .arg(corpora.path())
        .arg("-o")
        .arg(out.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No '.conllu' corpora found"));
    Ok(())
}

#[test]
fn test_file_prints_both_estimates() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("ga.conllu");
    fs::write(&path, corpus(2, 2))?;

    hdentropy()
        .args(["file", "--cap", "2", "-i"])
        .arg(&path)
        .assert()
        .success()
        .stdout("ga\t0\t1\n");
    Ok(())
}

#[test]
fn test_file_trailing_sentence_needs_flag() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("xx.conllu");
    // Second sentence has no terminating blank line.
    let text = format!(
        "{}{}\n{}{}",
        token(1, "NOUN", 2, "nsubj"),
        token(2, "VERB", 0, "root"),
        token(1, "VERB", 0, "root"),
        token(2, "NOUN", 1, "nsubj"),
    );
    fs::write(&path, text)?;

    hdentropy().args(["file", "-i"]).arg(&path).assert().success().stdout("xx\t0\t0\n");
    hdentropy()
        .args(["file", "--flush-trailing", "-i"])
        .arg(&path)
        .assert()
        .success()
        .stdout("xx\t1\t1\n");
    Ok(())
}

#[test]
fn test_file_without_dependents_reports_empty_corpus() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("empty.conllu");
    fs::write(&path, "# only comments\n\n")?;

    hdentropy()
        .args(["file", "-i"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no qualifying dependents"));
    Ok(())
}

#[test]
fn test_file_rejects_zero_cap() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("en.conllu");
    fs::write(&path, corpus(1, 0))?;

    hdentropy()
        .args(["file", "--cap", "0", "-i"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--cap must be at least 1"));
    Ok(())
}
