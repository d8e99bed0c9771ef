// hdentropy-core/tests/fetch_tests.rs
//! Corpus download against a local mock HTTP server.

use anyhow::Result;
use std::fs;
use tempfile::tempdir;

use hdentropy_core::{
    fetch_corpora, fetch_corpora_with, load_sources, read_sentences, CorpusFetcher, CorpusSources, FetchProgress,
    ReaderOptions,
};

const PART_ONE: &str = "1\ta\ta\tNOUN\t_\t_\t2\tnsubj\t_\t_\n2\tb\tb\tVERB\t_\t_\t0\troot\t_\t_\n\n";
const PART_TWO: &str = "1\tc\tc\tVERB\t_\t_\t0\troot\t_\t_\n2\td\td\tNOUN\t_\t_\t1\tnsubj\t_\t_\n\n";

#[test]
fn test_load_sources_sorted_by_language() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("sources.yaml");
    fs::write(
        &path,
        "zulu:\n  - http://example.invalid/zu.conllu\nbasque:\n  - http://example.invalid/eu.conllu\n",
    )?;
    let sources = load_sources(&path)?;
    let languages: Vec<&str> = sources.keys().map(String::as_str).collect();
    assert_eq!(languages, vec!["basque", "zulu"]);
    Ok(())
}

#[test]
fn test_load_sources_rejects_empty_url_list() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("sources.yaml");
    fs::write(&path, "english: []\n")?;
    assert!(load_sources(&path).is_err());
    Ok(())
}

#[test]
fn test_parts_are_concatenated_per_language() -> Result<()> {
    let mut server = mockito::Server::new();
    let m1 = server.mock("GET", "/en-train.conllu").with_status(200).with_body(PART_ONE).create();
    let m2 = server.mock("GET", "/en-dev.conllu").with_status(200).with_body(PART_TWO).create();

    let dir = tempdir()?;
    let sources_path = dir.path().join("sources.yaml");
    fs::write(
        &sources_path,
        format!(
            "english:\n  - {url}/en-train.conllu\n  - {url}/en-dev.conllu\n",
            url = server.url()
        ),
    )?;

    let out = dir.path().join("corpora");
    let fetched = fetch_corpora(&sources_path, &out)?;
    m1.assert();
    m2.assert();

    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].language, "english");
    assert_eq!(fetched[0].path, out.join("english.conllu"));
    assert_eq!(fetched[0].bytes as usize, PART_ONE.len() + PART_TWO.len());
    assert_eq!(fs::read_to_string(&fetched[0].path)?, format!("{}{}", PART_ONE, PART_TWO));
    Ok(())
}

#[test]
fn test_http_error_fails_and_leaves_no_file() -> Result<()> {
    let mut server = mockito::Server::new();
    let _m = server.mock("GET", "/missing.conllu").with_status(404).create();

    let out = tempdir()?;
    let mut sources = CorpusSources::new();
    sources.insert("klingon".to_string(), vec![format!("{}/missing.conllu", server.url())]);

    let err = CorpusFetcher::new()?.fetch_all(&sources, out.path()).unwrap_err();
    assert!(err.to_string().contains("404"), "{}", err);
    assert!(!out.path().join("klingon.conllu").exists());
    Ok(())
}

#[test]
fn test_part_without_final_newline_stays_a_separate_sentence() -> Result<()> {
    let unterminated = "1\ta\ta\tNOUN\t_\t_\t2\tnsubj\t_\t_\n2\tb\tb\tVERB\t_\t_\t0\troot\t_\t_";
    let next = "# sent_id = 2\n1\tc\tc\tVERB\t_\t_\t0\troot\t_\t_\n2\td\td\tNOUN\t_\t_\t1\tnsubj\t_\t_\n\n";

    let mut server = mockito::Server::new();
    let _m1 = server.mock("GET", "/a.conllu").with_status(200).with_body(unterminated).create();
    let _m2 = server.mock("GET", "/b.conllu").with_status(200).with_body(next).create();

    let out = tempdir()?;
    let mut sources = CorpusSources::new();
    sources.insert(
        "irish".to_string(),
        vec![format!("{}/a.conllu", server.url()), format!("{}/b.conllu", server.url())],
    );

    let fetched = CorpusFetcher::new()?.fetch_all(&sources, out.path())?;
    let text = fs::read_to_string(&fetched[0].path)?;
    assert_eq!(text, format!("{}\n\n{}", unterminated, next));
    assert_eq!(fetched[0].bytes as usize, text.len());

    let sentences = read_sentences(&fetched[0].path, ReaderOptions::default())?;
    let lengths: Vec<usize> = sentences.iter().map(|s| s.len()).collect();
    assert_eq!(lengths, vec![2, 2]);
    Ok(())
}

#[test]
fn test_part_ending_in_a_token_line_gets_a_blank_line() -> Result<()> {
    let open_sentence = "1\ta\ta\tNOUN\t_\t_\t0\troot\t_\t_\n";

    let mut server = mockito::Server::new();
    let _m1 = server.mock("GET", "/a.conllu").with_status(200).with_body(open_sentence).create();
    let _m2 = server.mock("GET", "/b.conllu").with_status(200).with_body(PART_TWO).create();

    let out = tempdir()?;
    let mut sources = CorpusSources::new();
    sources.insert(
        "welsh".to_string(),
        vec![format!("{}/a.conllu", server.url()), format!("{}/b.conllu", server.url())],
    );

    let fetched = CorpusFetcher::new()?.fetch_all(&sources, out.path())?;
    assert_eq!(fs::read_to_string(&fetched[0].path)?, format!("{}\n{}", open_sentence, PART_TWO));
    Ok(())
}

#[test]
fn test_progress_hook_sees_every_language_in_order() -> Result<()> {
    let mut server = mockito::Server::new();
    let _m = server.mock("GET", "/part.conllu").with_status(200).with_body(PART_ONE).expect(2).create();

    let dir = tempdir()?;
    let sources_path = dir.path().join("sources.yaml");
    fs::write(
        &sources_path,
        format!("zulu:\n  - {url}/part.conllu\nbasque:\n  - {url}/part.conllu\n", url = server.url()),
    )?;

    let mut events = Vec::new();
    fetch_corpora_with(&sources_path, &dir.path().join("out"), |event| {
        events.push(match event {
            FetchProgress::Planned(n) => format!("planned {}", n),
            FetchProgress::Started(language) => format!("start {}", language),
            FetchProgress::Finished(corpus) => format!("done {} {}", corpus.language, corpus.bytes),
        })
    })?;

    let done = |language: &str| format!("done {} {}", language, PART_ONE.len());
    assert_eq!(
        events,
        vec![
            "planned 2".to_string(),
            "start basque".to_string(),
            done("basque"),
            "start zulu".to_string(),
            done("zulu"),
        ]
    );
    Ok(())
}
