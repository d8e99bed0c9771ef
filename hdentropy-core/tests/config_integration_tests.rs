// hdentropy-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use hdentropy_core::config::{self, ConfigOverrides, EstimatorConfig};

fn yaml_file(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

#[test]
fn test_load_full_config() -> Result<()> {
    let file = yaml_file(
        r#"
corpus_extension: conll
sentence_cap: 250
flush_trailing: true
fail_fast: true
output_file_name: entropy.csv
"#,
    )?;
    let config = EstimatorConfig::load_from_file(file.path())?;
    assert_eq!(config.corpus_extension, "conll");
    assert_eq!(config.sentence_cap, 250);
    assert!(config.flush_trailing);
    assert!(config.fail_fast);
    assert_eq!(config.output_file_name, "entropy.csv");
    Ok(())
}

#[test]
fn test_missing_keys_take_defaults() -> Result<()> {
    let file = yaml_file("flush_trailing: true\n")?;
    let config = EstimatorConfig::load_from_file(file.path())?;
    assert_eq!(config.sentence_cap, config::DEFAULT_SENTENCE_CAP);
    assert_eq!(config.corpus_extension, config::DEFAULT_CORPUS_EXTENSION);
    assert!(config.flush_trailing);
    assert!(!config.fail_fast);
    Ok(())
}

#[test]
fn test_invalid_values_are_rejected() -> Result<()> {
    let file = yaml_file("sentence_cap: 0\ncorpus_extension: \".conllu\"\n")?;
    let err = EstimatorConfig::load_from_file(file.path()).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("sentence_cap"), "{}", msg);
    assert!(msg.contains("corpus_extension"), "{}", msg);
    Ok(())
}

#[test]
fn test_unparseable_yaml_is_an_error() -> Result<()> {
    let file = yaml_file("sentence_cap: [not, a, number]\n")?;
    let err = EstimatorConfig::load_from_file(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
    Ok(())
}

#[test]
fn test_missing_file_is_an_error() {
    let err = EstimatorConfig::load_from_file("/definitely/not/here.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_cli_overrides_win_over_file() -> Result<()> {
    let file = yaml_file("sentence_cap: 250\nfail_fast: true\n")?;
    let base = EstimatorConfig::load_from_file(file.path())?;
    let merged = config::merge_overrides(
        base,
        &ConfigOverrides {
            sentence_cap: Some(10),
            fail_fast: Some(false),
            ..Default::default()
        },
    )?;
    assert_eq!(merged.sentence_cap, 10);
    assert!(!merged.fail_fast);
    Ok(())
}
