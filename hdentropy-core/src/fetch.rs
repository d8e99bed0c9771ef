//! Download of treebanks listed in a YAML sources file.
//!
//! The sources file maps a language identifier to the URLs of its corpus
//! parts:
//!
//! ```yaml
//! english:
//!   - https://example.org/en_ewt-ud-train.conllu
//!   - https://example.org/en_ewt-ud-dev.conllu
//! french:
//!   - https://example.org/fr_gsd-ud-train.conllu
//! ```
//!
//! Every part is appended, in order, to `<output_dir>/<language>.conllu`.
//! Parts are kept apart by a blank line, so a part that stops mid-line or
//! without a closing delimiter cannot merge into the first sentence of the
//! next one.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use reqwest::blocking::Client;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::DEFAULT_CORPUS_EXTENSION;
use crate::errors::{HdeError, HdeResult};

/// Language identifier to corpus URLs, iterated in language order.
pub type CorpusSources = BTreeMap<String, Vec<String>>;

/// A corpus file written by the fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedCorpus {
    pub language: String,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Reads and validates a sources file.
pub fn load_sources<P: AsRef<Path>>(path: P) -> Result<CorpusSources> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read sources file {}", path.display()))?;
    let sources: CorpusSources = serde_yml::from_str(&text)
        .with_context(|| format!("Failed to parse sources file {}", path.display()))?;

    for (language, urls) in &sources {
        validate_language(language)?;
        if urls.is_empty() {
            return Err(HdeError::Config(format!("language '{}' lists no URLs", language)).into());
        }
    }
    debug!("Loaded sources for {} languages from {}", sources.len(), path.display());
    Ok(sources)
}

fn validate_language(language: &str) -> HdeResult<()> {
    let bad = language.is_empty()
        || language == "."
        || language == ".."
        || language.contains(['/', '\\']);
    if bad {
        return Err(HdeError::Config(format!(
            "'{}' is not usable as a corpus file name",
            language
        )));
    }
    Ok(())
}

/// Progress of a multi-language download, reported to a caller-supplied hook.
#[derive(Debug, Clone, Copy)]
pub enum FetchProgress<'a> {
    /// The sources are loaded; this many languages will be fetched.
    Planned(usize),
    /// The download of a language is starting.
    Started(&'a str),
    /// A language has been written in full.
    Finished(&'a FetchedCorpus),
}

/// Writer that remembers the last two bytes passed through it.
struct PartWriter<W: Write> {
    inner: W,
    tail: [u8; 2],
    written: u64,
}

impl<W: Write> PartWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, tail: [0; 2], written: 0 }
    }

    /// Bytes needed so the next part starts after a blank line.
    fn separator(&self) -> &'static [u8] {
        match self.tail {
            _ if self.written == 0 => b"".as_slice(),
            [_, last] if last != b'\n' => b"\n\n".as_slice(),
            [prev, _] if prev != b'\n' => b"\n".as_slice(),
            _ => b"".as_slice(),
        }
    }
}

impl<W: Write> Write for PartWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        match &buf[..n] {
            [] => {}
            [only] => self.tail = [self.tail[1], *only],
            [.., prev, last] => self.tail = [*prev, *last],
        }
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Blocking HTTP downloader for corpus files.
#[derive(Debug, Clone)]
pub struct CorpusFetcher {
    client: Client,
}

impl CorpusFetcher {
    pub fn new() -> HdeResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("hdentropy/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HdeError::Fetch(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Downloads every URL of one language into a single corpus file.
    /// A partially written file is removed on failure.
    pub fn fetch_language(&self, language: &str, urls: &[String], output_dir: &Path) -> HdeResult<FetchedCorpus> {
        validate_language(language)?;
        let path = output_dir.join(format!("{}.{}", language, DEFAULT_CORPUS_EXTENSION));

        let result = self.download_parts(language, urls, &path);
        if result.is_err() {
            if let Err(e) = fs::remove_file(&path) {
                if e.kind() != io::ErrorKind::NotFound {
                    warn!("Could not remove partial corpus {}: {}", path.display(), e);
                }
            }
        }
        let bytes = result?;

        info!("Fetched '{}' ({} bytes) into {}", language, bytes, path.display());
        Ok(FetchedCorpus {
            language: language.to_string(),
            path,
            bytes,
        })
    }

    fn download_parts(&self, language: &str, urls: &[String], path: &Path) -> HdeResult<u64> {
        let mut writer = PartWriter::new(BufWriter::new(File::create(path)?));

        for url in urls {
            debug!("Downloading {} for '{}'", url, language);
            let mut response = self
                .client
                .get(url)
                .send()
                .map_err(|e| HdeError::Fetch(format!("{} ({}): {}", language, url, e)))?;

            let status = response.status();
            if !status.is_success() {
                return Err(HdeError::Fetch(format!(
                    "{} ({}): server answered {}",
                    language, url, status
                )));
            }

            let separator = writer.separator();
            if !separator.is_empty() {
                debug!("Previous part for '{}' ends without a delimiter; inserting one", language);
                writer.write_all(separator)?;
            }
            response
                .copy_to(&mut writer)
                .map_err(|e| HdeError::Fetch(format!("{} ({}): {}", language, url, e)))?;
        }

        writer.flush()?;
        Ok(writer.written)
    }

    /// Downloads every language of `sources` into `output_dir`, creating it if needed.
    pub fn fetch_all(&self, sources: &CorpusSources, output_dir: &Path) -> HdeResult<Vec<FetchedCorpus>> {
        self.fetch_all_with(sources, output_dir, |_| {})
    }

    /// Like [`CorpusFetcher::fetch_all`], reporting each language to `on_progress`.
    pub fn fetch_all_with<F>(
        &self,
        sources: &CorpusSources,
        output_dir: &Path,
        mut on_progress: F,
    ) -> HdeResult<Vec<FetchedCorpus>>
    where
        F: FnMut(FetchProgress<'_>),
    {
        fs::create_dir_all(output_dir)?;
        on_progress(FetchProgress::Planned(sources.len()));

        let mut fetched = Vec::with_capacity(sources.len());
        for (language, urls) in sources {
            on_progress(FetchProgress::Started(language));
            let corpus = self.fetch_language(language, urls, output_dir)?;
            on_progress(FetchProgress::Finished(&corpus));
            fetched.push(corpus);
        }
        Ok(fetched)
    }
}

/// Loads a sources file and downloads every corpus it lists.
pub fn fetch_corpora(sources_path: &Path, output_dir: &Path) -> Result<Vec<FetchedCorpus>> {
    fetch_corpora_with(sources_path, output_dir, |_| {})
}

/// [`fetch_corpora`] with a progress hook, used by the CLI's progress bar.
pub fn fetch_corpora_with<F>(sources_path: &Path, output_dir: &Path, on_progress: F) -> Result<Vec<FetchedCorpus>>
where
    F: FnMut(FetchProgress<'_>),
{
    let sources = load_sources(sources_path)?;
    info!("Fetching {} corpora into {}", sources.len(), output_dir.display());
    let fetcher = CorpusFetcher::new()?;
    let fetched = fetcher
        .fetch_all_with(&sources, output_dir, on_progress)
        .with_context(|| format!("Failed to fetch corpora listed in {}", sources_path.display()))?;
    Ok(fetched)
}
