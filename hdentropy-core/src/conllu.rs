//! Streaming reader for CoNLL-U style treebanks.
//!
//! [`TreeReader`] makes one linear pass over a line-oriented corpus and yields
//! one [`Sentence`] at a time. Only the four columns needed for head direction
//! counting are kept: the index (to drop multi-word ranges), the POS tag, the
//! head index and the dependency relation.
//!
//! License: MIT OR Apache-2.0

use log::{debug, trace};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::errors::{HdeError, HdeResult};

/// Minimum number of tab-separated columns on a token line.
pub const MIN_FIELDS: usize = 8;

const INDEX_FIELD: usize = 0;
const POS_FIELD: usize = 3;
const HEAD_FIELD: usize = 6;
const RELATION_FIELD: usize = 7;

/// One word of a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Part-of-speech tag.
    pub pos: String,
    /// 1-based position of the governing token, `0` for the root.
    pub head: usize,
    /// Dependency relation label.
    pub relation: String,
}

impl Token {
    pub fn new(pos: impl Into<String>, head: usize, relation: impl Into<String>) -> Self {
        Self {
            pos: pos.into(),
            head,
            relation: relation.into(),
        }
    }
}

/// An ordered, 1-indexed sequence of tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at a 1-based position, as referenced by head indices.
    pub fn get(&self, position: usize) -> Option<&Token> {
        position.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterates tokens together with their 1-based positions.
    pub fn positioned(&self) -> impl Iterator<Item = (usize, &Token)> {
        self.tokens.iter().enumerate().map(|(i, t)| (i + 1, t))
    }
}

impl From<Vec<Token>> for Sentence {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

/// Options for [`TreeReader`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Emit tokens still pending at end of input as a final sentence.
    /// When `false` they are dropped, so a corpus must end with a blank or
    /// comment line for its last sentence to count.
    pub flush_trailing: bool,
}

/// A lazy, non-restartable sequence of sentences over a buffered source.
///
/// Yields `Err` at most once: after a parse or I/O error the reader is
/// exhausted.
pub struct TreeReader<R> {
    lines: Lines<R>,
    source_name: String,
    line_no: usize,
    pending: Vec<Token>,
    options: ReaderOptions,
    finished: bool,
}

impl TreeReader<BufReader<File>> {
    /// Opens a corpus file. The handle is released when the reader is dropped.
    pub fn open<P: AsRef<Path>>(path: P, options: ReaderOptions) -> HdeResult<Self> {
        let path = path.as_ref();
        debug!("Opening corpus {}", path.display());
        let file = File::open(path)?;
        Ok(Self::new(
            BufReader::new(file),
            path.display().to_string(),
            options,
        ))
    }
}

impl<R: BufRead> TreeReader<R> {
    /// Wraps any buffered reader. `source_name` appears in parse errors.
    pub fn new(reader: R, source_name: impl Into<String>, options: ReaderOptions) -> Self {
        Self {
            lines: reader.lines(),
            source_name: source_name.into(),
            line_no: 0,
            pending: Vec::new(),
            options,
            finished: false,
        }
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    fn take_pending(&mut self) -> Sentence {
        Sentence::new(std::mem::take(&mut self.pending))
    }

    fn fail(&mut self, err: HdeError) -> Option<HdeResult<Sentence>> {
        self.finished = true;
        self.pending.clear();
        Some(Err(err))
    }
}

impl<R: BufRead> Iterator for TreeReader<R> {
    type Item = HdeResult<Sentence>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => return self.fail(HdeError::IoError(e)),
                None => {
                    self.finished = true;
                    if self.pending.is_empty() {
                        return None;
                    }
                    if self.options.flush_trailing {
                        debug!("{}: flushing undelimited final sentence", self.source_name);
                        return Some(Ok(self.take_pending()));
                    }
                    debug!(
                        "{}: dropping {} undelimited trailing tokens at end of input",
                        self.source_name,
                        self.pending.len()
                    );
                    self.pending.clear();
                    return None;
                }
            };
            self.line_no += 1;

            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                if !self.pending.is_empty() {
                    return Some(Ok(self.take_pending()));
                }
                continue;
            }

            match parse_token_line(line, &self.source_name, self.line_no) {
                Ok(Some(token)) => self.pending.push(token),
                Ok(None) => trace!("{}:{}: skipping non-atomic token", self.source_name, self.line_no),
                Err(e) => return self.fail(e),
            }
        }
    }
}

/// Interprets one token line. Returns `Ok(None)` for multi-word ranges
/// (`3-4`) and empty nodes (`8.1`), which take no part in the tree.
pub fn parse_token_line(line: &str, source_name: &str, line_no: usize) -> HdeResult<Option<Token>> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < MIN_FIELDS {
        return Err(HdeError::Parse {
            source_name: source_name.to_string(),
            line: line_no,
            reason: format!(
                "expected at least {} tab-separated fields, found {}",
                MIN_FIELDS,
                fields.len()
            ),
        });
    }

    let index = fields[INDEX_FIELD];
    if index.contains('-') || index.contains('.') {
        return Ok(None);
    }

    let head = fields[HEAD_FIELD].parse::<usize>().map_err(|_| HdeError::Parse {
        source_name: source_name.to_string(),
        line: line_no,
        reason: format!("head field '{}' is not a non-negative integer", fields[HEAD_FIELD]),
    })?;

    Ok(Some(Token::new(fields[POS_FIELD], head, fields[RELATION_FIELD])))
}

/// Reads every sentence of a corpus file into memory, in order.
pub fn read_sentences<P: AsRef<Path>>(path: P, options: ReaderOptions) -> HdeResult<Vec<Sentence>> {
    TreeReader::open(path, options)?.collect()
}
