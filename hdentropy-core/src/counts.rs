//! Joint counts of local tree features against head direction.
//!
//! A local tree feature is the triple (dependent POS, head POS, relation).
//! For every qualifying dependent the counter records whether it precedes
//! (`Initial`) or follows (`Final`) its head. Root attachments and
//! punctuation dependents carry no directional signal and are skipped.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use crate::conllu::Sentence;
use crate::errors::{HdeError, HdeResult};

/// POS tag whose dependents are excluded from counting.
pub const PUNCT_TAG: &str = "PUNCT";

/// Linear order of a dependent relative to its head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// The dependent precedes its head.
    Initial,
    /// The dependent follows its head.
    Final,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Initial, Direction::Final];

    /// Direction of a dependent at `dependent` attached to a head at `head`,
    /// both 1-based. Equal positions have no direction.
    pub fn between(dependent: usize, head: usize) -> Option<Direction> {
        match dependent.cmp(&head) {
            std::cmp::Ordering::Less => Some(Direction::Initial),
            std::cmp::Ordering::Greater => Some(Direction::Final),
            std::cmp::Ordering::Equal => None,
        }
    }

    fn slot(self) -> usize {
        match self {
            Direction::Initial => 0,
            Direction::Final => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Initial => "INITIAL",
            Direction::Final => "FINAL",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The (dependent POS, head POS, relation) triple used as a table key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocalTree {
    pub dependent_pos: String,
    pub head_pos: String,
    pub relation: String,
}

impl LocalTree {
    pub fn new(
        dependent_pos: impl Into<String>,
        head_pos: impl Into<String>,
        relation: impl Into<String>,
    ) -> Self {
        Self {
            dependent_pos: dependent_pos.into(),
            head_pos: head_pos.into(),
            relation: relation.into(),
        }
    }
}

impl fmt::Display for LocalTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.dependent_pos, self.head_pos, self.relation)
    }
}

/// Per-feature direction counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionCounts([u64; 2]);

impl DirectionCounts {
    pub fn get(&self, direction: Direction) -> u64 {
        self.0[direction.slot()]
    }

    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// Directions observed at least once, with their counts.
    pub fn observed(&self) -> impl Iterator<Item = (Direction, u64)> + '_ {
        Direction::ALL
            .into_iter()
            .map(|d| (d, self.get(d)))
            .filter(|&(_, c)| c > 0)
    }

    fn increment(&mut self, direction: Direction) {
        self.0[direction.slot()] += 1;
    }
}

/// Mapping from local tree feature to direction counts.
///
/// Lookups of unseen features or directions return zero and never insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JointCountTable {
    counts: BTreeMap<LocalTree, DirectionCounts>,
    sentences: usize,
}

impl JointCountTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, feature: LocalTree, direction: Direction) {
        self.counts.entry(feature).or_default().increment(direction);
    }

    pub fn get(&self, feature: &LocalTree, direction: Direction) -> u64 {
        self.counts.get(feature).map_or(0, |c| c.get(direction))
    }

    pub fn feature_total(&self, feature: &LocalTree) -> u64 {
        self.counts.get(feature).map_or(0, DirectionCounts::total)
    }

    pub fn contains(&self, feature: &LocalTree) -> bool {
        self.counts.contains_key(feature)
    }

    /// Sum of all counts across all features and directions.
    pub fn total(&self) -> u64 {
        self.counts.values().map(DirectionCounts::total).sum()
    }

    /// Number of distinct features.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of sentences that contributed to the table.
    pub fn sentences_counted(&self) -> usize {
        self.sentences
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LocalTree, &DirectionCounts)> {
        self.counts.iter()
    }

    /// Count rows in feature order, for the entropy computation.
    pub fn rows(&self) -> Vec<DirectionCounts> {
        self.counts.values().copied().collect()
    }
}

impl AsRef<[u64]> for DirectionCounts {
    fn as_ref(&self) -> &[u64] {
        self.as_slice()
    }
}

/// Accumulates a [`JointCountTable`] sentence by sentence, honouring a cap.
#[derive(Debug, Default)]
pub struct JointCounter {
    table: JointCountTable,
    max_sentences: Option<usize>,
    seen: usize,
}

impl JointCounter {
    /// `max_sentences = None` counts every sentence.
    pub fn new(max_sentences: Option<usize>) -> Self {
        Self {
            table: JointCountTable::new(),
            max_sentences,
            seen: 0,
        }
    }

    /// True once the cap is reached; later sentences are skipped.
    pub fn is_saturated(&self) -> bool {
        self.max_sentences.is_some_and(|cap| self.table.sentences >= cap)
    }

    /// Adds the qualifying dependents of one sentence to the table.
    pub fn add_sentence(&mut self, sentence: &Sentence) -> HdeResult<()> {
        self.seen += 1;
        if self.is_saturated() {
            return Ok(());
        }

        for (position, token) in sentence.positioned() {
            if token.head == 0 || token.pos == PUNCT_TAG {
                continue;
            }
            let head = sentence.get(token.head).ok_or(HdeError::HeadOutOfRange {
                sentence: self.seen,
                token: position,
                head: token.head,
                len: sentence.len(),
            })?;
            let direction = Direction::between(position, token.head).ok_or(HdeError::SelfAttachment {
                sentence: self.seen,
                token: position,
            })?;

            self.table.increment(
                LocalTree::new(token.pos.as_str(), head.pos.as_str(), token.relation.as_str()),
                direction,
            );
        }

        self.table.sentences += 1;
        Ok(())
    }

    pub fn finish(self) -> JointCountTable {
        debug!(
            "Joint counts finalized: {} sentences counted of {} seen, {} features, {} observations",
            self.table.sentences,
            self.seen,
            self.table.len(),
            self.table.total()
        );
        self.table
    }
}

/// Builds the joint count table from in-memory sentences.
pub fn count_sentences<S, I>(sentences: I, max_sentences: Option<usize>) -> HdeResult<JointCountTable>
where
    S: Borrow<Sentence>,
    I: IntoIterator<Item = S>,
{
    let mut counter = JointCounter::new(max_sentences);
    for sentence in sentences {
        counter.add_sentence(sentence.borrow())?;
    }
    Ok(counter.finish())
}

/// Builds the joint count table from a fallible sentence stream such as a
/// [`TreeReader`](crate::conllu::TreeReader).
///
/// The stream is drained to the end even past the cap, so a malformed line
/// anywhere in the corpus still fails the pass.
pub fn joint_counts<I>(sentences: I, max_sentences: Option<usize>) -> HdeResult<JointCountTable>
where
    I: IntoIterator<Item = HdeResult<Sentence>>,
{
    let mut counter = JointCounter::new(max_sentences);
    for sentence in sentences {
        counter.add_sentence(&sentence?)?;
    }
    Ok(counter.finish())
}
