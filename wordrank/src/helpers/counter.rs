use crate::models::config;
use std::path::Path;
use tracing::{debug, warn};
use wordrank_algorithm::{hashtable::MapAlgorithm, probing::ProbingTable, Ranked};
use wordrank_error::Result;
use wordrank_tokenizer::{normalize, stopwords::StopWords};

/// The algorithms managed by wordrank.
#[derive(Debug, Clone)]
pub enum Algorithm {
    Probing(ProbingTable),
    Map(MapAlgorithm),
}

impl From<ProbingTable> for Algorithm {
    /// Implements conversion from a ProbingTable to Algorithm.
    fn from(table: ProbingTable) -> Self {
        Algorithm::Probing(table)
    }
}

impl From<MapAlgorithm> for Algorithm {
    /// Implements conversion from a MapAlgorithm to Algorithm.
    fn from(map: MapAlgorithm) -> Self {
        Algorithm::Map(map)
    }
}

impl Algorithm {
    /// Creates the algorithm chosen in the configuration.
    pub fn new(table: &config::Table, kind: config::Algorithm) -> Result<Self> {
        Ok(match kind {
            config::Algorithm::Probing => {
                ProbingTable::with_capacity(table.capacity)?.into()
            },
            config::Algorithm::Hashmap => MapAlgorithm::default().into(),
        })
    }

    /// Counts one occurrence of a normalized word.
    pub fn set(&mut self, word: &[u8]) -> Result<()> {
        match self {
            Algorithm::Probing(table) => table.insert_or_increment(word),
            Algorithm::Map(map) => {
                map.set(word);
                Ok(())
            },
        }
    }

    /// Number of distinct words counted.
    pub fn len(&self) -> usize {
        match self {
            Algorithm::Probing(table) => table.len(),
            Algorithm::Map(map) => map.len(),
        }
    }

    /// Rank the most used words.
    pub fn rank(&self, length: usize) -> Result<Vec<Ranked>> {
        match self {
            Algorithm::Probing(table) => table.rank(length),
            Algorithm::Map(map) => map.rank(length),
        }
    }
}

/// What happened to the tokens of a source.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Tokens read from the source.
    pub tokens: usize,
    /// Tokens skipped because they are stop words.
    pub excluded: usize,
    /// Tokens dropped because the table was full.
    pub dropped: usize,
}

/// Reads every word of `path` into the algorithm.
///
/// A full table only drops the current word; any other error stops loading.
pub fn load(
    path: &Path,
    max_word_length: usize,
    stop_words: &StopWords,
    algorithm: &mut Algorithm,
) -> Result<Summary> {
    let mut summary = Summary::default();

    for token in wordrank_tokenizer::open(path, max_word_length)? {
        let mut word = token?;
        summary.tokens += 1;

        normalize(&mut word);
        if stop_words.contains(&word) {
            summary.excluded += 1;
            continue;
        }

        if let Err(error) = algorithm.set(&word) {
            if error.is_fatal() {
                return Err(error);
            }

            warn!("{}", error);
            summary.dropped += 1;
        }
    }

    debug!(
        tokens = summary.tokens,
        excluded = summary.excluded,
        dropped = summary.dropped,
        distinct = algorithm.len(),
        "Loaded '{}'.",
        path.display()
    );

    Ok(summary)
}
