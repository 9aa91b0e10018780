use crate::{
    rank::{self, Candidate, Ranked},
    Word,
};
use ahash::AHashMap;
use wordrank_error::Result;

#[derive(Debug, Default, Clone, Copy)]
struct Counter {
    count: usize,
    first_seen: usize,
}

/// Structure containing the data required by the HashMap algorithm.
#[derive(Debug, Default, Clone)]
pub struct MapAlgorithm {
    /// Data from the HashMap.
    data: AHashMap<Word, Counter>,
}

impl MapAlgorithm {
    /// Adds one occurrence of `word` to the HashMap.
    pub fn set(&mut self, word: &[u8]) {
        if let Some(counter) = self.data.get_mut(word) {
            counter.count += 1;
        } else {
            let first_seen = self.data.len();
            self.data.insert(
                Word::from(word),
                Counter {
                    count: 1,
                    first_seen,
                },
            );
        }
    }

    /// Number of occurrences of `word`.
    pub fn get(&self, word: &[u8]) -> Option<usize> {
        self.data.get(word).map(|counter| counter.count)
    }

    /// Number of distinct words counted.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no word has been counted yet.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Rank the most used words.
    pub fn rank(&self, length: usize) -> Result<Vec<Ranked>> {
        rank::top_n(
            self.data.iter().map(|(word, counter)| Candidate {
                word,
                count: counter.count,
                first_seen: counter.first_seen,
            }),
            self.data.len(),
            length,
        )
    }
}
