use crate::{
    djb2,
    rank::{self, Candidate, Ranked},
    Word,
};
use wordrank_error::{Error, ErrorType, Result, TableError, UsageError};

/// Default number of slots of a [`ProbingTable`].
pub const DEFAULT_CAPACITY: usize = 2000;

/// A counted word stored in a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The word in letters. Never changes once the slot is taken.
    pub word: Word,
    /// Number of occurrences, at least 1.
    pub count: usize,
    /// Order in which the word was first inserted.
    pub first_seen: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot {
    Empty,
    Occupied(Entry),
}

/// Fixed-capacity open-addressed table counting words.
///
/// Collisions are resolved with linear probing starting at
/// `djb2(word) % capacity`. The table never grows: once every slot is taken,
/// unknown words are refused with [`TableError::Full`].
#[derive(Debug, Clone)]
pub struct ProbingTable {
    slots: Vec<Slot>,
    occupied: usize,
}

impl ProbingTable {
    /// Creates an empty table with `capacity` slots.
    ///
    /// # Example
    /// ```rust
    /// use wordrank_algorithm::probing::ProbingTable;
    ///
    /// let mut table = ProbingTable::with_capacity(2000).unwrap();
    /// table.insert_or_increment(b"the").unwrap();
    /// table.insert_or_increment(b"the").unwrap();
    ///
    /// assert_eq!(table.get(b"the"), Some(2));
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::new(
                ErrorType::Usage(UsageError::InvalidCapacity),
                None,
                Some("got `0`".to_string()),
            ));
        }

        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity).map_err(|error| {
            Error::new(
                ErrorType::AllocationFailure,
                Some(Box::new(error)),
                Some(format!("hash table of {} slots", capacity)),
            )
        })?;
        slots.resize(capacity, Slot::Empty);

        Ok(ProbingTable { slots, occupied: 0 })
    }

    /// Number of distinct words counted.
    pub fn len(&self) -> usize {
        self.occupied
    }

    /// Whether no word has been counted yet.
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    #[inline]
    fn home(&self, word: &[u8]) -> usize {
        djb2::hash(word) as usize % self.slots.len()
    }

    /// Counts one more occurrence of `word`, taking a free slot the first
    /// time it is seen.
    ///
    /// At most `capacity` slots are probed. When none of them is free or holds
    /// `word`, the table is left untouched and [`TableError::Full`] is
    /// returned.
    pub fn insert_or_increment(&mut self, word: &[u8]) -> Result<()> {
        let capacity = self.slots.len();
        let home = self.home(word);

        for step in 0..capacity {
            let index = (home + step) % capacity;

            let slot = &mut self.slots[index];
            match slot {
                Slot::Empty => {
                    *slot = Slot::Occupied(Entry {
                        word: Word::from(word),
                        count: 1,
                        first_seen: self.occupied,
                    });
                    self.occupied += 1;
                    return Ok(());
                },
                Slot::Occupied(entry) if entry.word.as_bytes() == word => {
                    entry.count += 1;
                    return Ok(());
                },
                Slot::Occupied(_) => {},
            }
        }

        Err(Error::new(
            ErrorType::Table(TableError::Full),
            None,
            Some(format!(
                "cannot insert '{}'",
                String::from_utf8_lossy(word)
            )),
        ))
    }

    /// Number of occurrences of `word`, following the same probe sequence
    /// as insertion.
    pub fn get(&self, word: &[u8]) -> Option<usize> {
        let capacity = self.slots.len();
        let home = self.home(word);

        for step in 0..capacity {
            match &self.slots[(home + step) % capacity] {
                Slot::Empty => return None,
                Slot::Occupied(entry) if entry.word.as_bytes() == word => {
                    return Some(entry.count)
                },
                Slot::Occupied(_) => {},
            }
        }

        None
    }

    /// Occupied entries, in slot order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied(entry) => Some(entry),
            Slot::Empty => None,
        })
    }

    #[cfg(test)]
    fn position(&self, word: &[u8]) -> Option<usize> {
        self.slots.iter().position(|slot| {
            matches!(slot, Slot::Occupied(entry) if entry.word.as_bytes() == word)
        })
    }

    /// Rank the most used words.
    pub fn rank(&self, length: usize) -> Result<Vec<Ranked>> {
        rank::top_n(
            self.entries().map(|entry| Candidate {
                word: &entry.word,
                count: entry.count,
                first_seen: entry.first_seen,
            }),
            self.occupied,
            length,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_each_word_once() {
        let mut table = ProbingTable::with_capacity(DEFAULT_CAPACITY).unwrap();

        for word in ["the", "cat", "the", "the", "sat"] {
            table.insert_or_increment(word.as_bytes()).unwrap();
        }

        assert_eq!(table.len(), 3);
        assert_eq!(table.get(b"the"), Some(3));
        assert_eq!(table.get(b"cat"), Some(1));
        assert_eq!(table.get(b"dog"), None);
        assert_eq!(
            table
                .entries()
                .filter(|entry| entry.word.as_bytes() == b"the")
                .count(),
            1
        );
    }

    #[test]
    fn test_home_slot_is_djb2_modulo_capacity() {
        let mut table = ProbingTable::with_capacity(DEFAULT_CAPACITY).unwrap();
        table.insert_or_increment(b"the").unwrap();
        table.insert_or_increment(b"The").unwrap();

        // 193506854 % 2000 and 193472006 % 2000.
        assert_eq!(table.position(b"the"), Some(854));
        assert_eq!(table.position(b"The"), Some(6));
    }

    #[test]
    fn test_linear_probing_wraps_around() {
        let mut table = ProbingTable::with_capacity(2).unwrap();

        // "b" (177671) and "d" (177673) both start on slot 1.
        table.insert_or_increment(b"b").unwrap();
        table.insert_or_increment(b"d").unwrap();
        table.insert_or_increment(b"d").unwrap();

        assert_eq!(table.position(b"b"), Some(1));
        assert_eq!(table.position(b"d"), Some(0));
        assert_eq!(table.get(b"d"), Some(2));

        // "f" collides too and finds no free slot.
        assert!(table.insert_or_increment(b"f").is_err());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_full_table_refuses_new_words() {
        let mut table = ProbingTable::with_capacity(1).unwrap();
        table.insert_or_increment(b"first").unwrap();

        let error = table.insert_or_increment(b"second").unwrap_err();
        assert_eq!(error.etype, ErrorType::Table(TableError::Full));
        assert!(!error.is_fatal());

        // Known words are still counted.
        table.insert_or_increment(b"first").unwrap();
        assert_eq!(table.get(b"first"), Some(2));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_zero_capacity() {
        assert_eq!(
            ProbingTable::with_capacity(0).unwrap_err().etype,
            ErrorType::Usage(UsageError::InvalidCapacity)
        );
    }

    #[test]
    fn test_rank_ties_by_first_insertion() {
        let mut table = ProbingTable::with_capacity(DEFAULT_CAPACITY).unwrap();

        for word in ["zebra", "apple", "the", "mango", "the"] {
            table.insert_or_increment(word.as_bytes()).unwrap();
        }

        let ranking = table.rank(4).unwrap();
        let words: Vec<String> =
            ranking.iter().map(|ranked| ranked.word.to_string()).collect();

        assert_eq!(words, ["the", "zebra", "apple", "mango"]);
        assert_eq!(ranking[0].occurrence, 2);
    }

    #[test]
    fn test_ranking_outlives_table() {
        let ranking = {
            let mut table = ProbingTable::with_capacity(8).unwrap();
            table.insert_or_increment(b"kept").unwrap();
            table.rank(1).unwrap()
        };

        assert_eq!(ranking[0].word, Word::from("kept"));
    }

    #[test]
    fn test_rank_sees_every_entry() {
        let mut table = ProbingTable::with_capacity(DEFAULT_CAPACITY).unwrap();
        for n in 0..1500 {
            table.insert_or_increment(n.to_string().as_bytes()).unwrap();
        }

        assert_eq!(table.entries().size_hint().0, 0);
        assert_eq!(table.rank(DEFAULT_CAPACITY).unwrap().len(), 1500);
    }

    #[test]
    fn test_empty_table_ranks_nothing() {
        let table = ProbingTable::with_capacity(DEFAULT_CAPACITY).unwrap();

        assert!(table.is_empty());
        assert!(table.rank(10).unwrap().is_empty());
    }
}
