use crate::Word;
use wordrank_error::{Error, ErrorType, Result};

/// A word of the leaderboard.
///
/// It owns its word, so the table it comes from can be dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranked {
    /// The word in letters.
    pub word: Word,
    /// Number of times the word appears in the source.
    pub occurrence: usize,
}

/// A counted word seen by the ranker, borrowed from an algorithm.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// The counted word.
    pub word: &'a Word,
    /// Number of occurrences.
    pub count: usize,
    /// Order in which the word was first counted, starting at 0.
    pub first_seen: usize,
}

/// Gathers the `total` candidates of an algorithm into a list reserved
/// upfront, so running out of memory is reported instead of aborting.
fn collect<'a, I>(candidates: I, total: usize) -> Result<Vec<Candidate<'a>>>
where
    I: IntoIterator<Item = Candidate<'a>>,
{
    let mut working: Vec<Candidate<'a>> = Vec::new();
    working.try_reserve_exact(total).map_err(|error| {
        Error::new(
            ErrorType::AllocationFailure,
            Some(Box::new(error)),
            Some("while collecting counted words".to_string()),
        )
    })?;
    working.extend(candidates.into_iter().take(total));

    Ok(working)
}

/// Ranks the `length` most used words among `total` candidates, by
/// descending count.
///
/// Equal counts keep the order in which the words were first seen. Fewer
/// than `length` words are returned when fewer were counted.
///
/// # Example
/// ```rust
/// use wordrank_algorithm::{rank::{top_n, Candidate}, Word};
///
/// let (the, cat) = (Word::from("the"), Word::from("cat"));
/// let ranked = top_n(
///     [
///         Candidate { word: &cat, count: 1, first_seen: 1 },
///         Candidate { word: &the, count: 3, first_seen: 0 },
///     ],
///     2,
///     5,
/// )
/// .unwrap();
///
/// assert_eq!(ranked.len(), 2);
/// assert_eq!(ranked[0].word, the);
/// assert_eq!(ranked[0].occurrence, 3);
/// ```
pub fn top_n<'a, I>(
    candidates: I,
    total: usize,
    length: usize,
) -> Result<Vec<Ranked>>
where
    I: IntoIterator<Item = Candidate<'a>>,
{
    let mut working = collect(candidates, total)?;

    working.sort_unstable_by(|a, b| {
        b.count.cmp(&a.count).then(a.first_seen.cmp(&b.first_seen))
    });

    let limit = length.min(working.len());
    let mut ranking: Vec<Ranked> = Vec::new();
    ranking.try_reserve_exact(limit).map_err(|error| {
        Error::new(
            ErrorType::AllocationFailure,
            Some(Box::new(error)),
            Some("while allocating results".to_string()),
        )
    })?;

    ranking.extend(working[..limit].iter().map(|candidate| Ranked {
        word: candidate.word.clone(),
        occurrence: candidate.count,
    }));

    Ok(ranking)
}
