use std::{fmt, path::Path};
use wordrank_algorithm::Ranked;

/// Answer with a ranking of the most frequently used words.
#[derive(Debug, Clone)]
pub struct Leaderboard<'a> {
    /// Number of words asked for.
    pub length: usize,
    /// File the words were read from.
    pub source: &'a Path,
    /// Lists of the most frequently found words.
    pub words: Vec<Ranked>,
    /// Print the occurrences next to the words.
    pub counts: bool,
}

impl fmt::Display for Leaderboard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Top {} words in '{}':",
            self.length,
            self.source.display()
        )?;

        for (rank, ranked) in self.words.iter().enumerate() {
            if self.counts {
                writeln!(
                    f,
                    "{:>2}) {} ({})",
                    rank + 1,
                    ranked.word,
                    ranked.occurrence
                )?;
            } else {
                writeln!(f, "{:>2}) {}", rank + 1, ranked.word)?;
            }
        }

        Ok(())
    }
}
