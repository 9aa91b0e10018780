use crate::models::config::Algorithm;
use clap::Parser;
use std::{num::NonZeroUsize, path::PathBuf};
use wordrank_error::{Error, ErrorType, UsageError};

/// Rank the most frequently used words of a text file.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Args {
    /// Text file to read.
    pub filename: PathBuf,

    /// Number of words to show.
    #[arg(value_parser = parse_length, allow_negative_numbers = true)]
    pub length: NonZeroUsize,

    /// YAML configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of slots of the probing table.
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Longest word in bytes, longer tokens are split.
    #[arg(long)]
    pub max_word_length: Option<usize>,

    /// Counting algorithm.
    #[arg(long, value_enum)]
    pub algorithm: Option<Algorithm>,

    /// Word to leave out of the ranking, can be repeated.
    #[arg(long = "exclude", value_name = "WORD")]
    pub exclude: Vec<String>,

    /// File listing words to leave out, one per line.
    #[arg(long)]
    pub stopwords: Option<PathBuf>,

    /// Print the number of occurrences next to each word.
    #[arg(long)]
    pub counts: bool,

    /// Enable debug logs.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses the number of words to rank, refusing zero, negative and
/// non-numeric values.
fn parse_length(value: &str) -> Result<NonZeroUsize, Error> {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or_else(|| {
            Error::new(
                ErrorType::Usage(UsageError::InvalidCount),
                None,
                Some(format!("got `{}`", value)),
            )
        })
}
