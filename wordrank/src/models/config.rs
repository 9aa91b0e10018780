use serde::Deserialize;
use std::path::PathBuf;
use wordrank_algorithm::probing::DEFAULT_CAPACITY;
use wordrank_tokenizer::DEFAULT_MAX_WORD_LENGTH;

/// The data in the configuration file for setting up wordrank.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub table: Table,
    pub service: Service,
}

/// Sizing of the counting table and of the words.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Table {
    /// Number of slots of the probing table.
    pub capacity: usize,
    /// Longest word, in bytes. Longer tokens are split.
    pub max_word_length: usize,
}

impl Default for Table {
    fn default() -> Self {
        Table {
            capacity: DEFAULT_CAPACITY,
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
        }
    }
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Service {
    pub algorithm: Algorithm,
    /// Words never counted.
    pub exclude: Vec<String>,
    /// File listing more words to exclude, one per line.
    pub stopwords: Option<PathBuf>,
}

#[derive(
    Deserialize, clap::ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq,
)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Fixed-capacity table with linear probing.
    #[default]
    Probing,
    /// Growable HashMap.
    Hashmap,
}
