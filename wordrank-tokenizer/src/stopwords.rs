//! filters unnecessary words out of the counting.

use crate::normalize;
use std::{
    collections::HashSet,
    fs::OpenOptions,
    io::{BufRead, BufReader},
    path::Path,
};
use wordrank_error::{Error, ErrorType, IoError, Result};

/// Set of normalized words that must not be counted.
#[derive(Debug, Default, Clone)]
pub struct StopWords {
    words: HashSet<Vec<u8>>,
}

impl StopWords {
    /// Adds every word of the iterator, normalized.
    pub fn extend<I, T>(&mut self, words: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        for word in words {
            let mut word = word.as_ref().trim().as_bytes().to_vec();
            if word.is_empty() {
                continue;
            }

            normalize(&mut word);
            self.words.insert(word);
        }
    }

    /// Adds every line from a text file. Blank lines are ignored.
    ///
    /// # Example
    /// ```rust
    /// use std::{fs::File, io::prelude::*};
    /// use wordrank_tokenizer::stopwords::StopWords;
    ///
    /// let path = std::env::temp_dir().join("wordrank-stopwords-doc.txt");
    /// File::create(&path).unwrap().write_all(b"ich\nBIN\n\n").unwrap();
    ///
    /// let mut stop_words = StopWords::default();
    /// stop_words.load(&path).unwrap();
    ///
    /// assert!(stop_words.contains(b"ich"));
    /// assert!(stop_words.contains(b"bin"));
    /// assert!(!stop_words.contains(b"hans"));
    /// ```
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = OpenOptions::new().read(true).open(path).map_err(|error| {
            Error::new(
                ErrorType::InputOutput(IoError::SourceUnavailable),
                Some(Box::new(error)),
                Some(format!("stop words '{}'", path.display())),
            )
        })?;

        let mut words: Vec<String> = vec![];
        for line in BufReader::new(file).lines() {
            words.push(line.map_err(|error| {
                Error::new(
                    ErrorType::InputOutput(IoError::ReadingError),
                    Some(Box::new(error)),
                    Some(format!("stop words '{}'", path.display())),
                )
            })?);
        }
        self.extend(words);

        Ok(())
    }

    /// Whether a normalized word is a stop word.
    pub fn contains(&self, word: &[u8]) -> bool {
        self.words.contains(word)
    }

    /// Number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_normalizes() {
        let mut stop_words = StopWords::default();
        stop_words.extend(["The", " a ", ""]);

        assert_eq!(stop_words.len(), 2);
        assert!(stop_words.contains(b"the"));
        assert!(stop_words.contains(b"a"));
        assert!(!stop_words.contains(b"The"));
    }

    #[test]
    fn test_missing_file() {
        let error = StopWords::default()
            .load("./no-such-stopwords")
            .unwrap_err();

        assert_eq!(error.etype, ErrorType::InputOutput(IoError::SourceUnavailable));
    }
}
