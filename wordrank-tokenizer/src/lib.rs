//! # wordrank-tokenizer
//!
//! splits a text source into whitespace-delimited, lowercased words.

#![forbid(unsafe_code)]
#![deny(dead_code, unused_imports, unused_mut, missing_docs)]

pub mod stopwords;

use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind},
    path::Path,
};
use wordrank_error::{Error, ErrorType, IoError, Result, UsageError};

/// Longest token read at once, in bytes. Longer runs are split.
pub const DEFAULT_MAX_WORD_LENGTH: usize = 99;

/// Whitespace as understood by C `isspace`: space, `\t`, `\n`, `\v`, `\f`
/// and `\r`.
#[inline]
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Lowercase ASCII letters in place. Other bytes are left untouched.
///
/// # Example
/// ```rust
/// use wordrank_tokenizer::normalize;
///
/// let mut token = b"The".to_vec();
/// normalize(&mut token);
///
/// assert_eq!(token, b"the");
/// ```
#[inline]
pub fn normalize(token: &mut [u8]) {
    token.make_ascii_lowercase();
}

/// Iterator over the raw tokens of a reader.
///
/// A token is a run of non-whitespace bytes. Runs longer than the maximum
/// length are cut: the first `max_length` bytes make a token and the rest is
/// read as the next one.
#[derive(Debug)]
pub struct Tokens<R> {
    reader: R,
    max_length: usize,
    failed: bool,
}

impl<R: BufRead> Tokens<R> {
    /// Reads tokens of at most `max_length` bytes from `reader`.
    pub fn new(reader: R, max_length: usize) -> Result<Self> {
        if max_length == 0 {
            return Err(Error::new(
                ErrorType::Usage(UsageError::InvalidWordLength),
                None,
                Some("got `0`".to_string()),
            ));
        }

        Ok(Tokens {
            reader,
            max_length,
            failed: false,
        })
    }
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let mut token: Vec<u8> = Vec::new();

        loop {
            let buffer = match self.reader.fill_buf() {
                Ok(buffer) => buffer,
                Err(error) if error.kind() == ErrorKind::Interrupted => {
                    continue
                },
                Err(error) => {
                    self.failed = true;
                    return Some(Err(Error::new(
                        ErrorType::InputOutput(IoError::ReadingError),
                        Some(Box::new(error)),
                        Some("while reading tokens".to_string()),
                    )));
                },
            };

            // End of file.
            if buffer.is_empty() {
                return (!token.is_empty()).then_some(Ok(token));
            }

            let mut consumed = 0;
            let mut complete = false;
            for &byte in buffer {
                consumed += 1;

                if is_space(byte) {
                    if !token.is_empty() {
                        complete = true;
                        break;
                    }
                } else {
                    token.push(byte);
                    if token.len() == self.max_length {
                        complete = true;
                        break;
                    }
                }
            }
            self.reader.consume(consumed);

            if complete {
                return Some(Ok(token));
            }
        }
    }
}

/// Opens `path` and reads its tokens.
///
/// Fails with [`IoError::SourceUnavailable`] when the file cannot be opened.
pub fn open<P: AsRef<Path>>(
    path: P,
    max_length: usize,
) -> Result<Tokens<BufReader<File>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|error| {
        Error::new(
            ErrorType::InputOutput(IoError::SourceUnavailable),
            Some(Box::new(error)),
            Some(format!("'{}'", path.display())),
        )
    })?;

    Tokens::new(BufReader::new(file), max_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    fn tokenize(text: &[u8], max_length: usize) -> Vec<Vec<u8>> {
        Tokens::new(Cursor::new(text), max_length)
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_tokenize() {
        let plaintext = b"I really  like\tapples!\nBut I\r\nprefer\x0bGravitalia\x0c";

        assert_eq!(
            tokenize(plaintext, DEFAULT_MAX_WORD_LENGTH),
            [
                &b"I"[..],
                b"really",
                b"like",
                b"apples!",
                b"But",
                b"I",
                b"prefer",
                b"Gravitalia"
            ]
        );
    }

    #[test]
    fn test_empty_and_blank_sources() {
        assert!(tokenize(b"", DEFAULT_MAX_WORD_LENGTH).is_empty());
        assert!(tokenize(b" \n\t \r\n", DEFAULT_MAX_WORD_LENGTH).is_empty());
    }

    #[test]
    fn test_long_token_is_split() {
        let long = vec![b'x'; 150];
        let tokens = tokenize(&long, DEFAULT_MAX_WORD_LENGTH);

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].len(), 99);
        assert_eq!(tokens[1].len(), 51);
    }

    #[test]
    fn test_token_of_exactly_max_length() {
        assert_eq!(tokenize(b"abc def", 3), [&b"abc"[..], b"def"]);
        assert_eq!(tokenize(b"abcdefg h", 3), [&b"abc"[..], b"def", b"g", b"h"]);
    }

    #[test]
    fn test_tokens_across_buffer_boundaries() {
        // A 4 bytes buffer forces tokens to span several `fill_buf` calls.
        let reader = io::BufReader::with_capacity(4, &b"abcdefgh ij klmnop"[..]);
        let tokens = Tokens::new(reader, DEFAULT_MAX_WORD_LENGTH)
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap();

        assert_eq!(tokens, [&b"abcdefgh"[..], b"ij", b"klmnop"]);
    }

    #[test]
    fn test_normalize() {
        let mut token = b"HeLLo-W\xc3\x89rld".to_vec();
        normalize(&mut token);
        assert_eq!(token, b"hello-w\xc3\x89rld");

        let once = token.clone();
        normalize(&mut token);
        assert_eq!(token, once);
    }

    #[test]
    fn test_zero_max_length() {
        assert_eq!(
            Tokens::new(Cursor::new(b""), 0).unwrap_err().etype,
            ErrorType::Usage(UsageError::InvalidWordLength)
        );
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }
    }

    #[test]
    fn test_reading_error_stops_iteration() {
        let mut tokens =
            Tokens::new(io::BufReader::new(Broken), DEFAULT_MAX_WORD_LENGTH)
                .unwrap();

        assert_eq!(
            tokens.next().unwrap().unwrap_err().etype,
            ErrorType::InputOutput(IoError::ReadingError)
        );
        assert!(tokens.next().is_none());
    }

    #[test]
    fn test_missing_file() {
        assert_eq!(
            open("./does/not/exist.txt", DEFAULT_MAX_WORD_LENGTH)
                .unwrap_err()
                .etype,
            ErrorType::InputOutput(IoError::SourceUnavailable)
        );
    }
}
