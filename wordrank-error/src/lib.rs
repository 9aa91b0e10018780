#![forbid(unsafe_code)]
#![deny(
    dead_code,
    unused_imports,
    unused_mut,
    missing_docs,
    missing_debug_implementations
)]
//! internal library to provide structures for errors in wordrank.
//!
//! # Examples
//! ```rust
//! use wordrank_error::{Error, ErrorType, UsageError};
//!
//! let error = Error::new(
//!     ErrorType::Usage(UsageError::InvalidCount),
//!     None,
//!     Some("got `0`".to_string()),
//! );
//!
//! assert!(error.is_fatal());
//! assert_eq!(error.to_string(), "n must be a positive integer: got `0`");
//! ```

use std::error::Error as StdError;
use std::fmt;

/// Boxed error to bypass specific [Error](StdError).
pub type BError = Box<dyn StdError + Send + Sync>;
/// Result carrying a wordrank [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// The struct that represents an error
#[derive(Debug)]
pub struct Error {
    /// The error type.
    pub etype: ErrorType,
    /// The cause of this error.
    pub cause: Option<BError>,
    /// Explains the context in which the error occurs.
    pub context: Option<String>,
}

impl Error {
    /// Throw an [`Error`].
    pub fn new(
        etype: ErrorType,
        cause: Option<BError>,
        context: Option<String>,
    ) -> Self {
        Error {
            etype,
            cause,
            context,
        }
    }

    /// Whether the run has to stop after this error.
    ///
    /// Only a full table is recoverable: the word is dropped and loading
    /// goes on.
    pub fn is_fatal(&self) -> bool {
        !matches!(self.etype, ErrorType::Table(TableError::Full))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.etype)?;

        if let Some(context) = &self.context {
            write!(f, ": {}", context)?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| &**cause as &(dyn StdError + 'static))
    }
}

/// Errors in wordrank.
#[derive(Debug, PartialEq, Eq)]
pub enum ErrorType {
    /// Invalid arguments or settings given by the user.
    Usage(UsageError),
    /// IO errors, especially due to std::fs.
    InputOutput(IoError),
    /// Storage for the table, the working list or the result could not be
    /// reserved.
    AllocationFailure,
    /// Errors related to the counting table.
    Table(TableError),
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorType::Usage(error) => write!(f, "{}", error),
            ErrorType::InputOutput(error) => write!(f, "{}", error),
            ErrorType::AllocationFailure => {
                write!(f, "could not allocate memory")
            },
            ErrorType::Table(error) => write!(f, "{}", error),
        }
    }
}
impl StdError for ErrorType {}

/// Errors caused by invalid user input.
#[derive(Debug, PartialEq, Eq)]
pub enum UsageError {
    /// The number of words to rank is zero, negative or not a number.
    InvalidCount,
    /// The table capacity is zero.
    InvalidCapacity,
    /// The maximum word length is zero.
    InvalidWordLength,
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UsageError::InvalidCount => {
                write!(f, "n must be a positive integer")
            },
            UsageError::InvalidCapacity => {
                write!(f, "table capacity must be a positive integer")
            },
            UsageError::InvalidWordLength => {
                write!(f, "maximum word length must be a positive integer")
            },
        }
    }
}
impl StdError for UsageError {}

/// Errors related to [`std`].
#[derive(Debug, PartialEq, Eq)]
pub enum IoError {
    /// The file cannot be opened.
    SourceUnavailable,
    /// Reading failed after the file was opened.
    ReadingError,
    /// Deserialization failed.
    DeserializationError,
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IoError::SourceUnavailable => write!(f, "could not open file"),
            IoError::ReadingError => write!(f, "could not read file"),
            IoError::DeserializationError => {
                write!(f, "Deserialization failed.")
            },
        }
    }
}
impl StdError for IoError {}

/// Errors related to the counting table.
#[derive(Debug, PartialEq, Eq)]
pub enum TableError {
    /// Every slot is taken and the word is not in the table.
    Full,
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TableError::Full => write!(f, "hash table is full"),
        }
    }
}
impl StdError for TableError {}
