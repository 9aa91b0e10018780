use std::{borrow::Borrow, fmt};

/// A normalized token, stored as the bytes read from the source.
///
/// Words are compared byte for byte. Non UTF-8 bytes are kept as they are
/// and only replaced when displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(Box<[u8]>);

impl Word {
    /// Raw bytes of the word.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for Word {
    fn from(bytes: &[u8]) -> Self {
        Word(bytes.into())
    }
}

impl From<&str> for Word {
    fn from(word: &str) -> Self {
        Word(word.as_bytes().into())
    }
}

impl Borrow<[u8]> for Word {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}
