//! # wordrank-algorithm
//!
//! algorithms to count and rank the most frequently used words of a text!
//! Supported algorithms:
//! - fixed-capacity open addressing with linear probing;
//! - HashMap.

#![forbid(unsafe_code)]
#![deny(dead_code, unused_imports, unused_mut, missing_docs)]

/// djb2 string hash used to pick the first probed slot.
pub mod djb2;
/// Growable counter, never full.
pub mod hashtable;
/// The default algorithm, reproducing the reference probe sequence.
pub mod probing;
/// Top-N selection shared by every algorithm.
pub mod rank;
mod word;

pub use rank::Ranked;
pub use word::Word;
