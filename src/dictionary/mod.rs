//! Dictionaries for Letter Boxed solving
//!
//! Provides the embedded word list compiled into the binary plus loaders for
//! plain text lists and prebuilt trie files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
