//! Dictionary file output.
//!
//! Serializes word sequences into the plain-text dictionary format ProGuard
//! consumes: one word per line, joined by a single `\n`, no trailing
//! newline, no header.

pub mod writer;

pub use writer::{generate_dictionary, write_word_list, DictionaryConfig, DictionaryError};
