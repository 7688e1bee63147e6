//! # dict-core
//!
//! Shared library for the ProGuard dictionary generator containing the word
//! sequence enumeration and the dictionary file writer.
//!
//! This crate is used by the `dict-gen` driver binary. It has zero
//! dependencies on any async runtime, network library, or UI framework.
//!
//! # Architecture overview (for beginners)
//!
//! ProGuard can obfuscate Java identifiers using caller-supplied word lists
//! instead of its built-in `a`, `b`, `c` … naming. This workspace produces
//! those word lists: plain text files containing short lowercase words, one
//! per line, in strict lexicographic order.
//!
//! This crate (`dict-core`) is the engine. It defines:
//!
//! - **`domain`** – Pure enumeration logic with no I/O. The central piece is
//!   [`LetterSequence`]: a lazy iterator that counts through all words of a
//!   fixed length over the alphabet `a`–`z`, exactly as if counting in base
//!   26 with letters for digits.
//!
//! - **`output`** – Serialization of a word sequence into a dictionary file.
//!   Words are joined by a single `\n` with no trailing newline, and the
//!   target file is truncated before writing so repeated runs are
//!   byte-identical.

// Declare the two top-level modules. Rust will look for each in a
// subdirectory with the same name (e.g., src/domain/mod.rs).
pub mod domain;
pub mod output;

// Re-export the most-used types at the crate root so callers can write
// `dict_core::LetterSequence` instead of `dict_core::domain::sequence::LetterSequence`.
pub use domain::sequence::{total_words, LetterSequence, ALPHABET_SIZE};
pub use output::writer::{
    generate_dictionary, write_word_list, DictionaryConfig, DictionaryError,
};
