//! Writes truncated word sequences to dictionary files on disk.
//!
//! The on-disk format is as minimal as ProGuard's dictionary parser: one
//! word per line, ASCII, no comments, no metadata. Words are joined by a
//! single `\n` with no trailing newline, so a dictionary of N words contains
//! exactly N-1 newline bytes (and a zero-word dictionary is a zero-length
//! file).
//!
//! The target file is created fresh on every run (truncating any previous
//! content), which makes generation idempotent: two runs with the same
//! parameters produce byte-identical files.
//!
//! There is no partial-write recovery. If the file system rejects the write
//! (permissions, disk full, invalid path) the error propagates to the caller
//! and whatever was already flushed stays on disk.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::domain::sequence::LetterSequence;

/// Error type for dictionary generation.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The requested word length cannot produce a usable dictionary.
    #[error("word length must be at least 1")]
    InvalidWordLength,

    /// A file system I/O error occurred.
    #[error("I/O error writing dictionary to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Parameters for one dictionary file.
///
/// The driver binary holds a fixed table of these; nothing is read from
/// configuration files or command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryConfig {
    /// Where to write the dictionary. Relative paths resolve against the
    /// process working directory.
    pub path: PathBuf,
    /// Exact length of every generated word. Must be at least 1.
    pub word_length: usize,
    /// Maximum number of words to write. When this exceeds the total number
    /// of words of the configured length (26^word_length), the dictionary
    /// simply contains all of them.
    pub num_words: u64,
}

impl DictionaryConfig {
    /// Convenience constructor used by the driver's configuration table.
    pub fn new(path: impl Into<PathBuf>, word_length: usize, num_words: u64) -> Self {
        Self {
            path: path.into(),
            word_length,
            num_words,
        }
    }
}

/// Writes `words` to `out` joined by a single `\n`, with no trailing
/// newline. Returns the number of words written.
///
/// This is the serialization seam: [`generate_dictionary`] points it at a
/// buffered file, tests point it at a `Vec<u8>`.
///
/// # Errors
///
/// Propagates any [`io::Error`] from the underlying writer.
pub fn write_word_list<W: Write>(
    mut out: W,
    words: impl Iterator<Item = String>,
) -> io::Result<u64> {
    let mut written = 0u64;
    for word in words {
        if written > 0 {
            out.write_all(b"\n")?;
        }
        out.write_all(word.as_bytes())?;
        written += 1;
    }
    Ok(written)
}

/// Generates one dictionary file according to `config`.
///
/// Enumerates the lexicographically smallest `num_words` words of length
/// `word_length` and writes them to `config.path`, truncating any existing
/// file first. The sequence is streamed through a [`BufWriter`], so memory
/// use is independent of `num_words`.
///
/// Returns the number of words actually written:
/// `min(num_words, 26^word_length)`.
///
/// # Errors
///
/// Returns [`DictionaryError::InvalidWordLength`] when `word_length` is 0
/// (before any file is touched), and [`DictionaryError::Io`] when the file
/// cannot be created, written, or flushed.
pub fn generate_dictionary(config: &DictionaryConfig) -> Result<u64, DictionaryError> {
    if config.word_length == 0 {
        return Err(DictionaryError::InvalidWordLength);
    }

    let io_err = |source: io::Error| DictionaryError::Io {
        path: config.path.clone(),
        source,
    };

    // File::create truncates, so a shorter dictionary fully replaces a
    // longer one from a previous run.
    let file = File::create(&config.path).map_err(io_err)?;
    let mut out = BufWriter::new(file);

    // `take` wants a usize; saturate on 32-bit targets where num_words may
    // exceed it.
    let cap = usize::try_from(config.num_words).unwrap_or(usize::MAX);
    let words = LetterSequence::new(config.word_length).take(cap);
    let written = write_word_list(&mut out, words).map_err(io_err)?;
    out.flush().map_err(io_err)?;

    debug!(
        "wrote {written} words of length {} to {}",
        config.word_length,
        config.path.display()
    );

    Ok(written)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
