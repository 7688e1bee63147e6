//! ProGuard dictionary generator entry point.
//!
//! Thin driver over the `dict-core` library: it holds the fixed table of
//! production dictionaries, generates each one in order, and finishes by
//! listing the working directory so the produced files are visible in the
//! log output.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ dictionary_configs()     -- fixed table of three dictionaries
//!  └─ generate_dictionary()    -- once per entry, strictly sequential
//!  └─ list_working_directory() -- human-visible confirmation
//! ```
//!
//! There are no command-line arguments and no configuration file; the three
//! dictionaries ProGuard consumes are always the same. The only external
//! knob is `RUST_LOG`, which adjusts log verbosity.
//!
//! Wire the outputs into a ProGuard configuration with:
//!
//! ```text
//! -obfuscationdictionary        proguard-dict.txt
//! -classobfuscationdictionary   proguard-class-dict.txt
//! -packageobfuscationdictionary proguard-package-dict.txt
//! ```

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dict_core::{generate_dictionary, DictionaryConfig};

/// The three dictionaries ProGuard consumes, written into the working
/// directory. Class and package names get longer words than member names so
/// the three namespaces stay visually distinct in decompiled output.
fn dictionary_configs() -> [DictionaryConfig; 3] {
    [
        // Class names: 3-letter words
        DictionaryConfig::new("proguard-class-dict.txt", 3, 1000),
        // Fields and methods: 2-letter words
        DictionaryConfig::new("proguard-dict.txt", 2, 500),
        // Packages: 4-letter words
        DictionaryConfig::new("proguard-package-dict.txt", 4, 1500),
    ]
}

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    for config in dictionary_configs() {
        let written = generate_dictionary(&config)
            .with_context(|| format!("generating {}", config.path.display()))?;
        info!(
            "{}: {written} words of length {}",
            config.path.display(),
            config.word_length
        );
    }

    list_working_directory()?;

    Ok(())
}

/// Logs the entries of the current working directory so a human can confirm
/// the dictionary files landed where expected. Has no persisted effect.
fn list_working_directory() -> anyhow::Result<()> {
    let mut names: Vec<String> = std::fs::read_dir(".")
        .context("listing working directory")?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    info!("working directory contains: {}", names.join(", "));
    Ok(())
}
