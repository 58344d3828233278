//! Shared default values for the command line.

use punnett_core::base::NUMBER_OF_LATIN_LETTERS;

/// Allele pairs in the default vocabulary, one per latin letter.
pub const VOCABULARY_PAIRS: usize = NUMBER_OF_LATIN_LETTERS;

/// Filter used by the logger when `RUST_LOG` is not set.
pub const LOG_FILTER: &str = "warn";
