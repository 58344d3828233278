//! Punnett: Mendelian crossing of genotype sequences.
//!
//! Genotypes are strings of allele symbols drawn from a user-defined
//! [`Vocabulary`] of dominant/recessive pairs. A cross of two parents
//! expands each into its gametes and counts every offspring genotype in a
//! [`PunnettSquare`].
//!
//! The number of gametes is `2^k` for `k` allele pairs and two parents
//! heterozygous at every locus give `3^k` distinct offspring genotypes, so
//! the cost of a cross is exponential in the number of allele pairs.
//!
//! ```
//! use punnett_core::prelude::*;
//!
//! let vocabulary = default_vocabulary(3).unwrap();
//! let square = cross(&vocabulary, "aaBbCC", "AAbBcc").unwrap();
//! assert_eq!(square.get("AaBbCc"), Some(32));
//! ```

pub mod base;
pub mod config;
pub mod crossing;
pub mod errors;
pub mod prelude;
pub mod sequence;

pub use base::{default_vocabulary, AllelePair, Vocabulary, VocabularyBuilder};
pub use crossing::{cross, CrossingEngine, PunnettSquare};
pub use sequence::{validate_sequence, validate_sequence_pair, ValidationResult};
