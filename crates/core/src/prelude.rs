//! Commonly used imports for convenience.
//!
//! ```
//! use punnett_core::prelude::*;
//!
//! let vocabulary = default_vocabulary(2).unwrap();
//! assert!(validate_sequence(&vocabulary, "AaBb").is_ok());
//! ```

pub use crate::base::{default_vocabulary, Allele, AllelePair, Vocabulary, VocabularyBuilder};
pub use crate::config::{PairOrder, VocabularyConfig};
pub use crate::crossing::{combine, cross, CrossingEngine, PunnettSquare};
pub use crate::errors::{
    ConfigError, CrossingError, TokenizeError, ValidationError, VocabularyError,
};
pub use crate::sequence::{
    validate_sequence, validate_sequence_pair, ExtractorStrategy, Genotype, ValidationResult,
};
