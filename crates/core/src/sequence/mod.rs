//! Turning raw genotype strings into validated allele slots.
//!
//! Data flows tokenizer -> extractor -> validation. The result of a
//! successful validation is a [`Genotype`], which the crossing module
//! consumes.

mod extractor;
mod genotype;
mod tokenizer;
mod validation;

pub use extractor::{extract, Extractor, ExtractorStrategy, SymbolExtractor, TokenizingExtractor};
pub use genotype::{Genotype, Slot};
pub use tokenizer::tokenize;
pub use validation::{check_compatible, validate_sequence, validate_sequence_pair, ValidationResult};

pub(crate) use validation::parse_pair;
