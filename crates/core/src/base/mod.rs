//! Base types for allele vocabularies.
//!
//! This module provides allele pairs, the tokens and gamete pairs cut out of
//! genotype sequences, and the immutable vocabulary every other module reads.

mod allele;
mod vocabulary;

pub use allele::{Allele, AllelePair, GametePair, Token};
pub use vocabulary::{
    default_vocabulary, SymbolEntry, Vocabulary, VocabularyBuilder, NUMBER_OF_LATIN_LETTERS,
};
