use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::tokenizer::tokenize;
use crate::base::{GametePair, Token, Vocabulary};
use crate::errors::{TokenizeError, ValidationError};

/// Core trait for splitting a genotype sequence into allele tokens.
///
/// Implementations differ only in how tokens are cut; grouping the tokens
/// into gamete pairs is shared by [`Extractor::extract`].
pub trait Extractor {
    fn tokenize(&self, sequence: &str, vocabulary: &Vocabulary) -> Result<Vec<Token>, TokenizeError>;

    /// Split `sequence` and pair consecutive tokens in sequence order.
    ///
    /// Fails with [`ValidationError::MalformedSequence`] on an odd number of
    /// tokens.
    fn extract(&self, sequence: &str, vocabulary: &Vocabulary) -> Result<Vec<GametePair>, ValidationError> {
        let tokens = self.tokenize(sequence, vocabulary)?;
        pair_tokens(sequence, tokens)
    }
}

/// One token per char. Only meaningful for single-char alphabets.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolExtractor;

impl Extractor for SymbolExtractor {
    fn tokenize(&self, sequence: &str, _vocabulary: &Vocabulary) -> Result<Vec<Token>, TokenizeError> {
        Ok(sequence
            .chars()
            .enumerate()
            .map(|(i, c)| Token::new(c.to_string(), i..i + 1))
            .collect())
    }
}

/// Tokens found by the greedy longest-match tokenizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenizingExtractor;

impl Extractor for TokenizingExtractor {
    fn tokenize(&self, sequence: &str, vocabulary: &Vocabulary) -> Result<Vec<Token>, TokenizeError> {
        tokenize(sequence, vocabulary)
    }
}

/// Strategies for cutting sequences into tokens.
///
/// Picked once when a vocabulary is built and never swapped afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractorStrategy {
    /// Split per char.
    Symbol,
    /// Greedy longest-match over the vocabulary symbols.
    Tokenizing,
}

impl ExtractorStrategy {
    /// Tokenize using the selected strategy.
    pub fn tokenize(&self, sequence: &str, vocabulary: &Vocabulary) -> Result<Vec<Token>, TokenizeError> {
        match self {
            ExtractorStrategy::Symbol => SymbolExtractor.tokenize(sequence, vocabulary),
            ExtractorStrategy::Tokenizing => TokenizingExtractor.tokenize(sequence, vocabulary),
        }
    }
}

impl Extractor for ExtractorStrategy {
    fn tokenize(&self, sequence: &str, vocabulary: &Vocabulary) -> Result<Vec<Token>, TokenizeError> {
        ExtractorStrategy::tokenize(self, sequence, vocabulary)
    }
}

impl Default for ExtractorStrategy {
    fn default() -> Self {
        Self::Tokenizing
    }
}

impl fmt::Display for ExtractorStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol => write!(f, "symbol"),
            Self::Tokenizing => write!(f, "tokenizing"),
        }
    }
}

impl FromStr for ExtractorStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "symbol" => Ok(Self::Symbol),
            "tokenizing" => Ok(Self::Tokenizing),
            _ => Err(format!(
                "Unknown extractor strategy: {s}. Available: symbol, tokenizing"
            )),
        }
    }
}

/// Tokenize and pair `sequence` with the vocabulary's own strategy.
pub fn extract(sequence: &str, vocabulary: &Vocabulary) -> Result<Vec<GametePair>, ValidationError> {
    vocabulary.extractor().extract(sequence, vocabulary)
}

fn pair_tokens(sequence: &str, tokens: Vec<Token>) -> Result<Vec<GametePair>, ValidationError> {
    if tokens.len() % 2 != 0 {
        return Err(ValidationError::MalformedSequence {
            sequence: sequence.to_string(),
            tokens: tokens.len(),
        });
    }

    let mut pairs = Vec::with_capacity(tokens.len() / 2);
    let mut iter = tokens.into_iter();
    while let (Some(first), Some(second)) = (iter.next(), iter.next()) {
        pairs.push(GametePair::new(first, second));
    }
    Ok(pairs)
}
