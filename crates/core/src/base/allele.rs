use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A dominant/recessive symbol pair describing one locus.
///
/// Symbols are arbitrary non-empty alphabetic strings. The dominant symbol is
/// usually the capitalised form of the recessive one (`A`/`a`, `Cr`/`cr`) but
/// that relation is not required: `One`/`Two` is a perfectly good pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AllelePair {
    dominant: String,
    recessive: String,
}

impl AllelePair {
    /// Create a pair without checking the symbols.
    ///
    /// Symbol rules are enforced when the pair is added to a
    /// [`VocabularyBuilder`](crate::base::VocabularyBuilder).
    pub fn new(dominant: impl Into<String>, recessive: impl Into<String>) -> Self {
        Self {
            dominant: dominant.into(),
            recessive: recessive.into(),
        }
    }

    #[inline]
    pub fn dominant(&self) -> &str {
        &self.dominant
    }

    #[inline]
    pub fn recessive(&self) -> &str {
        &self.recessive
    }

    /// Return the symbol on the given side of the pair.
    #[inline]
    pub fn symbol(&self, allele: Allele) -> &str {
        match allele {
            Allele::Dominant => &self.dominant,
            Allele::Recessive => &self.recessive,
        }
    }

    /// Return which side of the pair `symbol` is, if it belongs to this pair.
    pub fn side_of(&self, symbol: &str) -> Option<Allele> {
        if self.dominant == symbol {
            Some(Allele::Dominant)
        } else if self.recessive == symbol {
            Some(Allele::Recessive)
        } else {
            None
        }
    }

    /// Return `true` if `symbol` is either side of this pair.
    #[inline]
    pub fn contains(&self, symbol: &str) -> bool {
        self.side_of(symbol).is_some()
    }
}

impl fmt::Display for AllelePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.dominant, self.recessive)
    }
}

/// Side of an allele pair a symbol stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Allele {
    Dominant = 0,
    Recessive = 1,
}

impl Allele {
    /// Offset of this side within a locus' two rank slots.
    #[inline(always)]
    pub const fn offset(self) -> usize {
        self as usize
    }
}

/// A symbol cut out of a sequence, with its char span for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    value: String,
    span: Range<usize>,
}

impl Token {
    pub fn new(value: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            value: value.into(),
            span,
        }
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Char positions `[start, end)` of the token in the original sequence.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Two consecutive tokens occupying the same allele-pair slot, in sequence order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GametePair {
    first: Token,
    second: Token,
}

impl GametePair {
    pub fn new(first: Token, second: Token) -> Self {
        Self { first, second }
    }

    #[inline]
    pub fn first(&self) -> &str {
        self.first.value()
    }

    #[inline]
    pub fn second(&self) -> &str {
        self.second.value()
    }

    /// Both symbols in sequence order.
    #[inline]
    pub fn symbols(&self) -> [&str; 2] {
        [self.first(), self.second()]
    }

    /// Return `true` if both tokens carry the same symbol.
    #[inline]
    pub fn is_homozygous(&self) -> bool {
        self.first() == self.second()
    }

    pub fn tokens(&self) -> (&Token, &Token) {
        (&self.first, &self.second)
    }
}

impl fmt::Display for GametePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allele_pair_sides() {
        let pair = AllelePair::new("Cr", "cr");
        assert_eq!(pair.dominant(), "Cr");
        assert_eq!(pair.recessive(), "cr");
        assert_eq!(pair.side_of("Cr"), Some(Allele::Dominant));
        assert_eq!(pair.side_of("cr"), Some(Allele::Recessive));
        assert_eq!(pair.side_of("C"), None);
        assert_eq!(pair.symbol(Allele::Recessive), "cr");
    }

    #[test]
    fn test_allele_pair_display() {
        assert_eq!(AllelePair::new("One", "Two").to_string(), "One/Two");
    }

    #[test]
    fn test_allele_offset() {
        assert_eq!(Allele::Dominant.offset(), 0);
        assert_eq!(Allele::Recessive.offset(), 1);
    }

    #[test]
    fn test_token_span() {
        let token = Token::new("An", 2..4);
        assert_eq!(token.value(), "An");
        assert_eq!(token.span(), 2..4);
        assert_eq!(token.to_string(), "An");
    }

    #[test]
    fn test_gamete_pair() {
        let pair = GametePair::new(Token::new("b", 0..1), Token::new("B", 1..2));
        assert_eq!(pair.symbols(), ["b", "B"]);
        assert!(!pair.is_homozygous());
        assert_eq!(pair.to_string(), "bB");

        let homo = GametePair::new(Token::new("C", 0..1), Token::new("C", 1..2));
        assert!(homo.is_homozygous());
    }
}
