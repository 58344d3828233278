use super::combiner::{combine, gametes};
use super::square::PunnettSquare;
use crate::base::{Token, Vocabulary};
use crate::errors::{CrossingError, TokenizeError};
use crate::sequence::{parse_pair, validate_sequence_pair, ValidationResult};

/// Gamete combinations above which a cross is logged as expensive.
pub const LARGE_SQUARE_WARNING: usize = 1 << 20;

/// Crosses genotypes written in one vocabulary.
///
/// The engine owns a (cheaply cloned) vocabulary whose pair order defines
/// the canonical layout of offspring genotypes: loci in vocabulary order,
/// both symbols of a locus adjacent, dominant before recessive.
#[derive(Debug, Clone)]
pub struct CrossingEngine {
    vocabulary: Vocabulary,
}

impl CrossingEngine {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    #[inline]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Check that two parents can be crossed.
    pub fn validate(&self, first: &str, second: &str) -> ValidationResult {
        validate_sequence_pair(&self.vocabulary, first, second)
    }

    /// All gametes of `sequence`, see [`combine`].
    pub fn gametes(&self, sequence: &str) -> Result<Vec<String>, CrossingError> {
        combine(&self.vocabulary, sequence)
    }

    /// Build the Punnett square of two parents.
    ///
    /// Every gamete of the first parent is paired with every gamete of the
    /// second; each offspring is reordered into canonical form and counted.
    /// The counts sum to `2^k * 2^k` for `k` slots, and parents
    /// heterozygous at all `n` loci yield `3^n` distinct genotypes. The
    /// work is exponential in the number of allele pairs.
    ///
    /// ```
    /// use punnett_core::base::default_vocabulary;
    /// use punnett_core::crossing::CrossingEngine;
    ///
    /// let engine = CrossingEngine::new(default_vocabulary(2).unwrap());
    /// let square = engine.cross("Aa", "Aa").unwrap();
    /// assert_eq!(square.get("AA"), Some(1));
    /// assert_eq!(square.get("Aa"), Some(2));
    /// assert_eq!(square.get("aa"), Some(1));
    /// ```
    pub fn cross(&self, first: &str, second: &str) -> Result<PunnettSquare, CrossingError> {
        let (first, second) =
            parse_pair(&self.vocabulary, first, second).map_err(CrossingError::InvalidSequence)?;

        let first_gametes = gametes(&first);
        let second_gametes = gametes(&second);

        let combinations = first_gametes.len().saturating_mul(second_gametes.len());
        if combinations > LARGE_SQUARE_WARNING {
            log::warn!(
                "Crossing {first} x {second} enumerates {combinations} gamete combinations ({} allele pairs)",
                first.len()
            );
        }
        log::debug!(
            "Crossing {first} x {second}: {} x {} gametes",
            first_gametes.len(),
            second_gametes.len()
        );

        let mut square = PunnettSquare::new();
        let mut offspring: Vec<&str> = Vec::with_capacity(first.len() * 2);

        for half in &first_gametes {
            for other in &second_gametes {
                offspring.clear();
                offspring.extend_from_slice(half);
                offspring.extend_from_slice(other);
                square.record(self.reorder(&mut offspring));
            }
        }

        log::debug!(
            "Crossing {first} x {second} produced {} distinct genotypes",
            square.len()
        );

        Ok(square)
    }

    /// Canonical form of a genotype string.
    ///
    /// Re-tokenizes `genotype` and sorts the symbols by vocabulary rank.
    /// Idempotent. The genotype is not validated; symbols unknown to the
    /// vocabulary (only possible with per-char extraction) are kept, after
    /// all known ones.
    pub fn canonicalize(&self, genotype: &str) -> Result<String, TokenizeError> {
        let tokens = self
            .vocabulary
            .extractor()
            .tokenize(genotype, &self.vocabulary)?;
        let mut symbols: Vec<&str> = tokens.iter().map(Token::value).collect();
        Ok(self.reorder(&mut symbols))
    }

    fn reorder(&self, symbols: &mut [&str]) -> String {
        symbols.sort_by_key(|s| self.vocabulary.rank(s).unwrap_or(usize::MAX));
        symbols.concat()
    }
}

/// Cross two parents written in `vocabulary`.
///
/// Convenience wrapper over [`CrossingEngine::cross`].
pub fn cross(vocabulary: &Vocabulary, first: &str, second: &str) -> Result<PunnettSquare, CrossingError> {
    CrossingEngine::new(vocabulary.clone()).cross(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{default_vocabulary, AllelePair};
    use crate::errors::ValidationError;

    fn engine(pairs: usize) -> CrossingEngine {
        CrossingEngine::new(default_vocabulary(pairs).unwrap())
    }

    #[test]
    fn test_monohybrid() {
        let square = engine(2).cross("Aa", "Aa").unwrap();
        assert_eq!(square.len(), 3);
        assert_eq!(square.get("AA"), Some(1));
        assert_eq!(square.get("Aa"), Some(2));
        assert_eq!(square.get("aa"), Some(1));
    }

    #[test]
    fn test_dihybrid() {
        let square = engine(2).cross("AaBb", "AaBb").unwrap();
        assert_eq!(square.len(), 9);
        assert_eq!(square.get("AaBb"), Some(4));
        assert_eq!(square.get("AABB"), Some(1));
        assert_eq!(square.get("aabb"), Some(1));
        assert_eq!(square.get("AABb"), Some(2));
        assert_eq!(square.total(), 16);
    }

    #[test]
    fn test_parent_order_does_not_matter() {
        let engine = engine(3);
        let forward = engine.cross("aaBbCC", "AAbBcc").unwrap();
        let backward = engine.cross("AAbBcc", "aaBbCC").unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_reordering_follows_vocabulary() {
        let mut builder = Vocabulary::builder();
        builder.add("Al", "al").unwrap();
        builder.add("Cf", "cf").unwrap();
        builder.add("De", "de").unwrap();
        let engine = CrossingEngine::new(builder.build());

        let square = engine.cross("CfcfdeDeAlAl", "cfCfdedealAl").unwrap();
        assert_eq!(square.total(), 64);
        for (genotype, _) in square.iter() {
            assert!(genotype.starts_with("Al") || genotype.starts_with("al"));
            assert_eq!(engine.canonicalize(genotype).unwrap(), genotype);
        }
        assert_eq!(square.get("AlalCfcfDede"), Some(8));
        assert_eq!(square.get("AlAlCfCfdede"), Some(4));
    }

    #[test]
    fn test_canonicalize() {
        let engine = engine(3);
        assert_eq!(engine.canonicalize("cAbCaB").unwrap(), "AaBbCc");
        assert_eq!(engine.canonicalize("aA").unwrap(), "Aa");
        assert_eq!(engine.canonicalize("AaBbCc").unwrap(), "AaBbCc");
    }

    #[test]
    fn test_canonicalize_ordered_vocabulary() {
        let mut builder = Vocabulary::builder();
        builder.add("B", "b").unwrap();
        builder.add("A", "a").unwrap();
        let reversed = CrossingEngine::new(builder.build());
        assert_eq!(reversed.canonicalize("AaBb").unwrap(), "BbAa");
    }

    #[test]
    fn test_invalid_parents() {
        let err = engine(8).cross("AaBBcCDd", "aaEeCCDd").unwrap_err();
        assert!(matches!(
            err,
            CrossingError::InvalidSequence(ValidationError::LocusMismatch { slot: 1, .. })
        ));

        let err = engine(3).cross("Aa", "AAbbC").unwrap_err();
        assert!(matches!(
            err,
            CrossingError::InvalidSequence(ValidationError::MalformedSequence { .. })
        ));
    }

    #[test]
    fn test_engine_gametes() {
        let engine = engine(2);
        assert_eq!(engine.gametes("Aabb").unwrap(), vec!["Ab", "Ab", "ab", "ab"]);
        assert!(engine.gametes("Ab").is_err());
    }

    #[test]
    fn test_cross_free_function() {
        let vocabulary = Vocabulary::from_pairs([
            AllelePair::new("E", "e"),
            AllelePair::new("A", "a"),
            AllelePair::new("G", "g"),
            AllelePair::new("Cr", "cr"),
        ])
        .unwrap();
        let square = cross(&vocabulary, "EeggCrcr", "eeGgcrcr").unwrap();
        assert_eq!(square.get("eeGgcrcr"), Some(8));
        assert_eq!(square.get("eeGgCrcr"), Some(8));
        assert_eq!(square.total(), 64);
    }
}
