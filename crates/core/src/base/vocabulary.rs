use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::{Allele, AllelePair};
use crate::errors::VocabularyError;
use crate::sequence::ExtractorStrategy;

/// Number of latin letters available to [`default_vocabulary`].
pub const NUMBER_OF_LATIN_LETTERS: usize = 26;

/// Where a symbol lives inside a vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolEntry {
    /// Index of the allele pair in vocabulary order
    pub locus: usize,
    /// Which side of the pair the symbol is
    pub allele: Allele,
}

impl SymbolEntry {
    /// Canonical sort key: every locus owns two adjacent slots, dominant first.
    #[inline(always)]
    pub const fn rank(self) -> usize {
        self.locus * 2 + self.allele.offset()
    }
}

/// Shared, immutable set of allele pairs.
///
/// Built once through [`VocabularyBuilder`] and then only read. Cloning is
/// cheap (the pairs and the symbol index live behind `Arc`), so one instance
/// can back any number of validations and crossings, including from several
/// threads at once.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Allele pairs in canonical order
    pairs: Arc<[AllelePair]>,
    /// Mapping from every symbol to its locus and side
    index: Arc<HashMap<String, SymbolEntry>>,
    /// How sequences are split into tokens
    extractor: ExtractorStrategy,
}

impl Vocabulary {
    /// Start building a new vocabulary.
    pub fn builder() -> VocabularyBuilder {
        VocabularyBuilder::new()
    }

    /// Build a vocabulary from pairs in the given order.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = AllelePair>,
    {
        let mut builder = VocabularyBuilder::new();
        builder.add_pairs(pairs)?;
        Ok(builder.build())
    }

    /// Number of allele pairs.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// All pairs in canonical order.
    #[inline]
    pub fn pairs(&self) -> &[AllelePair] {
        &self.pairs
    }

    /// Pair at `locus`, if any.
    #[inline]
    pub fn pair(&self, locus: usize) -> Option<&AllelePair> {
        self.pairs.get(locus)
    }

    /// Locus and side of `symbol`.
    #[inline]
    pub fn entry(&self, symbol: &str) -> Option<SymbolEntry> {
        self.index.get(symbol).copied()
    }

    /// The allele pair `symbol` belongs to.
    #[inline]
    pub fn pair_of(&self, symbol: &str) -> Option<&AllelePair> {
        self.entry(symbol).and_then(|e| self.pairs.get(e.locus))
    }

    #[inline]
    pub fn locus_of(&self, symbol: &str) -> Option<usize> {
        self.entry(symbol).map(|e| e.locus)
    }

    /// Canonical sort key of `symbol`, see [`SymbolEntry::rank`].
    #[inline]
    pub fn rank(&self, symbol: &str) -> Option<usize> {
        self.entry(symbol).map(SymbolEntry::rank)
    }

    #[inline]
    pub fn contains(&self, symbol: &str) -> bool {
        self.index.contains_key(symbol)
    }

    /// Every symbol, dominant then recessive, pair by pair.
    pub fn symbols(&self) -> impl Iterator<Item = &str> + '_ {
        self.pairs
            .iter()
            .flat_map(|p| [p.dominant(), p.recessive()])
    }

    /// Strategy used to split sequences into tokens.
    #[inline]
    pub fn extractor(&self) -> ExtractorStrategy {
        self.extractor
    }
}

impl PartialEq for Vocabulary {
    fn eq(&self, other: &Self) -> bool {
        (Arc::ptr_eq(&self.pairs, &other.pairs) || self.pairs == other.pairs)
            && self.extractor == other.extractor
    }
}

impl Eq for Vocabulary {}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self.pairs.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", pairs.join(", "))
    }
}

type PairComparator = Box<dyn Fn(&AllelePair, &AllelePair) -> Ordering>;

/// Mutable builder consumed into a [`Vocabulary`].
///
/// ```
/// use punnett_core::base::Vocabulary;
///
/// let mut builder = Vocabulary::builder();
/// builder.add("A", "a").unwrap();
/// builder.add("Cr", "cr").unwrap();
/// assert!(builder.add("B", "a").is_err());
///
/// let vocabulary = builder.build();
/// assert_eq!(vocabulary.len(), 2);
/// ```
#[derive(Default)]
pub struct VocabularyBuilder {
    pairs: Vec<AllelePair>,
    order: Option<PairComparator>,
    extractor: Option<ExtractorStrategy>,
}

impl VocabularyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pair from its two symbols.
    ///
    /// Fails, leaving the builder untouched, if either symbol is empty or
    /// non-alphabetic, if both symbols are equal, or if either symbol is
    /// already claimed by a pair in the builder.
    pub fn add(
        &mut self,
        dominant: impl Into<String>,
        recessive: impl Into<String>,
    ) -> Result<(), VocabularyError> {
        self.add_pair(AllelePair::new(dominant, recessive))
    }

    /// Add an already constructed pair, see [`add`](Self::add).
    pub fn add_pair(&mut self, pair: AllelePair) -> Result<(), VocabularyError> {
        check_symbol(pair.dominant())?;
        check_symbol(pair.recessive())?;

        if pair.dominant() == pair.recessive() {
            return Err(VocabularyError::IdenticalSymbols(pair.dominant().to_string()));
        }

        let claimed = self
            .pairs
            .iter()
            .any(|p| p.contains(pair.dominant()) || p.contains(pair.recessive()));
        if claimed {
            return Err(VocabularyError::DuplicateAllele {
                dominant: pair.dominant().to_string(),
                recessive: pair.recessive().to_string(),
            });
        }

        self.pairs.push(pair);
        Ok(())
    }

    /// Add pairs in order, stopping at the first rejected one.
    pub fn add_pairs<I>(&mut self, pairs: I) -> Result<(), VocabularyError>
    where
        I: IntoIterator<Item = AllelePair>,
    {
        pairs.into_iter().try_for_each(|pair| self.add_pair(pair))
    }

    /// Reorder the pairs with `compare` when building.
    ///
    /// The resulting order is the canonical locus order used when printing
    /// offspring genotypes.
    pub fn order_by<F>(mut self, compare: F) -> Self
    where
        F: Fn(&AllelePair, &AllelePair) -> Ordering + 'static,
    {
        self.order = Some(Box::new(compare));
        self
    }

    /// Force an extractor strategy instead of inferring it from the symbols.
    pub fn extractor(mut self, strategy: ExtractorStrategy) -> Self {
        self.extractor = Some(strategy);
        self
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Freeze the builder into an immutable vocabulary.
    ///
    /// Without an explicit strategy, single-character alphabets are split
    /// per character and anything else goes through the tokenizer.
    pub fn build(self) -> Vocabulary {
        let Self {
            mut pairs,
            order,
            extractor,
        } = self;

        if let Some(compare) = order {
            pairs.sort_by(|a, b| compare(a, b));
        }

        let extractor = extractor.unwrap_or_else(|| {
            let single_chars = pairs
                .iter()
                .all(|p| p.dominant().chars().count() == 1 && p.recessive().chars().count() == 1);
            if single_chars {
                ExtractorStrategy::Symbol
            } else {
                ExtractorStrategy::Tokenizing
            }
        });

        let mut index = HashMap::with_capacity(pairs.len() * 2);
        for (locus, pair) in pairs.iter().enumerate() {
            for allele in [Allele::Dominant, Allele::Recessive] {
                index.insert(pair.symbol(allele).to_string(), SymbolEntry { locus, allele });
            }
        }

        log::debug!(
            "Built vocabulary of {} allele pairs using {} extractor",
            pairs.len(),
            extractor
        );

        Vocabulary {
            pairs: pairs.into(),
            index: Arc::new(index),
            extractor,
        }
    }
}

impl fmt::Debug for VocabularyBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VocabularyBuilder")
            .field("pairs", &self.pairs)
            .field("ordered", &self.order.is_some())
            .field("extractor", &self.extractor)
            .finish()
    }
}

fn check_symbol(symbol: &str) -> Result<(), VocabularyError> {
    if symbol.is_empty() || !symbol.chars().all(char::is_alphabetic) {
        return Err(VocabularyError::InvalidSymbol(symbol.to_string()));
    }
    Ok(())
}

/// Vocabulary of single-letter pairs `A/a`, `B/b`, ... for the first
/// `max_pairs` latin letters.
///
/// `max_pairs` must be in `2..=26`.
pub fn default_vocabulary(max_pairs: usize) -> Result<Vocabulary, VocabularyError> {
    if !(2..=NUMBER_OF_LATIN_LETTERS).contains(&max_pairs) {
        return Err(VocabularyError::PairCountOutOfRange(max_pairs));
    }

    let pairs = (b'a'..=b'z').take(max_pairs).map(|b| {
        let recessive = b as char;
        AllelePair::new(recessive.to_ascii_uppercase().to_string(), recessive.to_string())
    });

    Vocabulary::from_pairs(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Vocabulary {
        Vocabulary::from_pairs([
            AllelePair::new("A", "a"),
            AllelePair::new("B", "b"),
            AllelePair::new("C", "c"),
        ])
        .unwrap()
    }

    #[test]
    fn test_vocabulary_from_pairs() {
        let vocabulary = abc();
        assert_eq!(vocabulary.len(), 3);
        assert!(!vocabulary.is_empty());
        assert_eq!(vocabulary.pair(1), Some(&AllelePair::new("B", "b")));
        assert_eq!(vocabulary.pair(3), None);
    }

    #[test]
    fn test_vocabulary_symbol_index() {
        let vocabulary = abc();
        assert_eq!(
            vocabulary.entry("b"),
            Some(SymbolEntry {
                locus: 1,
                allele: Allele::Recessive
            })
        );
        assert_eq!(vocabulary.locus_of("C"), Some(2));
        assert_eq!(vocabulary.pair_of("a"), Some(&AllelePair::new("A", "a")));
        assert!(vocabulary.contains("A"));
        assert!(!vocabulary.contains("D"));
        assert!(!vocabulary.contains("Aa"));
    }

    #[test]
    fn test_vocabulary_ranks_are_adjacent_per_locus() {
        let vocabulary = abc();
        let ranks: Vec<usize> = vocabulary
            .symbols()
            .map(|s| vocabulary.rank(s).unwrap())
            .collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(vocabulary.rank("x"), None);
    }

    #[test]
    fn test_builder_rejects_duplicate_dominant() {
        let mut builder = Vocabulary::builder();
        builder.add("A", "a").unwrap();
        let err = builder.add("A", "x").unwrap_err();
        assert_eq!(
            err,
            VocabularyError::DuplicateAllele {
                dominant: "A".into(),
                recessive: "x".into()
            }
        );
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn test_builder_rejects_duplicate_recessive() {
        let mut builder = Vocabulary::builder();
        builder.add("A", "a").unwrap();
        assert!(builder.add("B", "a").is_err());
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn test_builder_rejects_symbol_claimed_by_other_side() {
        let mut builder = Vocabulary::builder();
        builder.add("A", "a").unwrap();
        assert!(matches!(
            builder.add("a", "z"),
            Err(VocabularyError::DuplicateAllele { .. })
        ));
    }

    #[test]
    fn test_builder_rejects_invalid_symbols() {
        let mut builder = Vocabulary::builder();
        assert_eq!(
            builder.add("", "a"),
            Err(VocabularyError::InvalidSymbol(String::new()))
        );
        assert_eq!(
            builder.add("A1", "a"),
            Err(VocabularyError::InvalidSymbol("A1".into()))
        );
        assert_eq!(
            builder.add("A", "A"),
            Err(VocabularyError::IdenticalSymbols("A".into()))
        );
        assert!(builder.is_empty());
    }

    #[test]
    fn test_builder_order_by() {
        let mut builder = Vocabulary::builder();
        builder.add("E", "e").unwrap();
        builder.add("A", "a").unwrap();
        builder.add("Cr", "cr").unwrap();
        let vocabulary = builder
            .order_by(|a, b| a.recessive().cmp(b.recessive()))
            .build();

        let order: Vec<&str> = vocabulary.pairs().iter().map(|p| p.dominant()).collect();
        assert_eq!(order, vec!["A", "Cr", "E"]);
        assert_eq!(vocabulary.locus_of("e"), Some(2));
    }

    #[test]
    fn test_builder_infers_extractor() {
        assert_eq!(abc().extractor(), ExtractorStrategy::Symbol);

        let complex = Vocabulary::from_pairs([
            AllelePair::new("A", "a"),
            AllelePair::new("Cr", "cr"),
        ])
        .unwrap();
        assert_eq!(complex.extractor(), ExtractorStrategy::Tokenizing);
    }

    #[test]
    fn test_builder_explicit_extractor() {
        let mut builder = Vocabulary::builder();
        builder.add("A", "a").unwrap();
        let vocabulary = builder.extractor(ExtractorStrategy::Tokenizing).build();
        assert_eq!(vocabulary.extractor(), ExtractorStrategy::Tokenizing);
    }

    #[test]
    fn test_default_vocabulary() {
        let vocabulary = default_vocabulary(3).unwrap();
        assert_eq!(vocabulary.len(), 3);
        assert_eq!(vocabulary.pairs()[0], AllelePair::new("A", "a"));
        assert_eq!(vocabulary.pairs()[2], AllelePair::new("C", "c"));
        assert!(!vocabulary.contains("D"));

        let full = default_vocabulary(NUMBER_OF_LATIN_LETTERS).unwrap();
        assert_eq!(full.locus_of("z"), Some(25));
    }

    #[test]
    fn test_default_vocabulary_out_of_range() {
        assert_eq!(
            default_vocabulary(1).unwrap_err(),
            VocabularyError::PairCountOutOfRange(1)
        );
        assert_eq!(
            default_vocabulary(27).unwrap_err(),
            VocabularyError::PairCountOutOfRange(27)
        );
    }

    #[test]
    fn test_vocabulary_equality() {
        let vocabulary = abc();
        assert_eq!(vocabulary, vocabulary.clone());
        assert_eq!(vocabulary, abc());
        assert_ne!(vocabulary, default_vocabulary(2).unwrap());
    }

    #[test]
    fn test_vocabulary_clone_is_cheap() {
        let first = abc();
        let second = first.clone();
        assert!(Arc::ptr_eq(&first.pairs, &second.pairs));
        assert!(Arc::ptr_eq(&first.index, &second.index));
    }

    #[test]
    fn test_vocabulary_display() {
        assert_eq!(default_vocabulary(2).unwrap().to_string(), "[A/a, B/b]");
    }

    #[test]
    fn test_vocabulary_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Vocabulary>();
    }
}
