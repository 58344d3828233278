use std::collections::HashSet;
use std::fmt;

use super::extractor::extract;
use crate::base::{AllelePair, GametePair, Vocabulary};
use crate::errors::ValidationError;

/// One allele-pair slot of a genotype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Index of the allele pair in the vocabulary
    pub locus: usize,
    /// The two symbols found for it, in sequence order
    pub alleles: GametePair,
}

/// A genotype sequence that passed single-sequence validation.
///
/// Slots keep the order in which they appear in the sequence, which is what
/// pair validation compares position by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genotype {
    sequence: String,
    slots: Vec<Slot>,
}

impl Genotype {
    /// Validate `sequence` against `vocabulary`.
    ///
    /// Rules are checked in order and the first violation is returned:
    /// non-empty, letters only, tokenizable, even token count, every pair
    /// starts with a known symbol, both symbols of a pair belong to the same
    /// allele pair, and no allele pair is referenced twice.
    pub fn parse(vocabulary: &Vocabulary, sequence: &str) -> Result<Self, ValidationError> {
        if sequence.is_empty() {
            return Err(ValidationError::Empty);
        }

        if let Some(character) = sequence.chars().find(|c| !c.is_alphabetic()) {
            return Err(ValidationError::InvalidCharacter {
                sequence: sequence.to_string(),
                character,
            });
        }

        let pairs = extract(sequence, vocabulary)?;

        let loci = pairs
            .iter()
            .map(|pair| {
                vocabulary
                    .locus_of(pair.first())
                    .ok_or_else(|| ValidationError::UnknownAllele {
                        sequence: sequence.to_string(),
                        symbol: pair.first().to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (pair, &locus) in pairs.iter().zip(&loci) {
            let same_pair = vocabulary
                .pair(locus)
                .is_some_and(|p| p.contains(pair.second()));
            if !same_pair {
                return Err(ValidationError::MismatchedPair {
                    sequence: sequence.to_string(),
                    first: pair.first().to_string(),
                    second: pair.second().to_string(),
                });
            }
        }

        let mut seen = HashSet::with_capacity(loci.len());
        for &locus in &loci {
            if !seen.insert(locus) {
                let (dominant, recessive) = vocabulary
                    .pair(locus)
                    .map(|p| (p.dominant().to_string(), p.recessive().to_string()))
                    .unwrap_or_default();
                return Err(ValidationError::DuplicatePairOccurrence {
                    sequence: sequence.to_string(),
                    dominant,
                    recessive,
                });
            }
        }

        let slots = pairs
            .into_iter()
            .zip(loci)
            .map(|(alleles, locus)| Slot { locus, alleles })
            .collect();

        Ok(Self {
            sequence: sequence.to_string(),
            slots,
        })
    }

    /// The original sequence text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.sequence
    }

    #[inline]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Number of allele-pair slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Loci in sequence order.
    pub fn loci(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().map(|s| s.locus)
    }

    /// Number of slots carrying two different symbols.
    pub fn heterozygous_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.alleles.is_homozygous()).count()
    }

    /// Number of gametes the combiner will produce, `2^len`.
    ///
    /// `None` if it does not fit in a `usize`.
    pub fn gamete_count(&self) -> Option<usize> {
        u32::try_from(self.slots.len())
            .ok()
            .and_then(|k| 1usize.checked_shl(k))
    }

    /// The allele pairs addressed by this genotype, in sequence order.
    pub fn allele_pairs<'v>(&'v self, vocabulary: &'v Vocabulary) -> impl Iterator<Item = &'v AllelePair> + 'v {
        self.loci().filter_map(move |locus| vocabulary.pair(locus))
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sequence)
    }
}
