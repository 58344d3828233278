use crate::base::Vocabulary;
use crate::errors::CrossingError;
use crate::sequence::{Genotype, Slot};

/// All gametes of a validated genotype, one symbol per slot.
///
/// Built by recursive doubling: each symbol of the first slot is prefixed to
/// every gamete of the remaining slots, so the output has `2^k` entries for
/// `k` slots and the first half starts with the first slot's first symbol.
/// Every entry is a distinct choice of one symbol per slot; entries are
/// distinct strings whenever every slot is heterozygous.
///
/// Time and memory are `O(2^k * k)`. This is the dominant cost of a crossing
/// and grows exponentially with the number of allele pairs, so callers
/// should bound `k`.
pub fn gametes(genotype: &Genotype) -> Vec<Vec<&str>> {
    combinations(genotype.slots())
}

/// Gametes of `sequence` as strings.
///
/// The sequence is validated first; an invalid sequence is a caller error
/// and fails with [`CrossingError::MalformedSequence`].
///
/// ```
/// use punnett_core::base::default_vocabulary;
/// use punnett_core::crossing::combine;
///
/// let vocabulary = default_vocabulary(2).unwrap();
/// assert_eq!(combine(&vocabulary, "AaBb").unwrap(), ["AB", "Ab", "aB", "ab"]);
/// ```
pub fn combine(vocabulary: &Vocabulary, sequence: &str) -> Result<Vec<String>, CrossingError> {
    let genotype = Genotype::parse(vocabulary, sequence).map_err(|source| CrossingError::MalformedSequence {
        sequence: sequence.to_string(),
        source,
    })?;

    Ok(gametes(&genotype).iter().map(|g| g.concat()).collect())
}

fn combinations(slots: &[Slot]) -> Vec<Vec<&str>> {
    match slots {
        [] => vec![Vec::new()],
        [only] => only.alleles.symbols().into_iter().map(|s| vec![s]).collect(),
        [head, tail @ ..] => {
            let rest = combinations(tail);
            let mut combos = Vec::with_capacity(rest.len() * 2);
            for symbol in head.alleles.symbols() {
                for other in &rest {
                    let mut gamete = Vec::with_capacity(slots.len());
                    gamete.push(symbol);
                    gamete.extend_from_slice(other);
                    combos.push(gamete);
                }
            }
            combos
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{default_vocabulary, AllelePair};
    use crate::errors::ValidationError;
    use std::collections::HashSet;

    #[test]
    fn test_single_slot() {
        let vocabulary = default_vocabulary(2).unwrap();
        assert_eq!(combine(&vocabulary, "Aa").unwrap(), vec!["A", "a"]);
        assert_eq!(combine(&vocabulary, "bB").unwrap(), vec!["b", "B"]);
    }

    #[test]
    fn test_three_slots_order() {
        let vocabulary = default_vocabulary(3).unwrap();
        let gametes = combine(&vocabulary, "AaBbCc").unwrap();
        assert_eq!(
            gametes,
            vec!["ABC", "ABc", "AbC", "Abc", "aBC", "aBc", "abC", "abc"]
        );
    }

    #[test]
    fn test_count_is_power_of_two() {
        let vocabulary = default_vocabulary(8).unwrap();
        let gametes = combine(&vocabulary, "AaBbCcDdEeFfGgHh").unwrap();
        assert_eq!(gametes.len(), 256);
        let distinct: HashSet<&String> = gametes.iter().collect();
        assert_eq!(distinct.len(), 256);
    }

    #[test]
    fn test_homozygous_slots_repeat() {
        let vocabulary = default_vocabulary(3).unwrap();
        let gametes = combine(&vocabulary, "aaBbCC").unwrap();
        assert_eq!(gametes, vec!["aBC", "abC", "aBC", "abC", "aBC", "abC", "aBC", "abC"]);
    }

    #[test]
    fn test_multi_char_symbols() {
        let vocabulary = Vocabulary::from_pairs([
            AllelePair::new("Cr", "cr"),
            AllelePair::new("E", "e"),
        ])
        .unwrap();
        assert_eq!(
            combine(&vocabulary, "eECrcr").unwrap(),
            vec!["eCr", "ecr", "ECr", "Ecr"]
        );
    }

    #[test]
    fn test_gametes_of_genotype() {
        let vocabulary = default_vocabulary(2).unwrap();
        let genotype = Genotype::parse(&vocabulary, "Bbaa").unwrap();
        let gametes = gametes(&genotype);
        assert_eq!(gametes.len(), genotype.gamete_count().unwrap());
        assert_eq!(gametes[0], vec!["B", "a"]);
        assert_eq!(gametes[3], vec!["b", "a"]);
    }

    #[test]
    fn test_malformed_sequence() {
        let vocabulary = default_vocabulary(3).unwrap();
        let err = combine(&vocabulary, "Aad").unwrap_err();
        assert_eq!(
            err,
            CrossingError::MalformedSequence {
                sequence: "Aad".into(),
                source: ValidationError::MalformedSequence {
                    sequence: "Aad".into(),
                    tokens: 3
                }
            }
        );
    }
}
