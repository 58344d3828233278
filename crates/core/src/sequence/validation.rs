//! Single-sequence and cross-sequence validation.
//!
//! Validation failures are plain values: callers branch on the returned
//! [`ValidationResult`] and read the reason from the error's `Display`.
//! Only the first violated rule is reported.

use super::genotype::Genotype;
use crate::base::Vocabulary;
use crate::errors::ValidationError;

/// Outcome of a validation. `Err` carries the reason.
pub type ValidationResult = Result<(), ValidationError>;

/// Check that `sequence` is a well-formed genotype for `vocabulary`.
///
/// See [`Genotype::parse`] for the rules.
pub fn validate_sequence(vocabulary: &Vocabulary, sequence: &str) -> ValidationResult {
    Genotype::parse(vocabulary, sequence).map(|_| ())
}

/// Check that two sequences are each well-formed and can be crossed.
///
/// Both must have the same length and address the same allele pair at every
/// slot position.
pub fn validate_sequence_pair(vocabulary: &Vocabulary, first: &str, second: &str) -> ValidationResult {
    parse_pair(vocabulary, first, second).map(|_| ())
}

/// Parse both parents and check they are compatible.
pub(crate) fn parse_pair(
    vocabulary: &Vocabulary,
    first: &str,
    second: &str,
) -> Result<(Genotype, Genotype), ValidationError> {
    let first = Genotype::parse(vocabulary, first)?;
    let second = Genotype::parse(vocabulary, second)?;
    check_compatible(&first, &second)?;
    Ok((first, second))
}

/// Check that two validated genotypes address identical loci in identical order.
pub fn check_compatible(first: &Genotype, second: &Genotype) -> ValidationResult {
    let same_length = first.as_str().chars().count() == second.as_str().chars().count()
        && first.len() == second.len();
    if !same_length {
        return Err(ValidationError::LengthMismatch {
            first: first.to_string(),
            second: second.to_string(),
        });
    }

    let mismatch = first
        .slots()
        .iter()
        .zip(second.slots())
        .enumerate()
        .find(|(_, (a, b))| a.locus != b.locus);

    if let Some((slot, (a, b))) = mismatch {
        return Err(ValidationError::LocusMismatch {
            first: first.to_string(),
            second: second.to_string(),
            slot,
            first_symbol: a.alleles.first().to_string(),
            second_symbol: b.alleles.first().to_string(),
        });
    }

    Ok(())
}
