use anyhow::Result;

use punnett_core::sequence::{validate_sequence, validate_sequence_pair};

use crate::args::VocabularyArgs;

/// Validate one sequence, or two as crossing partners.
///
/// Returns whether validation passed; the reason is printed otherwise.
pub fn validate_sequences(
    first: &str,
    second: Option<&str>,
    vocabulary: &VocabularyArgs,
) -> Result<bool> {
    let vocabulary = vocabulary.load()?;

    let outcome = match second {
        Some(second) => validate_sequence_pair(&vocabulary, first, second),
        None => validate_sequence(&vocabulary, first),
    };

    match outcome {
        Ok(()) => {
            println!("valid");
            Ok(true)
        }
        Err(reason) => {
            println!("invalid: {reason}");
            Ok(false)
        }
    }
}
