//! Greedy longest-match tokenizer over a user-defined allele alphabet.
//!
//! Symbols may have any length and one symbol may be a prefix of another
//! (`A` and `An`), so sequences cannot be split at fixed widths. At every
//! position a window grows one char at a time while the set of symbols
//! starting with the window text is narrowed down, which walks the prefix
//! trie of the alphabet without building it. Candidate sets only shrink as
//! the window grows, so each token is found within the sequence length.
//!
//! Matching is greedy per token: the longest symbol found at a position is
//! taken and never revisited. An alphabet where a greedy choice strands the
//! remainder (`A`, `Ab`, `bc` on `Abc`) is not supported.

use crate::base::{Token, Vocabulary};
use crate::errors::TokenizeError;

/// Chars of context kept on each side of a failing window.
const CONTEXT_DELTA: usize = 3;
const ELLIPSIS: &str = "...";

/// Split `sequence` into vocabulary symbols, left to right.
///
/// Fails with [`TokenizeError`] at the first position where no symbol of
/// the vocabulary matches.
///
/// ```
/// use punnett_core::base::{AllelePair, Vocabulary};
/// use punnett_core::sequence::tokenize;
///
/// let vocabulary = Vocabulary::from_pairs([
///     AllelePair::new("An", "an"),
///     AllelePair::new("One", "Two"),
/// ]).unwrap();
///
/// let tokens = tokenize("AnTwoanOne", &vocabulary).unwrap();
/// let values: Vec<&str> = tokens.iter().map(|t| t.value()).collect();
/// assert_eq!(values, ["An", "Two", "an", "One"]);
/// ```
pub fn tokenize(sequence: &str, vocabulary: &Vocabulary) -> Result<Vec<Token>, TokenizeError> {
    let bounds = char_bounds(sequence);
    let chars = bounds.len() - 1;
    let symbols: Vec<&str> = vocabulary.symbols().collect();

    let mut tokens = Vec::new();
    let mut from = 0;

    while from < chars {
        let end = longest_match(sequence, &bounds, from, &symbols).map_err(|to| {
            let to = to.max(from + 1);
            log::trace!("No allele symbol matches {sequence} at [{from}, {to})");
            TokenizeError {
                sequence: sequence.to_string(),
                from,
                to,
                near: context(sequence, &bounds, from, to),
            }
        })?;

        tokens.push(Token::new(&sequence[bounds[from]..bounds[end]], from..end));
        from = end;
    }

    Ok(tokens)
}

/// Byte offset of every char, plus the total length as a final sentinel.
fn char_bounds(sequence: &str) -> Vec<usize> {
    sequence
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(sequence.len()))
        .collect()
}

/// Char end of the longest symbol starting at char `from`.
///
/// On failure returns the window end reached when the candidate set ran out.
fn longest_match(
    sequence: &str,
    bounds: &[usize],
    from: usize,
    symbols: &[&str],
) -> Result<usize, usize> {
    let start = bounds[from];
    let rest = &sequence[start..];

    let mut candidates = symbols.to_vec();
    let mut matched = None;
    let mut to = from;

    while to + 1 < bounds.len() {
        to += 1;
        let window = &sequence[start..bounds[to]];
        candidates.retain(|s| s.starts_with(window));

        match candidates.as_slice() {
            [] => break,
            // Converge straight onto the only symbol left.
            [single] => {
                if rest.starts_with(single) {
                    matched = Some(from + single.chars().count());
                }
                break;
            }
            _ => {
                if candidates.contains(&window) {
                    matched = Some(to);
                }
            }
        }
    }

    matched.ok_or(to)
}

/// Excerpt of `sequence` around char span `[from, to)`, never out of bounds.
fn context(sequence: &str, bounds: &[usize], from: usize, to: usize) -> String {
    let chars = bounds.len() - 1;
    let lo = from.saturating_sub(CONTEXT_DELTA);
    let hi = (to + CONTEXT_DELTA).min(chars);
    let left = if lo == 0 { "" } else { ELLIPSIS };
    let right = if hi == chars { "" } else { ELLIPSIS };

    format!("{left}{}{right}", &sequence[bounds[lo]..bounds[hi]])
}
