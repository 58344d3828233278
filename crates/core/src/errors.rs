use thiserror::Error;

/// Error returned when building an allele vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    /// One of the symbols is already claimed by another allele pair.
    #[error("Allele pair with dominant '{dominant}' or recessive '{recessive}' already exists in the vocabulary")]
    DuplicateAllele { dominant: String, recessive: String },

    /// A symbol is empty or contains non-alphabetic characters.
    #[error("Invalid allele symbol '{0}': symbols must be non-empty and alphabetic")]
    InvalidSymbol(String),

    /// Dominant and recessive symbols are the same string.
    #[error("Allele pair uses '{0}' for both dominant and recessive")]
    IdenticalSymbols(String),

    /// Requested number of default pairs is outside `2..=26`.
    #[error("Number of default allele pairs must be between 2 and 26, got {0}")]
    PairCountOutOfRange(usize),
}

/// Error returned when no vocabulary symbol matches at some position of a sequence.
///
/// `from` and `to` are char positions of the failing window, `near` is a
/// short excerpt of the sequence around it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unable to tokenize sequence {sequence} on position from: {from} to {to} near '{near}'")]
pub struct TokenizeError {
    pub sequence: String,
    pub from: usize,
    pub to: usize,
    pub near: String,
}

/// Reason a sequence (or a pair of sequences) failed validation.
///
/// The `Display` output is the human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Sequence should not be empty")]
    Empty,

    #[error("Invalid sequence: {sequence}. Sequence should only contain letters, found '{character}'")]
    InvalidCharacter { sequence: String, character: char },

    #[error("Invalid sequence. {0}")]
    Tokenize(#[from] TokenizeError),

    /// Odd number of tokens, so at least one allele has no partner.
    #[error("Invalid sequence: {sequence}. Sequence of {tokens} alleles cannot be split into pairs")]
    MalformedSequence { sequence: String, tokens: usize },

    #[error("Invalid sequence: {sequence}. Unknown allele '{symbol}'")]
    UnknownAllele { sequence: String, symbol: String },

    #[error("Invalid sequence: {sequence}. Unexpected allele {second} in sequence near '..{first}{second}'")]
    MismatchedPair {
        sequence: String,
        first: String,
        second: String,
    },

    #[error("Invalid sequence: {sequence}. Allele pair {dominant}/{recessive} occurs more than once")]
    DuplicatePairOccurrence {
        sequence: String,
        dominant: String,
        recessive: String,
    },

    #[error("Sequences {first} and {second} have different lengths")]
    LengthMismatch { first: String, second: String },

    #[error("Invalid sequences {first} and {second}. Sequences have alleles from different pairs '{first_symbol}' and '{second_symbol}' at slot {slot}")]
    LocusMismatch {
        first: String,
        second: String,
        slot: usize,
        first_symbol: String,
        second_symbol: String,
    },
}

/// Errors that can occur while crossing two genotypes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrossingError {
    /// The parents failed pair validation.
    #[error("Sequences are invalid: {0}")]
    InvalidSequence(ValidationError),

    /// Gametes were requested for a sequence that does not validate.
    #[error("Cannot combine gametes of malformed sequence {sequence}: {source}")]
    MalformedSequence {
        sequence: String,
        source: ValidationError,
    },
}

/// Errors raised while loading a vocabulary configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Vocabulary error: {0}")]
    Vocabulary(#[from] VocabularyError),
}
