//! Vocabulary configuration.
//!
//! A configuration lists allele pairs as `{ "dominant": .., "recessive": .. }`
//! objects and may force an extractor strategy or a canonical pair order.
//! It can be written to and read from JSON so a vocabulary can be
//! reproduced exactly.
//!
//! ```
//! use punnett_core::config::VocabularyConfig;
//!
//! let config = VocabularyConfig::from_json_str(r#"{
//!     "pairs": [
//!         { "dominant": "Cr", "recessive": "cr" },
//!         { "dominant": "A", "recessive": "a" }
//!     ],
//!     "order": "alphabetical"
//! }"#).unwrap();
//!
//! let vocabulary = config.build().unwrap();
//! assert_eq!(vocabulary.pairs()[0].dominant(), "A");
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::base::{AllelePair, Vocabulary};
use crate::errors::ConfigError;
use crate::sequence::ExtractorStrategy;

/// Serializable description of a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyConfig {
    /// Allele pairs in insertion order
    pub pairs: Vec<AllelePair>,
    /// Extractor to force; inferred from the symbols when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extractor: Option<ExtractorStrategy>,
    /// Canonical locus order
    #[serde(default)]
    pub order: PairOrder,
}

/// How loci are ordered in canonical genotypes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairOrder {
    /// Order in which pairs are listed
    #[default]
    Insertion,
    /// Sorted by dominant symbol
    Alphabetical,
}

impl VocabularyConfig {
    pub fn new(pairs: Vec<AllelePair>) -> Self {
        Self {
            pairs,
            extractor: None,
            order: PairOrder::Insertion,
        }
    }

    /// Describe an existing vocabulary, keeping its order and extractor.
    pub fn from_vocabulary(vocabulary: &Vocabulary) -> Self {
        Self {
            pairs: vocabulary.pairs().to_vec(),
            extractor: Some(vocabulary.extractor()),
            order: PairOrder::Insertion,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("Loading vocabulary configuration from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the vocabulary, rejecting duplicate or malformed symbols.
    pub fn build(&self) -> Result<Vocabulary, ConfigError> {
        let mut builder = Vocabulary::builder();
        builder.add_pairs(self.pairs.iter().cloned())?;

        if let Some(strategy) = self.extractor {
            builder = builder.extractor(strategy);
        }
        if self.order == PairOrder::Alphabetical {
            builder = builder.order_by(|a, b| a.dominant().cmp(b.dominant()));
        }

        Ok(builder.build())
    }
}
