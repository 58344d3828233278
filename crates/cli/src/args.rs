use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

use punnett_core::base::{default_vocabulary, Vocabulary};
use punnett_core::config::VocabularyConfig;

use crate::defaults;

/// Where the allele vocabulary comes from.
#[derive(Args, Debug)]
pub struct VocabularyArgs {
    /// JSON vocabulary configuration file
    #[arg(short, long, conflicts_with = "pairs")]
    pub config: Option<PathBuf>,

    /// Use single-letter pairs A/a, B/b, ... for the first N letters
    #[arg(short = 'n', long)]
    pub pairs: Option<usize>,
}

impl VocabularyArgs {
    pub fn load(&self) -> Result<Vocabulary> {
        if let Some(path) = &self.config {
            let config = VocabularyConfig::from_file(path)
                .with_context(|| format!("Failed to read vocabulary from {}", path.display()))?;
            return config
                .build()
                .with_context(|| format!("Invalid vocabulary in {}", path.display()));
        }

        let pairs = self.pairs.unwrap_or(defaults::VOCABULARY_PAIRS);
        default_vocabulary(pairs).context("Failed to build default vocabulary")
    }
}

/// Output format for crossing results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Table,
    /// JSON object
    Json,
}
