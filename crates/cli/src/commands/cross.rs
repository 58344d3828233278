use anyhow::{Context, Result};

use punnett_core::crossing::CrossingEngine;

use crate::args::{OutputFormat, VocabularyArgs};
use crate::printing::{print_square_json, print_square_table};

pub fn cross_parents(
    first: &str,
    second: &str,
    vocabulary: &VocabularyArgs,
    format: OutputFormat,
) -> Result<()> {
    let engine = CrossingEngine::new(vocabulary.load()?);
    log::info!(
        "Crossing {first} x {second} over {} allele pairs",
        engine.vocabulary().len()
    );

    let square = engine
        .cross(first, second)
        .with_context(|| format!("Failed to cross {first} x {second}"))?;

    match format {
        OutputFormat::Table => print_square_table(first, second, &square),
        OutputFormat::Json => print_square_json(first, second, &square)?,
    }

    Ok(())
}
