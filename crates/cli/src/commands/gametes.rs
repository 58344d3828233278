use anyhow::{Context, Result};

use punnett_core::crossing::combine;

use crate::args::VocabularyArgs;

pub fn list_gametes(sequence: &str, vocabulary: &VocabularyArgs) -> Result<()> {
    let vocabulary = vocabulary.load()?;
    let gametes = combine(&vocabulary, sequence)
        .with_context(|| format!("Failed to list gametes of {sequence}"))?;

    for gamete in &gametes {
        println!("{gamete}");
    }
    println!("Total: {} gametes", gametes.len());

    Ok(())
}
