use anyhow::Result;
use serde_json::json;

use punnett_core::crossing::PunnettSquare;

pub fn print_square_table(first: &str, second: &str, square: &PunnettSquare) {
    let entries = square.sorted();
    let width = entries
        .iter()
        .map(|(genotype, _)| genotype.chars().count())
        .max()
        .unwrap_or(0)
        .max("Genotype".len());

    println!("\nPunnett square for {first} x {second}");
    println!("{}", "=".repeat(width + 22));
    println!("{:<width$}  {:>8}  {:>10}", "Genotype", "Count", "Frequency");
    for (genotype, count) in entries {
        println!(
            "{genotype:<width$}  {count:>8}  {:>10.4}",
            square.frequency(genotype)
        );
    }
    println!("{}", "=".repeat(width + 22));
    println!(
        "Total: {} combinations, {} genotypes",
        square.total(),
        square.len()
    );
}

pub fn print_square_json(first: &str, second: &str, square: &PunnettSquare) -> Result<()> {
    let report = json!({
        "parents": [first, second],
        "total": square.total(),
        "genotypes": square,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
