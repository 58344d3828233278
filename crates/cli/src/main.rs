mod args;
mod commands;
pub mod defaults;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

use args::{OutputFormat, VocabularyArgs};
use commands::{cross, gametes, validate};

/// Punnett: Mendelian crosses of genotype sequences
///
/// Genotypes are written as consecutive allele pairs such as `AaBbcc`.
/// Symbols come from the single-letter default vocabulary or from a JSON
/// configuration listing dominant/recessive pairs.
#[derive(Parser, Debug)]
#[command(name = "punnett")]
#[command(author, version, about = "Computes Punnett squares of Mendelian crosses", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Cross two parents and count the offspring genotypes.
    Cross {
        /// First parent
        first: String,

        /// Second parent
        second: String,

        #[command(flatten)]
        vocabulary: VocabularyArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Check a sequence, or two sequences as crossing partners.
    ///
    /// Exits with a non-zero status when validation fails.
    Validate {
        /// Sequence to check
        first: String,

        /// Optional crossing partner
        second: Option<String>,

        #[command(flatten)]
        vocabulary: VocabularyArgs,
    },

    /// List every gamete of a sequence.
    Gametes {
        /// Sequence to expand
        sequence: String,

        #[command(flatten)]
        vocabulary: VocabularyArgs,
    },
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(defaults::LOG_FILTER),
    )
    .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Cross {
            first,
            second,
            vocabulary,
            format,
        } => {
            cross::cross_parents(&first, &second, &vocabulary, format)?;
        }
        Commands::Validate {
            first,
            second,
            vocabulary,
        } => {
            if !validate::validate_sequences(&first, second.as_deref(), &vocabulary)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Gametes {
            sequence,
            vocabulary,
        } => {
            gametes::list_gametes(&sequence, &vocabulary)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
