use std::path::PathBuf;

use clap::{Parser, Subcommand};
use glossary_index::Result;
use glossary_index::commands::{RunOptions, run_index, show_config};

#[derive(Parser)]
#[command(name = "glossary-index")]
#[command(about = "Embeds a multilingual glossary and upserts it into a vector index")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the indexing pipeline: load, compose, embed, upsert
    Run {
        /// Path to the seed file (JSON array of glossary entries)
        #[arg(long)]
        seed: Option<PathBuf>,
        /// Target collection in the index service
        #[arg(long)]
        collection: Option<String>,
        /// Embedding model identifier
        #[arg(long)]
        model: Option<String>,
    },
    /// Show the resolved configuration
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            seed,
            collection,
            model,
        } => run_index(RunOptions {
            seed,
            collection,
            model,
        }),
        Commands::Config => show_config(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn cli_parsing() {
        let cli = Cli::try_parse_from(["glossary-index", "run"]);
        assert!(cli.is_ok());

        if let Ok(parsed) = cli {
            matches!(parsed.command, Commands::Run { .. });
        }
    }

    #[test]
    fn run_command_with_overrides() {
        let cli = Cli::try_parse_from([
            "glossary-index",
            "run",
            "--seed",
            "/work/seed_50.json",
            "--collection",
            "glossary_v1",
            "--model",
            "paraphrase-multilingual:latest",
        ]);
        assert!(cli.is_ok());

        if let Ok(parsed) = cli {
            if let Commands::Run {
                seed,
                collection,
                model,
            } = parsed.command
            {
                assert_eq!(seed, Some(PathBuf::from("/work/seed_50.json")));
                assert_eq!(collection, Some("glossary_v1".to_string()));
                assert_eq!(model, Some("paraphrase-multilingual:latest".to_string()));
            }
        }
    }

    #[test]
    fn config_command() {
        let cli = Cli::try_parse_from(["glossary-index", "config"]);
        assert!(cli.is_ok());

        if let Ok(parsed) = cli {
            matches!(parsed.command, Commands::Config);
        }
    }

    #[test]
    fn invalid_command() {
        let cli = Cli::try_parse_from(["glossary-index", "invalid"]);
        assert!(cli.is_err());

        if let Err(err) = cli {
            assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
        }
    }

    #[test]
    fn help_message() {
        let cli = Cli::try_parse_from(["glossary-index", "--help"]);
        assert!(cli.is_err());

        if let Err(err) = cli {
            assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        }
    }
}
