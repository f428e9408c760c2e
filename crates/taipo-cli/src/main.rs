//! taipo CLI - Command-line interface
//!
//! Usage:
//!   taipo entities <nlu.yml>
//!   taipo curly <nlu.yml>
//!   taipo strip <input.yml> <output.yml>
//!   taipo examples <nlu.yml> [--json]

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use taipo_core::{AppConfig, LoggingConfig, TrainingExample};
use taipo_extractor::{curly_entity_items_with, entity_names, replace_ent_assignment};

#[derive(Parser)]
#[command(name = "taipo")]
#[command(about = "Entity annotation tools for NLU training data")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List entity names used in `[text](name)` annotations
    Entities {
        /// Path to the NLU file
        path: PathBuf,
    },
    /// List metadata tokens used in `[text]{key: value}` annotations
    Curly {
        /// Path to the NLU file
        path: PathBuf,
    },
    /// Strip `[text](name)` annotations and write a clean NLU file
    Strip {
        /// NLU file to read
        input: PathBuf,
        /// NLU file to write
        output: PathBuf,
    },
    /// List training examples
    Examples {
        /// Path to the NLU file
        path: PathBuf,
        /// Print JSON lines instead of tab separated rows
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_tracing(&config.logging);

    match cli.command {
        Commands::Entities { path } => {
            let examples = read_examples(&path)?;
            for name in entity_names(examples.iter().map(|e| e.text.as_str())) {
                println!("{name}");
            }
        }
        Commands::Curly { path } => {
            let examples = read_examples(&path)?;
            let mut items: Vec<String> =
                curly_entity_items_with(examples.iter().map(|e| e.text.as_str()), &config.scan)
                    .into_iter()
                    .collect();
            items.sort();
            for item in items {
                println!("{item}");
            }
        }
        Commands::Strip { input, output } => {
            let examples = read_examples(&input)?;
            let cleaned = strip_examples(examples);
            taipo_nlu::write_nlu_file(&cleaned, &output)
                .with_context(|| format!("failed to write {}", output.display()))?;
            tracing::info!(examples = cleaned.len(), "wrote {}", output.display());
        }
        Commands::Examples { path, json } => {
            let examples = read_examples(&path)?;
            for example in &examples {
                if json {
                    println!("{}", serde_json::to_string(example)?);
                } else {
                    println!("{}\t{}", example.intent, example.text);
                }
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::from_file(path)?.with_env_override()?,
        None => AppConfig::from_env()?,
    };
    Ok(config)
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.level.as_str().into());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.json_format {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn read_examples(path: &Path) -> anyhow::Result<Vec<TrainingExample>> {
    let examples = taipo_nlu::read_nlu_file(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    tracing::debug!(examples = examples.len(), "loaded {}", path.display());
    Ok(examples)
}

/// Replace every example text with its stripped form, keeping intents
fn strip_examples(examples: Vec<TrainingExample>) -> Vec<TrainingExample> {
    let cleaned = replace_ent_assignment(examples.iter().map(|e| e.text.as_str()));
    examples
        .into_iter()
        .zip(cleaned)
        .map(|(example, text)| example.with_text(text))
        .collect()
}
