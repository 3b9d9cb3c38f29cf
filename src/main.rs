use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use shoplist::cli::{generate, ingredient, OutputFormat};

/// shoplist - Consolidated shopping lists from recipes
#[derive(Parser)]
#[command(name = "shoplist")]
#[command(about = "Aggregate recipe ingredients into a categorized shopping list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a shopping list from a JSON array of recipes
    Generate {
        /// Recipe file
        recipes: PathBuf,

        /// Output format (overrides config file)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Fail on unparseable quantities instead of warning
        #[arg(long)]
        strict: bool,
    },
    /// Convert one measurement into its standard unit
    Standardize {
        /// Quantity such as "2", "0.5" or "1 1/2"
        amount: String,

        unit: String,

        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Show the grocery category of an ingredient
    Categorize {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = shoplist::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    shoplist::observability::init_observability(
        &config.observability.log_level,
        config.observability.json,
    )?;

    let output = match cli.command {
        Commands::Generate {
            recipes,
            format,
            strict,
        } => generate::generate(
            &config,
            &recipes,
            format.unwrap_or_else(|| config.output_format()),
            strict,
        )?,
        Commands::Standardize {
            amount,
            unit,
            name,
            format,
        } => ingredient::standardize(
            &amount,
            &unit,
            &name.join(" "),
            format.unwrap_or_else(|| config.output_format()),
        )?,
        Commands::Categorize { name, format } => ingredient::categorize_ingredient(
            &name.join(" "),
            format.unwrap_or_else(|| config.output_format()),
        )?,
    };

    print!("{output}");

    Ok(())
}
