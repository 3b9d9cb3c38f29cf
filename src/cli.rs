pub mod generate;
pub mod ingredient;

use clap::ValueEnum;

/// How command results are printed on stdout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
