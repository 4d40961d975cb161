use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "numero-grid")]
#[command(about = "Name numerology and Lo Shu grids from the command line")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output", global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Pythagorean and Chaldean numbers for a name
    Name {
        /// The name to score; quote it if it contains spaces
        name: String,
    },
    /// Lo Shu grid for a birth date
    Grid {
        /// DD/MM/YYYY, DD-MM-YYYY, DD.MM.YYYY, DDMMYYYY or YYYY-MM-DD
        date: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
