use clap::{Parser, Subcommand};
use polysquare::prelude::{UnknownSymbolPolicy, DEFAULT_ALPHABET};

#[derive(Parser, Debug)]
#[command(name = "polysquare")]
#[command(about = "Encode text as Polybius-square coordinate tokens and back", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Ordered, duplicate-free symbols laid out row-major in the square
    #[arg(long, short, env = "POLYSQUARE_ALPHABET", default_value = DEFAULT_ALPHABET)]
    pub alphabet: String,

    /// Keyword moved to the front of the alphabet
    #[arg(long, short)]
    pub keyword: Option<String>,

    /// What to do with symbols missing from the alphabet when encoding (skip, fail)
    #[arg(long, env = "POLYSQUARE_ON_UNKNOWN", default_value = "skip")]
    pub on_unknown: UnknownSymbolPolicy,

    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the square
    Table,

    /// Encode text into space-separated row-col tokens
    Encode {
        /// Text to encode; multiple arguments are joined by single spaces
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Decode space-separated row-col tokens into text
    Decode {
        /// Tokens to decode; multiple arguments are joined by single spaces
        #[arg(required = true)]
        message: Vec<String>,
    },
}
