use anyhow::{Context, Result};
use clap::Parser;
use polysquare::prelude::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(cli.verbose, std::env::var("RUST_LOG").ok()))
        .init();

    let codec = build_codec(&cli)?;

    match cli.command {
        Commands::Table => println!("{}", codec.table()),
        Commands::Encode { text } => {
            let text = text.join(" ");
            let message = codec
                .encode(&text)
                .with_context(|| format!("failed to encode {text:?}"))?;
            println!("{message}");
        }
        Commands::Decode { message } => {
            let message = message.join(" ");
            let text = codec
                .decode(&message)
                .with_context(|| format!("failed to decode {message:?}"))?;
            println!("{text}");
        }
    }
    Ok(())
}

/// Log filter from `RUST_LOG` directives. The level implied by `verbose`
/// applies only when `RUST_LOG` sets no default level of its own.
fn log_filter(verbose: bool, rust_log: Option<String>) -> EnvFilter {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(rust_log.unwrap_or_default())
}

fn build_codec(cli: &Cli) -> Result<PolybiusCodec> {
    let alphabet = match &cli.keyword {
        Some(keyword) => keyed_alphabet(keyword, &cli.alphabet),
        None => cli.alphabet.clone(),
    };
    let table = Table::try_from(alphabet.as_str())
        .with_context(|| format!("invalid alphabet {alphabet:?}"))?;
    tracing::debug!(
        size = table.size(),
        symbols = table.len(),
        on_unknown = %cli.on_unknown,
        "codec ready"
    );
    Ok(PolybiusCodec::new(table, CodecConfig::from(cli.on_unknown)))
}
