//! The Polybius square codec.

use std::sync::Arc;

use polysquare_core::{CodecError, TableError, UnknownSymbolPolicy};
use polysquare_table::Table;

use crate::cipher::SquareCipher;
use crate::config::CodecConfig;
use crate::token;

/// Polybius square codec: each symbol becomes the 1-based `row-col` of
/// its cell.
///
/// Holds its table behind an `Arc`, so clones are cheap and any number of
/// threads may encode and decode through one codec at once.
#[derive(Clone, Debug)]
pub struct PolybiusCodec {
    table: Arc<Table>,
    config: CodecConfig,
}

impl PolybiusCodec {
    /// Value returned by [`SquareCipher::kind`].
    pub const KIND: &'static str = "polybius";

    /// Create a codec over an already built table.
    pub fn new(table: impl Into<Arc<Table>>, config: CodecConfig) -> Self {
        Self {
            table: table.into(),
            config,
        }
    }

    /// Build a table from `alphabet` and wrap it in a codec.
    ///
    /// Fails with the same errors as [`Table::build`].
    pub fn from_alphabet<I>(alphabet: I, config: CodecConfig) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = char>,
    {
        Ok(Self::new(Table::build(alphabet)?, config))
    }

    /// Codec over the lowercase Latin alphabet on a 6x6 grid.
    pub fn lowercase(config: CodecConfig) -> Self {
        Self::new(Table::lowercase(), config)
    }

    /// The table this codec reads.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// A shared handle to the table.
    pub fn shared_table(&self) -> Arc<Table> {
        Arc::clone(&self.table)
    }

    /// The configuration fixed at construction.
    pub fn config(&self) -> CodecConfig {
        self.config
    }
}

impl SquareCipher for PolybiusCodec {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn encode(&self, text: &str) -> Result<String, CodecError> {
        // "r-c " is at least four bytes per token.
        let mut out = String::with_capacity(text.len() * 4);
        for (index, symbol) in text.chars().enumerate() {
            match self.table.coord_of(symbol) {
                Some(coord) => token::push_token(&mut out, coord),
                None => match self.config.on_unknown {
                    UnknownSymbolPolicy::Skip => {
                        tracing::trace!(?symbol, index, "skipping unknown symbol");
                    }
                    UnknownSymbolPolicy::Fail => {
                        return Err(CodecError::UnknownSymbol { symbol, index });
                    }
                },
            }
        }
        Ok(out)
    }

    fn decode(&self, message: &str) -> Result<String, CodecError> {
        let size = self.table.size();
        token::split_message(message)
            .enumerate()
            .map(|(position, tok)| {
                let coord = token::parse_token(tok).map_err(|reason| {
                    CodecError::MalformedToken {
                        token: tok.to_string(),
                        position,
                        reason,
                    }
                })?;
                coord
                    .and_then(|c| self.table.symbol_at(c))
                    .ok_or_else(|| CodecError::CoordinateOutOfRange {
                        token: tok.to_string(),
                        position,
                        size,
                    })
            })
            .collect()
    }
}
