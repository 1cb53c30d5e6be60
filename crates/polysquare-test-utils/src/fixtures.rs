//! Reusable tables and codecs.

use polysquare_codec::{CodecConfig, PolybiusCodec};
use polysquare_core::UnknownSymbolPolicy;
use polysquare_table::Table;

/// 36 symbols: fills a 6x6 grid exactly, no unfilled cells.
pub const DIGITS_AND_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// The 26-letter lowercase table (size 6, last 10 cells unfilled).
pub fn lowercase_table() -> Table {
    Table::lowercase()
}

/// A lowercase codec with the given unknown-symbol policy.
pub fn lowercase_codec(policy: UnknownSymbolPolicy) -> PolybiusCodec {
    PolybiusCodec::lowercase(CodecConfig::from(policy))
}
