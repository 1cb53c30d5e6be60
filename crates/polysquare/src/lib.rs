//! polysquare: an alphabet-square substitution codec.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the polysquare sub-crates. For most users, adding `polysquare` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use polysquare::prelude::*;
//!
//! // Build the square once.
//! let table = Table::build("abcdefghijklmnopqrstuvwxyz".chars())?;
//! assert_eq!(table.size(), 6);
//!
//! // Encode and decode through it as often as needed.
//! let codec = PolybiusCodec::new(table, CodecConfig::skip_unknown());
//! let message = codec.encode("hello my friend")?;
//! assert_eq!(codec.decode(&message)?, "hellomyfriend");
//! # Ok::<(), polysquare::Error>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `polysquare-core` | `Coord`, `UnknownSymbolPolicy`, error enums |
//! | [`table`] | `polysquare-table` | `Table` builder, keyed alphabets |
//! | [`codec`] | `polysquare-codec` | `SquareCipher`, `PolybiusCodec`, token grammar |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use std::error::Error as StdError;
use std::fmt;

/// Core types and errors (`polysquare-core`).
pub use polysquare_core as types;

/// Square table construction (`polysquare-table`).
///
/// [`table::Table::build`] validates an alphabet and lays it out;
/// [`table::keyed_alphabet`] derives a keyword-first alphabet.
pub use polysquare_table as table;

/// Encoders and decoders (`polysquare-codec`).
///
/// [`codec::SquareCipher`] is the capability trait;
/// [`codec::PolybiusCodec`] is the reference implementation.
pub use polysquare_codec as codec;

/// Any error raised by the polysquare crates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Table construction failed.
    Table(polysquare_core::TableError),
    /// Encode or decode failed.
    Codec(polysquare_core::CodecError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table(e) => write!(f, "table: {e}"),
            Self::Codec(e) => write!(f, "codec: {e}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Table(e) => Some(e),
            Self::Codec(e) => Some(e),
        }
    }
}

impl From<polysquare_core::TableError> for Error {
    fn from(e: polysquare_core::TableError) -> Self {
        Self::Table(e)
    }
}

impl From<polysquare_core::CodecError> for Error {
    fn from(e: polysquare_core::CodecError) -> Self {
        Self::Codec(e)
    }
}

/// Common imports for typical polysquare usage.
///
/// ```rust
/// use polysquare::prelude::*;
/// ```
pub mod prelude {
    pub use polysquare_core::{CodecError, Coord, TableError, UnknownSymbolPolicy};

    pub use polysquare_table::{keyed_alphabet, Table, DEFAULT_ALPHABET};

    pub use polysquare_codec::{CodecConfig, PolybiusCodec, SquareCipher};
}
