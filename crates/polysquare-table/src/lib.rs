//! Square lookup tables for the polysquare codec.
//!
//! A [`Table`] lays an ordered, duplicate-free alphabet out row-major on
//! the smallest square grid that holds it. The last row may be ragged:
//! cells past the end of the alphabet stay unfilled and are never matched
//! or emitted.
//!
//! # Example
//!
//! ```
//! use polysquare_table::{Table, DEFAULT_ALPHABET};
//! use polysquare_core::Coord;
//!
//! let table = Table::build(DEFAULT_ALPHABET.chars()).unwrap();
//! assert_eq!(table.size(), 6);
//! assert_eq!(table.coord_of('z'), Some(Coord::new(4, 1)));
//! assert_eq!(table.symbol_at(Coord::new(5, 5)), None);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod keyed;
pub mod table;

#[cfg(test)]
pub(crate) mod compliance;

pub use keyed::keyed_alphabet;
pub use table::{side_for, Table};

/// The 26 lowercase ASCII letters, used by [`Table::lowercase`].
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
