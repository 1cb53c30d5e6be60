//! Error types for table construction and codec operations.
//!
//! Split by subsystem: [`TableError`] is raised while building a table,
//! [`CodecError`] by encode and decode. Every error is terminal for the
//! call that raised it; nothing is retried internally.

use std::error::Error;
use std::fmt;

/// Errors from building a table out of an alphabet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableError {
    /// The alphabet has no symbols.
    EmptyAlphabet,
    /// A symbol occurs more than once in the alphabet.
    DuplicateSymbol {
        /// The repeated symbol.
        symbol: char,
        /// Zero-based index of its first occurrence.
        first: usize,
        /// Zero-based index of the repeat.
        duplicate: usize,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAlphabet => write!(f, "alphabet must contain at least one symbol"),
            Self::DuplicateSymbol {
                symbol,
                first,
                duplicate,
            } => write!(
                f,
                "duplicate symbol {symbol:?} at index {duplicate} (first seen at index {first})"
            ),
        }
    }
}

impl Error for TableError {}

/// Why a token failed to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MalformedReason {
    /// The token is empty (leading, trailing, or doubled separator).
    Empty,
    /// Splitting on `-` did not give exactly two fields.
    FieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// A field is not a run of ASCII decimal digits.
    NotDecimal,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty token"),
            Self::FieldCount { found } => {
                write!(f, "expected 2 hyphen-separated fields, found {found}")
            }
            Self::NotDecimal => write!(f, "field is not a decimal integer"),
        }
    }
}

/// Errors from encoding text or decoding a token message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodecError {
    /// Encode met a symbol absent from the table under the `Fail` policy.
    UnknownSymbol {
        /// The offending symbol.
        symbol: char,
        /// Zero-based symbol index in the input (counts `char`s, not bytes).
        index: usize,
    },
    /// Decode met a token outside the `digits "-" digits` grammar.
    MalformedToken {
        /// The offending token text.
        token: String,
        /// Zero-based token index in the message.
        position: usize,
        /// What was wrong with it.
        reason: MalformedReason,
    },
    /// Decode met a well-formed token that names no symbol: an axis is
    /// outside `[1, size]` or the cell is unfilled.
    CoordinateOutOfRange {
        /// The offending token text.
        token: String,
        /// Zero-based token index in the message.
        position: usize,
        /// Side length of the table.
        size: usize,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSymbol { symbol, index } => {
                write!(f, "unknown symbol {symbol:?} at index {index}")
            }
            Self::MalformedToken {
                token,
                position,
                reason,
            } => write!(f, "malformed token {token:?} at position {position}: {reason}"),
            Self::CoordinateOutOfRange {
                token,
                position,
                size,
            } => write!(
                f,
                "token {token:?} at position {position} names no symbol in a {size}x{size} table"
            ),
        }
    }
}

impl Error for CodecError {}
