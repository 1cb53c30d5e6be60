//! Handling of input symbols that are absent from the table.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// What the encoder does with a symbol the table does not contain.
///
/// Fixed when a codec is constructed and applied to every symbol of
/// every encode call made through it. Decode has no equivalent: every
/// token must resolve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UnknownSymbolPolicy {
    /// Omit the symbol from the output. No token, no placeholder.
    Skip,
    /// Abort the whole encode with
    /// [`CodecError::UnknownSymbol`](crate::CodecError::UnknownSymbol).
    #[default]
    Fail,
}

impl UnknownSymbolPolicy {
    /// Stable lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Skip => "skip",
            Self::Fail => "fail",
        }
    }
}

impl fmt::Display for UnknownSymbolPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an [`UnknownSymbolPolicy`] from text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsePolicyError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParsePolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown symbol policy '{}' (expected 'skip' or 'fail')",
            self.input
        )
    }
}

impl Error for ParsePolicyError {}

impl FromStr for UnknownSymbolPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" | "ignore" => Ok(Self::Skip),
            "fail" | "error" => Ok(Self::Fail),
            _ => Err(ParsePolicyError {
                input: s.to_string(),
            }),
        }
    }
}
