//! Test utilities for polysquare development.
//!
//! Provides ready-made tables and codecs ([`fixtures`]), proptest
//! strategies for alphabets and text over them ([`strategies`]), and a
//! mock [`SquareCipher`] for exercising code that only sees the trait.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

use std::sync::atomic::{AtomicUsize, Ordering};

use polysquare_codec::SquareCipher;
use polysquare_core::CodecError;

pub use fixtures::{lowercase_codec, lowercase_table, DIGITS_AND_LETTERS};
pub use strategies::{arb_alphabet, arb_alphabet_and_text};

/// Mock cipher that passes text through unchanged and counts calls.
///
/// Useful for checking that trait-object callers route through the
/// capability set rather than a concrete codec.
pub struct IdentityCipher {
    calls: AtomicUsize,
}

impl IdentityCipher {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    /// Total number of `encode` and `decode` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Default for IdentityCipher {
    fn default() -> Self {
        Self::new()
    }
}

impl SquareCipher for IdentityCipher {
    fn kind(&self) -> &'static str {
        "identity"
    }

    fn encode(&self, text: &str) -> Result<String, CodecError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(text.to_string())
    }

    fn decode(&self, message: &str) -> Result<String, CodecError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(message.to_string())
    }
}
