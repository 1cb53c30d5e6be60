//! Benchmark inputs for the polysquare codec.
//!
//! - [`wide_alphabet`]: a large alphabet for table-build and lookup cost
//! - [`sample_text`]: deterministic text over an alphabet via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use polysquare_codec::{CodecConfig, PolybiusCodec};
use polysquare_core::TableError;

/// `len` distinct symbols starting at U+0100.
///
/// U+0100 onward is free of surrogates for any `len` below 0xD700.
pub fn wide_alphabet(len: usize) -> Vec<char> {
    (0..len as u32)
        .filter_map(|i| char::from_u32(0x100 + i))
        .collect()
}

/// `len` symbols drawn from `alphabet`, reproducible for a given seed.
///
/// Every `gap`-th symbol (when `gap > 0`) is a space, which is never in
/// the alphabets used here, so skip-policy benchmarks see unknowns.
///
/// # Panics
///
/// Panics if `alphabet` is empty.
pub fn sample_text(alphabet: &[char], len: usize, gap: usize, seed: u64) -> String {
    assert!(!alphabet.is_empty(), "sample_text needs a non-empty alphabet");
    let mut state = seed;
    (0..len)
        .map(|i| {
            if gap > 0 && i % gap == gap - 1 {
                return ' ';
            }
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            alphabet[((state >> 33) % alphabet.len() as u64) as usize]
        })
        .collect()
}

/// A codec over [`wide_alphabet`] of `len` symbols.
///
/// Fails only for `len == 0`.
pub fn wide_codec(len: usize, config: CodecConfig) -> Result<PolybiusCodec, TableError> {
    PolybiusCodec::from_alphabet(wide_alphabet(len), config)
}
