//! Keyed alphabets.
//!
//! The classic keyed square puts the distinct symbols of a keyword first
//! and fills the rest of the grid with the remaining base symbols. The
//! result is an ordinary alphabet, so the same [`Table`](crate::Table)
//! builder handles it.

use indexmap::IndexSet;

/// Keyword symbols in first-occurrence order, followed by the base
/// symbols the keyword did not use.
///
/// Symbols repeated in `keyword` or `base` appear once. Keyword symbols
/// absent from `base` are kept, so the result can be larger than `base`.
///
/// ```
/// use polysquare_table::keyed_alphabet;
///
/// assert_eq!(keyed_alphabet("zebra", "abcdefg"), "zebracdfg");
/// ```
pub fn keyed_alphabet(keyword: &str, base: &str) -> String {
    let ordered: IndexSet<char> = keyword.chars().chain(base.chars()).collect();
    ordered.into_iter().collect()
}
