//! The square table and its builder.

use std::fmt;

use indexmap::IndexSet;
use polysquare_core::{Coord, TableError};

use crate::DEFAULT_ALPHABET;

/// Side length of the smallest square holding `len` cells.
///
/// Equivalent to `ceil(sqrt(len))`, computed in integers. Returns 0 only
/// for `len == 0`.
pub fn side_for(len: usize) -> usize {
    let root = len.isqrt();
    if root * root == len {
        root
    } else {
        root + 1
    }
}

/// An immutable square grid of alphabet symbols.
///
/// Cell `(row, col)` holds the symbol at alphabet index
/// `row * size + col`, or nothing when that index is past the end of the
/// alphabet. Lookup by symbol goes through an ordered index built once at
/// construction, so it costs the same as lookup by coordinate.
///
/// Tables never change after [`build`](Table::build) and are `Send + Sync`;
/// share one behind an `Arc` for concurrent readers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    size: usize,
    cells: Box<[Option<char>]>,
    /// Alphabet in order. A symbol's index here is its row-major rank.
    symbols: IndexSet<char>,
}

impl Table {
    /// Validate `alphabet` and lay it out on a square grid.
    ///
    /// Returns `Err(TableError::EmptyAlphabet)` for an empty alphabet and
    /// `Err(TableError::DuplicateSymbol)` for the first repeat found,
    /// wherever it sits in the sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use polysquare_table::Table;
    /// use polysquare_core::TableError;
    ///
    /// let t = Table::build("abcde".chars()).unwrap();
    /// assert_eq!(t.size(), 3);
    /// assert_eq!(t.len(), 5);
    /// assert_eq!(t.capacity(), 9);
    ///
    /// assert!(matches!(
    ///     Table::build("aab".chars()),
    ///     Err(TableError::DuplicateSymbol { symbol: 'a', first: 0, duplicate: 1 })
    /// ));
    /// ```
    pub fn build<I>(alphabet: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = char>,
    {
        let alphabet = alphabet.into_iter();
        let mut symbols = IndexSet::with_capacity(alphabet.size_hint().0);
        for (duplicate, symbol) in alphabet.enumerate() {
            let (first, inserted) = symbols.insert_full(symbol);
            if !inserted {
                return Err(TableError::DuplicateSymbol {
                    symbol,
                    first,
                    duplicate,
                });
            }
        }
        if symbols.is_empty() {
            return Err(TableError::EmptyAlphabet);
        }
        Ok(Self::from_symbols(symbols))
    }

    /// Table over [`DEFAULT_ALPHABET`]: a 6x6 grid with 26 filled cells.
    pub fn lowercase() -> Self {
        Self::from_symbols(DEFAULT_ALPHABET.chars().collect())
    }

    /// Lay out an already validated, non-empty symbol set.
    fn from_symbols(symbols: IndexSet<char>) -> Self {
        let size = side_for(symbols.len());
        let mut cells = vec![None; size * size];
        for (cell, &symbol) in cells.iter_mut().zip(symbols.iter()) {
            *cell = Some(symbol);
        }
        tracing::debug!(symbols = symbols.len(), size, "built square table");
        Self {
            size,
            cells: cells.into_boxed_slice(),
            symbols,
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of filled cells, i.e. the alphabet length.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always returns `false`: construction rejects empty alphabets.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Total number of cells, `size * size`.
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Coordinate of `symbol`, or `None` if the alphabet lacks it.
    pub fn coord_of(&self, symbol: char) -> Option<Coord> {
        self.symbols
            .get_index_of(&symbol)
            .map(|rank| Coord::from_rank(rank, self.size))
    }

    /// Whether `symbol` is in the table.
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Symbol at `coord`, or `None` when the coordinate is off the grid
    /// or the cell is unfilled.
    pub fn symbol_at(&self, coord: Coord) -> Option<char> {
        if !coord.in_bounds(self.size) {
            return None;
        }
        self.cells[coord.rank(self.size)]
    }

    /// Grid rows, top to bottom. Unfilled cells are `None`.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Alphabet symbols in their original order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }

    /// Filled cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, char)> + '_ {
        self.symbols
            .iter()
            .enumerate()
            .map(|(rank, &symbol)| (Coord::from_rank(rank, self.size), symbol))
    }
}

impl TryFrom<&str> for Table {
    type Error = TableError;

    fn try_from(alphabet: &str) -> Result<Self, Self::Error> {
        Self::build(alphabet.chars())
    }
}

impl fmt::Display for Table {
    /// One row per line, cells separated by a space, unfilled cells as `·`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.unwrap_or('·'))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn empty_alphabet_rejected() {
        assert_eq!(Table::build("".chars()), Err(TableError::EmptyAlphabet));
    }

    #[test]
    fn duplicate_rejected() {
        assert_eq!(
            Table::build("aab".chars()),
            Err(TableError::DuplicateSymbol {
                symbol: 'a',
                first: 0,
                duplicate: 1,
            })
        );
    }

    #[test]
    fn duplicate_at_last_index_rejected() {
        assert_eq!(
            Table::build("abca".chars()),
            Err(TableError::DuplicateSymbol {
                symbol: 'a',
                first: 0,
                duplicate: 3,
            })
        );
        assert!(matches!(
            Table::build("abcdd".chars()),
            Err(TableError::DuplicateSymbol { symbol: 'd', first: 3, duplicate: 4 })
        ));
    }

    #[test]
    fn lowercase_layout() {
        let t = Table::lowercase();
        assert_eq!(t.size(), 6);
        assert_eq!(t.len(), 26);
        assert_eq!(t.capacity(), 36);
        assert_eq!(t.coord_of('a'), Some(Coord::new(0, 0)));
        assert_eq!(t.coord_of('b'), Some(Coord::new(0, 1)));
        assert_eq!(t.coord_of('g'), Some(Coord::new(1, 0)));
        assert_eq!(t.coord_of('z'), Some(Coord::new(4, 1)));
        assert_eq!(t.coord_of(' '), None);
        assert_eq!(t, Table::build(DEFAULT_ALPHABET.chars()).unwrap());
        compliance::assert_all(&t);
    }

    #[test]
    fn unfilled_cells_resolve_to_nothing() {
        let t = Table::lowercase();
        assert_eq!(t.symbol_at(Coord::new(4, 1)), Some('z'));
        assert_eq!(t.symbol_at(Coord::new(4, 2)), None);
        assert_eq!(t.symbol_at(Coord::new(5, 5)), None);
        assert_eq!(t.symbol_at(Coord::new(6, 0)), None);
    }

    #[test]
    fn single_symbol_table() {
        let t = Table::build(['x']).unwrap();
        assert_eq!(t.size(), 1);
        assert_eq!(t.coord_of('x'), Some(Coord::new(0, 0)));
        compliance::assert_all(&t);
    }

    #[test]
    fn non_ascii_symbols() {
        let t = Table::try_from("αβγδ").unwrap();
        assert_eq!(t.size(), 2);
        assert_eq!(t.coord_of('δ'), Some(Coord::new(1, 1)));
        compliance::assert_all(&t);
    }

    #[test]
    fn build_is_deterministic() {
        let a = Table::try_from("qwertyuiop").unwrap();
        let b = Table::try_from("qwertyuiop").unwrap();
        assert_eq!(a, b);
    }

    // ── Views ───────────────────────────────────────────────────

    #[test]
    fn rows_are_ragged_only_in_fill() {
        let t = Table::try_from("abcde").unwrap();
        let rows: Vec<Vec<Option<char>>> = t.rows().map(|r| r.to_vec()).collect();
        assert_eq!(
            rows,
            vec![
                vec![Some('a'), Some('b'), Some('c')],
                vec![Some('d'), Some('e'), None],
                vec![None, None, None],
            ]
        );
    }

    #[test]
    fn display_renders_grid() {
        let t = Table::try_from("abcde").unwrap();
        assert_eq!(t.to_string(), "a b c\nd e ·\n· · ·");
    }

    #[test]
    fn symbols_preserve_order() {
        let t = Table::try_from("zyx").unwrap();
        assert_eq!(t.symbols().collect::<String>(), "zyx");
    }

    // ── Size formula ────────────────────────────────────────────

    #[test]
    fn side_for_boundaries() {
        let cases = [(0, 0), (1, 1), (4, 2), (5, 3), (25, 5), (26, 6), (36, 6), (37, 7)];
        for (len, side) in cases {
            assert_eq!(side_for(len), side, "side_for({len})");
        }
    }

    proptest! {
        #[test]
        fn side_is_minimal(len in 1usize..100_000) {
            let s = side_for(len);
            prop_assert!(s * s >= len);
            prop_assert!((s - 1) * (s - 1) < len);
        }

        #[test]
        fn distinct_alphabets_satisfy_contract(
            set in prop::collection::btree_set(any::<char>(), 1..80)
        ) {
            let alphabet: Vec<char> = set.into_iter().collect();
            let t = Table::build(alphabet.iter().copied()).unwrap();
            prop_assert_eq!(t.len(), alphabet.len());
            prop_assert_eq!(t.symbols().collect::<Vec<_>>(), alphabet);
            compliance::assert_all(&t);
        }
    }
}
