//! Table contract checks shared by the unit tests.

use crate::table::{side_for, Table};
use indexmap::IndexSet;
use polysquare_core::Coord;

/// Assert that the side is the minimal square holding the alphabet.
pub fn assert_size_minimal(table: &Table) {
    assert_eq!(table.size(), side_for(table.len()));
    assert_eq!(table.capacity(), table.size() * table.size());
    assert!(table.capacity() >= table.len());
}

/// Assert that every alphabet symbol sits in exactly one grid cell.
pub fn assert_symbols_unique(table: &Table) {
    let mut seen = IndexSet::new();
    for row in table.rows() {
        for symbol in row.iter().flatten() {
            assert!(seen.insert(*symbol), "symbol {symbol:?} appears twice");
        }
    }
    assert_eq!(seen.len(), table.len());
    assert!(table.symbols().eq(seen.iter().copied()));
}

/// Assert that the fill is row-major: all filled cells precede all
/// unfilled cells.
pub fn assert_row_major_fill(table: &Table) {
    let flat: Vec<Option<char>> = table.rows().flat_map(|r| r.iter().copied()).collect();
    let filled = flat.iter().take_while(|c| c.is_some()).count();
    assert_eq!(filled, table.len());
    assert!(flat[filled..].iter().all(Option::is_none));
}

/// Assert that `coord_of` and `symbol_at` are inverse over filled cells
/// and that out-of-grid coordinates resolve to nothing.
pub fn assert_lookup_inverse(table: &Table) {
    for (coord, symbol) in table.iter() {
        assert_eq!(table.coord_of(symbol), Some(coord));
        assert_eq!(table.symbol_at(coord), Some(symbol));
    }
    let size = table.size();
    assert_eq!(table.symbol_at(Coord::new(size, 0)), None);
    assert_eq!(table.symbol_at(Coord::new(0, size)), None);
}

/// Run every check.
pub fn assert_all(table: &Table) {
    assert_size_minimal(table);
    assert_symbols_unique(table);
    assert_row_major_fill(table);
    assert_lookup_inverse(table);
}
