//! Grid coordinates.

use std::fmt;

/// A cell position in a square table.
///
/// Zero-based internally. The external token form is 1-based
/// (`"row-col"`), see [`Coord::one_based`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
}

impl Coord {
    /// Create a coordinate from zero-based indices.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Coordinate of the `rank`-th cell in row-major order on a grid
    /// with side `size`.
    ///
    /// `size` must be non-zero.
    pub const fn from_rank(rank: usize, size: usize) -> Self {
        Self {
            row: rank / size,
            col: rank % size,
        }
    }

    /// Row-major rank of this coordinate on a grid with side `size`.
    pub const fn rank(&self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Whether both axes fall in `[0, size)`.
    pub const fn in_bounds(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// The 1-based `(row, col)` pair used in tokens.
    pub const fn one_based(&self) -> (usize, usize) {
        (self.row + 1, self.col + 1)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, c) = self.one_based();
        write!(f, "{r}-{c}")
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}
