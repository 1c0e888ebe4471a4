//! # Linear algebra primitives
//!
//! Sparse matrices over exact integers, keyed by coordinate.
use std::fmt;

pub mod matrix;
pub mod traits;

/// A single matrix value together with its row and column index, in that order.
pub type SparseTriple<F> = (usize, usize, F);

/// Location of a value inside a matrix.
///
/// Used as the key of the sparse storage. Ordering is row-major: first by row, then by column.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coordinate {
    /// Row index, starting at `0`.
    pub row: usize,
    /// Column index, starting at `0`.
    pub column: usize,
}

impl Coordinate {
    /// Create a new coordinate.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// The coordinate this value moves to when the matrix is transposed.
    #[must_use]
    pub fn transposed(self) -> Self {
        Self { row: self.column, column: self.row }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Declared shape of a matrix.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Dimensions {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
}

impl Dimensions {
    /// Create a new shape.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Whether a coordinate lies within this shape.
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.row < self.rows && coordinate.column < self.columns
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}
