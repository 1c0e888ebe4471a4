//! # Sparse matrix
//!
//! Only the values of a `SparseMatrix` that are not stored are zero. A stored value may be zero as
//! well, for example when it was read like that from a file; everything in this crate treats such
//! a value exactly like a value that is absent.
use std::collections::HashMap;
use std::fmt;

use itertools::Itertools;
use num_traits::One;

use crate::data::linear_algebra::{Coordinate, Dimensions, SparseTriple};
use crate::data::linear_algebra::traits::Element;

/// Matrix of exact integers that stores its values keyed by `Coordinate`.
///
/// Dimensions are declared at creation, and not inferred from the values. Indices start at `0`.
#[derive(Clone, Debug)]
pub struct SparseMatrix<F = i64> {
    entries: HashMap<Coordinate, F>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: Element> SparseMatrix<F> {
    /// Create a new instance.
    ///
    /// # Arguments
    ///
    /// * `entries`: Values by coordinate. May contain zero values.
    /// * `nr_rows`: Number of rows, should be positive.
    /// * `nr_columns`: Number of columns, should be positive.
    ///
    /// # Return value
    ///
    /// The values wrapped inside a matrix. All coordinates should lie within the dimensions, which
    /// is only checked in debug builds.
    pub fn new(entries: HashMap<Coordinate, F>, nr_rows: usize, nr_columns: usize) -> Self {
        debug_assert_ne!(nr_rows, 0);
        debug_assert_ne!(nr_columns, 0);
        debug_assert!(entries.keys().all(|&coordinate| {
            Dimensions::new(nr_rows, nr_columns).contains(coordinate)
        }));

        Self { entries, nr_rows, nr_columns }
    }

    /// Create a new instance from (row, column, value) triples.
    ///
    /// Each coordinate should appear at most once.
    pub fn from_triples<I>(triples: I, nr_rows: usize, nr_columns: usize) -> Self
    where
        I: IntoIterator<Item = SparseTriple<F>>,
    {
        let triples = triples.into_iter();
        let mut entries = HashMap::with_capacity(triples.size_hint().0);
        for (row, column, value) in triples {
            let previous = entries.insert(Coordinate::new(row, column), value);
            debug_assert!(previous.is_none(), "Duplicate coordinate ({row}, {column})");
        }

        Self::new(entries, nr_rows, nr_columns)
    }

    /// Create a matrix of zeros of dimension `nr_rows` x `nr_columns`.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self::new(HashMap::new(), nr_rows, nr_columns)
    }

    /// Create a square identity matrix of size `len`.
    pub fn identity(len: usize) -> Self
    where
        F: One,
    {
        Self::from_triples((0..len).map(|i| (i, i, F::one())), len, len)
    }

    /// Get the value at coordinate (`row`, `column`).
    ///
    /// Zero if nothing is stored there.
    pub fn get(&self, row: usize, column: usize) -> F {
        debug_assert!(row < self.nr_rows);
        debug_assert!(column < self.nr_columns);

        self.value_at(Coordinate::new(row, column))
    }

    pub(crate) fn value_at(&self, coordinate: Coordinate) -> F {
        self.entries.get(&coordinate).copied().unwrap_or_else(F::zero)
    }

    /// All stored values, in no particular order.
    ///
    /// This includes zero values that were explicitly stored.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, F)> + '_ {
        self.entries.iter().map(|(&coordinate, &value)| (coordinate, value))
    }

    /// All nonzero values, in no particular order.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (Coordinate, F)> + '_ {
        self.iter().filter(|(_, value)| !value.is_zero())
    }

    /// All nonzero values as triples, sorted row-major.
    pub fn triples(&self) -> Vec<SparseTriple<F>> {
        self.iter_nonzero()
            .map(|(coordinate, value)| (coordinate.row, coordinate.column, value))
            .sorted_unstable_by_key(|&(row, column, _)| (row, column))
            .collect()
    }

    /// Whether all values in this matrix are zero.
    pub fn is_zero(&self) -> bool {
        self.entries.values().all(F::is_zero)
    }

    /// Get the number of nonzero values in this matrix.
    pub fn nnz(&self) -> usize {
        self.iter_nonzero().count()
    }
}

impl<F> SparseMatrix<F> {
    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Get the declared shape of this matrix.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.nr_rows, self.nr_columns)
    }

    /// Get the number of values stored, zero or not.
    pub fn size(&self) -> usize {
        self.entries.len()
    }
}

/// Matrices are equal when they have the same dimensions and the same value at every coordinate.
///
/// How a zero is represented doesn't matter.
impl<F: Element> PartialEq for SparseMatrix<F> {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions()
            && self.iter().all(|(coordinate, value)| value == other.value_at(coordinate))
            && other.iter().all(|(coordinate, value)| value == self.value_at(coordinate))
    }
}

impl<F: Element> Eq for SparseMatrix<F> {}

/// Renders the matrix in the text format it is read from, without explicit zeros.
impl<F: Element> fmt::Display for SparseMatrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rows={}\ncols={}", self.nr_rows, self.nr_columns)?;
        for (row, column, value) in self.triples() {
            write!(f, "\n({row},{column},{value})")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use crate::data::linear_algebra::{Coordinate, Dimensions};
    use crate::data::linear_algebra::matrix::SparseMatrix;

    fn test_matrix() -> SparseMatrix {
        SparseMatrix::from_triples(vec![(0, 0, 1), (0, 1, 2), (1, 2, 6)], 2, 3)
    }

    #[test]
    fn from_triples() {
        let m = test_matrix();

        assert_eq!(m.get(0, 0), 1);
        assert_eq!(m.get(1, 2), 6);
        assert_eq!(m.get(1, 0), 0);
        assert_eq!(m.dimensions(), Dimensions::new(2, 3));
        assert_eq!(m.nnz(), 3);
    }

    #[test]
    fn zeros() {
        let (rows, columns) = (299, 482);
        let m = SparseMatrix::<i64>::zeros(rows, columns);

        assert_eq!(m.get(0, 0), 0);
        assert_eq!(m.get(rows - 1, columns - 1), 0);
        assert!(m.is_zero());
        assert_eq!(m.nnz(), 0);
    }

    #[test]
    fn identity() {
        let size = 133;
        let m = SparseMatrix::<i32>::identity(size);

        assert_eq!(m.get(0, 0), 1);
        assert_eq!(m.get(size - 1, size - 1), 1);
        assert_eq!(m.get(0, 1), 0);
        assert_eq!(m.get(size - 1, size - 1 - 1), 0);
        assert_eq!(m.nnz(), size);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn out_of_bounds_get() {
        test_matrix().get(2, 0);
    }

    #[test]
    fn explicit_zeros() {
        let mut entries = HashMap::new();
        entries.insert(Coordinate::new(0, 0), 1);
        entries.insert(Coordinate::new(1, 1), 0);
        let with_zero = SparseMatrix::new(entries, 2, 2);
        let without_zero = SparseMatrix::from_triples(vec![(0, 0, 1)], 2, 2);

        assert_eq!(with_zero.size(), 2);
        assert_eq!(with_zero.nnz(), 1);
        assert_eq!(with_zero, without_zero);
        assert_eq!(without_zero, with_zero);
        assert_eq!(with_zero.triples(), vec![(0, 0, 1)]);

        let only_zeros = SparseMatrix::from_triples(vec![(0, 1, 0)], 2, 2);
        assert!(only_zeros.is_zero());
        assert_eq!(only_zeros, SparseMatrix::zeros(2, 2));
    }

    #[test]
    fn equality() {
        // Dimensions matter, even without values
        assert_ne!(SparseMatrix::<i64>::zeros(2, 3), SparseMatrix::zeros(3, 2));

        let m = test_matrix();
        let other = SparseMatrix::from_triples(vec![(0, 0, 1), (0, 1, 2), (1, 2, 5)], 2, 3);
        assert_ne!(m, other);

        let missing = SparseMatrix::from_triples(vec![(0, 0, 1), (0, 1, 2)], 2, 3);
        assert_ne!(m, missing);
        assert_ne!(missing, m);
    }

    #[test]
    fn triples_sorted() {
        let m = SparseMatrix::from_triples(vec![(1, 0, 3), (0, 2, 4), (0, 1, -1)], 2, 3);

        assert_eq!(m.triples(), vec![(0, 1, -1), (0, 2, 4), (1, 0, 3)]);
    }

    #[test]
    fn display() {
        let m = SparseMatrix::from_triples(vec![(1, 0, -3), (0, 0, 0), (0, 1, 2)], 2, 2);

        assert_eq!(m.to_string(), "rows=2\ncols=2\n(0,1,2)\n(1,0,-3)");
        assert_eq!(SparseMatrix::<i64>::zeros(1, 4).to_string(), "rows=1\ncols=4");
    }
}
