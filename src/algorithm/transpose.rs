//! # Transposition
use crate::data::linear_algebra::matrix::SparseMatrix;
use crate::data::linear_algebra::traits::Element;

/// Swap the rows and columns of a matrix.
///
/// Coordinates are unique in the input, so they are unique after swapping as well. Zero values
/// are not carried over.
pub fn transpose<F: Element>(matrix: &SparseMatrix<F>) -> SparseMatrix<F> {
    let entries = matrix.iter_nonzero()
        .map(|(coordinate, value)| (coordinate.transposed(), value))
        .collect();

    SparseMatrix::new(entries, matrix.nr_columns(), matrix.nr_rows())
}

#[cfg(test)]
mod test {
    use crate::algorithm::transpose::transpose;
    use crate::data::linear_algebra::Dimensions;
    use crate::data::linear_algebra::matrix::SparseMatrix;

    #[test]
    fn rectangular() {
        let m = SparseMatrix::from_triples(vec![(0, 2, 5), (1, 0, -1)], 2, 3);
        let t = transpose(&m);

        assert_eq!(t.dimensions(), Dimensions::new(3, 2));
        assert_eq!(t.triples(), vec![(0, 1, -1), (2, 0, 5)]);
        assert_eq!(t.get(2, 0), m.get(0, 2));
    }

    #[test]
    fn twice() {
        let m = SparseMatrix::from_triples(vec![(0, 0, 1), (0, 3, 2), (2, 1, -7), (1, 1, 0)], 3, 4);

        assert_eq!(transpose(&transpose(&m)), m);
        assert_eq!(transpose(&SparseMatrix::<i64>::zeros(1, 5)), SparseMatrix::zeros(5, 1));
    }
}
