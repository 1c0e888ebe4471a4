//! # Sparse matrix product
//!
//! The product is accumulated by joining the values of both operands on their shared index: the
//! nonzero values of the right operand are grouped by row, so that a value at `(i, k)` of the left
//! operand only meets the values in row `k` of the right operand. The work is proportional to the
//! number of pairs of values that actually contribute, not to the dimensions.
//!
//! Products are collected per coordinate and only then summed. Whether a sum fits the element type
//! depends on its terms only, and not on the order in which they were found.
use std::collections::{BTreeMap, HashMap};

use itertools::Itertools;

use crate::algorithm::Operation;
use crate::algorithm::error::OperationError;
use crate::data::linear_algebra::Coordinate;
use crate::data::linear_algebra::matrix::SparseMatrix;
use crate::data::linear_algebra::traits::Element;

/// Matrix product `left * right`.
///
/// # Return value
///
/// A matrix with as many rows as `left` and as many columns as `right`. Coordinates at which the
/// contributions cancel out are not stored.
///
/// # Errors
///
/// `DimensionMismatch` if the number of columns of `left` is not the number of rows of `right`.
/// `Overflow` if a single product, or the complete sum at a coordinate, doesn't fit `F`. When
/// there are several, the first coordinate in row-major order is reported.
pub fn multiply<F: Element>(
    left: &SparseMatrix<F>,
    right: &SparseMatrix<F>,
) -> Result<SparseMatrix<F>, OperationError> {
    if left.nr_columns() != right.nr_rows() {
        return Err(OperationError::dimension_mismatch(
            Operation::Multiply,
            left.dimensions(),
            right.dimensions(),
        ));
    }

    // Sorted triples keep each row group in column order
    let right_rows: HashMap<usize, Vec<(usize, F)>> = right.triples()
        .into_iter()
        .map(|(row, column, value)| (row, (column, value)))
        .into_group_map();

    let mut products = BTreeMap::<_, Vec<_>>::new();
    for (row, middle, left_value) in left.triples() {
        let Some(matches) = right_rows.get(&middle) else {
            continue;
        };

        for &(column, right_value) in matches {
            let coordinate = Coordinate::new(row, column);
            let product = left_value.checked_mul(&right_value)
                .ok_or(OperationError::overflow(Operation::Multiply, coordinate))?;
            products.entry(coordinate).or_default().push(product);
        }
    }

    let mut entries = HashMap::with_capacity(products.len());
    for (coordinate, terms) in products {
        let total = checked_sum(terms)
            .ok_or(OperationError::overflow(Operation::Multiply, coordinate))?;
        if !total.is_zero() {
            entries.insert(coordinate, total);
        }
    }

    Ok(SparseMatrix::new(entries, left.nr_rows(), right.nr_columns()))
}

/// Sum of all terms.
///
/// Negative and positive terms are added alternately: a negative one while the running total is
/// non-negative, a positive one while it is negative. Once one of the two kinds runs out, the
/// running total moves monotonically towards the exact sum. No partial sum overflows unless the
/// exact sum does.
///
/// # Return value
///
/// The exact sum, `None` if and only if it doesn't fit `F`.
fn checked_sum<F: Element>(terms: Vec<F>) -> Option<F> {
    let (mut negative, mut positive): (Vec<_>, Vec<_>) = terms.into_iter()
        .partition(|term| *term < F::zero());

    let mut total = F::zero();
    loop {
        let next = if total < F::zero() {
            positive.pop().or_else(|| negative.pop())
        } else {
            negative.pop().or_else(|| positive.pop())
        };

        match next {
            Some(term) => total = total.checked_add(&term)?,
            None => return Some(total),
        }
    }
}
