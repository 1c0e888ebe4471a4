//! # Entry-wise operations
//!
//! Addition and subtraction combine the values of two matrices of the same shape coordinate by
//! coordinate. Only coordinates at which at least one of the operands stores a value are visited.
use std::collections::HashMap;

use itertools::Itertools;

use crate::algorithm::Operation;
use crate::algorithm::error::OperationError;
use crate::data::linear_algebra::Coordinate;
use crate::data::linear_algebra::matrix::SparseMatrix;
use crate::data::linear_algebra::traits::Element;

/// Combine two matrices of equal shape value by value.
///
/// # Arguments
///
/// * `operation`: Name of the operation being computed, used for error reporting.
/// * `left`: Values are used as the first argument to `op`.
/// * `right`: Values are used as the second argument to `op`.
/// * `op`: Computes a result value from a left and right value, `None` if it doesn't fit `F`.
///
/// # Return value
///
/// A matrix of the same shape, holding `op(left, right)` at every coordinate that has a value in
/// either operand. Absent values are passed to `op` as zero, zero results are not stored.
///
/// # Errors
///
/// `DimensionMismatch` when the shapes differ, `Overflow` when `op` returns `None` anywhere. The
/// reported coordinate is the first failing one in row-major order.
pub fn combine<F, O>(
    operation: Operation,
    left: &SparseMatrix<F>,
    right: &SparseMatrix<F>,
    op: O,
) -> Result<SparseMatrix<F>, OperationError>
where
    F: Element,
    O: Fn(F, F) -> Option<F>,
{
    if left.dimensions() != right.dimensions() {
        return Err(OperationError::dimension_mismatch(
            operation,
            left.dimensions(),
            right.dimensions(),
        ));
    }

    let mut entries = HashMap::with_capacity(left.size().max(right.size()));

    // Row-major, so that the first failing coordinate is the one reported
    let coordinates = left.iter()
        .chain(right.iter())
        .map(|(coordinate, _)| coordinate)
        .sorted_unstable()
        .dedup();

    for coordinate in coordinates {
        let value = op(left.value_at(coordinate), right.value_at(coordinate))
            .ok_or(OperationError::overflow(operation, coordinate))?;
        if !value.is_zero() {
            entries.insert(coordinate, value);
        }
    }

    Ok(SparseMatrix::new(entries, left.nr_rows(), left.nr_columns()))
}

/// Sum of two matrices of equal shape.
///
/// # Errors
///
/// When the shapes differ or a sum overflows.
pub fn add<F: Element>(
    left: &SparseMatrix<F>,
    right: &SparseMatrix<F>,
) -> Result<SparseMatrix<F>, OperationError> {
    combine(Operation::Add, left, right, |x, y| x.checked_add(&y))
}

/// Difference `left - right` of two matrices of equal shape.
///
/// Values stored only in `right` end up negated in the result.
///
/// # Errors
///
/// When the shapes differ or a difference overflows.
pub fn subtract<F: Element>(
    left: &SparseMatrix<F>,
    right: &SparseMatrix<F>,
) -> Result<SparseMatrix<F>, OperationError> {
    combine(Operation::Subtract, left, right, |x, y| x.checked_sub(&y))
}

/// Negate every value of a matrix.
///
/// # Errors
///
/// When a value has no negation in `F`, such as the minimum of a signed integer type or any
/// nonzero unsigned integer. The first such value in row-major order is reported.
pub fn negate<F: Element>(matrix: &SparseMatrix<F>) -> Result<SparseMatrix<F>, OperationError> {
    let entries = matrix.triples()
        .into_iter()
        .map(|(row, column, value)| {
            let coordinate = Coordinate::new(row, column);
            value.checked_neg()
                .map(|negated| (coordinate, negated))
                .ok_or(OperationError::overflow(Operation::Negate, coordinate))
        })
        .collect::<Result<HashMap<_, _>, _>>()?;

    Ok(SparseMatrix::new(entries, matrix.nr_rows(), matrix.nr_columns()))
}
