//! # Errors of algebraic operations
//!
//! Operations validate their operands before doing any work, and always build a fresh result.
//! When an error is returned, nothing has been computed that the caller could observe.
use thiserror::Error;

use crate::algorithm::Operation;
use crate::data::linear_algebra::{Coordinate, Dimensions};

/// Created when an operation can't produce a result for its operands.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OperationError {
    /// The shapes of the operands are not compatible for the operation.
    ///
    /// Addition and subtraction need equal shapes, multiplication needs the number of columns of
    /// the left operand to equal the number of rows of the right operand.
    #[error("Dimension mismatch: can't {operation} a {left} matrix and a {right} matrix")]
    DimensionMismatch {
        /// Operation that was attempted.
        operation: Operation,
        /// Shape of the left operand.
        left: Dimensions,
        /// Shape of the right operand.
        right: Dimensions,
    },
    /// A value doesn't fit the element type.
    #[error("Overflow: the {operation} result at {coordinate} doesn't fit the element type")]
    Overflow {
        /// Operation that was attempted.
        operation: Operation,
        /// Coordinate in the result at which the overflow happened.
        coordinate: Coordinate,
    },
    /// A binary operation was requested with only one operand.
    #[error("Missing operand: {operation} needs two matrices")]
    MissingOperand {
        /// Operation that was attempted.
        operation: Operation,
    },
}

impl OperationError {
    /// Create a `DimensionMismatch` error.
    pub fn dimension_mismatch(operation: Operation, left: Dimensions, right: Dimensions) -> Self {
        Self::DimensionMismatch { operation, left, right }
    }

    /// Create an `Overflow` error.
    pub fn overflow(operation: Operation, coordinate: Coordinate) -> Self {
        Self::Overflow { operation, coordinate }
    }
}
