//! # Algorithms
//!
//! Elementary algebra on `SparseMatrix` values. All operations borrow their operands and return a
//! newly created matrix; operands are never changed.
use std::fmt;
use std::str::FromStr;

use enum_map::{Enum, EnumMap, enum_map};
use itertools::Itertools;
use thiserror::Error;

use crate::algorithm::error::OperationError;
use crate::data::linear_algebra::matrix::SparseMatrix;
use crate::data::linear_algebra::traits::Element;

pub use elementwise::{add, combine, negate, subtract};
pub use multiply::multiply;
pub use transpose::transpose;

pub mod elementwise;
pub mod error;
pub mod multiply;
pub mod transpose;

/// The operations that can be applied to matrices.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Operation {
    /// Entry-wise sum of two matrices of equal shape.
    Add,
    /// Entry-wise difference of two matrices of equal shape.
    Subtract,
    /// Matrix product.
    Multiply,
    /// Swap rows and columns of a single matrix.
    Transpose,
    /// Negate every value of a single matrix.
    Negate,
}

/// Words a user can type to select an operation, the first one being the canonical name.
fn keywords() -> EnumMap<Operation, [&'static str; 3]> {
    enum_map! {
        Operation::Add => ["add", "+", "sum"],
        Operation::Subtract => ["subtract", "-", "difference"],
        Operation::Multiply => ["multiply", "*", "product"],
        Operation::Transpose => ["transpose", "t", "'"],
        Operation::Negate => ["negate", "neg", "~"],
    }
}

impl Operation {
    /// Number of matrices the operation takes.
    pub fn arity(self) -> usize {
        match self {
            Operation::Add | Operation::Subtract | Operation::Multiply => 2,
            Operation::Transpose | Operation::Negate => 1,
        }
    }

    /// Apply the operation.
    ///
    /// # Arguments
    ///
    /// * `left`: First, or only, operand.
    /// * `right`: Second operand. Needed for binary operations, ignored by unary ones.
    ///
    /// # Errors
    ///
    /// When the right operand is missing for a binary operation, or the operation itself fails.
    pub fn apply<F: Element>(
        self,
        left: &SparseMatrix<F>,
        right: Option<&SparseMatrix<F>>,
    ) -> Result<SparseMatrix<F>, OperationError> {
        match (self, right) {
            (Operation::Transpose, _) => Ok(transpose(left)),
            (Operation::Negate, _) => negate(left),
            (_, None) => Err(OperationError::MissingOperand { operation: self }),
            (Operation::Add, Some(right)) => add(left, right),
            (Operation::Subtract, Some(right)) => subtract(left, right),
            (Operation::Multiply, Some(right)) => multiply(left, right),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(keywords()[*self][0])
    }
}

/// Text that doesn't name any `Operation`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown operation \"{text}\", expected one of: {}", accepted_keywords())]
pub struct UnknownOperation {
    text: String,
}

fn accepted_keywords() -> String {
    keywords().values().flatten().join(", ")
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    /// Read an operation from user input, ignoring case and surrounding whitespace.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let normalized = text.trim().to_lowercase();

        keywords()
            .into_iter()
            .find(|(_, words)| words.contains(&normalized.as_str()))
            .map(|(operation, _)| operation)
            .ok_or_else(|| UnknownOperation { text: text.trim().to_string() })
    }
}
