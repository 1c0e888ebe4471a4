//! # Exact algebra on sparse integer matrices
//!
//! Matrices are stored as a map from coordinate to value, only holding the values that are not
//! zero. They are read from, and written to, a simple text format of coordinate triples. The
//! operations in `algorithm` (addition, subtraction, multiplication and transposition) never
//! change their operands and are exact: a value that doesn't fit the element type is an error.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
