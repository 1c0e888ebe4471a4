//! # Reading triplet files
//!
//! A triplet file declares the dimensions of a matrix on two header lines, followed by one line
//! for each stored value:
//!
//! ```text
//! rows=2
//! cols=3
//! (0,0,1)
//! (1,2,-4)
//! ```
//!
//! Lines containing only whitespace are ignored.
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::str::FromStr;

use crate::data::linear_algebra::{Coordinate, Dimensions};
use crate::data::linear_algebra::matrix::SparseMatrix;
use crate::data::linear_algebra::traits::Element;
use crate::io::error::FormatError;
use crate::io::triplet::parsing::{into_lines, parse_header, parse_triple};
use crate::io::triplet::token::{COLUMNS, ROWS};

mod parsing;
mod token;

/// Parse a matrix, in string form.
///
/// # Arguments
///
/// * `text`: The input in triplet format.
///
/// # Return value
///
/// The matrix, with values stored exactly as read. Zero values that appear in the text are kept.
///
/// # Errors
///
/// A `FormatError` when a header is missing or malformed, when a line is not a valid triple, when
/// a coordinate lies outside of the declared dimensions or when a coordinate is read twice.
pub fn parse<F>(text: &impl AsRef<str>) -> Result<SparseMatrix<F>, FormatError>
where
    F: Element + FromStr,
{
    let mut lines = into_lines(text.as_ref());

    let nr_rows = lines.next()
        .ok_or_else(|| FormatError::new(format!("No \"{ROWS}\" header read.")))
        .and_then(|file_location| parse_header(file_location, ROWS))?;
    let nr_columns = lines.next()
        .ok_or_else(|| FormatError::new(format!("No \"{COLUMNS}\" header read.")))
        .and_then(|file_location| parse_header(file_location, COLUMNS))?;
    let dimensions = Dimensions::new(nr_rows, nr_columns);

    let mut entries = HashMap::new();
    for file_location in lines {
        let (row, column, value) = parse_triple(file_location)?;
        let coordinate = Coordinate::new(row, column);

        if !dimensions.contains(coordinate) {
            return Err(FormatError::with_file_location(
                format!("Coordinate {coordinate} lies outside of the declared {dimensions} dimensions."),
                file_location,
            ));
        }
        match entries.entry(coordinate) {
            Entry::Occupied(_) => return Err(FormatError::with_file_location(
                format!("A value for coordinate {coordinate} was already read."),
                file_location,
            )),
            Entry::Vacant(entry) => {
                entry.insert(value);
            },
        }
    }

    Ok(SparseMatrix::new(entries, nr_rows, nr_columns))
}

impl<F: Element + FromStr> FromStr for SparseMatrix<F> {
    type Err = FormatError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse(&text)
    }
}
