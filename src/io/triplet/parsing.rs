//! # Parsing triplet files
//!
//! Checks whether single lines are syntactically correct. Whether triples fit the declared
//! dimensions and don't repeat a coordinate is checked while assembling the matrix.
use std::str::FromStr;

use crate::data::linear_algebra::SparseTriple;
use crate::io::error::{FileLocation, FormatError};
use crate::io::triplet::token::{ASSIGNMENT, SEPARATOR, TRIPLE_END, TRIPLE_START};

/// Split a text into numbered lines, leaving out lines that contain only whitespace.
///
/// # Return value
///
/// Line number, starting at `1`, and line.
pub(super) fn into_lines(text: &str) -> impl Iterator<Item = FileLocation<'_>> {
    text.lines()
        .enumerate()
        .map(|(number, line)| (number as u64 + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}

/// Read a header line of the form `key=value`.
///
/// # Arguments
///
/// * `file_location`: The line to parse.
/// * `key`: The key that the header should have.
///
/// # Return value
///
/// The value, a positive integer.
pub(super) fn parse_header(file_location: FileLocation, key: &str) -> Result<usize, FormatError> {
    let (_, line) = file_location;
    let error = |description: String| FormatError::with_file_location(description, file_location);

    let (found_key, value) = line.split_once(ASSIGNMENT)
        .ok_or_else(|| error(format!("Expected a header \"{key}{ASSIGNMENT}<positive integer>\".")))?;
    let (found_key, value) = (found_key.trim(), value.trim());
    if found_key != key {
        return Err(error(format!("Expected header \"{key}\", found \"{found_key}\".")));
    }

    match Some(value).filter(|value| !value.starts_with('+')).map(str::parse::<usize>) {
        Some(Ok(0)) => Err(error(format!("The value of header \"{key}\" should be positive."))),
        Some(Ok(value)) => Ok(value),
        None | Some(Err(_)) => Err(error(format!(
            "Could not read \"{value}\" as the value of header \"{key}\", expected a positive integer.",
        ))),
    }
}

/// Read a line of the form `(row,column,value)`.
///
/// Whitespace is allowed around each of the components and around the parentheses.
pub(super) fn parse_triple<F: FromStr>(file_location: FileLocation) -> Result<SparseTriple<F>, FormatError> {
    let (_, line) = file_location;
    let error = |description: String| FormatError::with_file_location(description, file_location);

    let inner = line.trim()
        .strip_prefix(TRIPLE_START)
        .and_then(|rest| rest.strip_suffix(TRIPLE_END))
        .ok_or_else(|| error(format!(
            "Expected a triple \"{TRIPLE_START}<row>{SEPARATOR}<column>{SEPARATOR}<value>{TRIPLE_END}\".",
        )))?;

    let components = inner.split(SEPARATOR).map(str::trim).collect::<Vec<_>>();
    let &[row, column, value] = components.as_slice() else {
        return Err(error(format!("Expected 3 components in a triple, found {}.", components.len())));
    };

    let row = parse_index(row, "row").map_err(error)?;
    let column = parse_index(column, "column").map_err(error)?;
    let value = parse_value(value).map_err(error)?;

    Ok((row, column, value))
}

// Integer parsing in std accepts a leading '+', the file format doesn't
fn parse_index(text: &str, name: &str) -> Result<usize, String> {
    Some(text)
        .filter(|text| !text.starts_with('+'))
        .and_then(|text| text.parse().ok())
        .ok_or_else(|| format!("Could not read \"{text}\" as a {name} index, expected a non-negative integer."))
}

fn parse_value<F: FromStr>(text: &str) -> Result<F, String> {
    Some(text)
        .filter(|text| !text.starts_with('+'))
        .and_then(|text| text.parse().ok())
        .ok_or_else(|| format!("Could not read \"{text}\" as an integer value."))
}
