//! # Reading and writing of matrices
//!
//! This module provides read and write functionality for the triplet file format.
use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::data::linear_algebra::matrix::SparseMatrix;
use crate::data::linear_algebra::traits::Element;
use crate::io::error::ImportError;

pub mod error;
pub mod triplet;

/// Import a matrix from a file.
///
/// # Arguments
///
/// * `file_path`: Location of a file in triplet format. The extension is not checked.
///
/// # Errors
///
/// When the file cannot be found or read, or its contents are not a valid triplet file.
pub fn import<F>(file_path: &Path) -> Result<SparseMatrix<F>, ImportError>
where
    F: Element + FromStr,
{
    let text = fs::read_to_string(file_path)
        .map_err(|source| ImportError::IO { path: file_path.to_path_buf(), source })?;
    debug!(path = %file_path.display(), bytes = text.len(), "read matrix file");

    let matrix = triplet::parse(&text)
        .map_err(|source| ImportError::Format { path: file_path.to_path_buf(), source })?;
    debug!(
        path = %file_path.display(),
        dimensions = %matrix.dimensions(),
        nnz = matrix.nnz(),
        "parsed matrix"
    );

    Ok(matrix)
}

/// Write a matrix to a file in triplet format.
///
/// Only nonzero values are written, in row-major order. An existing file is overwritten.
///
/// # Errors
///
/// When the file can't be created or written to.
pub fn export<F: Element>(matrix: &SparseMatrix<F>, file_path: &Path) -> std::io::Result<()> {
    fs::write(file_path, format!("{matrix}\n"))?;
    debug!(path = %file_path.display(), nnz = matrix.nnz(), "wrote matrix file");

    Ok(())
}
