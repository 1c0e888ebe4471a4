//! # Matrix files on disk
//!
//! Small hand-written triplet files, stored next to this module.
use std::path::PathBuf;

/// # Reading, computing and writing
mod test;

/// Folder where the matrix files are stored.
fn problem_file_directory() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("files")
}

/// Compute the path of a matrix file, based on its name.
///
/// # Arguments
///
/// * `name`: File name without extension.
fn get_test_file_path(name: &str) -> PathBuf {
    problem_file_directory().join(name).with_extension("txt")
}
