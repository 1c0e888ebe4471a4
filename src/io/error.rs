//! # Error reporting for reading of matrix files
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error("Could not read \"{}\": {source}", .path.display())]
    IO {
        /// File that was being read.
        path: PathBuf,
        /// Underlying problem.
        #[source]
        source: io::Error,
    },
    /// Contents of the file could not be parsed into a matrix.
    #[error("Could not parse \"{}\": {source}", .path.display())]
    Format {
        /// File that was being parsed.
        path: PathBuf,
        /// Underlying problem, with the offending line if there is one.
        #[source]
        source: FormatError,
    },
}

/// A `FormatError` represents all errors encountered during parsing.
///
/// It may hold a file location containing a line number and line, at which the error was caused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    description: String,
    location: Option<(u64, String)>,
}

/// A `FileLocation` references a line in the text by its number, starting at `1`, and contains a
/// reference to the line itself.
pub(crate) type FileLocation<'a> = (u64, &'a str);

impl FormatError {
    /// Create a new `FormatError` with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), location: None }
    }

    /// Create a new `FormatError` that points at the line that caused it.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `file_location`: A line number and line that caused the error.
    pub(crate) fn with_file_location(
        description: impl Into<String>,
        file_location: FileLocation,
    ) -> Self {
        let (line_number, line) = file_location;

        Self {
            description: description.into(),
            location: Some((line_number, line.to_string())),
        }
    }

    /// What went wrong, without the location.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Number of the line that caused the error, if the error is caused by a single line.
    pub fn line_number(&self) -> Option<u64> {
        self.location.as_ref().map(|&(line_number, _)| line_number)
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FormatError: {}", self.description)?;
        if let Some((line_number, line)) = &self.location {
            write!(f, "\n\tCaused at line\t{line_number}:\t{line}")?;
        }

        Ok(())
    }
}

impl std::error::Error for FormatError {}
