//! # Tokens used in triplet files

/// Key of the first header line, holding the number of rows.
pub const ROWS: &str = "rows";

/// Key of the second header line, holding the number of columns.
pub const COLUMNS: &str = "cols";

/// Separates a header key from its value.
pub const ASSIGNMENT: char = '=';

/// Opens a (row, column, value) triple.
pub const TRIPLE_START: char = '(';

/// Closes a (row, column, value) triple.
pub const TRIPLE_END: char = ')';

/// Separates the components of a triple.
pub const SEPARATOR: char = ',';
