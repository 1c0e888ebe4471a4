//! # Integration tests that require a look inside the crate.
//!
//! Each module starts from a text literal and follows it through parsing, the operations and
//! rendering.
//!
//! Convention for function names:
//!
//! * `const LEFT_LITERAL_STRING`, `const RIGHT_LITERAL_STRING`
//! * `fn left()`, `fn right()`
//! * `fn sum()`, `fn difference()`, `fn product()`
