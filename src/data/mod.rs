//! # Storing of matrices in memory
//!
//! This module provides the data structures used to represent sparse matrices in memory.
//! Algorithms operating on them live in `algorithm`.

pub mod linear_algebra;
