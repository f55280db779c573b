//! Caller-side matrices.

pub mod matrix;

pub use matrix::{Matrix, MatrixError};
