//! Crate errors.

use thiserror::Error;

/// A conversion was cancelled through the arena's interrupt handle.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("conversion interrupted")]
pub struct Interrupted;

/// A heap object's tag does not match the numeric kind an extraction expected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("expected {expected} object, found {found}")]
pub struct TypeMismatch {
    /// The kind the caller asked for.
    pub expected: &'static str,

    /// The kind the object actually carries.
    pub found: &'static str,
}
