//! Conversions between caller-side numbers and heap objects.

pub mod integer;
pub mod matrix;
pub mod padic;
pub mod rational;

pub use integer::{bigint_from_obj, int_from_bigint, int_from_small};
pub use matrix::{from_int_matrix, from_rational_matrix};
pub use padic::padic_from_parts;
pub use rational::{from_rational, rational_from_obj};
