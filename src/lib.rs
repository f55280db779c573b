//! Conversions between `num` arbitrary-precision values and tagged,
//! arena-allocated heap numeric objects.
//!
//! Inbound converters build heap objects out of [num_bigint::BigInt],
//! [num_rational::BigRational], [small::SmallInt] and matrices thereof;
//! outbound converters extract the `num` values back out. Nothing else:
//! this crate is a pure format bridge.
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::iterator_step_by_zero,
    clippy::invalid_regex,
    clippy::string_slice,
    clippy::unimplemented,
    clippy::todo
)]
#![allow(clippy::module_inception)]

pub mod arena;
pub mod convert;
pub mod errors;
pub mod matrix;
pub mod object;
pub mod small;
