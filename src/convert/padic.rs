//! p-adic conversions.
//!
//! Inbound only: the heap format is built from its parts, but no caller
//! here ever takes a p-adic apart again, so there is no extractor. The raw
//! [crate::object::view] accessor still exposes the shell if needed.

use crate::{
    arena::{Arena, ObjRef},
    convert::integer::write_bigint,
    errors::Interrupted,
    object,
};
use num_bigint::BigInt;

/// Builds a heap p-adic number from its parts.
///
/// The header packs `precision` and `valuation` into one word; `prime`,
/// `prime_pow` and `unit` are converted through the integer path and
/// stored as the remaining elements. One allocation span covers the whole
/// build.
pub fn padic_from_parts(
    arena: &mut Arena,
    valuation: i32,
    precision: u32,
    prime: &BigInt,
    prime_pow: &BigInt,
    unit: &BigInt,
) -> Result<ObjRef, Interrupted> {
    let mut span = arena.begin();
    let shell = object::write_padic_shell(&mut span, precision, valuation)?;
    let prime = write_bigint(&mut span, prime)?;
    let prime_pow = write_bigint(&mut span, prime_pow)?;
    let unit = write_bigint(&mut span, unit)?;
    object::set_padic_parts(&mut span, shell, prime, prime_pow, unit);
    span.commit();
    Ok(shell)
}
