//! Rational conversions.

use crate::{
    arena::{AllocSpan, Arena, ObjRef},
    convert::integer::{bigint_from_obj, write_bigint},
    errors::{Interrupted, TypeMismatch},
    object::{self, ObjView},
};
use num_rational::BigRational;
use num_traits::One;

/// Builds a heap object from a big rational.
///
/// A denominator of magnitude 1 produces the bare numerator integer; only
/// proper fractions get a fraction shell. Both component conversions run
/// under a single allocation span.
pub fn from_rational(arena: &mut Arena, value: &BigRational) -> Result<ObjRef, Interrupted> {
    let mut span = arena.begin();
    let obj = write_rational(&mut span, value)?;
    span.commit();
    Ok(obj)
}

/// Extracts a big rational from a heap integer or fraction object.
pub fn rational_from_obj(arena: &Arena, obj: ObjRef) -> Result<BigRational, TypeMismatch> {
    match object::view(arena, obj) {
        Some(ObjView::Frac { numerator, denominator }) => {
            let numerator = bigint_from_obj(arena, numerator)?;
            let denominator = bigint_from_obj(arena, denominator)?;
            Ok(BigRational::new_raw(numerator, denominator))
        }
        Some(ObjView::Int { .. }) => {
            let numerator = bigint_from_obj(arena, obj)?;
            Ok(BigRational::from_integer(numerator))
        }
        _ => Err(TypeMismatch { expected: "integer or fraction", found: object::kind_name(arena, obj) }),
    }
}

/// Writes a rational inside an already open span.
pub(crate) fn write_rational(
    span: &mut AllocSpan<'_>,
    value: &BigRational,
) -> Result<ObjRef, Interrupted> {
    let numerator = write_bigint(span, value.numer())?;
    if value.denom().magnitude().is_one() {
        return Ok(numerator);
    }
    let denominator = write_bigint(span, value.denom())?;
    object::write_frac(span, numerator, denominator)
}
