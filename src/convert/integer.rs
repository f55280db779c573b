//! Integer conversions.

use crate::{
    arena::{AllocSpan, Arena, ObjRef},
    errors::{Interrupted, TypeMismatch},
    object::{self, ObjView},
    small::SmallInt,
};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

/// Builds a heap integer from a big integer.
///
/// # Examples
///
/// ```
/// use num_bigint::BigInt;
/// use numbridge::{arena::Arena, convert};
///
/// # fn test() -> anyhow::Result<()> {
/// let mut arena = Arena::new();
/// let obj = convert::int_from_bigint(&mut arena, &BigInt::from(42))?;
/// assert_eq!(convert::bigint_from_obj(&arena, obj)?, BigInt::from(42));
/// # Ok(())
/// # }
/// ```
pub fn int_from_bigint(arena: &mut Arena, value: &BigInt) -> Result<ObjRef, Interrupted> {
    let mut span = arena.begin();
    let obj = write_bigint(&mut span, value)?;
    span.commit();
    Ok(obj)
}

/// Builds a heap integer from a fixed-width integer.
///
/// Inline values are encoded directly from their word; only out-of-line
/// storage goes through the big-integer path.
pub fn int_from_small(arena: &mut Arena, value: &SmallInt) -> Result<ObjRef, Interrupted> {
    let mut span = arena.begin();
    let obj = write_small(&mut span, value)?;
    span.commit();
    Ok(obj)
}

/// Extracts a big integer from a heap integer object.
pub fn bigint_from_obj(arena: &Arena, obj: ObjRef) -> Result<BigInt, TypeMismatch> {
    match object::view(arena, obj) {
        Some(ObjView::Int { negative, limbs }) => Ok(bigint_from_parts(negative, limbs)),
        _ => Err(TypeMismatch { expected: "integer", found: object::kind_name(arena, obj) }),
    }
}

/// Writes an integer inside an already open span.
pub(crate) fn write_bigint(span: &mut AllocSpan<'_>, value: &BigInt) -> Result<ObjRef, Interrupted> {
    let (sign, limbs) = value.to_u64_digits();
    object::write_int(span, sign == Sign::Minus, &limbs)
}

/// Writes a fixed-width integer inside an already open span.
pub(crate) fn write_small(span: &mut AllocSpan<'_>, value: &SmallInt) -> Result<ObjRef, Interrupted> {
    match value {
        SmallInt::Inline(small) => object::write_int(span, *small < 0, &[small.unsigned_abs()]),
        SmallInt::Heap(value) => write_bigint(span, value),
    }
}

/// Rebuilds a big integer from a sign flag and limbs, least significant first.
pub(crate) fn bigint_from_parts(negative: bool, limbs: &[u64]) -> BigInt {
    let mut bytes = Vec::with_capacity(limbs.len().saturating_mul(8));
    for limb in limbs {
        bytes.extend_from_slice(&limb.to_le_bytes());
    }
    let magnitude = BigUint::from_bytes_le(&bytes);
    let sign = if magnitude.is_zero() {
        Sign::NoSign
    } else if negative {
        Sign::Minus
    } else {
        Sign::Plus
    };
    BigInt::from_biguint(sign, magnitude)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{convert::from_rational, object::Tag};
    use num_rational::BigRational;
    use rstest::rstest;

    #[rstest]
    #[case::zero(BigInt::from(0))]
    #[case::answer(BigInt::from(42))]
    #[case::negative(BigInt::from(-42))]
    #[case::word_boundary(BigInt::from(u64::MAX))]
    #[case::past_word_boundary(BigInt::from(u64::MAX) + 1)]
    #[case::multi_limb(BigInt::from(3) << 200)]
    #[case::negative_multi_limb(-(BigInt::from(7) << 130u32))]
    fn bigint_round_trip(#[case] value: BigInt) {
        let mut arena = Arena::new();
        let obj = int_from_bigint(&mut arena, &value).unwrap();
        assert_eq!(object::tag(&arena, obj), Some(Tag::Int));
        assert_eq!(bigint_from_obj(&arena, obj), Ok(value));
    }

    #[test]
    fn forty_two_decodes_to_literal() {
        let mut arena = Arena::new();
        let obj = int_from_bigint(&mut arena, &BigInt::from(42)).unwrap();
        assert_eq!(bigint_from_obj(&arena, obj).unwrap(), BigInt::from(42));
    }

    #[test]
    fn zero_has_minimal_non_negative_encoding() {
        let mut arena = Arena::new();
        let obj = int_from_bigint(&mut arena, &BigInt::from(0)).unwrap();
        assert_eq!(object::view(&arena, obj), Some(ObjView::Int { negative: false, limbs: &[] }));
    }

    #[test]
    fn sign_is_preserved() {
        let mut arena = Arena::new();
        let positive = int_from_bigint(&mut arena, &BigInt::from(5)).unwrap();
        let negative = int_from_bigint(&mut arena, &BigInt::from(-5)).unwrap();
        assert!(bigint_from_obj(&arena, positive).unwrap() > BigInt::from(0));
        assert!(bigint_from_obj(&arena, negative).unwrap() < BigInt::from(0));
    }

    #[rstest]
    #[case::zero(SmallInt::Inline(0))]
    #[case::positive(SmallInt::Inline(1234))]
    #[case::negative(SmallInt::Inline(-1234))]
    #[case::word_min(SmallInt::Inline(i64::MIN))]
    #[case::out_of_line(SmallInt::Heap(BigInt::from(11) << 90))]
    fn small_path_agrees_with_bigint_path(#[case] value: SmallInt) {
        let mut arena = Arena::new();
        let via_small = int_from_small(&mut arena, &value).unwrap();
        let via_big = int_from_bigint(&mut arena, &value.to_bigint()).unwrap();
        assert_eq!(bigint_from_obj(&arena, via_small), bigint_from_obj(&arena, via_big));
    }

    #[test]
    fn extraction_rejects_non_integer() {
        let mut arena = Arena::new();
        let ratio = BigRational::new(BigInt::from(-2), BigInt::from(3));
        let obj = from_rational(&mut arena, &ratio).unwrap();
        assert_eq!(
            bigint_from_obj(&arena, obj),
            Err(TypeMismatch { expected: "integer", found: "fraction" })
        );
    }

    #[test]
    fn interrupt_aborts_without_allocating() {
        let mut arena = Arena::new();
        let handle = arena.interrupt_handle();
        handle.interrupt();
        assert_eq!(int_from_bigint(&mut arena, &BigInt::from(42)), Err(Interrupted));
        assert!(arena.is_empty());

        handle.clear();
        let obj = int_from_bigint(&mut arena, &BigInt::from(42)).unwrap();
        assert_eq!(bigint_from_obj(&arena, obj).unwrap(), BigInt::from(42));
    }
}
