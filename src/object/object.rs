//! Word-level encoding of tagged heap numeric objects.
//!
//! Every object starts with a header word carrying its tag and total
//! length in words. Integers fold their sign into a second length word
//! followed by the limbs, least significant first. Composite objects
//! (fractions, p-adics, matrices) store [ObjRef] indices of their
//! components in their payload words.

use crate::{
    arena::{AllocSpan, Arena, ObjRef},
    errors::Interrupted,
};
use std::fmt::{self, Display, Formatter};

const TAG_SHIFT: u32 = 56;
const LEN_MASK: u64 = (1 << TAG_SHIFT) - 1;
const SIGN_BIT: u64 = 1 << 63;
const SIG_LEN_MASK: u64 = !SIGN_BIT;

/// The kind of a heap numeric object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tag {
    /// Arbitrary-precision integer.
    Int,

    /// Fraction of two heap integers.
    Frac,

    /// p-adic number.
    PAdic,

    /// Matrix of heap objects.
    Mat,
}

impl Tag {
    fn code(self) -> u64 {
        match self {
            Tag::Int => 1,
            Tag::Frac => 2,
            Tag::PAdic => 3,
            Tag::Mat => 4,
        }
    }

    fn from_code(code: u64) -> Option<Tag> {
        match code {
            1 => Some(Tag::Int),
            2 => Some(Tag::Frac),
            3 => Some(Tag::PAdic),
            4 => Some(Tag::Mat),
            _ => None,
        }
    }

    /// Human readable kind name, as used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Tag::Int => "integer",
            Tag::Frac => "fraction",
            Tag::PAdic => "p-adic",
            Tag::Mat => "matrix",
        }
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A decoded view of a heap object.
///
/// Extraction sites match on this exhaustively instead of inspecting raw
/// header words.
#[derive(Debug, PartialEq, Eq)]
pub enum ObjView<'a> {
    /// An integer: sign plus limbs, least significant first.
    Int {
        /// Whether the value is negative. Never set for zero.
        negative: bool,

        /// Magnitude limbs without a leading zero limb; empty for zero.
        limbs: &'a [u64],
    },

    /// A fraction referencing its numerator and denominator integers.
    Frac {
        /// Numerator object.
        numerator: ObjRef,

        /// Denominator object; positive and coprime to the numerator.
        denominator: ObjRef,
    },

    /// A p-adic number shell.
    PAdic {
        /// Relative precision.
        precision: u32,

        /// Valuation.
        valuation: i32,

        /// The prime p.
        prime: ObjRef,

        /// The prime power p^precision.
        prime_pow: ObjRef,

        /// The unit part.
        unit: ObjRef,
    },

    /// A matrix; cells are read through [mat_entry].
    Mat {
        /// Number of rows.
        rows: usize,

        /// Number of columns.
        cols: usize,
    },
}

/// Reads the tag of an object.
pub fn tag(arena: &Arena, obj: ObjRef) -> Option<Tag> {
    Tag::from_code(arena.word(obj, 0) >> TAG_SHIFT)
}

/// Human readable kind name of an object, for diagnostics.
pub fn kind_name(arena: &Arena, obj: ObjRef) -> &'static str {
    match tag(arena, obj) {
        Some(tag) => tag.name(),
        None => "unknown",
    }
}

/// Decodes an object into a matchable view.
///
/// Returns `None` for refs that do not point at an encoded object.
pub fn view(arena: &Arena, obj: ObjRef) -> Option<ObjView<'_>> {
    match tag(arena, obj)? {
        Tag::Int => {
            let sig = arena.word(obj, 1);
            let limbs = (sig & SIG_LEN_MASK) as usize;
            Some(ObjView::Int { negative: sig & SIGN_BIT != 0, limbs: arena.run(obj, 2, limbs) })
        }
        Tag::Frac => Some(ObjView::Frac {
            numerator: ObjRef(arena.word(obj, 1) as usize),
            denominator: ObjRef(arena.word(obj, 2) as usize),
        }),
        Tag::PAdic => {
            let precval = arena.word(obj, 1);
            Some(ObjView::PAdic {
                precision: (precval >> 32) as u32,
                valuation: precval as u32 as i32,
                prime: ObjRef(arena.word(obj, 2) as usize),
                prime_pow: ObjRef(arena.word(obj, 3) as usize),
                unit: ObjRef(arena.word(obj, 4) as usize),
            })
        }
        Tag::Mat => {
            let shape = arena.word(obj, 1);
            Some(ObjView::Mat { rows: (shape >> 32) as usize, cols: shape as u32 as usize })
        }
    }
}

/// Reads matrix cell `(row, col)`, 1-indexed.
pub fn mat_entry(arena: &Arena, obj: ObjRef, row: usize, col: usize) -> Option<ObjRef> {
    match view(arena, obj)? {
        ObjView::Mat { rows, cols } => {
            if row == 0 || col == 0 || row > rows || col > cols {
                return None;
            }
            let offset = 2 + (row - 1) * cols + (col - 1);
            Some(ObjRef(arena.word(obj, offset) as usize))
        }
        _ => None,
    }
}

fn header(tag: Tag, total: usize) -> u64 {
    tag.code() << TAG_SHIFT | total as u64 & LEN_MASK
}

/// Number of limbs once trailing zero limbs are stripped.
fn normalized_len(limbs: &[u64]) -> usize {
    let mut len = limbs.len();
    while len > 0 {
        if limbs.get(len - 1).copied().unwrap_or_default() != 0 {
            break;
        }
        len -= 1;
    }
    len
}

/// Writes an integer object: header, sign-folded length word, limbs.
///
/// Zero gets the minimal non-negative encoding regardless of `negative`.
pub(crate) fn write_int(
    span: &mut AllocSpan<'_>,
    negative: bool,
    limbs: &[u64],
) -> Result<ObjRef, Interrupted> {
    let len = normalized_len(limbs);
    let total = 2 + len;
    let obj = span.alloc(total)?;
    span.set(obj, 0, header(Tag::Int, total));
    let sign = if negative && len != 0 { SIGN_BIT } else { 0 };
    span.set(obj, 1, sign | len as u64);
    for (i, &limb) in limbs.iter().take(len).enumerate() {
        span.set(obj, 2 + i, limb);
    }
    Ok(obj)
}

/// Writes a fraction shell around two previously written integers.
pub(crate) fn write_frac(
    span: &mut AllocSpan<'_>,
    numerator: ObjRef,
    denominator: ObjRef,
) -> Result<ObjRef, Interrupted> {
    let obj = span.alloc(3)?;
    span.set(obj, 0, header(Tag::Frac, 3));
    span.set(obj, 1, numerator.index() as u64);
    span.set(obj, 2, denominator.index() as u64);
    Ok(obj)
}

/// Writes a p-adic shell with precision and valuation packed into one word.
///
/// The three component refs are zero until [set_padic_parts] patches them.
pub(crate) fn write_padic_shell(
    span: &mut AllocSpan<'_>,
    precision: u32,
    valuation: i32,
) -> Result<ObjRef, Interrupted> {
    let obj = span.alloc(5)?;
    span.set(obj, 0, header(Tag::PAdic, 5));
    span.set(obj, 1, u64::from(precision) << 32 | u64::from(valuation as u32));
    Ok(obj)
}

/// Patches the component refs of a p-adic shell.
pub(crate) fn set_padic_parts(
    span: &mut AllocSpan<'_>,
    obj: ObjRef,
    prime: ObjRef,
    prime_pow: ObjRef,
    unit: ObjRef,
) {
    span.set(obj, 2, prime.index() as u64);
    span.set(obj, 3, prime_pow.index() as u64);
    span.set(obj, 4, unit.index() as u64);
}

/// Writes a zero-filled matrix shell.
///
/// Cell refs are zero until [set_mat_cell] patches them.
pub(crate) fn write_mat_shell(
    span: &mut AllocSpan<'_>,
    rows: usize,
    cols: usize,
) -> Result<ObjRef, Interrupted> {
    let total = 2 + rows * cols;
    let obj = span.alloc(total)?;
    span.set(obj, 0, header(Tag::Mat, total));
    span.set(obj, 1, (rows as u64) << 32 | cols as u64 & u64::from(u32::MAX));
    Ok(obj)
}

/// Patches matrix cell `(row, col)`, 0-indexed, with a cell ref.
pub(crate) fn set_mat_cell(
    span: &mut AllocSpan<'_>,
    obj: ObjRef,
    row: usize,
    col: usize,
    cell: ObjRef,
) {
    let cols = span.word(obj, 1) as u32 as usize;
    span.set(obj, 2 + row * cols + col, cell.index() as u64);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::arena::Arena;
    use rstest::rstest;

    fn write_committed(arena: &mut Arena, negative: bool, limbs: &[u64]) -> ObjRef {
        let mut span = arena.begin();
        let obj = write_int(&mut span, negative, limbs).unwrap();
        span.commit();
        obj
    }

    #[rstest]
    #[case::positive(false, &[42], false, &[42])]
    #[case::negative(true, &[42], true, &[42])]
    #[case::multi_limb(false, &[1, 2, 3], false, &[1, 2, 3])]
    #[case::trailing_zero_limbs(false, &[7, 0, 0], false, &[7])]
    #[case::zero(false, &[0], false, &[])]
    #[case::negative_zero(true, &[0, 0], false, &[])]
    fn int_encoding(
        #[case] negative: bool,
        #[case] limbs: &[u64],
        #[case] expected_negative: bool,
        #[case] expected_limbs: &[u64],
    ) {
        let mut arena = Arena::new();
        let obj = write_committed(&mut arena, negative, limbs);
        assert_eq!(tag(&arena, obj), Some(Tag::Int));
        let view = view(&arena, obj).unwrap();
        assert_eq!(view, ObjView::Int { negative: expected_negative, limbs: expected_limbs });
    }

    #[test]
    fn frac_encoding() {
        let mut arena = Arena::new();
        let num = write_committed(&mut arena, true, &[2]);
        let den = write_committed(&mut arena, false, &[3]);
        let mut span = arena.begin();
        let frac = write_frac(&mut span, num, den).unwrap();
        span.commit();

        assert_eq!(tag(&arena, frac), Some(Tag::Frac));
        assert_eq!(view(&arena, frac), Some(ObjView::Frac { numerator: num, denominator: den }));
    }

    #[rstest]
    #[case::positive_valuation(20, 3)]
    #[case::negative_valuation(5, -2)]
    #[case::zero_valuation(1, 0)]
    fn padic_precval_packing(#[case] precision: u32, #[case] valuation: i32) {
        let mut arena = Arena::new();
        let prime = write_committed(&mut arena, false, &[7]);
        let prime_pow = write_committed(&mut arena, false, &[49]);
        let unit = write_committed(&mut arena, false, &[3]);
        let mut span = arena.begin();
        let obj = write_padic_shell(&mut span, precision, valuation).unwrap();
        set_padic_parts(&mut span, obj, prime, prime_pow, unit);
        span.commit();

        assert_eq!(
            view(&arena, obj),
            Some(ObjView::PAdic { precision, valuation, prime, prime_pow, unit })
        );
    }

    #[test]
    fn mat_entry_is_one_indexed() {
        let mut arena = Arena::new();
        let cell = write_committed(&mut arena, false, &[5]);
        let mut span = arena.begin();
        let mat = write_mat_shell(&mut span, 2, 3).unwrap();
        set_mat_cell(&mut span, mat, 1, 2, cell);
        span.commit();

        assert_eq!(view(&arena, mat), Some(ObjView::Mat { rows: 2, cols: 3 }));
        assert_eq!(mat_entry(&arena, mat, 2, 3), Some(cell));
        assert_eq!(mat_entry(&arena, mat, 0, 1), None);
        assert_eq!(mat_entry(&arena, mat, 1, 0), None);
        assert_eq!(mat_entry(&arena, mat, 3, 1), None);
        assert_eq!(mat_entry(&arena, mat, 1, 4), None);
    }

    #[test]
    fn unencoded_ref_has_no_view() {
        let arena = Arena::new();
        assert_eq!(tag(&arena, ObjRef(0)), None);
        assert_eq!(view(&arena, ObjRef(3)), None);
        assert_eq!(kind_name(&arena, ObjRef(0)), "unknown");
    }
}
