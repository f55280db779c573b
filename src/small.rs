//! Word-sized integers with a small-value optimization.

use num_bigint::BigInt;
use num_traits::ToPrimitive;

/// An integer stored inline when it fits a signed machine word.
///
/// This is the cheap representation matrix conversions work with: the
/// common case of word-sized entries never touches an allocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SmallInt {
    /// Value stored inline in a single signed word.
    Inline(i64),

    /// Out-of-line arbitrary-precision storage.
    Heap(BigInt),
}

impl SmallInt {
    /// Builds from a big integer, collapsing word-sized values inline.
    pub fn from_bigint(value: BigInt) -> Self {
        match value.to_i64() {
            Some(small) => SmallInt::Inline(small),
            None => SmallInt::Heap(value),
        }
    }

    /// The value as a big integer.
    pub fn to_bigint(&self) -> BigInt {
        match self {
            SmallInt::Inline(value) => BigInt::from(*value),
            SmallInt::Heap(value) => value.clone(),
        }
    }

    /// The inline value, if this integer is stored inline.
    pub fn as_inline(&self) -> Option<i64> {
        match self {
            SmallInt::Inline(value) => Some(*value),
            SmallInt::Heap(_) => None,
        }
    }
}

impl From<i64> for SmallInt {
    fn from(value: i64) -> Self {
        SmallInt::Inline(value)
    }
}

impl From<BigInt> for SmallInt {
    fn from(value: BigInt) -> Self {
        SmallInt::from_bigint(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(0)]
    #[case::positive(42)]
    #[case::negative(-42)]
    #[case::word_min(i64::MIN)]
    #[case::word_max(i64::MAX)]
    fn word_sized_values_collapse_inline(#[case] value: i64) {
        let small = SmallInt::from_bigint(BigInt::from(value));
        assert_eq!(small.as_inline(), Some(value));
        assert_eq!(small.to_bigint(), BigInt::from(value));
    }

    #[test]
    fn large_values_stay_out_of_line() {
        let value: BigInt = BigInt::from(i64::MAX) + 1;
        let small = SmallInt::from_bigint(value.clone());
        assert_eq!(small.as_inline(), None);
        assert_eq!(small.to_bigint(), value);
    }
}
