//! Signed integer types usable as repeat counts.

use crate::width::Width;
use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// A signed integer that can drive [`repeat`](crate::repeat::repeat).
///
/// Implemented for `i8`, `i16`, `i32` and `i64` only.
pub trait Count: sealed::Sealed + Copy + Ord + fmt::Debug + fmt::Display {
    const ZERO: Self;
    const MIN: Self;
    const MAX: Self;
    const WIDTH: Width;

    /// `self + 1`. Only called with `self < Self::MAX`.
    fn successor(self) -> Self;

    fn to_i64(self) -> i64;

    fn from_i64(value: i64) -> Option<Self>;
}

macro_rules! impl_count {
    ($($ty:ty => $width:expr),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Count for $ty {
                const ZERO: Self = 0;
                const MIN: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;
                const WIDTH: Width = $width;

                #[inline(always)]
                fn successor(self) -> Self {
                    self + 1
                }

                #[inline(always)]
                fn to_i64(self) -> i64 {
                    i64::from(self)
                }

                #[inline]
                fn from_i64(value: i64) -> Option<Self> {
                    <$ty>::try_from(value).ok()
                }
            }
        )*
    };
}

impl_count! {
    i8 => Width::I8,
    i16 => Width::I16,
    i32 => Width::I32,
    i64 => Width::I64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds<N: Count>() -> (i64, i64) {
        (N::MIN.to_i64(), N::MAX.to_i64())
    }

    #[test]
    fn constants_agree_with_width() {
        for (width, (min, max)) in [
            (i8::WIDTH, bounds::<i8>()),
            (i16::WIDTH, bounds::<i16>()),
            (i32::WIDTH, bounds::<i32>()),
            (i64::WIDTH, bounds::<i64>()),
        ] {
            assert_eq!(width.min(), min, "{width}");
            assert_eq!(width.max(), max, "{width}");
        }
    }

    #[test]
    fn from_i64_respects_range() {
        assert_eq!(i8::from_i64(127), Some(127));
        assert_eq!(i8::from_i64(128), None);
        assert_eq!(i16::from_i64(-32769), None);
        assert_eq!(i32::from_i64(i64::from(i32::MIN)), Some(i32::MIN));
        assert_eq!(i64::from_i64(i64::MAX), Some(i64::MAX));
    }

    #[test]
    fn successor_reaches_max() {
        assert_eq!((i8::MAX - 1).successor(), i8::MAX);
        assert_eq!((-1i64).successor(), 0);
    }
}
