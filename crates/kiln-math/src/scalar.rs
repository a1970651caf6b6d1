use core::fmt;
use core::ops::{AddAssign, Sub, SubAssign};

use num_traits::{AsPrimitive, One, Zero};

/// Element type of a [`Mat`](crate::Mat).
///
/// Blanket-implemented for every primitive integer and float type. Arithmetic
/// is the type's native arithmetic, so integer overflow behaves as it does for
/// the bare primitive (panics in debug builds, wraps in release).
pub trait Scalar:
    Copy
    + Default
    + PartialEq
    + fmt::Debug
    + fmt::Display
    + Zero
    + One
    + Sub<Output = Self>
    + AddAssign
    + SubAssign
    + AsPrimitive<f32>
{
    /// Converts back from `f32`. Integers truncate toward zero and saturate at
    /// the type bounds; NaN becomes zero.
    fn from_f32(v: f32) -> Self;
}

impl<T> Scalar for T
where
    T: Copy
        + Default
        + PartialEq
        + fmt::Debug
        + fmt::Display
        + Zero
        + One
        + Sub<Output = T>
        + AddAssign
        + SubAssign
        + AsPrimitive<f32>,
    f32: AsPrimitive<T>,
{
    #[inline]
    fn from_f32(v: f32) -> Self {
        v.as_()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip<T: Scalar>(v: T) -> T {
        T::from_f32(v.as_())
    }

    #[test]
    fn identities() {
        assert_eq!(<i32 as Zero>::zero(), 0);
        assert_eq!(<u8 as One>::one(), 1);
        assert_eq!(<f64 as One>::one(), 1.0);
    }

    #[test]
    fn from_f32_truncates_toward_zero() {
        assert_eq!(i32::from_f32(2.9), 2);
        assert_eq!(i32::from_f32(-2.9), -2);
    }

    #[test]
    fn from_f32_saturates() {
        assert_eq!(u8::from_f32(300.0), 255);
        assert_eq!(u8::from_f32(-4.0), 0);
        assert_eq!(i16::from_f32(f32::NAN), 0);
    }

    #[test]
    fn wide_types_round_trip_small_values() {
        assert_eq!(round_trip(-12i128), -12);
        assert_eq!(round_trip(40u64), 40);
        assert_eq!(round_trip(0.25f64), 0.25);
    }
}
