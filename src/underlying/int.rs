use super::{Int, Sealed, Widen};

/// Implementation of all the signed operations; nothing here needs a per-type special case.
macro_rules! impl_common {
  ($int:ty, $uint:ty) => {
    type Unsigned = $uint;

    const ZERO: Self = 0;
    const ONE: Self = 1;
    const MIN: Self = <$int>::MIN;
    const MAX: Self = <$int>::MAX;
    const BITS: u32 = <$int>::BITS;

    #[inline]
    fn as_unsigned(self) -> $uint { self as $uint }

    #[inline]
    fn of_unsigned(x: $uint) -> Self { x as $int }

    #[inline]
    fn into_i128(self) -> i128 { self as i128 }

    #[inline]
    fn of_i128(x: i128) -> Self { x as $int }

    #[inline]
    fn bit_len(self) -> u32 {
      Self::BITS - self.leading_zeros()
    }

    #[inline]
    fn fits_in(self, bits: u32) -> bool {
      debug_assert!(1 <= bits && bits <= Self::BITS);
      let min = (-1 as $int) << (bits - 1);
      self >= min && self <= !min
    }

    #[inline]
    fn add_overflows(self, other: Self) -> bool {
      // The sum is taken in the unsigned companion, where wrapping is well-defined; the
      // xor picks out the case where both operands disagree in sign with the result.
      let (a, b) = (self as $uint, other as $uint);
      let sum = a.wrapping_add(b);
      (((a ^ sum) & (b ^ sum)) as $int) < 0
    }

    #[inline]
    fn sub_overflows(self, other: Self) -> bool {
      let (a, b) = (self as $uint, other as $uint);
      let diff = a.wrapping_sub(b);
      (((b ^ a) & (b ^ diff)) as $int) < 0
    }

    #[inline]
    fn wrapping_add(self, other: Self) -> Self { self.wrapping_add(other) }

    #[inline]
    fn wrapping_sub(self, other: Self) -> Self { self.wrapping_sub(other) }

    #[inline]
    fn wrapping_neg(self) -> Self { self.wrapping_neg() }

    #[inline]
    fn wrapping_abs(self) -> Self { self.wrapping_abs() }
  }
}

impl Int for i8 {}
impl Sealed for i8 {
  impl_common!{i8, u8}
}

impl Int for i16 {}
impl Sealed for i16 {
  impl_common!{i16, u16}
}

impl Int for i32 {}
impl Sealed for i32 {
  impl_common!{i32, u32}
}

impl Int for i64 {}
impl Sealed for i64 {
  impl_common!{i64, u64}
}

impl Int for i128 {}
impl Sealed for i128 {
  impl_common!{i128, u128}
}

macro_rules! impl_widen {
  ($int:ty, $wide:ty) => {
    impl Widen for $int {
      type Wide = $wide;

      #[inline]
      fn widen(self) -> $wide { self as $wide }
    }
  }
}

impl_widen!{i8, i16}
impl_widen!{i16, i32}
impl_widen!{i32, i64}
impl_widen!{i64, i128}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bit_len() {
    assert_eq!(0i32.bit_len(), 0);
    assert_eq!(1i32.bit_len(), 1);
    assert_eq!(2i32.bit_len(), 2);
    assert_eq!(255i32.bit_len(), 8);
    assert_eq!(256i32.bit_len(), 9);
    assert_eq!(i64::MAX.bit_len(), 64);
    assert_eq!(5i8.bit_len(), 3);
  }

  #[test]
  fn fits_in() {
    // One bit holds only the sign.
    assert!(0i8.fits_in(1));
    assert!((-1i8).fits_in(1));
    assert!(!1i8.fits_in(1));
    assert!(!(-2i8).fits_in(1));

    assert!(1i8.fits_in(2));
    assert!((-2i8).fits_in(2));
    assert!(!2i8.fits_in(2));
    assert!(!(-3i8).fits_in(2));

    // Whole-width case.
    assert!(i32::MAX.fits_in(32));
    assert!(i32::MIN.fits_in(32));
    assert!(127i8.fits_in(8));
    assert!((-128i8).fits_in(8));

    assert!(32767i32.fits_in(16));
    assert!(!32768i32.fits_in(16));
    assert!((-32768i32).fits_in(16));
    assert!(!(-32769i32).fits_in(16));
  }

  #[test]
  fn add_overflows() {
    assert!(!1i32.add_overflows(2));
    assert!(!i32::MAX.add_overflows(i32::MIN));
    assert!(i32::MAX.add_overflows(1));
    assert!(i32::MIN.add_overflows(-1));
    assert!(!i32::MAX.add_overflows(0));
    assert!((1i64 << 62).add_overflows(1i64 << 62));
  }

  #[test]
  fn sub_overflows() {
    assert!(!3i32.sub_overflows(2));
    assert!(!i32::MIN.sub_overflows(i32::MIN));
    assert!(i32::MIN.sub_overflows(1));
    assert!(i32::MAX.sub_overflows(-1));
    assert!(0i8.sub_overflows(-128));
  }

  mod prop {
    use super::*;
    use proptest::prelude::*;

    macro_rules! overflow_matches_checked {
      ($name:ident, $int:ty) => {
        proptest!{
          #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
          #[test]
          fn $name(a in any::<$int>(), b in any::<$int>()) {
            prop_assert_eq!(a.add_overflows(b), a.checked_add(b).is_none());
            prop_assert_eq!(Sealed::sub_overflows(a, b), a.checked_sub(b).is_none());
          }
        }
      };
    }

    overflow_matches_checked!{overflow_i8, i8}
    overflow_matches_checked!{overflow_i32, i32}
    overflow_matches_checked!{overflow_i64, i64}
    overflow_matches_checked!{overflow_i128, i128}
  }
}
