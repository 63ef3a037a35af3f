use super::*;

impl<
  const I: u32,
  const F: u32,
  Int: crate::Int,
> Fract<I, F, Int> {
  /// `self + rhs`, or [`Error::Overflow`] if the sum leaves the shape. The sum is never
  /// silently wrapped: both machine-level overflow (full-width shapes) and integer parts
  /// spilling past `I` bits (narrower shapes) are caught.
  #[inline]
  pub fn checked_add(self, rhs: Self) -> Result<Self, Error> {
    if self.0.add_overflows(rhs.0) {
      return Err(Error::Overflow);
    }
    let sum = self.0.wrapping_add(rhs.0);
    if !(sum >> Self::FRAC_BITS).fits_in(Self::INT_BITS) {
      return Err(Error::Overflow);
    }
    Ok(Self(sum))
  }

  /// `self - rhs`, with the same contract as [`Self::checked_add`].
  #[inline]
  pub fn checked_sub(self, rhs: Self) -> Result<Self, Error> {
    if self.0.sub_overflows(rhs.0) {
      return Err(Error::Overflow);
    }
    let diff = self.0.wrapping_sub(rhs.0);
    if !(diff >> Self::FRAC_BITS).fits_in(Self::INT_BITS) {
      return Err(Error::Overflow);
    }
    Ok(Self(diff))
  }

  /// The absolute value.
  ///
  /// On [`Self::MIN`] the result is `MIN` again (the two's complement bit pattern is its
  /// own negation); callers that care should test for `MIN` first.
  #[inline]
  pub fn abs(self) -> Self {
    Self(self.0.wrapping_abs())
  }

  /// The number of bits by which `a` and `b` differ: `bit_len(|a - b|)` over the raw
  /// values. 0 means bit-identical; k means the difference is below `2^k` ULPs. Used to
  /// bound the precision loss of inexact pipelines.
  pub fn error(a: Self, b: Self) -> u32 {
    let diff = a.0.into_i128() - b.0.into_i128();
    128 - diff.unsigned_abs().leading_zeros()
  }
}

/// Helper macro implementing an operator for all combinations of value and reference,
/// delegating to the checked method and panicking on overflow (the same contract as the
/// built-in integers).
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident, $checked:ident, $msg:literal) => {
    impl<const I: u32, const F: u32, Int: crate::Int>
    core::ops::$trait<Fract<I, F, Int>> for Fract<I, F, Int> {
      type Output = Fract<I, F, Int>;

      #[inline]
      #[track_caller]
      fn $name(self, rhs: Self) -> Self::Output {
        match self.$checked(rhs) {
          Ok(result) => result,
          Err(_) => panic!($msg),
        }
      }
    }

    impl<const I: u32, const F: u32, Int: crate::Int>
    core::ops::$trait<&Fract<I, F, Int>> for Fract<I, F, Int> {
      type Output = Fract<I, F, Int>;

      #[inline]
      fn $name(self, rhs: &Fract<I, F, Int>) -> Self::Output {
        core::ops::$trait::$name(self, *rhs)
      }
    }

    impl<const I: u32, const F: u32, Int: crate::Int>
    core::ops::$trait<Fract<I, F, Int>> for &Fract<I, F, Int> {
      type Output = Fract<I, F, Int>;

      #[inline]
      fn $name(self, rhs: Fract<I, F, Int>) -> Self::Output {
        core::ops::$trait::$name(*self, rhs)
      }
    }

    impl<const I: u32, const F: u32, Int: crate::Int>
    core::ops::$trait<&Fract<I, F, Int>> for &Fract<I, F, Int> {
      type Output = Fract<I, F, Int>;

      #[inline]
      fn $name(self, rhs: &Fract<I, F, Int>) -> Self::Output {
        core::ops::$trait::$name(*self, *rhs)
      }
    }

    impl<const I: u32, const F: u32, Int: crate::Int>
    core::ops::$trait_assign<Fract<I, F, Int>> for Fract<I, F, Int> {
      #[inline]
      fn $name_assign(&mut self, rhs: Fract<I, F, Int>) {
        *self = core::ops::$trait::$name(*self, rhs)
      }
    }

    impl<const I: u32, const F: u32, Int: crate::Int>
    core::ops::$trait_assign<&Fract<I, F, Int>> for Fract<I, F, Int> {
      #[inline]
      fn $name_assign(&mut self, rhs: &Fract<I, F, Int>) {
        *self = core::ops::$trait::$name(*self, *rhs)
      }
    }
  }
}

mk_ops!{Add, AddAssign, add, add_assign, checked_add, "attempt to add fixed-point values with overflow"}
mk_ops!{Sub, SubAssign, sub, sub_assign, checked_sub, "attempt to subtract fixed-point values with overflow"}
