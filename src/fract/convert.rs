use super::*;
use crate::underlying::{cast, Select, Width};

impl<
  const I: u32,
  const F: u32,
  Int: crate::Int,
> Fract<I, F, Int> {
  /// Construct from an integer. Fails with [`Error::Overflow`] unless the value fits in
  /// `I` bits (sign included).
  ///
  /// # Example
  ///
  /// ```
  /// # use fast_fract::{q2_6, Error};
  /// assert_eq!(q2_6::from_int(-2).unwrap().to_bits(), -128);
  /// assert_eq!(q2_6::from_int(2), Err(Error::Overflow));
  /// ```
  #[inline]
  pub fn from_int(i: Int) -> Result<Self, Error> {
    if !i.fits_in(Self::INT_BITS) {
      return Err(Error::Overflow);
    }
    Ok(Self(i << Self::FRAC_BITS))
  }

  /// Construct from a double, rounding **toward zero** to the nearest representable
  /// value. Fails with [`Error::Overflow`] if the resulting integer part differs from
  /// `f.floor()` — which catches out-of-range inputs and NaN.
  pub fn from_f64(f: f64) -> Result<Self, Error> {
    let scaled = f * (1u64 << Self::FRAC_BITS) as f64;
    // Range guard before the cast; the comparison is false for NaN too.
    let min = Int::MIN.into_i128() as f64;
    let max = Int::MAX.into_i128() as f64;
    if !(scaled >= min - 1.0 && scaled <= max + 1.0) {
      return Err(Error::Overflow);
    }
    let x = Int::of_i128(scaled as i128);
    if (x >> Self::FRAC_BITS).into_i128() as f64 != libm::floor(f) {
      return Err(Error::Overflow);
    }
    Ok(Self(x))
  }

  /// As [`Self::from_f64`], for single precision.
  #[inline]
  pub fn from_f32(f: f32) -> Result<Self, Error> {
    Self::from_f64(f as f64)
  }

  /// Convert from a value of a different shape, truncating fractional bits that don't
  /// fit (toward −∞) and failing with [`Error::Overflow`] if the integer part doesn't
  /// fit in `I` bits.
  ///
  /// # Example
  ///
  /// ```
  /// # use fast_fract::{q8_8, q16_16, Error};
  /// let x = q16_16::from_f64(740.75).unwrap();
  /// assert_eq!(q8_8::from_fract(x), Err(Error::Overflow));
  /// let y = q8_8::from_f64(12.75).unwrap();
  /// assert_eq!(q16_16::from_fract(y).unwrap(), q16_16::from_f64(12.75).unwrap());
  /// ```
  pub fn from_fract<const I2: u32, const F2: u32, Int2: crate::Int>(
    f: Fract<I2, F2, Int2>,
  ) -> Result<Self, Error> {
    Self::compose(f.to_bits(), Fract::<I2, F2, Int2>::FRAC_BITS)
  }

  /// The shared tail of every shape-changing construction: given a raw value with its
  /// binary point at `frac_bits`, check that the integer part fits `I` bits and realign
  /// the point to `F`.
  pub(crate) fn compose<Int2: crate::Int>(x2: Int2, frac_bits: u32) -> Result<Self, Error> {
    let integ = x2 >> frac_bits;
    let check_bits = if Self::INT_BITS < Int2::BITS { Self::INT_BITS } else { Int2::BITS };
    if !integ.fits_in(check_bits) {
      return Err(Error::Overflow);
    }
    let mut x = cast::<Int2, Int>(integ) << Self::FRAC_BITS;
    let frac = x2 & !(!Int2::ZERO << frac_bits);
    x = x | align::<Int2, Int>(frac, frac_bits, Self::FRAC_BITS);
    Ok(Self(x))
  }

  /// The arithmetic floor, in the smallest machine integer that holds `I` bits.
  #[inline]
  pub fn floor(self) -> <Width<I> as Select>::Smallest
  where
    Width<I>: Select,
  {
    cast(self.0 >> Self::FRAC_BITS)
  }

  /// The arithmetic ceiling, in the smallest machine integer that holds `I` bits.
  ///
  /// Within `2^-F` of [`Self::MAX`] the true ceiling is `2^(I-1)`, which the return type
  /// cannot hold; the result wraps, as the raw formula `(x + (2^F - 1)) >> F` does.
  #[inline]
  pub fn ceil(self) -> <Width<I> as Select>::Smallest
  where
    Width<I>: Select,
  {
    let mask = !(!Int::ZERO << Self::FRAC_BITS);
    cast(self.0.wrapping_add(mask) >> Self::FRAC_BITS)
  }

  /// The represented value, `to_bits() / 2^F`, as a double.
  #[inline]
  pub fn to_f64(self) -> f64 {
    self.0.into_i128() as f64 / (1u64 << Self::FRAC_BITS) as f64
  }

  /// As [`Self::to_f64`], narrowed to single precision.
  #[inline]
  pub fn to_f32(self) -> f32 {
    self.to_f64() as f32
  }
}
