use super::*;
use crate::underlying::{cast, Widen};

/// Binary restoring square root, one result bit per iteration: propose `b` as the next
/// bit of the root `g`, accept it whenever `(2g + b)·2^bshft` still fits under the
/// remainder. Bit-exact — the result is `⌊√val⌋` over the integers.
///
/// `(g + g + b) << bshft` can poke past the sign bit for values near the type's top;
/// the bit-length guard treats that case as "doesn't fit" without computing the shift.
fn isqrt<T: crate::Int>(mut val: T) -> T {
  debug_assert!(val >= T::ZERO);
  if val == T::ZERO {
    return T::ZERO;
  }
  let mut g = T::ZERO;
  let mut bshft = (val.bit_len() - 1) >> 1;
  let mut b = T::ONE << bshft;
  loop {
    let probe = g.wrapping_add(g).wrapping_add(b);
    if probe.bit_len() + bshft < T::BITS {
      let scaled = probe << bshft;
      if val >= scaled {
        g = g.wrapping_add(b);
        val = val.wrapping_sub(scaled);
      }
    }
    b = b >> 1;
    if bshft == 0 {
      break;
    }
    bshft -= 1;
  }
  g
}

impl<
  const I: u32,
  const F: u32,
  Int: crate::Int,
> Fract<I, F, Int> {
  /// The square root, at the full precision of the shape. Fails with [`Error::Domain`]
  /// on negative input.
  ///
  /// The raw value is promoted to the double-width integer and shifted up by `F` (i.e.
  /// to a `Q(2I, 2F)` scale) before the root is taken, so the result is bit-exact:
  /// `sqrt(v)² ≤ v < (sqrt(v) + ulp)²`.
  ///
  /// # Example
  ///
  /// ```
  /// # use fast_fract::q8_24;
  /// let v = q8_24::from_int(49).unwrap();
  /// assert_eq!(v.sqrt().unwrap(), q8_24::from_int(7).unwrap());
  /// ```
  pub fn sqrt(self) -> Result<Self, Error>
  where
    Int: Widen,
  {
    if self.0 < Int::ZERO {
      return Err(Error::Domain);
    }
    let wide = self.0.widen() << Self::FRAC_BITS;
    // √ of an in-range value is in range: it shrinks anything above one and keeps the
    // rest below one.
    Ok(Self::from_bits_unchecked(cast(isqrt(wide))))
  }

  /// The square root at *half* the precision of the argument, entirely within the
  /// backing word — no double-width promotion. The caller names the half shape (the
  /// compiler checks it is `Q(I/2, F/2)`):
  ///
  /// ```
  /// # use fast_fract::{q8_24, q4_12};
  /// let v = q8_24::from_int(49).unwrap();
  /// let root: q4_12 = v.sqrt_fast().unwrap();
  /// assert_eq!(root, q4_12::from_int(7).unwrap());
  /// ```
  ///
  /// The result is bit-exact up to its `F/2` fractional bits. Fails with
  /// [`Error::Domain`] on negative input, and with [`Error::Overflow`] for inputs at or
  /// above `2^(I-2)`, whose root's integer part needs more than `I/2 - 1` bits.
  pub fn sqrt_fast<const IH: u32, const FH: u32, IntH: crate::Int>(
    self,
  ) -> Result<Fract<IH, FH, IntH>, Error> {
    const {
      assert!(
        IH == I / 2 && FH == F / 2,
        "sqrt_fast produces the half shape Q(I/2, F/2)",
      );
    }
    if self.0 < Int::ZERO {
      return Err(Error::Domain);
    }
    Fract::from_bits(cast(isqrt(self.0)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{q16_16, q32_32, q4_12, q8_24};
  use malachite::base::num::arithmetic::traits::FloorSqrt;
  use malachite::rational::Rational;
  use malachite::Natural;
  use proptest::prelude::*;

  #[test]
  fn integer_roots() {
    for i in 2..100i32 {
      let root = q8_24::from_int(i).unwrap().sqrt().unwrap();
      let expected = q8_24::from_f64((i as f64).sqrt()).unwrap();
      assert_eq!(root, expected, "sqrt({i})");
    }
    // The half shape q4_12 holds roots below 8, i.e. arguments below 64.
    for i in 2..64i32 {
      let half: q4_12 = q8_24::from_int(i).unwrap().sqrt_fast().unwrap();
      let expected = q4_12::from_f64((i as f64).sqrt()).unwrap();
      assert_eq!(half, expected, "sqrt_fast({i})");
    }
  }

  #[test]
  fn side_cases() {
    assert_eq!(q16_16::from_int(1).unwrap().sqrt().unwrap(), q16_16::from_int(1).unwrap());
    assert_eq!(q16_16::ZERO.sqrt().unwrap(), q16_16::ZERO);
    assert_eq!(q16_16::from_int(-1).unwrap().sqrt(), Err(Error::Domain));
    assert_eq!(
      q16_16::from_int(-1).unwrap().sqrt_fast::<8, 8, i32>(),
      Err(Error::Domain),
    );
    assert_eq!(q16_16::from_int(49).unwrap().sqrt().unwrap(), q16_16::from_int(7).unwrap());
  }

  #[test]
  fn narrow_backings_widen_too() {
    // i8-backed shapes promote through i16.
    assert_eq!(crate::q8_0::from_int(49).unwrap().sqrt().unwrap().floor(), 7);
    let half = crate::q1_7::from_f64(0.5).unwrap();
    // √0.5 = 0.7071…; at 7 fractional bits, ⌊0.7071·128⌋ = 90.
    assert_eq!(half.sqrt().unwrap().to_bits(), 90);
  }

  #[test]
  fn full_width_shapes() {
    // q32_32 promotes through i128.
    let two = q32_32::from_int(2).unwrap();
    let root = two.sqrt().unwrap();
    assert!((root.to_f64() - core::f64::consts::SQRT_2).abs() < 1e-9);
    // √(2^31 - ulp) = 46340.95…
    assert_eq!(q32_32::MAX.sqrt().unwrap().floor(), 46340);
  }

  /// The oracle the kernel must match: ⌊√(raw << F)⌋, taken exactly.
  fn exact_root(raw: i64, frac_bits: u32) -> Natural {
    let scaled = Rational::from(raw) * Rational::from(1i64 << frac_bits);
    Natural::try_from(scaled).unwrap().floor_sqrt()
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn matches_floor_sqrt_q16_16(raw in 0i32..i32::MAX) {
      let root = q16_16::from_bits(raw).unwrap().sqrt().unwrap();
      let expected = exact_root(raw as i64, 16);
      prop_assert_eq!(Natural::try_from(Rational::from(root.to_bits())).unwrap(), expected);
    }

    #[test]
    fn matches_floor_sqrt_q32_32(raw in 0i64..i64::MAX) {
      let root = q32_32::from_bits(raw).unwrap().sqrt().unwrap();
      let expected = exact_root(raw, 32);
      prop_assert_eq!(Natural::try_from(Rational::from(root.to_bits())).unwrap(), expected);
    }

    /// sqrt(v)² ≤ v < (sqrt(v) + ulp)², the defining bracket of a floored root.
    #[test]
    fn root_brackets_the_value(raw in 0i64..i64::MAX) {
      let root = q32_32::from_bits(raw).unwrap().sqrt().unwrap().to_bits() as u128;
      let value = (raw as u128) << 32;
      prop_assert!(root * root <= value);
      prop_assert!((root + 1) * (root + 1) > value);
    }

    /// Up to 2^(I-2) the half-precision root fits its shape and is ⌊√raw⌋ exactly.
    #[test]
    fn sqrt_fast_is_the_half_precision_root(raw in 0i32..1 << 30) {
      let half: crate::q8_8 = q16_16::from_bits(raw).unwrap().sqrt_fast().unwrap();
      let expected = (raw as u64).isqrt() as i64;
      prop_assert_eq!(half.to_bits() as i64, expected);
    }

    /// From 2^(I-2) upward the root's integer part spills past the half shape.
    #[test]
    fn sqrt_fast_overflows_the_top_quarter(raw in 1i32 << 30..i32::MAX) {
      let result: Result<crate::q8_8, Error> = q16_16::from_bits(raw).unwrap().sqrt_fast();
      prop_assert_eq!(result, Err(Error::Overflow));
    }
  }
}
