//! The division-free reciprocal.
//!
//! The algorithm is the classic Newton–Raphson iteration on `f(x) = 1/x - d`, i.e.
//! `x' = x·(2 - x·d)`, expressed entirely through the high-half multiply so that every
//! intermediate stays inside the backing word:
//!
//!   1. Normalize the input with a count-leading-zeros so its top bit is set; the
//!      reciprocal's scale is tracked separately in `shift`.
//!   2. Seed with `(0b0111…1 - input)`, which is correct to 3 bits for a normalized
//!      input — the usual seed ROM, replaced by one subtraction.
//!   3. Iterate `x ← MulHi(x, -MulHi(x, d)) << 1`, doubling the correct bits each round,
//!      until the consumer's precision is met (the unrolled ladder 6, 12, 24, 48, 96,
//!      192 covers backing words up to 128 bits).
//!   4. Near full width the true reciprocal no longer fits the word: its leading one
//!      becomes implicit (`highest_bit`), and up to three linear correction rounds
//!      `x ← x - (MulHi(x, d) + d)` grind out the last bits.
//!
//! Evaluation is *lazy*: [`Fract::reciprocal`] only snapshots the value. Multiplying the
//! carrier by a `Fract<I2, F2>` runs the iteration at exactly `I2 + F2` bits and folds
//! the operand in through one more high-half multiply. Precision is therefore chosen by
//! the consumer, not the producer.

use super::*;
use crate::underlying::Unsigned;

/// The deferred reciprocal of a nonzero fixed-point value. Created by
/// [`Fract::reciprocal`]; consumed by multiplying against a `Fract` (or converting with
/// [`Reciprocal::to_fract`], which multiplies by one).
///
/// The snapshot is plain data: the carrier is `Copy` and may be consumed any number of
/// times, at different target shapes.
#[derive(Clone, Copy, Debug)]
pub struct Reciprocal<Int: crate::Int> {
  raw: Int,
  frac_bits: u32,
}

/// What an evaluation produces: the reciprocal's mantissa, the right shift that scales a
/// product against it, and whether the mantissa's leading one overflowed the word and
/// became implicit.
struct Evaluated<U> {
  value: U,
  shift: u32,
  highest_bit: bool,
}

impl<
  const I: u32,
  const F: u32,
  Int: crate::Int,
> Fract<I, F, Int> {
  /// The reciprocal `1/self`, as a lazy carrier evaluated at the precision of whatever
  /// shape it is eventually multiplied into. Fails with [`Error::Domain`] on zero.
  ///
  /// The kernel operates on the raw bit pattern; it is meaningful for `|self| ≥ 1`.
  /// Reciprocals of smaller magnitudes come back through the compensating left shift at
  /// consumption time with fewer correct bits, and negative inputs follow the bit
  /// pattern rather than the sign.
  ///
  /// # Example
  ///
  /// ```
  /// # use fast_fract::q16_16;
  /// let a = q16_16::from_int(141).unwrap();
  /// let b = q16_16::from_int(47).unwrap();
  /// assert_eq!(b.reciprocal().unwrap() * a, q16_16::from_int(3).unwrap());
  /// ```
  pub fn reciprocal(self) -> Result<Reciprocal<Int>, Error> {
    if self.0 == Int::ZERO {
      return Err(Error::Domain);
    }
    Ok(Reciprocal { raw: self.0, frac_bits: Self::FRAC_BITS })
  }
}

/// Run the Newton–Raphson ladder until `precision` bits of `1/input` are correct.
/// `input` is the raw backing pattern (nonzero) and `frac_bits` its binary point.
fn evaluate<U: Unsigned>(input: U, frac_bits: u32, precision: u32) -> Evaluated<U> {
  let w = U::BITS;

  // SAFETY: a zero input is rejected at carrier construction.
  let norm = unsafe { input.leading_zeros_nonzero() };
  let mut shift = w + (w - norm) - frac_bits - 1;
  let input = input << norm;

  // A power of two: its reciprocal is exactly another power of two.
  if input << 1 == U::ZERO {
    return Evaluated { value: input, shift: shift - 1, highest_bit: false };
  }

  // 3-bit seed: 0b0111…1 - input.
  let top = U::ONE << (w - 1);
  let mut result = (!top).wrapping_sub(input);
  if precision <= 3 {
    return Evaluated { value: result, shift, highest_bit: false };
  }

  let mut current = 3;
  for target in [6u32, 12, 24, 48, 96, 192] {
    if target / 2 < w {
      result = result.mul_hi(result.mul_hi(input).wrapping_neg()) << 1;
      current = if target > w { w - 2 } else { target };
    }
    if current >= precision {
      // One last correction, folded into the return to spare a multiply.
      let value = result.wrapping_sub(result.mul_hi(input) << 1);
      return Evaluated { value, shift, highest_bit: false };
    }
  }

  // Past w - 2 bits the top bit of the true reciprocal is always set; shift it out and
  // keep it implicit, to be compensated by the consumer.
  debug_assert!(result >> (w - 1) == U::ONE);
  result = result << 1;
  current -= 1;
  shift += 1;
  result = result.wrapping_sub(U::of_u32(3));

  for _ in 0..3 {
    result = result.wrapping_sub(result.mul_hi(input).wrapping_add(input));
    current += 1;
    if current >= precision {
      break;
    }
  }
  Evaluated { value: result, shift, highest_bit: true }
}

impl<Int: crate::Int> Reciprocal<Int> {
  /// `rhs / v`, where `v` is the value this carrier was built from: evaluates at
  /// `I2 + F2` bits and folds `rhs` in. Fails with [`Error::Overflow`] if the quotient's
  /// integer part does not fit the destination shape.
  pub fn checked_mul<const I2: u32, const F2: u32>(
    &self,
    rhs: Fract<I2, F2, Int>,
  ) -> Result<Fract<I2, F2, Int>, Error> {
    let w = Int::BITS;
    let eval = evaluate(self.raw.as_unsigned(), self.frac_bits, Fract::<I2, F2, Int>::BITS);
    let b = rhs.to_bits().as_unsigned();

    let raw = if !eval.highest_bit {
      eval.value.mul_shr(b, eval.shift)
    } else if eval.shift >= w {
      // The implicit leading one contributes `rhs` itself, one word up.
      eval.value.mul_hi(b).scaled_add(b, eval.shift - w)
    } else {
      eval.value.mul_hi(b).wrapping_add(b) << (w - eval.shift)
    };
    Fract::from_bits(Int::of_unsigned(raw))
  }

  /// Materialize `1/v` in the given shape: the carrier multiplied by one.
  pub fn to_fract<const I2: u32, const F2: u32>(&self) -> Result<Fract<I2, F2, Int>, Error> {
    self.checked_mul(Fract::<I2, F2, Int>::from_int(Int::ONE)?)
  }
}

impl<
  const I: u32,
  const F: u32,
  Int: crate::Int,
> core::ops::Mul<Fract<I, F, Int>> for Reciprocal<Int> {
  type Output = Fract<I, F, Int>;

  #[track_caller]
  fn mul(self, rhs: Fract<I, F, Int>) -> Fract<I, F, Int> {
    match self.checked_mul(rhs) {
      Ok(result) => result,
      Err(_) => panic!("reciprocal product overflows the destination shape"),
    }
  }
}
