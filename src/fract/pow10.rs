use crate::underlying::{Sealed, Unsigned};

/// The power-of-ten tables backing decimal conversion, implemented for the backing types
/// that have a decimal form: `i32` and `i64`. (8-bit shapes hold at most two decimal
/// digits of fraction; no tables exist for them and the formatter is simply not offered
/// there.)
///
/// This is a *sealed* type.
pub trait Pow10: crate::Int where Self: 'static, <Self as Sealed>::Unsigned: 'static {
  /// Largest `k` with `10^k` representable: 9 for `i32`, 18 for `i64`.
  const MAX_LOG10: u32;

  /// `POW10[k] = 10^k`.
  const POW10: &'static [Self];

  /// `LOG10[k] = ⌊log10(2^k)⌋`, one entry per bit of the backing type.
  const LOG10: &'static [u32];

  /// `INV_POW10[k] = (m, e)` with the top bit of `m` set and `1/10^k = m >> (BITS + e)`.
  /// These are the "divisions in disguise": every decimal quotient in the crate is a
  /// high-half multiply against one of these mantissas.
  //
  // Values computed at 100-digit decimal precision; m = ⌊2^(BITS+e) / 10^k⌋ with e chosen
  // as the largest exponent keeping 2^e ≤ 10^k.
  const INV_POW10: &'static [(<Self as Sealed>::Unsigned, u32)];

  /// Compute `num / 10^exp`, scaled into a fixed point with `frac_bits` fractional bits
  /// and rounded half-up, without a division opcode. `num` must be a small positive
  /// integer (a decimal digit, in practice) and `exp ≥ 1`. Quotients below the
  /// representable range come back as zero, including when `exp` walks off the end of
  /// the table.
  fn div_pow10(num: u32, exp: u32, frac_bits: u32) -> Self {
    debug_assert!(num > 0);
    debug_assert!(exp > 0);
    let w = Self::BITS;
    if exp as usize >= Self::INV_POW10.len() {
      return Self::ZERO;
    }
    let (mantissa, extra_shift) = Self::INV_POW10[exp as usize];

    // Make room at the top of the mantissa for the multiplication by `num`, then one more
    // guard bit against the product's carry.
    let int_bits = 32 - num.leading_zeros();
    let mut value = mantissa >> int_bits;
    let mut value_shift = w + extra_shift - int_bits;
    value = value.wrapping_mul(Unsigned::of_u32(num));
    value = value >> 1;
    value_shift -= 1;

    if value_shift > frac_bits {
      let down = value_shift - frac_bits;
      if down > w {
        return Self::ZERO;
      }
      if down == w {
        // Only the round bit is left in range: the quotient is one ULP or nothing.
        return Self::of_unsigned(value >> (w - 1));
      }
      let round = Self::ONE.as_unsigned() << (down - 1);
      Self::of_unsigned(value.wrapping_add(round) >> down)
    } else {
      Self::of_unsigned(value << (frac_bits - value_shift))
    }
  }
}

impl Pow10 for i32 {
  const MAX_LOG10: u32 = 9;

  const POW10: &'static [i32] = &[
    1, 10, 100, 1000, 10000, 100000, 1000000, 10000000, 100000000, 1000000000,
  ];

  const LOG10: &'static [u32] = &[
    0, 0, 0, 0, 1, 1, 1, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6, 6, 7, 7, 7, 8, 8, 8, 9, 9,
  ];

  const INV_POW10: &'static [(u32, u32)] = &[
    (0xffffffff, 0),
    (0xcccccccc, 3),
    (0xa3d70a3d, 6),
    (0x83126e97, 9),
    (0xd1b71758, 13),
    (0xa7c5ac47, 16),
    (0x8637bd05, 19),
    (0xd6bf94d5, 23),
    (0xabcc7711, 26),
  ];
}

impl Pow10 for i64 {
  const MAX_LOG10: u32 = 18;

  const POW10: &'static [i64] = &[
    1,
    10,
    100,
    1000,
    10000,
    100000,
    1000000,
    10000000,
    100000000,
    1000000000,
    10000000000,
    100000000000,
    1000000000000,
    10000000000000,
    100000000000000,
    1000000000000000,
    10000000000000000,
    100000000000000000,
    1000000000000000000,
  ];

  const LOG10: &'static [u32] = &[
    0, 0, 0, 0, 1, 1, 1, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6, 6, 7, 7, 7, 8, 8, 8, 9, 9,
    9, 9, 10, 10, 10, 11, 11, 11, 12, 12, 12, 12, 13, 13, 13, 14, 14, 14, 15, 15, 15, 15, 16, 16,
    16, 17, 17, 17, 18, 18, 18, 18,
  ];

  const INV_POW10: &'static [(u64, u32)] = &[
    (0xffffffffffffffff, 0),
    (0xcccccccccccccccc, 3),
    (0xa3d70a3d70a3d70a, 6),
    (0x83126e978d4fdf3b, 9),
    (0xd1b71758e219652b, 13),
    (0xa7c5ac471b478423, 16),
    (0x8637bd05af6c69b5, 19),
    (0xd6bf94d5e57a42bc, 23),
    (0xabcc77118461cefc, 26),
    (0x89705f4136b4a597, 29),
    (0xdbe6fecebdedd5be, 33),
    (0xafebff0bcb24aafe, 36),
    (0x8cbccc096f5088cb, 39),
    (0xe12e13424bb40e13, 43),
    (0xb424dc35095cd80f, 46),
    (0x901d7cf73ab0acd9, 49),
    (0xe69594bec44de15b, 53),
    (0xb877aa3236a4b449, 56),
    (0x9392ee8e921d5d07, 59),
  ];
}

#[cfg(test)]
mod tests {
  use super::*;
  use malachite::rational::Rational;
  use malachite::base::num::arithmetic::traits::PowerOf2;

  #[test]
  fn tables_are_consistent() {
    for (k, &p) in <i64 as Pow10>::POW10.iter().enumerate() {
      assert_eq!(p, 10i64.pow(k as u32));
    }
    for (k, &l) in <i64 as Pow10>::LOG10.iter().enumerate() {
      assert_eq!(l, if k == 0 { 0 } else { (2f64.powi(k as i32)).log10() as u32 });
    }
    // The inverse mantissas are normalized (top bit set) and the shift pairs them with
    // the right magnitude: m/2^(64+e) must be within one part in 2^63 of 1/10^k.
    for (k, &(m, e)) in <i64 as Pow10>::INV_POW10.iter().enumerate() {
      assert!(m >> 63 == 1);
      let approx = Rational::from(m) / Rational::power_of_2((64 + e) as u64);
      let exact = Rational::from_signeds(1, 10i64.pow(k as u32));
      let diff = exact - approx;
      assert!(diff >= Rational::from(0));
      assert!(diff < Rational::from_signeds(1, 10i64.pow(k as u32)) / Rational::power_of_2(62u64));
    }
    // The i32 tables are prefixes of the i64 ones at reduced width.
    for (k, &(m, e)) in <i32 as Pow10>::INV_POW10.iter().enumerate() {
      let (m64, e64) = <i64 as Pow10>::INV_POW10[k];
      assert_eq!(m as u64, m64 >> 32);
      assert_eq!(e, e64);
    }
  }

  #[test]
  fn div_pow10_exact_cases() {
    // 5/10 at 16 fractional bits is exactly half a unit.
    assert_eq!(<i32 as Pow10>::div_pow10(5, 1, 16), 1 << 15);
    assert_eq!(<i64 as Pow10>::div_pow10(5, 1, 44), 1 << 43);
    // 1/10 at 4 fractional bits rounds 1.6 sixteenths half-up to 2.
    assert_eq!(<i32 as Pow10>::div_pow10(1, 1, 4), 2);
    // Far below the representable range.
    assert_eq!(<i32 as Pow10>::div_pow10(1, 8, 4), 0);
    // Off the table entirely.
    assert_eq!(<i32 as Pow10>::div_pow10(5, 9, 16), 0);
    assert_eq!(<i32 as Pow10>::div_pow10(5, 100, 16), 0);
  }

  #[test]
  fn div_pow10_is_within_one_ulp() {
    for exp in 1..=8u32 {
      for num in 1..=9u32 {
        for frac_bits in [4u32, 8, 16, 24, 31] {
          let got = <i32 as Pow10>::div_pow10(num, exp, frac_bits);
          let exact = Rational::from_signeds(num as i32, <i32 as Pow10>::POW10[exp as usize])
            * Rational::power_of_2(frac_bits as u64);
          let diff = Rational::from(got) - exact;
          assert!(diff < Rational::from(1), "{num}e-{exp} at {frac_bits}");
          assert!(diff > -Rational::from(1), "{num}e-{exp} at {frac_bits}");
        }
      }
    }
    for exp in 1..=18u32 {
      for num in 1..=9u32 {
        for frac_bits in [16u32, 32, 44, 63] {
          let got = <i64 as Pow10>::div_pow10(num, exp, frac_bits);
          let exact = Rational::from_signeds(num as i64, <i64 as Pow10>::POW10[exp as usize])
            * Rational::power_of_2(frac_bits as u64);
          let diff = Rational::from(got) - exact;
          assert!(diff < Rational::from(1), "{num}e-{exp} at {frac_bits}");
          assert!(diff > -Rational::from(1), "{num}e-{exp} at {frac_bits}");
        }
      }
    }
  }
}
