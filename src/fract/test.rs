use super::*;
use crate::underlying::cast;
use proptest::prelude::*;

impl<
  const I: u32,
  const F: u32,
  Int: crate::Int,
> Fract<I, F, Int> {
  /// A [proptest Strategy](proptest::strategy::Strategy) yielding every representable
  /// value of this shape.
  pub(crate) fn cases_proptest() -> impl Strategy<Value = Self> {
    let limit = 1i128 << (Self::BITS - 1);
    (-limit..limit).prop_map(|bits| Self::from_bits_unchecked(cast(bits)))
  }

  /// As [`Self::cases_proptest`], staying one integer unit away from the ends of the
  /// range, where the decimal formatter's half-up pre-add would wrap.
  pub(crate) fn cases_proptest_away_from_limits() -> impl Strategy<Value = Self> {
    let limit = (1i128 << (Self::BITS - 1)) - (1i128 << Self::FRAC_BITS);
    (-limit..limit).prop_map(|bits| Self::from_bits_unchecked(cast(bits)))
  }
}
