//! This module contains the implementations of the underlying machine-integer operations
//! that the fixed-point type is built on. They are hidden from the end-user, who only sees
//! the sealed [`Int`] trait, implemented for `i8`, `i16`, `i32`, `i64`, and `i128`.
//!
//! The split mirrors the two halves of the job:
//!
//!   - [`Sealed`]/[`Int`]: the signed types that back a fixed-point value (plus the bit-level
//!     predicates: overflow checks, range checks, bit length).
//!   - [`Unsigned`]: their unsigned companions, which carry the two workhorse kernels —
//!     [`Unsigned::mul_shr`] (the high half of a full-width product, at a chosen shift) and
//!     [`Unsigned::scaled_add`] (`(a + b) >> s` with no intermediate overflow). Everything
//!     division-free in the crate bottoms out in these two.

/// The trait for the machine integer types that can back a fixed-point value (only
/// satisfied by `i8`, `i16`, `i32`, `i64`, and `i128`).
///
/// This is a *sealed* type.
pub trait Int: Sealed {}

/// Actual operations implemented here.
pub trait Sealed:
  Copy + Clone +
  Eq + Ord +
  core::fmt::Debug +
  core::hash::Hash + Default +
  core::ops::Shl<u32, Output=Self> +
  core::ops::Shr<u32, Output=Self> +
  core::ops::BitAnd<Output=Self> +
  core::ops::BitOr<Output=Self> +
  core::ops::Not<Output=Self> +
{
  type Unsigned: Unsigned;

  const ZERO: Self;
  const ONE: Self;
  const MIN: Self;
  const MAX: Self;
  const BITS: u32;

  fn as_unsigned(self) -> Self::Unsigned;
  fn of_unsigned(x: Self::Unsigned) -> Self;

  fn into_i128(self) -> i128;

  /// The truncating counterpart of `x as iX` (not value-checked).
  fn of_i128(x: i128) -> Self;

  /// Position of the highest set bit, plus one; 0 for a zero input. For non-negative
  /// values this is the number of bits needed to write the value out.
  fn bit_len(self) -> u32;

  /// Whether `self` fits in a *signed* field of `bits` bits, i.e. is in
  /// `-2^(bits-1) .. 2^(bits-1) - 1`. Works for the whole-width case `bits == BITS`.
  fn fits_in(self, bits: u32) -> bool;

  /// Whether `self + other` would overflow the signed range.
  fn add_overflows(self, other: Self) -> bool;

  /// Whether `self - other` would overflow the signed range.
  fn sub_overflows(self, other: Self) -> bool;

  fn wrapping_add(self, other: Self) -> Self;
  fn wrapping_sub(self, other: Self) -> Self;
  fn wrapping_neg(self) -> Self;
  fn wrapping_abs(self) -> Self;
}

/// This trait models the unsigned counterpart of an [`Int`]. The high-half multiply and the
/// overflow-free scaled add both live here: they are defined on bit patterns, not on signed
/// values, and every caller converts through [`Sealed::as_unsigned`] first.
pub trait Unsigned:
  Copy + Clone +
  Eq + Ord +
  core::fmt::Debug + core::fmt::Display + core::fmt::LowerHex +
  core::ops::Shl<u32, Output=Self> +
  core::ops::Shr<u32, Output=Self> +
  core::ops::BitAnd<Output=Self> +
  core::ops::BitOr<Output=Self> +
  core::ops::Not<Output=Self> +
{
  const ZERO: Self;
  const ONE: Self;
  const BITS: u32;

  fn of_u32(x: u32) -> Self;
  fn as_u32(self) -> u32;

  /// Number of leading (most significant) 0 bits until the first 1.
  fn leading_zeros(self) -> u32;

  /// As [`Unsigned::leading_zeros`], but is undefined if `self` is zero.
  ///
  /// # Safety
  ///
  /// `self` must be nonzero, or calling this function is *undefined behaviour*.
  unsafe fn leading_zeros_nonzero(self) -> u32;

  fn wrapping_add(self, other: Self) -> Self;
  fn wrapping_sub(self, other: Self) -> Self;
  fn wrapping_neg(self) -> Self;
  fn wrapping_mul(self, other: Self) -> Self;

  /// `(self · other) >> shift`, where the product is taken at full double width. With
  /// `shift == BITS` this is exactly the high word of the product; the contract is
  /// `⌊self · other / 2^shift⌋` truncated to `BITS` bits, for any `shift < 2·BITS`.
  ///
  /// `u8`/`u16`/`u32` compute at the native double width. `u64` and `u128` have no wider
  /// machine type; they split each operand in half and recombine the four partial
  /// products, folding the low-half carries into the high word so the result stays exact
  /// to the last bit.
  fn mul_shr(self, other: Self, shift: u32) -> Self;

  /// `(self + other) >> shift`, computed as if the sum were taken in a wider type: the
  /// carry out of the top bit is not lost. Exact for `shift ≥ 1`; `shift == 0` degrades
  /// to a wrapping add.
  fn scaled_add(self, other: Self, shift: u32) -> Self;

  /// The high word of the full product, i.e. [`Unsigned::mul_shr`] at `shift == BITS`.
  #[inline]
  fn mul_hi(self, other: Self) -> Self {
    self.mul_shr(other, Self::BITS)
  }
}

/// This trait models the promotion of an [`Int`] to the type with twice its width
/// (e.g. `i32::Wide` = `i64`). The full-precision square root promotes through it;
/// `i64` relies on the native 128-bit integers. `i128` itself has no `Wide`, which is
/// fine: 128-bit backed shapes don't exist.
pub trait Widen: Int {
  type Wide: Int;

  fn widen(self) -> Self::Wide;
}

mod cast;
mod int;
mod select;
mod unsigned;

pub(crate) use cast::{cast, const_i128_as_int};
pub use select::{Select, Width};
pub(crate) use select::fastest_width;
