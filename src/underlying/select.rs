//! Width-driven backing-type selection. `Width<N>` is a type-level label for "a field of
//! `N` bits"; its [`Select`] impl names the machine types that hold it.
//!
//! Two tables exist on purpose. The *fastest* table skips the 16-bit slot — 16-bit
//! arithmetic is slow on the common desktop targets, so anything from 9 to 32 bits rides
//! in an `i32`. The *smallest* table keeps it, and is what `floor`/`ceil` return so that
//! the narrow result doesn't drag the full backing width around.

use super::Int;

/// Type-level label for an `N`-bit field. See [`Select`].
pub struct Width<const N: u32>;

/// The backing-type tables, implemented for every `Width<N>` with `N` in `1..=64`.
pub trait Select {
  /// The fastest machine integer holding `N` bits.
  type Fastest: Int;
  /// The smallest machine integer holding `N` bits.
  type Smallest: Int;
}

macro_rules! impl_select {
  ($fastest:ty, $smallest:ty: $($n:literal)*) => { $(
    impl Select for Width<$n> {
      type Fastest = $fastest;
      type Smallest = $smallest;
    }
  )* }
}

impl_select!{i8, i8: 1 2 3 4 5 6 7 8}
impl_select!{i32, i16: 9 10 11 12 13 14 15 16}
impl_select!{i32, i32: 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32}
impl_select!{i64, i64:
  33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48
  49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64
}

/// The width of [`Select::Fastest`] for an `N`-bit field, as a `const fn` so the
/// fixed-point type can assert its backing choice at compile time.
pub(crate) const fn fastest_width(bits: u32) -> u32 {
  match bits {
    1..=8 => 8,
    9..=32 => 32,
    33..=64 => 64,
    _ => panic!("a fixed-point value must have between 1 and 64 bits"),
  }
}
