#![cfg_attr(not(test), no_std)]
//! This crate provides a correct, clean, and 🚀 *fast* fixed-point arithmetic library with
//! compile-time precision parameters and **no hardware division** anywhere in its kernels.
//!
//! # Introduction
//!
//! A fixed-point number `Fract<I, F>` represents a real number as an integer scaled by a
//! constant power of two: `I` bits of signed integer part and `F` bits of fractional part,
//! stored in the fastest machine integer that holds `I + F` bits. Fixed point is the format
//! of choice wherever an FPU is missing, slow, or non-deterministic: microcontrollers, DSP
//! inner loops, deterministic simulation, financial bit-exactness.
//!
//! The interesting parts of this crate are the three numeric kernels at its heart:
//!
//!   - a **division-free reciprocal** ([`Fract::reciprocal`]): a Newton–Raphson iteration
//!     seeded from a count-leading-zeros normalization, evaluated lazily at the precision
//!     its consumer actually needs;
//!   - a **digit-by-digit square root** ([`Fract::sqrt`], [`Fract::sqrt_fast`]), bit-exact
//!     at full or half precision;
//!   - an **exact decimal converter** ([`Fract::to_decimal`], [`Fract::from_decimal`])
//!     driven by a precomputed table of scaled reciprocal powers of ten, so that not even
//!     string formatting needs a division opcode.
//!
//! # Usage
//!
//! ```
//! // Use one of the standard shapes, or name your own.
//! use fast_fract::{Fract, q16_16};
//! type Metres = Fract<8, 24, i32>;  // 8 integer bits, 24 fractional bits
//!
//! // Construct from integers, floats, or decimal strings; all checked.
//! let a = q16_16::from_int(141).unwrap();
//! let b = q16_16::from_f64(2.75).unwrap();
//! let c: q16_16 = "123.339981068".parse().unwrap();
//!
//! // Arithmetic with the usual operators (panicking on overflow, like the
//! // built-in integers), or with the `checked_*` methods.
//! assert_eq!((a + b).floor(), 143);
//! assert!(q16_16::from_int(40_000).is_err());
//!
//! // The division-free kernels.
//! let third = q16_16::from_int(3).unwrap().reciprocal().unwrap();
//! assert_eq!((third * a).to_decimal(None, false), "47.0");
//! assert_eq!(c.sqrt().unwrap().floor(), 11);
//! ```
//!
//! # Performance
//!
//! Every operation lowers to shifts, adds, and (for the three kernels) a handful of
//! high-half multiplications. There is no division instruction, no lookup ROM beyond the
//! 19-entry power-of-ten table, and no allocation outside of decimal formatting.

extern crate alloc;

mod fract;
mod underlying;

pub use fract::{Error, Fract, Pow10, Reciprocal};
pub use underlying::{Int, Select, Widen, Width};

/// 8-bit shape with a sign bit only: values in `[-1, 1)` at 1/128 steps.
#[allow(non_camel_case_types)]
pub type q1_7 = Fract<1, 7, i8>;

/// 8-bit shape with two integer bits: values in `[-2, 2)`.
#[allow(non_camel_case_types)]
pub type q2_6 = Fract<2, 6, i8>;

/// Degenerate 8-bit shape with no fractional part (a plain `i8` in disguise).
#[allow(non_camel_case_types)]
pub type q8_0 = Fract<8, 0, i8>;

/// 16 logical bits, split evenly.
#[allow(non_camel_case_types)]
pub type q8_8 = Fract<8, 8, i32>;

/// 16 logical bits, 12 of them fractional (the half-precision shape of [`q8_24`]).
#[allow(non_camel_case_types)]
pub type q4_12 = Fract<4, 12, i32>;

/// The classic 32-bit split.
#[allow(non_camel_case_types)]
pub type q16_16 = Fract<16, 16, i32>;

/// 32 bits biased toward fractional precision.
#[allow(non_camel_case_types)]
pub type q8_24 = Fract<8, 24, i32>;

/// The classic 64-bit split.
#[allow(non_camel_case_types)]
pub type q32_32 = Fract<32, 32, i64>;

/// 64 bits biased toward fractional precision.
#[allow(non_camel_case_types)]
pub type q20_44 = Fract<20, 44, i64>;

/// How many cases proptest-based tests run per property.
#[cfg(test)]
pub(crate) const PROPTEST_CASES: u32 = 1024;
