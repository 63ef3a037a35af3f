use super::Int;

/// One width-dispatch line of [`const_i128_as_int`].
macro_rules! const_as_line {
  ($x:ident, $u:ty) => {
    if const { U::BITS == <$u>::BITS } {
      let u = $x as $u;
      // SAFETY: `U` is guaranteed to be an `iX` primitive, and the width check above means
      // `$u` *is* `U`; the transmute_copy is a no-op.
      return unsafe { ::core::mem::transmute_copy::<$u, U>(&u) };
    }
  }
}

/// A type-generic and `const` version of the keyword `as`, narrowing an `i128` to any
/// [`Int`]. Trait methods can't be `const`, so associated constants (which need to build
/// e.g. `1 << (I + F - 1)` at compile time) go through this instead.
pub(crate) const fn const_i128_as_int<U: Int>(x: i128) -> U {
  const_as_line!(x, i8);
  const_as_line!(x, i16);
  const_as_line!(x, i32);
  const_as_line!(x, i64);
  const_as_line!(x, i128);
  unreachable!() // cannot be const { unreachable!() }
}

/// The runtime equivalent of `x as U` between any two [`Int`]s (truncating), routed
/// through `i128` — the widest member, so no value is disturbed on the way up.
#[inline]
pub(crate) fn cast<T: Int, U: Int>(x: T) -> U {
  U::of_i128(x.into_i128())
}
