//! Defines arbitrary precision signed integers.
//!
//! Values are stored in sign-magnitude form with the magnitude split into limbs of
//! [`RADIX_BITS`] bits, least significant limb first.
//!
//! ```
//! use limb_int::BigInt;
//!
//! let a = "262019165839795466636015683089358648091".parse::<BigInt>().unwrap();
//! let b = BigInt::from_str_radix("C51F0E45981B5BACA24281DB78E3F31B", 16,).unwrap();
//!
//! assert_eq!((a + b).to_string(), "524038331679590933272031366178717296182");
//! ```
//!
//! Author --- DMorgan
//! Last Moddified --- 2026-10-19

#![no_std]
#![deny(missing_docs,)]

#[macro_use]
extern crate alloc;

use core::fmt;

mod uint;
pub mod sint;
pub mod radix;

pub use self::{sint::{BigInt, Sign,}, radix::Radix,};

/// The number of bits held by a single limb.
pub const RADIX_BITS: u32 = 30;
/// The base of a single limb.
pub const RADIX: u32 = 1 << RADIX_BITS;
/// The mask which keeps a value within a single limb.
pub const LIMB_MASK: u32 = RADIX - 1;

/// The error returned when trying to convert a big int into another type.
#[derive(Clone, PartialEq, Eq,)]
pub struct FromIntError<N,>(pub(crate) N,);

impl<N,> FromIntError<N,> {
  /// Unwraps the number inside the error.
  #[inline]
  pub fn into_inner(self,) -> N { self.0 }
}

impl<N,> fmt::Debug for FromIntError<N,>
  where N: fmt::Debug, {
  #[inline]
  fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result { write!(fmt, "FromIntError({:?})", self.0,) }
}

impl<N,> fmt::Display for FromIntError<N,>
  where N: fmt::Display, {
  fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
    write!(fmt, "`{}` is out of range for the target integer type", self.0,)
  }
}

impl<N,> core::error::Error for FromIntError<N,>
  where N: fmt::Debug + fmt::Display, {}

/// The cause of a failed parse.
#[derive(PartialEq, Eq, Clone, Copy, Debug,)]
pub enum IntErrorKind {
  /// There were no digits to parse.
  Empty,
  /// A character outside of the alphabet of the radix was found.
  InvalidDigit,
  /// The requested radix is not one of `2`, `8`, `10` or `16`.
  InvalidRadix,
}

/// An error encountered while parsing a string.
#[derive(PartialEq, Eq, Clone, Debug,)]
pub struct ParseIntError(pub(crate) IntErrorKind,);

impl ParseIntError {
  /// The detailed cause for this error.
  #[inline]
  pub const fn kind(&self,) -> &IntErrorKind { &self.0 }
}

impl fmt::Display for ParseIntError {
  fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
    let description = match self.0 {
      IntErrorKind::Empty => "cannot parse integer from empty string",
      IntErrorKind::InvalidDigit => "invalid digit found in string",
      IntErrorKind::InvalidRadix => "radix must be one of 2, 8, 10 or 16",
    };

    fmt.write_str(description,)
  }
}

impl core::error::Error for ParseIntError {}

impl From<RadixError> for ParseIntError {
  #[inline]
  fn from(_: RadixError,) -> Self { ParseIntError(IntErrorKind::InvalidRadix,) }
}

/// The error returned when a radix outside of `2`, `8`, `10` and `16` is requested.
#[derive(PartialEq, Eq, Clone, Copy, Debug,)]
pub struct RadixError(pub(crate) u32,);

impl RadixError {
  /// The radix which was rejected.
  #[inline]
  pub const fn radix(&self,) -> u32 { self.0 }
}

impl fmt::Display for RadixError {
  fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
    write!(fmt, "unsupported radix `{}`, expected one of 2, 8, 10 or 16", self.0,)
  }
}

impl core::error::Error for RadixError {}

/// The error returned when dividing by zero.
#[derive(PartialEq, Eq, Clone, Copy, Debug,)]
pub struct DivideByZeroError;

impl fmt::Display for DivideByZeroError {
  #[inline]
  fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result { fmt.write_str("attempt to divide by zero",) }
}

impl core::error::Error for DivideByZeroError {}
