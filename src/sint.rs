//! Author --- DMorgan
//! Last Moddified --- 2026-10-19

use crate::{uint::UInt, FromIntError, DivideByZeroError,};
use alloc::vec::Vec;
use core::{
  fmt,
  ops::{
    Neg,
    Rem, RemAssign,
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
  },
  cmp::Ordering,
  convert::TryFrom,
};

mod serde;

//Values are kept in sign-magnitude form; zero is always positive.

/// The sign of a `BigInt`.
#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug,)]
pub enum Sign {
  /// Zero or greater.
  Positive,
  /// Less than zero.
  Negative,
}

impl Default for Sign {
  #[inline]
  fn default() -> Self { Sign::Positive }
}

impl Neg for Sign {
  type Output = Self;

  fn neg(self,) -> Self::Output {
    match self {
      Sign::Positive => Sign::Negative,
      Sign::Negative => Sign::Positive,
    }
  }
}

impl Mul for Sign {
  type Output = Self;

  #[inline]
  fn mul(self, rhs: Self,) -> Self::Output { if self == rhs { Sign::Positive } else { Sign::Negative } }
}

/// A signed integer.
///
/// The magnitude is stored as limbs of [`RADIX_BITS`](crate::RADIX_BITS) bits, least
/// significant first.
#[derive(PartialEq, Eq, Clone, Hash, Default,)]
pub struct BigInt {
  pub(crate) sign: Sign,
  pub(crate) mag: UInt,
}

impl BigInt {
  /// A zero `BigInt`.
  pub const ZERO: Self = BigInt { sign: Sign::Positive, mag: UInt::ZERO, };

  /// Creates a new `BigInt` from its parts, restoring the normal form.
  pub(crate) fn new(sign: Sign, mag: UInt,) -> Self {
    let mut temp = BigInt { sign, mag, };

    temp.trim(); temp
  }
  /// Creates a `BigInt` from little endian limbs.
  ///
  /// Each limb is masked to [`RADIX_BITS`](crate::RADIX_BITS) bits.
  ///
  /// # Params
  ///
  /// sign --- The sign of the value.
  /// limbs --- The limbs of the magnitude, least significant first.
  pub fn from_limbs(sign: Sign, limbs: Vec<u32>,) -> Self { BigInt::new(sign, UInt::new(limbs,),) }
  /// Drops any high zero limbs and clears the sign of zero.
  fn trim(&mut self,) -> &mut Self {
    self.mag.trim();
    if self.mag.is_zero() { self.sign = Sign::Positive }

    self
  }
  /// The sign of `self`.
  #[inline]
  pub fn sign(&self,) -> Sign { self.sign }
  /// Returns a value representing the sign of `self`.
  ///
  /// * `0` if the number is zero
  /// * `1` if the number is positive
  /// * `-1` if the number is negative
  pub fn signum(&self,) -> i8 {
    if self.mag.is_zero() { 0 }
    else if self.sign == Sign::Negative { -1 }
    else { 1 }
  }
  /// Returns `true` if `self` is zero.
  #[inline]
  pub fn is_zero(&self,) -> bool { self.mag.is_zero() }
  /// Returns `true` if `self` is less than zero.
  #[inline]
  pub fn is_negative(&self,) -> bool { self.sign == Sign::Negative }
  /// The absolute value of `self`.
  pub fn abs(&self,) -> Self { BigInt { sign: Sign::Positive, mag: self.mag.clone(), } }
  /// The number of significant bits in the magnitude of `self`.
  #[inline]
  pub fn bits(&self,) -> usize { self.mag.bits() }
  /// The number of limbs in the magnitude of `self`.
  #[inline]
  pub fn limb_len(&self,) -> usize { self.mag.0.len() }
  /// Removes and returns the least significant limb, dividing `self` by the radix.
  ///
  /// Returns `0` if `self` is zero.
  pub fn shift_limb(&mut self,) -> u32 {
    let limb = self.mag.shift_limb();

    self.trim(); limb
  }
  /// Inserts `limb` as the least significant limb, multiplying `self` by the radix
  /// first.
  ///
  /// `limb` is masked to [`RADIX_BITS`](crate::RADIX_BITS) bits.
  pub fn unshift_limb(&mut self, limb: u32,) -> &mut Self {
    self.mag.unshift_limb(limb,);

    self.trim()
  }
  /// Calculates the `quotient` and `remainder` of `self / divisor`.
  ///
  /// The quotient is truncated towards zero and the remainder keeps the sign of `self`,
  /// so `-7 / 3 == -2` and `-7 % 3 == -1`.
  ///
  /// # Params
  ///
  /// divisor --- The right hand side of the division.
  pub fn divmod(&self, divisor: &BigInt,) -> Result<(BigInt, BigInt,), DivideByZeroError> {
    if divisor.is_zero() { return Err(DivideByZeroError) }

    let (quotient, remainder,) = self.mag.div_rem(&divisor.mag,);

    Ok((BigInt::new(self.sign * divisor.sign, quotient,), BigInt::new(self.sign, remainder,),))
  }
  /// Calculates `self / divisor`, returning `None` if `divisor` is zero.
  pub fn checked_div(&self, divisor: &BigInt,) -> Option<BigInt> {
    self.divmod(divisor,).ok().map(|(quotient, _,),| quotient,)
  }
  /// Calculates `self % divisor`, returning `None` if `divisor` is zero.
  pub fn checked_rem(&self, divisor: &BigInt,) -> Option<BigInt> {
    self.divmod(divisor,).ok().map(|(_, remainder,),| remainder,)
  }
  /// Adds `rhs` to the magnitude of `self`.
  fn add_magnitude(&mut self, rhs: &UInt,) { self.mag += rhs }
  /// Subtracts `rhs` from the magnitude of `self`, flipping the sign if `rhs` is larger.
  fn sub_magnitude(&mut self, rhs: &UInt,) {
    if self.mag >= *rhs { self.mag -= rhs }
    else {
      self.mag = rhs - &self.mag;
      self.sign = -self.sign;
    }

    self.trim();
  }
}

mod cmp {
  use super::*;

  impl Ord for BigInt {
    fn cmp(&self, rhs: &Self,) -> Ordering {
      match (self.sign, rhs.sign,) {
        (Sign::Positive, Sign::Negative,) => Ordering::Greater,
        (Sign::Negative, Sign::Positive,) => Ordering::Less,
        (Sign::Positive, Sign::Positive,) => self.mag.cmp(&rhs.mag,),
        //The larger magnitude is the smaller value.
        (Sign::Negative, Sign::Negative,) => rhs.mag.cmp(&self.mag,),
      }
    }
  }

  impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, rhs: &Self,) -> Option<Ordering> { Some(self.cmp(rhs,)) }
  }

  impl PartialEq<i64> for BigInt {
    fn eq(&self, rhs: &i64,) -> bool { *self == BigInt::from(*rhs,) }
  }

  impl PartialOrd<i64> for BigInt {
    fn partial_cmp(&self, rhs: &i64,) -> Option<Ordering> { self.partial_cmp(&BigInt::from(*rhs,),) }
  }

}

impl Neg for BigInt {
  type Output = Self;

  fn neg(mut self,) -> Self::Output {
    //Zero stays positive.
    if !self.is_zero() { self.sign = -self.sign }

    self
  }
}

impl Neg for &'_ BigInt {
  type Output = BigInt;

  #[inline]
  fn neg(self,) -> Self::Output { -self.clone() }
}

mod add {
  use super::*;

  impl<'a,> AddAssign<&'a BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &'a BigInt,) {
      //If the signs are equal the magnitudes are additive.
      if self.sign == rhs.sign { self.add_magnitude(&rhs.mag,) }
      else { self.sub_magnitude(&rhs.mag,) }
    }
  }

  impl AddAssign<BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, rhs: BigInt,) { *self += &rhs }
  }

  impl AddAssign<i64> for BigInt {
    fn add_assign(&mut self, rhs: i64,) { *self += &BigInt::from(rhs,) }
  }

  impl<Rhs,> Add<Rhs,> for BigInt
    where BigInt: AddAssign<Rhs>, {
    type Output = BigInt;

    fn add(mut self, rhs: Rhs,) -> Self::Output { self += rhs; self }
  }

  impl<Rhs,> Add<Rhs,> for &'_ BigInt
    where BigInt: AddAssign<Rhs>, {
    type Output = BigInt;

    fn add(self, rhs: Rhs,) -> Self::Output { self.clone() + rhs }
  }

}

mod sub {
  use super::*;

  impl<'a,> SubAssign<&'a BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &'a BigInt,) {
      //If the signs differ the magnitudes are additive.
      if self.sign != rhs.sign { self.add_magnitude(&rhs.mag,) }
      else { self.sub_magnitude(&rhs.mag,) }
    }
  }

  impl SubAssign<BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, rhs: BigInt,) { *self -= &rhs }
  }

  impl SubAssign<i64> for BigInt {
    fn sub_assign(&mut self, rhs: i64,) { *self -= &BigInt::from(rhs,) }
  }

  impl<Rhs,> Sub<Rhs,> for BigInt
    where BigInt: SubAssign<Rhs>, {
    type Output = BigInt;

    fn sub(mut self, rhs: Rhs,) -> Self::Output { self -= rhs; self }
  }

  impl<Rhs,> Sub<Rhs,> for &'_ BigInt
    where BigInt: SubAssign<Rhs>, {
    type Output = BigInt;

    fn sub(self, rhs: Rhs,) -> Self::Output { self.clone() - rhs }
  }

}

mod mul {
  use super::*;

  impl<'a,> MulAssign<&'a BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &'a BigInt,) {
      let mag = &self.mag * &rhs.mag;

      *self = BigInt::new(self.sign * rhs.sign, mag,);
    }
  }

  impl MulAssign<BigInt> for BigInt {
    #[inline]
    fn mul_assign(&mut self, rhs: BigInt,) { *self *= &rhs }
  }

  /// Multiplication by a scalar runs in a single pass over the limbs.
  impl MulAssign<i32> for BigInt {
    fn mul_assign(&mut self, rhs: i32,) {
      if rhs < 0 { self.sign = -self.sign }
      self.mag *= rhs.unsigned_abs();

      self.trim();
    }
  }

  impl<Rhs,> Mul<Rhs,> for BigInt
    where BigInt: MulAssign<Rhs>, {
    type Output = BigInt;

    fn mul(mut self, rhs: Rhs,) -> Self::Output { self *= rhs; self }
  }

  impl<Rhs,> Mul<Rhs,> for &'_ BigInt
    where BigInt: MulAssign<Rhs>, {
    type Output = BigInt;

    fn mul(self, rhs: Rhs,) -> Self::Output { self.clone() * rhs }
  }

}

mod div {
  use super::*;

  impl<'a,> DivAssign<&'a BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &'a BigInt,) {
      match self.divmod(rhs,) {
        Ok((quotient, _,)) => *self = quotient,
        Err(e) => panic!("{}", e,),
      }
    }
  }

  impl DivAssign<BigInt> for BigInt {
    #[inline]
    fn div_assign(&mut self, rhs: BigInt,) { *self /= &rhs }
  }

  /// Division by a scalar runs in a single pass over the limbs.
  impl DivAssign<i32> for BigInt {
    fn div_assign(&mut self, rhs: i32,) {
      assert!(rhs != 0, "{}", DivideByZeroError,);

      if rhs < 0 { self.sign = -self.sign }
      self.mag.div_rem_small(rhs.unsigned_abs(),);

      self.trim();
    }
  }

  impl<Rhs,> Div<Rhs,> for BigInt
    where BigInt: DivAssign<Rhs>, {
    type Output = BigInt;

    fn div(mut self, rhs: Rhs,) -> Self::Output { self /= rhs; self }
  }

  impl<Rhs,> Div<Rhs,> for &'_ BigInt
    where BigInt: DivAssign<Rhs>, {
    type Output = BigInt;

    fn div(self, rhs: Rhs,) -> Self::Output { self.clone() / rhs }
  }

}

mod rem {
  use super::*;

  impl<'a,> RemAssign<&'a BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &'a BigInt,) {
      match self.divmod(rhs,) {
        Ok((_, remainder,)) => *self = remainder,
        Err(e) => panic!("{}", e,),
      }
    }
  }

  impl RemAssign<BigInt> for BigInt {
    #[inline]
    fn rem_assign(&mut self, rhs: BigInt,) { *self %= &rhs }
  }

  impl<'a,> Rem<&'a BigInt> for BigInt {
    type Output = BigInt;

    fn rem(mut self, rhs: &'a BigInt,) -> Self::Output { self %= rhs; self }
  }

  impl Rem<BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn rem(self, rhs: BigInt,) -> Self::Output { self % &rhs }
  }

  impl<'a,> Rem<&'a BigInt> for &'_ BigInt {
    type Output = BigInt;

    fn rem(self, rhs: &'a BigInt,) -> Self::Output { self.clone() % rhs }
  }

  impl Rem<BigInt> for &'_ BigInt {
    type Output = BigInt;

    #[inline]
    fn rem(self, rhs: BigInt,) -> Self::Output { self.clone() % &rhs }
  }

  /// The remainder of the magnitude of `self` after division by `rhs`.
  ///
  /// This never builds a quotient so it is cheaper than `%` with a `BigInt`.
  impl Rem<u64> for &'_ BigInt {
    type Output = u64;

    fn rem(self, rhs: u64,) -> Self::Output {
      assert!(rhs != 0, "{}", DivideByZeroError,);

      self.mag.rem_u64(rhs,)
    }
  }

  impl Rem<u64> for BigInt {
    type Output = u64;

    #[inline]
    fn rem(self, rhs: u64,) -> Self::Output { &self % rhs }
  }

}

mod shl {
  use super::*;

  /// Shifts `self` up by whole limbs, multiplying it by `RADIX^rhs`.
  impl ShlAssign<usize> for BigInt {
    fn shl_assign(&mut self, rhs: usize,) { self.mag <<= rhs }
  }

  impl<Rhs,> Shl<Rhs> for BigInt
    where BigInt: ShlAssign<Rhs>, {
    type Output = BigInt;

    fn shl(mut self, rhs: Rhs,) -> Self::Output { self <<= rhs; self }
  }

  impl<Rhs,> Shl<Rhs> for &'_ BigInt
    where BigInt: ShlAssign<Rhs>, {
    type Output = BigInt;

    fn shl(self, rhs: Rhs,) -> Self::Output { self.clone() << rhs }
  }

}

mod shr {
  use super::*;

  /// Shifts `self` down by whole limbs, dropping the low limbs of the magnitude.
  impl ShrAssign<usize> for BigInt {
    fn shr_assign(&mut self, rhs: usize,) {
      self.mag >>= rhs;

      self.trim();
    }
  }

  impl<Rhs,> Shr<Rhs> for BigInt
    where BigInt: ShrAssign<Rhs>, {
    type Output = BigInt;

    fn shr(mut self, rhs: Rhs,) -> Self::Output { self >>= rhs; self }
  }

  impl<Rhs,> Shr<Rhs> for &'_ BigInt
    where BigInt: ShrAssign<Rhs>, {
    type Output = BigInt;

    fn shr(self, rhs: Rhs,) -> Self::Output { self.clone() >> rhs }
  }

}

macro_rules! from_unsigned {
  ($($int:ty,)*) => {$(
    impl From<$int> for BigInt {
      #[inline]
      fn from(from: $int,) -> Self { BigInt { sign: Sign::Positive, mag: UInt::from_u128(from as u128,), } }
    }

    impl TryFrom<BigInt> for $int {
      type Error = FromIntError<BigInt,>;

      fn try_from(from: BigInt,) -> Result<Self, Self::Error> {
        if from.sign == Sign::Negative { return Err(FromIntError(from,)) }

        match from.mag.to_u128().and_then(|n,| <$int>::try_from(n,).ok(),) {
          Some(n) => Ok(n),
          None => Err(FromIntError(from,)),
        }
      }
    }
  )*};
}

macro_rules! from_signed {
  ($($int:ty,)*) => {$(
    impl From<$int> for BigInt {
      fn from(from: $int,) -> Self {
        let sign = if from < 0 { Sign::Negative } else { Sign::Positive };

        BigInt { sign, mag: UInt::from_u128(from.unsigned_abs() as u128,), }
      }
    }

    impl TryFrom<BigInt> for $int {
      type Error = FromIntError<BigInt,>;

      fn try_from(from: BigInt,) -> Result<Self, Self::Error> {
        let num = match (from.sign, from.mag.to_u128(),) {
          (Sign::Positive, Some(n),) => <$int>::try_from(n,).ok(),
          //`MIN` has a larger magnitude than `MAX`.
          (Sign::Negative, Some(n),) if n <= <$int>::MIN.unsigned_abs() as u128 => Some((n as $int).wrapping_neg(),),
          _ => None,
        };

        num.ok_or(FromIntError(from,),)
      }
    }
  )*};
}

from_unsigned!(u8, u16, u32, u64, u128, usize,);
from_signed!(i8, i16, i32, i64, i128, isize,);

impl fmt::Debug for BigInt {
  #[inline]
  fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result { fmt::Display::fmt(self, fmt,) }
}
