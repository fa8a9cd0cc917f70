//! The unsigned magnitude backing a `BigInt`.
//!
//! Author --- DMorgan
//! Last Moddified --- 2026-10-19

use crate::{RADIX, RADIX_BITS, LIMB_MASK,};
use alloc::vec::Vec;
use core::{
  ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
  },
  cmp::Ordering,
  iter,
};

mod tests;

//Limbs are little endian and every limb is less than `RADIX`; the highest limb is never zero.

/// An unsigned integer.
#[derive(Clone, PartialEq, Eq, Hash, Default, Debug,)]
pub(crate) struct UInt(pub(crate) Vec<u32>,);

impl UInt {
  /// A zero `UInt`.
  pub const ZERO: Self = UInt(Vec::new(),);

  /// Creates a new `UInt` from little endian limbs.
  ///
  /// Every limb is masked into range and the high zero limbs are dropped.
  pub fn new(mut limbs: Vec<u32>,) -> Self {
    for limb in limbs.iter_mut() { *limb &= LIMB_MASK }

    let mut num = UInt(limbs,);
    num.trim(); num
  }
  /// Splits `from` into limbs.
  pub fn from_u128(mut from: u128,) -> Self {
    let mut limbs = Vec::new();
    while from != 0 {
      limbs.push((from & LIMB_MASK as u128) as u32,);
      from >>= RADIX_BITS;
    }

    UInt(limbs,)
  }
  /// Recombines the limbs into a `u128` if the value fits.
  pub fn to_u128(&self,) -> Option<u128> {
    if self.bits() > 128 { return None }

    Some(self.0.iter().rev().fold(0u128, |acc, &limb,| (acc << RADIX_BITS) | limb as u128,),)
  }
  /// Drops the high zero limbs.
  pub fn trim(&mut self,) -> &mut Self {
    let zeros = self.0.iter().rev().take_while(|&&limb,| limb == 0,).count();
    let len = self.0.len() - zeros;

    self.0.truncate(len,); self
  }
  #[inline]
  pub fn is_zero(&self,) -> bool { self.0.is_empty() }
  /// The number of significant bits.
  pub fn bits(&self,) -> usize {
    match self.0.last() {
      None => 0,
      Some(&top) => (self.0.len() - 1) * RADIX_BITS as usize + (32 - top.leading_zeros()) as usize,
    }
  }
  /// Removes and returns the lowest limb.
  pub fn shift_limb(&mut self,) -> u32 {
    if self.is_zero() { return 0 }

    let limb = self.0.remove(0,);
    self.trim(); limb
  }
  /// Inserts `limb` as the new lowest limb.
  pub fn unshift_limb(&mut self, limb: u32,) {
    self.0.insert(0, limb & LIMB_MASK,);
    self.trim();
  }
  /// Divides `self` by `divisor` in place and returns the remainder.
  ///
  /// `divisor` must be non zero.
  pub fn div_rem_small(&mut self, divisor: u32,) -> u32 {
    debug_assert!(divisor != 0, "`lhs / rhs` requires `rhs` be non zero",);

    let divisor = divisor as u64;
    //Work down from the highest limb carrying the remainder into the next limb.
    let rem = self.0.iter_mut().rev().fold(0u64, move |rem, limb,| {
      let cur = *limb as u64 + (rem << RADIX_BITS);
      *limb = (cur / divisor) as u32;

      cur % divisor
    },);

    self.trim();
    rem as u32
  }
  /// Calculates `self % divisor` without building a quotient.
  ///
  /// `divisor` must be non zero.
  pub fn rem_u64(&self, divisor: u64,) -> u64 {
    let divisor = divisor as u128;

    self.0.iter().rev().fold(0u128, move |rem, &limb,| (limb as u128 + (rem << RADIX_BITS)) % divisor,) as u64
  }
  /// Calculates the `quotient` and `remainder` of `self / divisor`.
  ///
  /// `divisor` must be non zero.
  pub fn div_rem(&self, divisor: &UInt,) -> (UInt, UInt) {
    debug_assert!(!divisor.is_zero(), "`lhs / rhs` requires `rhs` be non zero",);

    //The divisor is too big to fit.
    if self < divisor { return (UInt::ZERO, self.clone(),) }
    //A single limb divisor only needs a single pass.
    if let [divisor,] = divisor.0[..] {
      let mut quotient = self.clone();
      let rem = quotient.div_rem_small(divisor,);

      return (quotient, UInt::from_u128(rem as u128,),)
    }

    //Scale both sides so the leading limb of the divisor is at least half the radix,
    //which keeps every digit estimate within two of the real digit.
    let norm = RADIX / (divisor.0[divisor.0.len() - 1] + 1);
    let dividend = self * norm;
    let divisor = divisor * norm;
    let len = divisor.0.len();
    let top = divisor.0[len - 1] as u64;

    let mut quotient = vec![0; dividend.0.len()];
    let mut remainder = UInt::ZERO;
    for (index, &limb,) in dividend.0.iter().enumerate().rev() {
      //Bring down the next limb.
      remainder <<= 1usize;
      remainder += limb;

      //Estimate the digit from the two leading limbs.
      let high = remainder.0.get(len,).copied().unwrap_or(0,) as u64;
      let low = remainder.0.get(len - 1,).copied().unwrap_or(0,) as u64;
      let mut digit = u64::min(((high << RADIX_BITS) | low) / top, LIMB_MASK as u64,) as u32;

      //The estimate is never too small; walk it down until it fits.
      let mut product = &divisor * digit;
      while product > remainder {
        product -= &divisor;
        digit -= 1;
      }

      remainder -= &product;
      quotient[index] = digit;
    }

    let mut quotient = UInt(quotient,);
    quotient.trim();
    //`norm` divides the remainder exactly.
    let _ = remainder.div_rem_small(norm,);

    (quotient, remainder,)
  }
  /// Adds the `rhs` limbs into `self`.
  fn add_limbs(&mut self, rhs: &[u32],) {
    if self.0.len() < rhs.len() { self.0.resize(rhs.len(), 0,) }

    let mut carry = 0;
    for (index, limb,) in self.0.iter_mut().enumerate() {
      let rhs = match rhs.get(index,) {
        Some(&rhs) => rhs,
        //Nothing left to carry.
        None if carry == 0 => break,
        None => 0,
      };

      let sum = *limb + rhs + carry;
      *limb = sum & LIMB_MASK;
      carry = sum >> RADIX_BITS;
    }
    if carry != 0 { self.0.push(carry,) }
  }
  /// Subtracts the `rhs` limbs from `self`.
  ///
  /// `rhs` must be less or equal to `self` in value.
  fn sub_limbs(&mut self, rhs: &[u32],) {
    let mut borrow = 0;
    for (index, limb,) in self.0.iter_mut().enumerate() {
      let rhs = match rhs.get(index,) {
        Some(&rhs) => rhs + borrow,
        //Nothing left to borrow.
        None if borrow == 0 => break,
        None => borrow,
      };

      if *limb >= rhs { *limb -= rhs; borrow = 0 }
      else { *limb = *limb + RADIX - rhs; borrow = 1 }
    }

    self.trim();
  }
}

impl Ord for UInt {
  fn cmp(&self, rhs: &Self,) -> Ordering {
    //The longest value has a greater magnitude.
    let cmp = self.0.len().cmp(&rhs.0.len(),);
    if cmp != Ordering::Equal { return cmp }

    //Compare from the highest limbs first.
    self.0.iter().rev().zip(rhs.0.iter().rev(),)
    .map(|(a, b,),| a.cmp(b,),)
    .find(|&c,| c != Ordering::Equal,)
    .unwrap_or(Ordering::Equal,)
  }
}

impl PartialOrd for UInt {
  #[inline]
  fn partial_cmp(&self, rhs: &Self,) -> Option<Ordering> { Some(self.cmp(rhs,)) }
}

impl<'a,> AddAssign<&'a UInt> for UInt {
  #[inline]
  fn add_assign(&mut self, rhs: &'a UInt,) { self.add_limbs(&rhs.0,) }
}

impl AddAssign<u32> for UInt {
  fn add_assign(&mut self, rhs: u32,) { *self += &UInt::from_u128(rhs as u128,) }
}

impl<'a,> Add<&'a UInt> for &'a UInt {
  type Output = UInt;

  fn add(self, rhs: &'a UInt,) -> Self::Output {
    let mut temp = self.clone();

    temp += rhs; temp
  }
}

impl<'a,> SubAssign<&'a UInt> for UInt {
  fn sub_assign(&mut self, rhs: &'a UInt,) {
    assert!(*self >= *rhs, "`lhs - rhs` requires `rhs` be smaller than `lhs`",);

    self.sub_limbs(&rhs.0,)
  }
}

impl<'a,> Sub<&'a UInt> for &'a UInt {
  type Output = UInt;

  fn sub(self, rhs: &'a UInt,) -> Self::Output {
    let mut temp = self.clone();

    temp -= rhs; temp
  }
}

impl MulAssign<u32> for UInt {
  fn mul_assign(&mut self, rhs: u32,) {
    //Multiplication by 0 or 1 shortcut.
    if rhs == 0 { return self.0.clear() }
    else if rhs == 1 { return }
    //Multiplying by the radix is a single limb shift.
    else if rhs == RADIX { return *self <<= 1usize }

    let rhs = rhs as u64;
    //Multiply all of the limbs and return the overflow.
    let mut carry = self.0.iter_mut().fold(0u64, move |carry, limb,| {
      let cur = *limb as u64 * rhs + carry;
      *limb = (cur & LIMB_MASK as u64) as u32;

      cur >> RADIX_BITS
    },);
    //Extend the value with the overflow.
    while carry != 0 {
      self.0.push((carry & LIMB_MASK as u64) as u32,);
      carry >>= RADIX_BITS;
    }
  }
}

impl<'a,> Mul<u32> for &'a UInt {
  type Output = UInt;

  fn mul(self, rhs: u32,) -> Self::Output {
    let mut temp = self.clone();

    temp *= rhs; temp
  }
}

impl<'a,> Mul<&'a UInt> for &'a UInt {
  type Output = UInt;

  fn mul(self, rhs: &'a UInt,) -> Self::Output {
    //Multiplying by zero.
    if self.is_zero() || rhs.is_zero() { return UInt::ZERO }

    let lhs = &self.0;
    let mut product = vec![0u32; lhs.len() + rhs.0.len()];
    //Accumulate `lhs` times each limb of `rhs`, shifted by the position of the limb.
    for (shift, &instances,) in rhs.0.iter().enumerate() {
      if instances == 0 { continue }

      let instances = instances as u64;
      let mut carry = 0u64;
      for (index, &limb,) in lhs.iter().enumerate() {
        let cur = product[shift + index] as u64 + limb as u64 * instances + carry;
        product[shift + index] = (cur & LIMB_MASK as u64) as u32;
        carry = cur >> RADIX_BITS;
      }
      //The carry is always less than a limb.
      product[shift + lhs.len()] = carry as u32;
    }

    let mut product = UInt(product,);
    product.trim();
    product
  }
}

impl ShlAssign<usize> for UInt {
  fn shl_assign(&mut self, rhs: usize,) {
    //Shifting zero or by zero has no effect.
    if rhs == 0 || self.is_zero() { return }

    self.0.splice(..0, iter::repeat(0,).take(rhs,),);
  }
}

impl<'a,> Shl<usize> for &'a UInt {
  type Output = UInt;

  fn shl(self, rhs: usize,) -> Self::Output {
    let mut temp = self.clone();

    temp <<= rhs; temp
  }
}

impl ShrAssign<usize> for UInt {
  fn shr_assign(&mut self, rhs: usize,) {
    //If all of the limbs will be shifted out simply clear the buffer.
    if rhs >= self.0.len() { return self.0.clear() }

    self.0.drain(..rhs,);
  }
}

impl<'a,> Shr<usize> for &'a UInt {
  type Output = UInt;

  fn shr(self, rhs: usize,) -> Self::Output {
    let mut temp = self.clone();

    temp >>= rhs; temp
  }
}
