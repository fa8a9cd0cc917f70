//! Conversion between `BigInt`s and text in bases `2`, `8`, `10` and `16`.
//!
//! Author --- DMorgan
//! Last Moddified --- 2026-10-19

use crate::{BigInt, Sign, uint::UInt, IntErrorKind, ParseIntError, RadixError, RADIX_BITS,};
use alloc::{vec::Vec, string::String,};
use core::{fmt, convert::TryFrom, str::FromStr,};


/// The digit table used when rendering.
const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// A base which a `BigInt` can be parsed from or rendered in.
#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug,)]
pub enum Radix {
  /// Base `2`.
  Binary,
  /// Base `8`.
  Octal,
  /// Base `10`.
  Decimal,
  /// Base `16`, parsed in either case and rendered in upper case.
  Hexadecimal,
}

impl Radix {
  /// The numeric base.
  pub const fn get(self,) -> u32 {
    match self {
      Radix::Binary => 2,
      Radix::Octal => 8,
      Radix::Decimal => 10,
      Radix::Hexadecimal => 16,
    }
  }
  /// The width in bits of a single digit, if the base is a power of two.
  const fn digit_bits(self,) -> Option<u32> {
    match self {
      Radix::Binary => Some(1,),
      Radix::Octal => Some(3,),
      Radix::Hexadecimal => Some(4,),
      Radix::Decimal => None,
    }
  }
  /// The value of `c` as a digit in this base.
  fn digit(self, c: char,) -> Result<u32, ParseIntError> {
    c.to_digit(self.get(),).ok_or(ParseIntError(IntErrorKind::InvalidDigit,),)
  }
}

impl Default for Radix {
  #[inline]
  fn default() -> Self { Radix::Decimal }
}

impl TryFrom<u32> for Radix {
  type Error = RadixError;

  fn try_from(from: u32,) -> Result<Self, Self::Error> {
    match from {
      2 => Ok(Radix::Binary),
      8 => Ok(Radix::Octal),
      10 => Ok(Radix::Decimal),
      16 => Ok(Radix::Hexadecimal),
      _ => Err(RadixError(from,)),
    }
  }
}

impl From<Radix> for u32 {
  #[inline]
  fn from(from: Radix,) -> Self { from.get() }
}

/// Parses `text` as a signed integer in `radix`.
///
/// Any number of leading `+` and `-` markers are accepted; each `-` flips the sign.
pub(crate) fn parse(text: &str, radix: Radix,) -> Result<BigInt, ParseIntError> {
  let digits = text.trim_start_matches(|c,| c == '+' || c == '-',);
  let negations = text[..text.len() - digits.len()].bytes().filter(|&b,| b == b'-',).count();
  let sign = if negations % 2 == 0 { Sign::Positive } else { Sign::Negative };

  if digits.is_empty() { return Err(ParseIntError(IntErrorKind::Empty,)) }

  let mag = match radix.digit_bits() {
    Some(bits) => parse_bits(digits, radix, bits,)?,
    None => parse_decimal(digits,)?,
  };

  Ok(BigInt::new(sign, mag,))
}

/// Accumulates decimal digits from the most significant end.
fn parse_decimal(digits: &str,) -> Result<UInt, ParseIntError> {
  digits.chars().try_fold(UInt::ZERO, |mut acc, c,| {
    let digit = Radix::Decimal.digit(c,)?;

    //Shift all of the previous digits by one decimal place for the next digit to come in.
    acc *= 10;
    acc += digit;

    Ok(acc)
  },)
}

/// Expands every digit into its `bits` wide binary group and packs the bits into limbs
/// from the least significant end.
fn parse_bits(digits: &str, radix: Radix, bits: u32,) -> Result<UInt, ParseIntError> {
  let mut limbs = Vec::with_capacity(digits.len() * bits as usize / RADIX_BITS as usize + 1,);
  let mut limb = 0u32;
  let mut filled = 0;

  for c in digits.chars().rev() {
    let digit = radix.digit(c,)?;

    for bit in 0..bits {
      limb |= ((digit >> bit) & 1) << filled;
      filled += 1;

      //The limb is full.
      if filled == RADIX_BITS {
        limbs.push(limb,);
        limb = 0;
        filled = 0;
      }
    }
  }
  limbs.push(limb,);

  Ok(UInt::new(limbs,))
}

/// Renders `mag` in `radix` without a sign.
pub(crate) fn render(mag: &UInt, radix: Radix,) -> String {
  //Handle the zero case.
  if mag.is_zero() { return String::from("0",) }

  match radix.digit_bits() {
    Some(bits) => render_bits(mag, bits,),
    None => render_decimal(mag,),
  }
}

/// Collects decimal digits by repeated division, least significant first.
fn render_decimal(mag: &UInt,) -> String {
  let mut num = mag.clone();
  let mut digits = Vec::new();
  while !num.is_zero() {
    let digit = num.div_rem_small(10,);

    digits.push(DIGITS[digit as usize],);
  }

  //Write the digits in the correct order.
  digits.iter().rev().map(|&d,| d as char,).collect()
}

/// Groups the significant bits of `mag` into `bits` wide windows from the least
/// significant end.
fn render_bits(mag: &UInt, bits: u32,) -> String {
  let bits = bits as usize;
  let total = mag.bits();
  let bit = |index: usize,| (mag.0[index / RADIX_BITS as usize] >> (index % RADIX_BITS as usize)) & 1;

  let mut digits = Vec::with_capacity(total / bits + 1,);
  for start in (0..total).step_by(bits,) {
    //The last window may be cut short by the leading bit.
    let digit = (start..usize::min(start + bits, total,))
      .fold(0, |digit, index,| digit | (bit(index,) << (index - start)),);

    digits.push(DIGITS[digit as usize],);
  }

  digits.iter().rev().map(|&d,| d as char,).collect()
}

impl BigInt {
  /// Parses `text` in the base `radix`.
  ///
  /// `radix` must be one of `2`, `8`, `10` or `16`.
  ///
  /// # Params
  ///
  /// text --- The digits to parse, optionally preceded by sign markers.
  /// radix --- The base of the digits.
  pub fn from_str_radix(text: &str, radix: u32,) -> Result<Self, ParseIntError> {
    parse(text, Radix::try_from(radix,)?,)
  }
  /// Parses `text` in the base `radix`.
  #[inline]
  pub fn parse_radix(text: &str, radix: Radix,) -> Result<Self, ParseIntError> { parse(text, radix,) }
  /// Renders `self` in the base `radix`.
  ///
  /// `radix` must be one of `2`, `8`, `10` or `16`.
  pub fn to_str_radix(&self, radix: u32,) -> Result<String, RadixError> {
    Radix::try_from(radix,).map(|radix,| self.to_string_radix(radix,),)
  }
  /// Renders `self` in the base `radix`, hexadecimal digits in upper case.
  pub fn to_string_radix(&self, radix: Radix,) -> String {
    let digits = render(&self.mag, radix,);

    if self.is_negative() { format!("-{}", digits,) } else { digits }
  }
  /// Reads a single whitespace delimited token from `input` and parses it in `radix`.
  ///
  /// Returns the value and the input remaining after the token.
  ///
  /// ```
  /// use limb_int::{BigInt, Radix,};
  ///
  /// let (num, rest,) = BigInt::read_token("  ff 10", Radix::Hexadecimal,).unwrap();
  /// assert_eq!(num, 255);
  /// assert_eq!(rest, " 10");
  /// ```
  pub fn read_token(input: &str, radix: Radix,) -> Result<(Self, &str,), ParseIntError> {
    let input = input.trim_start();
    let end = input.find(char::is_whitespace,).unwrap_or(input.len(),);
    let (token, rest,) = input.split_at(end,);

    parse(token, radix,).map(move |num,| (num, rest,),)
  }
  /// Formats `self` through `fmt`, honouring its sign, width and `#` flags.
  fn pad(&self, fmt: &mut fmt::Formatter, radix: Radix, prefix: &str, lower: bool,) -> fmt::Result {
    let mut digits = render(&self.mag, radix,);
    if lower { digits.make_ascii_lowercase() }

    fmt.pad_integral(!self.is_negative(), prefix, &digits,)
  }
}

impl FromStr for BigInt {
  type Err = ParseIntError;

  #[inline]
  fn from_str(s: &str,) -> Result<Self, Self::Err> { parse(s, Radix::Decimal,) }
}

impl fmt::Display for BigInt {
  #[inline]
  fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result { self.pad(fmt, Radix::Decimal, "", false,) }
}

impl fmt::Binary for BigInt {
  #[inline]
  fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result { self.pad(fmt, Radix::Binary, "0b", false,) }
}

impl fmt::Octal for BigInt {
  #[inline]
  fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result { self.pad(fmt, Radix::Octal, "0o", false,) }
}

impl fmt::LowerHex for BigInt {
  #[inline]
  fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result { self.pad(fmt, Radix::Hexadecimal, "0x", true,) }
}

impl fmt::UpperHex for BigInt {
  #[inline]
  fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result { self.pad(fmt, Radix::Hexadecimal, "0x", false,) }
}
