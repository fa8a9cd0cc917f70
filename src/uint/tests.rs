//! Author --- DMorgan
//! Last Moddified --- 2026-10-19

#![cfg(test,)]

use super::*;

/// Builds a multi limb value with a known pattern.
fn pattern(len: usize, seed: u32,) -> UInt {
  let limbs = (0..len as u32).map(|i,| seed.wrapping_mul(2654435761,).wrapping_add(i.wrapping_mul(40503,),),).collect();

  UInt::new(limbs,)
}

#[allow(non_snake_case,)]
#[test]
fn test_UInt_convert() {
  assert_eq!(UInt::ZERO, UInt::from_u128(0,), "`convert 0` failed",);
  assert_eq!(UInt(vec![1,],), UInt::from_u128(1,), "`convert 1` failed",);
  assert_eq!(UInt(vec![0, 1,],), UInt::from_u128(1 << 30,), "`convert 2^30` failed",);
  assert_eq!(UInt(vec![LIMB_MASK,],), UInt::from_u128(LIMB_MASK as u128,), "`convert 2^30 - 1` failed",);
  assert_eq!(UInt(vec![0, 0, 1,],), UInt::from_u128(1 << 60,), "`convert 2^60` failed",);

  let pairs = (0u128..=1000).map(|n,| n * n * n * n * n * n * n * n * n * n * n * n,).map(|n,| (UInt::from_u128(n,), n,),);
  for (int, num,) in pairs {
    assert!(int.0.iter().all(|&limb,| limb < RADIX,), "Limb out of range for {}", num,);
    assert_eq!(int.to_u128(), Some(num,), "Conversion failed on {}", num,);
  }

  assert_eq!(UInt::from_u128(u128::MAX,).to_u128(), Some(u128::MAX,), "`convert u128::MAX` failed",);
  assert_eq!((&UInt::from_u128(u128::MAX,) * 2).to_u128(), None, "`convert 2^129` did not overflow",);
}

#[allow(non_snake_case,)]
#[test]
fn test_UInt_trim() {
  assert_eq!(UInt::new(vec![0, 0, 0,],), UInt::ZERO, "`trim [0, 0, 0]` failed",);
  assert_eq!(UInt::new(vec![5, 0, 7, 0, 0,],), UInt(vec![5, 0, 7,],), "`trim [5, 0, 7, 0, 0]` failed",);
  assert_eq!(UInt::new(vec![!0, RADIX,],), UInt(vec![LIMB_MASK,],), "`new` did not mask the limbs",);

  assert_eq!(UInt::ZERO.bits(), 0, "`bits 0` failed",);
  assert_eq!(UInt::from_u128(1,).bits(), 1, "`bits 1` failed",);
  assert_eq!(UInt::from_u128(1 << 30,).bits(), 31, "`bits 2^30` failed",);
  assert_eq!(UInt::from_u128(u128::MAX,).bits(), 128, "`bits u128::MAX` failed",);
}

#[allow(non_snake_case,)]
#[test]
fn test_UInt_cmp() {
  let small = UInt(vec![LIMB_MASK, LIMB_MASK,],);
  let large = UInt(vec![0, 0, 1,],);

  assert!(small < large, "`2^60 - 1 < 2^60` failed",);
  assert!(UInt(vec![1, 2,],) < UInt(vec![0, 3,],), "High limbs were not compared first",);
  assert_eq!(large.cmp(&large.clone(),), Ordering::Equal, "`2^60 == 2^60` failed",);

  for (a, b,) in (0u128..500).map(|n,| (n * n * n * n * n * n * n, n << 70,),) {
    assert_eq!(UInt::from_u128(a,).cmp(&UInt::from_u128(b,),), a.cmp(&b,), "`cmp {} {}` failed", a, b,);
  }
}

#[allow(non_snake_case,)]
#[test]
fn test_UInt_add_sub() {
  let ten = UInt::from_u128(10,);

  assert_eq!(&ten + &UInt::ZERO, ten, "`10 + 0` failed",);
  assert_eq!(&ten - &UInt::ZERO, ten, "`10 - 0` failed",);
  assert_eq!(&ten - &ten, UInt::ZERO, "`10 - 10` failed",);

  //Carry across every limb.
  let mut num = UInt(vec![LIMB_MASK; 4],);
  num += 1;
  assert_eq!(num, UInt(vec![0, 0, 0, 0, 1,],), "`2^120 - 1 + 1` failed",);
  //Borrow across every limb.
  num -= &UInt::from_u128(1,);
  assert_eq!(num, UInt(vec![LIMB_MASK; 4],), "`2^120 - 1` failed",);

  for (a, b,) in (0u128..1000).map(|n,| (n * n * n * n * n * n * n * n * n, n * n * n * n * n,),) {
    let sum = &UInt::from_u128(a,) + &UInt::from_u128(b,);
    assert_eq!(sum.to_u128(), Some(a + b,), "`{} + {}` failed", a, b,);

    let diff = &UInt::from_u128(a,) - &UInt::from_u128(b.min(a,),);
    assert_eq!(diff.to_u128(), Some(a - b.min(a,),), "`{} - {}` failed", a, b.min(a,),);
  }
}

#[allow(non_snake_case,)]
#[test]
#[should_panic(expected = "requires `rhs` be smaller than `lhs`")]
fn test_UInt_sub_underflow() {
  let _ = &UInt::from_u128(1,) - &UInt::from_u128(2,);
}

#[allow(non_snake_case,)]
#[test]
fn test_UInt_mul() {
  let five = UInt::from_u128(5,);

  assert_eq!(&five * 0, UInt::ZERO, "`5 * 0` failed",);
  assert_eq!(&five * 1, five, "`5 * 1` failed",);
  assert_eq!(&five * RADIX, UInt(vec![0, 5,],), "`5 * RADIX` failed",);
  assert_eq!(&UInt::ZERO * RADIX, UInt::ZERO, "`0 * RADIX` failed",);
  assert_eq!(&five * &UInt::ZERO, UInt::ZERO, "`5 * 0` failed",);
  assert_eq!((&UInt(vec![LIMB_MASK,],) * u32::MAX).to_u128(), Some(LIMB_MASK as u128 * u32::MAX as u128,), "`(2^30 - 1) * u32::MAX` failed",);

  for (a, b,) in (0u128..1000).map(|n,| (n * n * n * n * n * n, n * n * n * n * n,),) {
    let product = &UInt::from_u128(a,) * &UInt::from_u128(b,);
    assert_eq!(product.to_u128(), Some(a * b,), "`{} * {}` failed", a, b,);

    let scalar = &UInt::from_u128(a,) * (b as u32);
    assert_eq!(scalar.to_u128(), Some(a * (b as u32) as u128,), "`{} * {}` failed", a, b as u32,);
  }

  //Every limb at the maximum: `(R^3 - 1)^2 + 2 * R^3 == R^6 + 1`.
  let one = UInt::from_u128(1,);
  let max = UInt(vec![LIMB_MASK; 3],);
  let square = &max * &max;
  let cube = &one << 3;
  assert_eq!(&(&square + &cube) + &cube, &(&one << 6) + &one, "`(R^3 - 1)^2` failed",);
}

#[allow(non_snake_case,)]
#[test]
fn test_UInt_div_small() {
  let mut num = UInt::from_u128(100,);
  assert_eq!(num.div_rem_small(7,), 2, "`100 % 7` failed",);
  assert_eq!(num, UInt::from_u128(14,), "`100 / 7` failed",);

  for (a, b,) in (1u128..1000).map(|n,| (n * n * n * n * n * n * n * n * n * n * n, n * n * n,),) {
    let mut num = UInt::from_u128(a,);
    let rem = num.div_rem_small(b as u32,);

    assert_eq!(rem as u128, a % b, "`{} % {}` failed", a, b,);
    assert_eq!(num.to_u128(), Some(a / b,), "`{} / {}` failed", a, b,);
    assert_eq!(UInt::from_u128(a,).rem_u64(b as u64,) as u128, a % b, "`rem_u64 {} % {}` failed", a, b,);
  }

  let num = UInt::from_u128(u128::MAX,);
  assert_eq!(num.rem_u64(u64::MAX,) as u128, u128::MAX % u64::MAX as u128, "`u128::MAX % u64::MAX` failed",);
}

#[allow(non_snake_case,)]
#[test]
fn test_UInt_div_rem() {
  let (q, r,) = UInt::from_u128(5,).div_rem(&UInt::from_u128(7,),);
  assert_eq!((q, r,), (UInt::ZERO, UInt::from_u128(5,),), "`5 / 7` failed",);

  for (a, b,) in (1u128..1000).map(|n,| (n.pow(12,), n.pow(7,) + n,),) {
    let (q, r,) = UInt::from_u128(a,).div_rem(&UInt::from_u128(b,),);

    assert_eq!(q.to_u128(), Some(a / b,), "`{} / {}` failed", a, b,);
    assert_eq!(r.to_u128(), Some(a % b,), "`{} % {}` failed", a, b,);
  }

  //Divisors with small leading limbs need the largest normalisation.
  for &b in &[(1u128 << 30) + 1, (1 << 60) + (1 << 30) - 1, (1 << 90) + 12345, u64::MAX as u128, (1 << 61) - 1,] {
    let a = u128::MAX - 987654321;
    let (q, r,) = UInt::from_u128(a,).div_rem(&UInt::from_u128(b,),);

    assert_eq!(q.to_u128(), Some(a / b,), "`{} / {}` failed", a, b,);
    assert_eq!(r.to_u128(), Some(a % b,), "`{} % {}` failed", a, b,);
  }
}

#[allow(non_snake_case,)]
#[test]
fn test_UInt_div_rem_large() {
  for (len_a, len_b,) in [(9, 4,), (12, 2,), (20, 19,), (7, 7,), (30, 11,),].iter().copied() {
    let quotient = pattern(len_a, len_a as u32,);
    let divisor = pattern(len_b, 31 * len_b as u32 + 7,);
    let remainder = &divisor - &UInt::from_u128(1,);
    let dividend = &(&quotient * &divisor) + &remainder;

    let (q, r,) = dividend.div_rem(&divisor,);
    assert_eq!(q, quotient, "Quotient corrupted for {}x{} limbs", len_a, len_b,);
    assert_eq!(r, remainder, "Remainder corrupted for {}x{} limbs", len_a, len_b,);
  }

  //A divisor whose leading limbs are at the maximum forces digit corrections.
  let divisor = UInt(vec![0, LIMB_MASK, LIMB_MASK,],);
  let quotient = UInt(vec![LIMB_MASK, 0, LIMB_MASK, 1,],);
  let dividend = &(&quotient * &divisor) + &UInt::from_u128(12345,);
  let (q, r,) = dividend.div_rem(&divisor,);
  assert_eq!(q, quotient, "Quotient corrupted for a saturated divisor",);
  assert_eq!(r, UInt::from_u128(12345,), "Remainder corrupted for a saturated divisor",);
}

#[allow(non_snake_case,)]
#[test]
fn test_UInt_shift() {
  let num = UInt(vec![1, 2, 3,],);

  assert_eq!(&num << 0, num, "`<< 0` failed",);
  assert_eq!(&num << 2, UInt(vec![0, 0, 1, 2, 3,],), "`<< 2` failed",);
  assert_eq!(&UInt::ZERO << 2, UInt::ZERO, "`0 << 2` failed",);
  assert_eq!(&num >> 1, UInt(vec![2, 3,],), "`>> 1` failed",);
  assert_eq!(&num >> 3, UInt::ZERO, "`>> 3` failed",);
  assert_eq!(&num >> 10, UInt::ZERO, "`>> 10` failed",);

  let mut num = num;
  assert_eq!(num.shift_limb(), 1, "`shift` returned the wrong limb",);
  assert_eq!(num, UInt(vec![2, 3,],), "`shift` corrupted the value",);
  num.unshift_limb(RADIX + 9,);
  assert_eq!(num, UInt(vec![9, 2, 3,],), "`unshift` did not mask the limb",);

  let mut zero = UInt::ZERO;
  assert_eq!(zero.shift_limb(), 0, "`shift` on zero failed",);
  zero.unshift_limb(0,);
  assert_eq!(zero, UInt::ZERO, "`unshift 0` on zero left a high zero limb",);
}
