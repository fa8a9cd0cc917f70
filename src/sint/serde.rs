//! `BigInt`s are serialised as their decimal string.
//!
//! Author --- DMorgan
//! Last Moddified --- 2026-10-19

#![cfg(feature = "serde",)]

use super::*;
use ::serde::{
  ser::{Serialize, Serializer,},
  de::{self, Deserialize, Deserializer, Visitor,},
};

impl Serialize for BigInt {
  #[inline]
  fn serialize<S,>(&self, serializer: S,) -> Result<S::Ok, S::Error>
    where S: Serializer, { serializer.collect_str(self,) }
}

/// Accepts decimal strings and native integers.
struct BigIntVisitor;

impl<'de,> Visitor<'de,> for BigIntVisitor {
  type Value = BigInt;

  fn expecting(&self, fmt: &mut fmt::Formatter,) -> fmt::Result { fmt.write_str("a decimal integer string",) }
  fn visit_str<E,>(self, v: &str,) -> Result<Self::Value, E>
    where E: de::Error, { v.parse().map_err(E::custom,) }
  #[inline]
  fn visit_i64<E,>(self, v: i64,) -> Result<Self::Value, E>
    where E: de::Error, { Ok(BigInt::from(v,)) }
  #[inline]
  fn visit_u64<E,>(self, v: u64,) -> Result<Self::Value, E>
    where E: de::Error, { Ok(BigInt::from(v,)) }
}

impl<'de,> Deserialize<'de,> for BigInt {
  #[inline]
  fn deserialize<D,>(deserializer: D,) -> Result<Self, D::Error>
    where D: Deserializer<'de,>, { deserializer.deserialize_str(BigIntVisitor,) }
}

#[cfg(test,)]
mod tests {
  use super::*;
  use serde_cbor;

  #[allow(non_snake_case,)]
  #[test]
  fn test_BigInt_serde() {
    let nums = [
      BigInt::ZERO,
      BigInt::from(100isize,),
      BigInt::from(-100isize,),
      BigInt::from(1,) << 9usize,
      -(BigInt::from(u128::MAX,) * BigInt::from(u128::MAX,)),
    ];

    for num in nums.iter() {
      let data = serde_cbor::to_vec(num,)
        .expect("Failed to serialise `BigInt`",);
      let int = serde_cbor::from_slice::<BigInt,>(&data,)
        .expect("Failed to deserialise `BigInt`",);

      assert_eq!(&int, num, "Deserialised value corrupted",);
    }
  }

  #[allow(non_snake_case,)]
  #[test]
  fn test_BigInt_deserialise_native() {
    let data = serde_cbor::to_vec(&-42i64,).expect("Failed to serialise `-42`",);
    let int = serde_cbor::from_slice::<BigInt,>(&data,).expect("Failed to deserialise `-42`",);

    assert_eq!(int, -42, "Native integer corrupted",);

    let data = serde_cbor::to_vec(&"12x",).expect("Failed to serialise `12x`",);
    assert!(serde_cbor::from_slice::<BigInt,>(&data,).is_err(), "Invalid digits were accepted",);
  }
}
