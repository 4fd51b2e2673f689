//! Serialization of `U256` values as decimal strings.
//!
//! Typed-data messages carry `uint256` values as decimal strings on the
//! wire; hex-string serialization would also hash correctly but breaks
//! signers that expect the decimal form, and raw JSON numbers lose
//! precision past 2^53.

use alloy_primitives::U256;
use serde::{de, Deserializer, Serializer};
use std::fmt;

pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    struct Visitor;

    impl<'de> de::Visitor<'de> for Visitor {
        type Value = U256;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            write!(formatter, "a uint256 as a decimal string or integer")
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            U256::from_str_radix(s, 10).map_err(|err| {
                de::Error::custom(format!("failed to decode {s:?} as decimal uint256: {err}"))
            })
        }

        // Documents produced by other tooling encode small values as numbers.
        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(U256::from(v))
        }
    }

    deserializer.deserialize_any(Visitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "super")]
        value: U256,
    }

    #[test]
    fn serializes_as_decimal_string() {
        let wrapper = Wrapper {
            value: U256::from(100_000_000_000_000u64),
        };
        let json = serde_json::to_string(&wrapper).unwrap();
        assert_eq!(json, r#"{"value":"100000000000000"}"#);
    }

    #[test]
    fn deserializes_string_and_number() {
        let from_string: Wrapper = serde_json::from_str(r#"{"value":"8"}"#).unwrap();
        let from_number: Wrapper = serde_json::from_str(r#"{"value":8}"#).unwrap();
        assert_eq!(from_string.value, U256::from(8u64));
        assert_eq!(from_number.value, U256::from(8u64));
    }

    #[test]
    fn rejects_hex_and_garbage() {
        assert!(serde_json::from_str::<Wrapper>(r#"{"value":"0x10"}"#).is_err());
        assert!(serde_json::from_str::<Wrapper>(r#"{"value":"ten"}"#).is_err());
    }

    #[test]
    fn round_trips_max_value() {
        let wrapper = Wrapper { value: U256::MAX };
        let json = serde_json::to_string(&wrapper).unwrap();
        let back: Wrapper = serde_json::from_str(&json).unwrap();
        assert_eq!(back, wrapper);
    }
}
