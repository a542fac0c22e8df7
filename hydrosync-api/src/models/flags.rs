//! Serde adapters for the firmware's integer-boolean encoding.
//!
//! The controller stores switch state as 0/1 on the wire; JSON `true`
//! and `false` are accepted on input for robustness.

use core::fmt;

use serde::de::{Deserializer, Error, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};

struct FlagVisitor;

impl<'de> Visitor<'de> for FlagVisitor {
    type Value = bool;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("0, 1, or a boolean")
    }

    fn visit_bool<E: Error>(self, value: bool) -> Result<bool, E> {
        Ok(value)
    }

    fn visit_u64<E: Error>(self, value: u64) -> Result<bool, E> {
        match value {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(E::custom(format!("flag out of range: {other}"))),
        }
    }

    fn visit_i64<E: Error>(self, value: i64) -> Result<bool, E> {
        match value {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(E::custom(format!("flag out of range: {other}"))),
        }
    }
}

pub mod flag {
    use super::*;

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        deserializer.deserialize_any(FlagVisitor)
    }
}

pub mod flag_array {
    use super::*;

    pub fn serialize<S: Serializer>(value: &[bool; 7], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(value.len()))?;
        for flag in value {
            seq.serialize_element(&u8::from(*flag))?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[bool; 7], D::Error> {
        struct ArrayVisitor;

        impl<'de> Visitor<'de> for ArrayVisitor {
            type Value = [bool; 7];

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence of exactly 7 day flags")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<[bool; 7], A::Error> {
                let mut flags = [false; 7];
                for (index, slot) in flags.iter_mut().enumerate() {
                    *slot = seq
                        .next_element_seed(FlagSeed)?
                        .ok_or_else(|| A::Error::invalid_length(index, &self))?;
                }
                if seq.next_element_seed(FlagSeed)?.is_some() {
                    return Err(A::Error::invalid_length(8, &self));
                }
                Ok(flags)
            }
        }

        struct FlagSeed;

        impl<'de> serde::de::DeserializeSeed<'de> for FlagSeed {
            type Value = bool;

            fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<bool, D::Error> {
                deserializer.deserialize_any(FlagVisitor)
            }
        }

        deserializer.deserialize_seq(ArrayVisitor)
    }
}
