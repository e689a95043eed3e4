//! History retention cap.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Maximum number of history entries kept by the inspector.
///
/// Serialized as `false` when unlimited and as a number otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MaxAge {
    #[default]
    Unlimited,
    Entries(u64),
}

impl MaxAge {
    pub fn entries(&self) -> Option<u64> {
        match self {
            MaxAge::Unlimited => None,
            MaxAge::Entries(n) => Some(*n),
        }
    }
}

impl Serialize for MaxAge {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MaxAge::Unlimited => serializer.serialize_bool(false),
            MaxAge::Entries(n) => serializer.serialize_u64(*n),
        }
    }
}

struct MaxAgeVisitor;

impl<'de> Visitor<'de> for MaxAgeVisitor {
    type Value = MaxAge;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("false or a non-negative number of entries")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        if v {
            Err(E::invalid_value(de::Unexpected::Bool(true), &self))
        } else {
            Ok(MaxAge::Unlimited)
        }
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(MaxAge::Entries(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        u64::try_from(v)
            .map(MaxAge::Entries)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        if v == "false" {
            return Ok(MaxAge::Unlimited);
        }
        v.parse::<u64>()
            .map(MaxAge::Entries)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for MaxAge {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MaxAgeVisitor)
    }
}
