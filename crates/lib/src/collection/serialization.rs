//! Serde support for [`Collection`].
//!
//! A collection serializes as a sequence of `[key, value]` pairs in order. Deserialization
//! goes through `TryFrom`, so a payload that repeats a key is rejected.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Collection;

impl<V: Serialize> Serialize for Collection<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.keys.iter().zip(self.values.iter()))
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Collection<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let entries = Vec::<(Option<String>, V)>::deserialize(deserializer)?;
        Collection::try_from(entries).map_err(D::Error::custom)
    }
}
