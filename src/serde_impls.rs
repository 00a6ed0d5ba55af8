use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::fmt::{self, Formatter};
use std::marker::PhantomData;

use crate::hash::hash_function_1;
use crate::{ChainingMap, OpenAddressingMap};

impl<V> Serialize for OpenAddressingMap<V>
where
    V: Serialize,
{
    fn serialize<Sr>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error>
    where
        Sr: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

impl<V> Serialize for ChainingMap<V>
where
    V: Serialize,
{
    fn serialize<Sr>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error>
    where
        Sr: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

/// Deserialized maps hash with [`hash_function_1`] and start with twice as many buckets as
/// entries.
trait FromEntries<V> {
    fn from_entries(entries: Vec<(String, V)>) -> Self;
}

impl<V> FromEntries<V> for OpenAddressingMap<V> {
    fn from_entries(entries: Vec<(String, V)>) -> Self {
        let mut map: OpenAddressingMap<V> =
            OpenAddressingMap::new((2 * entries.len()).max(1), hash_function_1);
        for (key, value) in entries {
            map.put(&key, value);
        }
        map
    }
}

impl<V> FromEntries<V> for ChainingMap<V> {
    fn from_entries(entries: Vec<(String, V)>) -> Self {
        let mut map: ChainingMap<V> = ChainingMap::new((2 * entries.len()).max(1), hash_function_1);
        for (key, value) in entries {
            map.put(&key, value);
        }
        map
    }
}

struct MapVisitor<M, V> {
    _marker: PhantomData<(M, V)>,
}

impl<M, V> MapVisitor<M, V> {
    fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<'de, M, V> Visitor<'de> for MapVisitor<M, V>
where
    M: FromEntries<V>,
    V: Deserialize<'de>,
{
    type Value = M;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "a map with string keys")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries: Vec<(String, V)> = Vec::new();
        while let Some((key, value)) = access.next_entry()? {
            entries.push((key, value));
        }
        Ok(M::from_entries(entries))
    }
}

impl<'de, V> Deserialize<'de> for OpenAddressingMap<V>
where
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(MapVisitor::new())
    }
}

impl<'de, V> Deserialize<'de> for ChainingMap<V>
where
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(MapVisitor::new())
    }
}
