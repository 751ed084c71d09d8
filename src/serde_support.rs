//! Serde support for the ordix containers
//!
//! Sets serialize as sequences (ordered containers keep their positional
//! order), [`PairedSet`] as a sequence of `(key, value)` tuples, and
//! [`IndexedDictionary`] as a map in insertion order. Deserialization goes
//! through the strict `add` paths, so duplicate elements or keys in the
//! input surface as deserialization errors instead of being silently
//! collapsed.

use crate::map::IndexedDictionary;
use crate::set::{IndexedSet, PairedSet, UnorderedSet};
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

impl<T, S> Serialize for UnorderedSet<T, S>
where
    T: Hash + Eq + Clone + Serialize,
    S: BuildHasher,
{
    fn serialize<Sr: Serializer>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T, S> Deserialize<'de> for UnorderedSet<T, S>
where
    T: Hash + Eq + Clone + Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(SetVisitor::<T, UnorderedSet<T, S>>::new())
    }
}

impl<T, S> Serialize for IndexedSet<T, S>
where
    T: Hash + Eq + Clone + Serialize,
    S: BuildHasher,
{
    fn serialize<Sr: Serializer>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T, S> Deserialize<'de> for IndexedSet<T, S>
where
    T: Hash + Eq + Clone + Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(SetVisitor::<T, IndexedSet<T, S>>::new())
    }
}

impl<K, V, S> Serialize for PairedSet<K, V, S>
where
    K: Hash + Eq + Clone + Serialize,
    V: Clone + Serialize,
    S: BuildHasher,
{
    fn serialize<Sr: Serializer>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error> {
        serializer.collect_seq(self.iter().map(|pair| (&pair.key, &pair.value)))
    }
}

impl<'de, K, V, S> Deserialize<'de> for PairedSet<K, V, S>
where
    K: Hash + Eq + Clone + Deserialize<'de>,
    V: Clone + Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(PairedSetVisitor {
            marker: PhantomData,
        })
    }
}

impl<K, V, S> Serialize for IndexedDictionary<K, V, S>
where
    K: Hash + Eq + Clone + Serialize,
    V: Serialize,
    S: BuildHasher,
{
    fn serialize<Sr: Serializer>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de, K, V, S> Deserialize<'de> for IndexedDictionary<K, V, S>
where
    K: Hash + Eq + Clone + Deserialize<'de>,
    V: Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DictionaryVisitor {
            marker: PhantomData,
        })
    }
}

/// Visitor shared by the two element-set containers
struct SetVisitor<T, C> {
    marker: PhantomData<(T, C)>,
}

impl<T, C> SetVisitor<T, C> {
    fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

trait StrictAdd<T> {
    fn empty() -> Self;
    fn sized(capacity: usize) -> Self;
    fn add_strict(&mut self, item: T) -> crate::error::Result<()>;
}

impl<T, S> StrictAdd<T> for UnorderedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    fn empty() -> Self {
        Self::with_hasher(S::default())
    }

    fn sized(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, S::default())
    }

    fn add_strict(&mut self, item: T) -> crate::error::Result<()> {
        self.add(item)
    }
}

impl<T, S> StrictAdd<T> for IndexedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    fn empty() -> Self {
        Self::with_hasher(S::default())
    }

    fn sized(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, S::default())
    }

    fn add_strict(&mut self, item: T) -> crate::error::Result<()> {
        self.add(item)
    }
}

impl<'de, T, C> Visitor<'de> for SetVisitor<T, C>
where
    T: Deserialize<'de>,
    C: StrictAdd<T>,
{
    type Value = C;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of unique elements")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut set = match seq.size_hint() {
            Some(size) => C::sized(size),
            None => C::empty(),
        };
        while let Some(item) = seq.next_element::<T>()? {
            set.add_strict(item)
                .map_err(serde::de::Error::custom)?;
        }
        Ok(set)
    }
}

struct PairedSetVisitor<K, V, S> {
    marker: PhantomData<(K, V, S)>,
}

impl<'de, K, V, S> Visitor<'de> for PairedSetVisitor<K, V, S>
where
    K: Hash + Eq + Clone + Deserialize<'de>,
    V: Clone + Deserialize<'de>,
    S: BuildHasher + Default,
{
    type Value = PairedSet<K, V, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of key/value pairs with unique keys")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut set = match seq.size_hint() {
            Some(size) => PairedSet::with_capacity_and_hasher(size, S::default()),
            None => PairedSet::with_hasher(S::default()),
        };
        while let Some((key, value)) = seq.next_element::<(K, V)>()? {
            set.add(key, value).map_err(serde::de::Error::custom)?;
        }
        Ok(set)
    }
}

struct DictionaryVisitor<K, V, S> {
    marker: PhantomData<(K, V, S)>,
}

impl<'de, K, V, S> Visitor<'de> for DictionaryVisitor<K, V, S>
where
    K: Hash + Eq + Clone + Deserialize<'de>,
    V: Deserialize<'de>,
    S: BuildHasher + Default,
{
    type Value = IndexedDictionary<K, V, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with unique keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut dict = match map.size_hint() {
            Some(size) => IndexedDictionary::with_capacity_and_hasher(size, S::default()),
            None => IndexedDictionary::with_hasher(S::default()),
        };
        while let Some((key, value)) = map.next_entry::<K, V>()? {
            dict.add(key, value).map_err(serde::de::Error::custom)?;
        }
        Ok(dict)
    }
}
