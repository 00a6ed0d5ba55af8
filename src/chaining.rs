//! A string-keyed hash map that resolves collisions by chaining: every bucket owns the ordered
//! list of entries whose keys hash to it.
//!
//! Unlike [`OpenAddressingMap`](crate::OpenAddressingMap), this map never grows on its own. Call
//! [`ChainingMap::resize_table`] to spread long chains over more buckets.

use std::fmt::{self, Debug, Display};

use crate::chain::{Chain, Node};
use crate::error::ResizeError;
use crate::hash::HashFunction;
use crate::trace::trace;

#[derive(Clone)]
pub struct ChainingMap<V> {
    size: usize,
    hash_function: HashFunction,
    buckets: Vec<Chain<V>>,
}

impl<V> ChainingMap<V> {
    pub const MIN_CAPACITY: usize = 1;

    /// Creates an empty map with `capacity` buckets.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize, hash_function: HashFunction) -> Self {
        assert!(capacity >= Self::MIN_CAPACITY, "Capacity must be at least 1");
        ChainingMap {
            size: 0,
            hash_function,
            buckets: Self::empty_buckets_of(capacity),
        }
    }

    fn empty_buckets_of(capacity: usize) -> Vec<Chain<V>> {
        let mut buckets: Vec<Chain<V>> = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Chain::default);
        buckets
    }

    #[inline]
    fn bucket(&self, key: &str) -> usize {
        (self.hash_function)(key) % self.buckets.len()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn table_load(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    /// Counts the buckets with an empty chain.
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|chain| chain.is_empty()).count()
    }

    /// Inserts or updates `key`.
    pub fn put(&mut self, key: &str, value: V) {
        self.insert(key, value);
    }

    fn insert<K>(&mut self, key: K, value: V)
    where
        K: AsRef<str> + Into<String>,
    {
        let b: usize = self.bucket(key.as_ref());
        let chain: &mut Chain<V> = &mut self.buckets[b];
        match chain.find_mut(key.as_ref()) {
            Some(node) => node.value = value,
            None => {
                chain.insert(key.into(), value);
                self.size += 1;
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.buckets[self.bucket(key)]
            .find(key)
            .map(|node| &node.value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let b: usize = self.bucket(key);
        self.buckets[b].find_mut(key).map(|node| &mut node.value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        if self.size == 0 {
            return false;
        }
        self.buckets[self.bucket(key)].find(key).is_some()
    }

    pub fn remove(&mut self, key: &str) {
        let b: usize = self.bucket(key);
        if self.buckets[b].remove(key) {
            self.size -= 1;
        }
    }

    /// Rebuilds the table with `new_capacity` buckets, re-inserting every entry. Does nothing if
    /// `new_capacity` is zero. Any positive capacity works since chains are unbounded.
    pub fn resize_table(&mut self, new_capacity: usize) {
        let _ = self.try_resize_table(new_capacity);
    }

    /// Like [`resize_table`](Self::resize_table), but reports why a resize was refused.
    pub fn try_resize_table(&mut self, new_capacity: usize) -> Result<(), ResizeError> {
        if new_capacity < Self::MIN_CAPACITY {
            return Err(ResizeError::ZeroCapacity);
        }
        trace!(
            "rehashing {} entries from capacity {} to {}",
            self.size,
            self.capacity(),
            new_capacity
        );
        let old: Vec<Chain<V>> =
            std::mem::replace(&mut self.buckets, Self::empty_buckets_of(new_capacity));
        self.size = 0;
        for chain in old {
            for Node { key, value } in chain {
                self.insert(key, value);
            }
        }
        debug_assert_eq!(
            self.size,
            self.buckets.iter().map(|chain| chain.len()).sum::<usize>()
        );
        Ok(())
    }

    pub fn clear(&mut self) {
        trace!("clearing {} entries", self.size);
        self.buckets = Self::empty_buckets_of(self.capacity());
        self.size = 0;
    }

    /// The keys in bucket order, then chain order.
    pub fn keys(&self) -> Vec<String> {
        self.iter().map(|(key, _)| key.to_owned()).collect()
    }

    /// Iterates over the entries in bucket order, then chain order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter())
            .map(|node| (node.key.as_str(), &node.value))
    }
}

impl<V: Debug> Debug for ChainingMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// One line per bucket listing its chain, e.g. `3: -> a: 1 -> b: 2`.
impl<V: Debug> Display for ChainingMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chain) in self.buckets.iter().enumerate() {
            write!(f, "{}:", i)?;
            for node in chain.iter() {
                write!(f, " -> {}: {:?}", node.key, node.value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
