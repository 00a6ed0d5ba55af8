//! A string-keyed hash map that resolves collisions with quadratic probing over a single flat
//! array of slots.
//!
//! Removal is logical: a removed entry stays in its slot as a tombstone so that keys stored
//! further along the same probe sequence remain reachable. Tombstones are dropped only when the
//! table is rebuilt by [`OpenAddressingMap::resize_table`] or [`OpenAddressingMap::clear`].

use std::fmt::{self, Debug, Display};

use crate::error::ResizeError;
use crate::hash::{next_prime, HashFunction};
use crate::trace::trace;

#[derive(Clone, Debug)]
struct Entry<V> {
    key: String,
    value: V,
    tombstone: bool,
}

/// A slot is either untouched since the table was built, or holds an entry that is live or
/// tombstoned. An occupied slot never goes back to `Empty` until the table is rebuilt.
#[derive(Clone, Debug)]
enum Slot<V> {
    Empty,
    Occupied(Entry<V>),
}

impl<V> Slot<V> {
    fn live(&self) -> Option<&Entry<V>> {
        match self {
            Slot::Occupied(entry) if !entry.tombstone => Some(entry),
            _ => None,
        }
    }
}

/// Where a probe for a key ended.
enum Probe {
    /// The slot holding the key, live or tombstoned.
    Found(usize),
    /// The first empty slot on the key's probe sequence.
    Vacant(usize),
    /// Every position of the probe sequence was visited without reaching the key or an empty
    /// slot.
    Exhausted,
}

#[derive(Clone)]
pub struct OpenAddressingMap<V> {
    size: usize,
    hash_function: HashFunction,
    slots: Vec<Slot<V>>,
}

impl<V> OpenAddressingMap<V> {
    pub const MIN_CAPACITY: usize = 1;
    /// A `put` that finds the table at or above this load factor doubles the capacity first.
    pub const MAX_LOAD_FACTOR: f64 = 0.5;
    pub const GROWTH_FACTOR: usize = 2;

    /// Creates an empty map with `capacity` slots.
    ///
    /// Quadratic probing only reaches every slot when the capacity is prime. Other capacities
    /// work, but a `put` whose probe sequence runs out of positions rebuilds the table at a
    /// prime capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize, hash_function: HashFunction) -> Self {
        assert!(capacity >= Self::MIN_CAPACITY, "Capacity must be at least 1");
        OpenAddressingMap {
            size: 0,
            hash_function,
            slots: Self::empty_slots(capacity),
        }
    }

    fn empty_slots(capacity: usize) -> Vec<Slot<V>> {
        let mut slots: Vec<Slot<V>> = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || Slot::Empty);
        slots
    }

    /// The number of live entries.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn table_load(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    /// Counts the slots that have never held an entry. Tombstones are not empty.
    pub fn empty_buckets(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Empty))
            .count()
    }

    /// Counts the slots holding a removed entry.
    pub fn tombstones(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Occupied(entry) if entry.tombstone))
            .count()
    }

    /// Walks the slots at `i0 + j^2 mod capacity` for `j = 0, 1, 2, ...`. The offsets repeat
    /// with period `capacity`, so at most `capacity` slots are visited.
    fn probe(&self, key: &str) -> Probe {
        let capacity: usize = self.capacity();
        let mut i: usize = (self.hash_function)(key) % capacity;
        let mut j: usize = 0;
        while j < capacity {
            match &self.slots[i] {
                Slot::Empty => return Probe::Vacant(i),
                Slot::Occupied(entry) if entry.key == key => return Probe::Found(i),
                Slot::Occupied(_) => {}
            }
            // (j + 1)^2 - j^2 = 2j + 1
            i = (i + (2 * j + 1) % capacity) % capacity;
            j += 1;
        }
        Probe::Exhausted
    }

    fn find_live(&self, key: &str) -> Option<usize> {
        if self.size == 0 {
            return None;
        }
        match self.probe(key) {
            Probe::Found(i) => self.slots[i].live().map(|_| i),
            Probe::Vacant(_) | Probe::Exhausted => None,
        }
    }

    /// Inserts or updates `key`. A tombstoned entry for the same key is brought back to life.
    pub fn put(&mut self, key: &str, value: V) {
        self.insert(key, value);
    }

    fn insert<K>(&mut self, key: K, value: V)
    where
        K: AsRef<str> + Into<String>,
    {
        if self.table_load() >= Self::MAX_LOAD_FACTOR {
            self.resize_table(self.capacity() * Self::GROWTH_FACTOR);
        }
        loop {
            match self.probe(key.as_ref()) {
                Probe::Found(i) => {
                    if let Slot::Occupied(entry) = &mut self.slots[i] {
                        if entry.tombstone {
                            entry.tombstone = false;
                            self.size += 1;
                        }
                        entry.value = value;
                    }
                    return;
                }
                Probe::Vacant(i) => {
                    self.slots[i] = Slot::Occupied(Entry {
                        key: key.into(),
                        value,
                        tombstone: false,
                    });
                    self.size += 1;
                    return;
                }
                Probe::Exhausted => {
                    // A prime table below half load with no tombstones always has a reachable
                    // empty slot.
                    let capacity: usize = next_prime(self.capacity() * Self::GROWTH_FACTOR);
                    trace!(
                        "probe sequence exhausted at capacity {}, rebuilding at {}",
                        self.capacity(),
                        capacity
                    );
                    self.rehash(capacity);
                }
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.find_live(key)
            .and_then(|i| self.slots[i].live())
            .map(|entry| &entry.value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let i: usize = self.find_live(key)?;
        match &mut self.slots[i] {
            Slot::Occupied(entry) => Some(&mut entry.value),
            Slot::Empty => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find_live(key).is_some()
    }

    /// Tombstones the entry for `key`. Removing a missing or already removed key does nothing.
    pub fn remove(&mut self, key: &str) {
        if let Some(i) = self.find_live(key) {
            if let Slot::Occupied(entry) = &mut self.slots[i] {
                entry.tombstone = true;
                self.size -= 1;
            }
        }
    }

    /// Rebuilds the table with `new_capacity` slots, re-inserting every live entry. Does nothing
    /// if `new_capacity` is zero or smaller than the number of live entries.
    ///
    /// The re-insertion goes through [`put`](Self::put), so the final capacity may exceed
    /// `new_capacity` when the entries would fill half of it.
    pub fn resize_table(&mut self, new_capacity: usize) {
        let _ = self.try_resize_table(new_capacity);
    }

    /// Like [`resize_table`](Self::resize_table), but reports why a resize was refused.
    pub fn try_resize_table(&mut self, new_capacity: usize) -> Result<(), ResizeError> {
        if new_capacity < Self::MIN_CAPACITY {
            return Err(ResizeError::ZeroCapacity);
        }
        if new_capacity < self.size {
            return Err(ResizeError::BelowSize {
                requested: new_capacity,
                size: self.size,
            });
        }
        self.rehash(new_capacity);
        Ok(())
    }

    fn rehash(&mut self, new_capacity: usize) {
        trace!(
            "rehashing {} entries from capacity {} to {}",
            self.size,
            self.capacity(),
            new_capacity
        );
        let old: Vec<Slot<V>> = std::mem::replace(&mut self.slots, Self::empty_slots(new_capacity));
        self.size = 0;
        for slot in old {
            if let Slot::Occupied(entry) = slot {
                if !entry.tombstone {
                    self.insert(entry.key, entry.value);
                }
            }
        }
    }

    /// Drops every entry and tombstone, keeping the capacity.
    pub fn clear(&mut self) {
        trace!("clearing {} entries", self.size);
        self.slots = Self::empty_slots(self.capacity());
        self.size = 0;
    }

    /// The live keys in slot order.
    pub fn keys(&self) -> Vec<String> {
        self.iter().map(|(key, _)| key.to_owned()).collect()
    }

    /// Iterates over the live entries in slot order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            slots: self.slots.iter(),
        }
    }
}

pub struct Iter<'a, V> {
    slots: std::slice::Iter<'a, Slot<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots
            .by_ref()
            .find_map(|slot| slot.live())
            .map(|entry| (entry.key.as_str(), &entry.value))
    }
}

impl<'a, V> IntoIterator for &'a OpenAddressingMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: Debug> Debug for OpenAddressingMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// One line per slot: `None`, `key: value`, or `key: value (tombstone)`.
impl<V: Debug> Display for OpenAddressingMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            match slot {
                Slot::Empty => writeln!(f, "{}: None", i)?,
                Slot::Occupied(entry) if entry.tombstone => {
                    writeln!(f, "{}: {}: {:?} (tombstone)", i, entry.key, entry.value)?
                }
                Slot::Occupied(entry) => writeln!(f, "{}: {}: {:?}", i, entry.key, entry.value)?,
            }
        }
        Ok(())
    }
}
