//! Fixed-capacity open-addressing hash table with linear probing.
//!
//! This is the associative structure backing both the frequency table and
//! the code table. Collisions are resolved by scanning forward from the
//! home slot: the slot for key `k` is found on the probe sequence
//! `(hash(k) + i) mod capacity` for i = 0, 1, 2, ...
//!
//! The table never resizes and supports no deletion; capacity is an
//! explicit construction parameter and must exceed the eventual
//! distinct-key count. Every probe loop is bounded by `capacity`, so a
//! completely full table surfaces [`TableError::CapacityExceeded`] on
//! `put` (and terminates `get`) instead of probing forever.
//!
//! Hashing uses the std `DefaultHasher` constructed with `new()`, which is
//! deterministic across runs and processes. Slot iteration order is
//! therefore reproducible for a given capacity and key set. The 64-bit
//! hash is reduced with unsigned `% capacity`, so there is no signed
//! abs-overflow edge case.
//!
//! # Probe histogram
//!
//! `histogram[d]` counts the insertions whose final slot was `d` probes
//! past the home slot. Overwrites do not touch the histogram, so the sum
//! of all entries always equals `len()`.

use crate::error::TableError;
use std::borrow::Borrow;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Open-addressing hash table with linear probing.
///
/// # Invariants
/// - each key occupies exactly one slot, fixed until the table is dropped
/// - `len() <= capacity()`
/// - `histogram` entries sum to `len()`
#[derive(Debug, Clone)]
pub struct HashTable<K, V> {
    /// Slot array; `None` marks an empty slot
    slots: Vec<Option<(K, V)>>,
    /// Number of occupied slots
    len: usize,
    /// Probe-distance histogram for insertions
    histogram: Vec<u64>,
}

impl<K: Hash + Eq, V> HashTable<K, V> {
    /// Create a table with exactly `capacity` slots.
    ///
    /// The table never grows: size `capacity` for the expected distinct-key
    /// count at your target load factor.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            len: 0,
            histogram: vec![0],
        }
    }

    /// Insert or overwrite a key/value pair.
    ///
    /// If `key` already occupies a slot its value is replaced in place and
    /// neither the size nor the histogram changes. Otherwise the first
    /// empty slot on the probe sequence receives the pair and the probe
    /// distance is recorded.
    ///
    /// # Errors
    /// `TableError::CapacityExceeded` when the probe sequence visits every
    /// slot without finding the key or an empty slot.
    pub fn put(&mut self, key: K, value: V) -> Result<(), TableError> {
        let capacity = self.slots.len();
        if capacity == 0 {
            return Err(TableError::CapacityExceeded { capacity });
        }

        let home = self.home_slot(&key);
        for distance in 0..capacity {
            let idx = (home + distance) % capacity;
            if let Some((existing, slot_value)) = self.slots[idx].as_mut() {
                if *existing == key {
                    *slot_value = value;
                    return Ok(());
                }
            } else {
                self.slots[idx] = Some((key, value));
                self.len += 1;
                self.record_probe(distance);
                return Ok(());
            }
        }

        Err(TableError::CapacityExceeded { capacity })
    }

    /// Look up a key, probing from its home slot.
    ///
    /// Returns `None` when an empty slot is reached before a match, or
    /// when a full table has been probed end to end.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let capacity = self.slots.len();
        if capacity == 0 {
            return None;
        }

        let home = self.home_slot(key);
        for distance in 0..capacity {
            match &self.slots[(home + distance) % capacity] {
                Some((k, v)) if k.borrow() == key => return Some(v),
                Some(_) => continue,
                None => return None,
            }
        }
        None
    }

    /// Key membership via the table's own probe sequence.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Number of distinct keys in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no key has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Iterate over keys in slot order.
    ///
    /// Slot order is deterministic for a fixed capacity and key set, but
    /// carries no semantic meaning.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.slots.iter().flatten().map(|(k, _)| k)
    }

    /// Iterate over entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.slots.iter().flatten().map(|(k, v)| (k, v))
    }

    /// Snapshot of probing statistics.
    pub fn stats(&self) -> TableStats {
        TableStats {
            entries: self.len,
            buckets: self.slots.len(),
            histogram: self.histogram.clone(),
        }
    }

    /// Home slot for a key: 64-bit hash reduced mod capacity.
    ///
    /// Unsigned arithmetic throughout; capacity must be non-zero.
    fn home_slot<Q: Hash + ?Sized>(&self, key: &Q) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() % self.slots.len() as u64) as usize
    }

    fn record_probe(&mut self, distance: usize) {
        if self.histogram.len() <= distance {
            self.histogram.resize(distance + 1, 0);
        }
        self.histogram[distance] += 1;
    }
}

impl<K: Hash + Eq, V: PartialEq> HashTable<K, V> {
    /// Value membership by scanning occupied slots.
    ///
    /// O(capacity); duplicate values are not disambiguated.
    pub fn contains_value(&self, value: &V) -> bool {
        self.slots.iter().flatten().any(|(_, v)| v == value)
    }
}

/// Probing statistics for a hash table.
///
/// Captured by [`HashTable::stats`]; rendering is left to the caller
/// (the `Display` impl produces the standard console report).
#[derive(Debug, Clone)]
pub struct TableStats {
    /// Number of distinct keys
    pub entries: usize,
    /// Total slot count
    pub buckets: usize,
    /// `histogram[d]` = insertions that needed `d` probes past home
    pub histogram: Vec<u64>,
}

impl TableStats {
    /// Occupied slots as a percentage of capacity.
    pub fn fill_percentage(&self) -> f64 {
        if self.buckets == 0 {
            0.0
        } else {
            self.entries as f64 * 100.0 / self.buckets as f64
        }
    }

    /// Longest probe distance any insertion required.
    pub fn max_probe(&self) -> usize {
        self.histogram
            .iter()
            .rposition(|&count| count > 0)
            .unwrap_or(0)
    }

    /// Mean probe distance over all insertions.
    pub fn average_probe(&self) -> f64 {
        if self.entries == 0 {
            return 0.0;
        }
        let weighted: u64 = self
            .histogram
            .iter()
            .enumerate()
            .map(|(distance, &count)| distance as u64 * count)
            .sum();
        weighted as f64 / self.entries as f64
    }
}

impl fmt::Display for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hash Table Stats")?;
        writeln!(f, "================")?;
        writeln!(f, "Number of Entries: {}", self.entries)?;
        writeln!(f, "Number of Buckets: {}", self.buckets)?;
        write!(f, "Histogram of Probes: [")?;
        for (i, count) in self.histogram.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{count}")?;
        }
        writeln!(f, "]")?;
        writeln!(f, "Fill Percentage: {:.2}%", self.fill_percentage())?;
        writeln!(f, "Max Linear Probe: {}", self.max_probe())?;
        write!(f, "Average Linear Probe: {:.2}", self.average_probe())
    }
}
