use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hasher};
use std::mem;
use std::num::NonZeroUsize;

use tracing::{debug, trace, warn};

use super::chain::{self, Chain, CopyFn, Entry};
use super::{AllocFailed, IntoKeys, IntoValues, Iter, Keys, Values, ValuesMut};
use crate::collections::hash::Djb2State;

/// The number of buckets used by [`StringMap::new`].
pub const DEFAULT_BUCKETS: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(count) => count,
    None => unreachable!(),
};

/// A map of owned string keys to owned string values, using separate chaining.
///
/// Each key is hashed to one of a fixed number of buckets, each holding a singly linked chain of
/// the entries that share it. The number of buckets is chosen at construction and never changes,
/// the map doesn't resize. Once [`len`](StringMap::len) exceeds
/// [`bucket_count`](StringMap::bucket_count), chains grow and lookups degrade towards linear
/// scans. Pick a bucket count suited to the expected number of keys.
///
/// Every allocation is fallible. Operations which might allocate return
/// `Result<_, AllocFailed>` and leave the map untouched on failure.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the StringMap.
/// - `b`: The number of buckets.
/// - `c`: The length of the chain that the key hashes to, `n / b` on average.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(c)` |
/// | `get` | `O(c)` |
/// | `contains` | `O(c)` |
/// | `remove` | `O(c)` |
/// | `keys` / `iter` | `O(n + b)` |
/// | `clear` | `O(n + b)` |
pub struct StringMap<B: BuildHasher = Djb2State> {
    pub(crate) buckets: Box<[Chain]>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
    /// Set once entries first outnumber buckets, so that the crossing is only logged once.
    pub(crate) degraded: bool,
}

impl StringMap<Djb2State> {
    /// Creates a new, empty StringMap with [`DEFAULT_BUCKETS`] buckets, hashing with djb2.
    pub fn new() -> Result<StringMap<Djb2State>, AllocFailed> {
        StringMap::with_buckets_and_hasher(DEFAULT_BUCKETS, Djb2State)
    }

    /// Creates a new, empty StringMap with the provided number of `buckets`, hashing with djb2.
    pub fn with_buckets(buckets: NonZeroUsize) -> Result<StringMap<Djb2State>, AllocFailed> {
        StringMap::with_buckets_and_hasher(buckets, Djb2State)
    }
}

impl<B: BuildHasher> StringMap<B> {
    /// Creates a new, empty StringMap with [`DEFAULT_BUCKETS`] buckets and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> Result<StringMap<B>, AllocFailed> {
        StringMap::with_buckets_and_hasher(DEFAULT_BUCKETS, hasher)
    }

    /// Creates a new, empty StringMap with the provided number of `buckets` and `hasher`.
    ///
    /// # Errors
    /// Returns [`AllocFailed`] if the bucket array can't be allocated, including when its size in
    /// bytes would overflow.
    pub fn with_buckets_and_hasher(
        buckets: NonZeroUsize,
        hasher: B,
    ) -> Result<StringMap<B>, AllocFailed> {
        let count = buckets.get();

        let mut chains = Vec::new();
        chains.try_reserve_exact(count).map_err(report("create"))?;
        chains.resize_with(count, Chain::new);

        Ok(StringMap {
            buckets: chains.into_boxed_slice(),
            len: 0,
            hasher,
            degraded: false,
        })
    }

    /// Returns the number of entries in the StringMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the StringMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of buckets, fixed at construction.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the average chain length. Values above 1 mean that lookups are scanning chains
    /// rather than finding keys straight away.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.bucket_count() as f64
    }

    /// Returns a reference to the hasher used by the StringMap.
    pub const fn hasher(&self) -> &B {
        &self.hasher
    }

    /// Inserts the provided `key`-`value` pair, copying both. If the key was already present, its
    /// value is replaced in place and the previous value is returned.
    ///
    /// New keys are linked in at the head of their chain.
    ///
    /// # Errors
    /// Returns [`AllocFailed`] if the copies can't be allocated. When this happens, the StringMap
    /// is unchanged: a replaced value is kept and no new entry is linked in.
    pub fn insert(&mut self, key: &str, value: &str) -> Result<Option<String>, AllocFailed> {
        self.insert_with(key, value, chain::try_copy)
    }

    /// As [`StringMap::insert`], but copying the strings with `copy`.
    pub(crate) fn insert_with(
        &mut self,
        key: &str,
        value: &str,
        copy: CopyFn,
    ) -> Result<Option<String>, AllocFailed> {
        let index = self.index_for(key);

        if let Some(existing) = self.buckets[index].find_mut(key) {
            // Allocate before touching the entry, so that a failure leaves the old value in place.
            let value = copy(value).map_err(report("insert"))?;
            trace!(bucket = index, "replaced value");
            return Ok(Some(mem::replace(&mut existing.value, value)));
        }

        let entry = Entry::try_new_with(key, value, copy).map_err(report("insert"))?;
        self.buckets[index].push_front(entry);
        self.len += 1;
        trace!(bucket = index, len = self.len, "inserted entry");

        if !self.degraded && self.len > self.bucket_count() {
            self.degraded = true;
            debug!(
                len = self.len,
                buckets = self.bucket_count(),
                "entries now outnumber buckets, lookups will scan chains"
            );
        }

        Ok(None)
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry(&self, key: &str) -> Option<(&str, &str)> {
        let entry = self.buckets[self.index_for(key)].find(key)?;
        Some((entry.key.as_str(), entry.value.as_str()))
    }

    /// Returns the value associated with the provided `key` or None if the map contains no value
    /// for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_entry(key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value associated with the provided `key` or None if the
    /// map contains no value for `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut String> {
        let index = self.index_for(key);
        self.buckets[index].find_mut(key).map(|e| &mut e.value)
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.get_entry(key).is_some()
    }

    /// Removes the entry associated with `key`, returning it if it exists.
    pub fn remove_entry(&mut self, key: &str) -> Option<(String, String)> {
        let index = self.index_for(key);
        let removed = self.buckets[index].unlink(key)?;
        self.len -= 1;
        trace!(bucket = index, len = self.len, "removed entry");

        let Entry { key, value, .. } = *removed;
        Some((key, value))
    }

    /// Removes the entry associated with `key`, returning the value if it exists. None means that
    /// there was nothing to remove and the map is unchanged.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes every entry, keeping the bucket array.
    pub fn clear(&mut self) {
        for chain in self.buckets.iter_mut() {
            *chain = Chain::new();
        }
        self.len = 0;
        self.degraded = false;
    }

    /// Returns an iterator over all key-value pairs in the StringMap, as references.
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }

    /// Returns an iterator over all keys in the StringMap. Every key appears exactly once, in no
    /// guaranteed order.
    pub fn keys(&self) -> Keys<'_> {
        Keys(self.iter())
    }

    /// Copies every key into a new Vec, in the same order as [`keys`](StringMap::keys).
    ///
    /// # Errors
    /// Returns [`AllocFailed`] if the Vec or any of the copies can't be allocated.
    pub fn keys_owned(&self) -> Result<Vec<String>, AllocFailed> {
        let mut keys = Vec::new();
        keys.try_reserve_exact(self.len).map_err(report("keys_owned"))?;

        for key in self.keys() {
            keys.push(chain::try_copy(key).map_err(report("keys_owned"))?);
        }

        Ok(keys)
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys {
        IntoKeys(self.into_iter())
    }

    /// Returns an iterator over all values in the StringMap, as references.
    pub fn values(&self) -> Values<'_> {
        Values(self.iter())
    }

    /// Returns an iterator over all values in the StringMap, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_> {
        ValuesMut(self.into_iter())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues {
        IntoValues(self.into_iter())
    }

    /// Returns an iterator over the length of every chain, in bucket order.
    pub fn chain_lens(&self) -> impl Iterator<Item = usize> {
        self.buckets.iter().map(Chain::len)
    }
}

impl<B: BuildHasher> StringMap<B> {
    /// Calculates the bucket for `key`. The raw bytes are hashed rather than going through
    /// [`Hash`](std::hash::Hash), which would append a terminator.
    pub(crate) fn index_for(&self, key: &str) -> usize {
        let mut hasher = self.hasher.build_hasher();
        hasher.write(key.as_bytes());

        // UNCHECKED: The bucket count is non-zero, and the remainder is less than it so fits in a
        // usize.
        (hasher.finish() % self.bucket_count() as u64) as usize
    }
}

/// Logs a failed allocation for `operation` before converting the error.
fn report<E: Into<AllocFailed>>(operation: &'static str) -> impl FnOnce(E) -> AllocFailed {
    move |error| {
        warn!(operation, "allocation failed, StringMap left unchanged");
        error.into()
    }
}

impl<B: BuildHasher, C: BuildHasher> PartialEq<StringMap<C>> for StringMap<B> {
    /// StringMaps are equal when they contain the same entries, regardless of bucket count or
    /// hasher.
    fn eq(&self, other: &StringMap<C>) -> bool {
        self.len() == other.len()
            && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<B: BuildHasher> Eq for StringMap<B> {}

impl<B: BuildHasher + Debug> Debug for StringMap<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringMap")
            .field("buckets", &self.buckets)
            .field("len", &self.len)
            .field("bucket_count", &self.bucket_count())
            .field("hasher", &self.hasher)
            .finish()
    }
}

/// Lists the size and then every non-empty bucket on its own line, with entries in chain order.
/// Keys and values are written as they are, without escaping:
///
/// ```text
/// Size: 2
/// Bucket 3: ["age" => "26"] -> ["name" => "Alice"]
/// ```
impl<B: BuildHasher> Display for StringMap<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Size: {}", self.len)?;

        for (index, chain) in self.buckets.iter().enumerate() {
            if chain.is_empty() {
                continue;
            }

            write!(f, "Bucket {index}: ")?;
            for (position, entry) in chain.entries().enumerate() {
                if position > 0 {
                    write!(f, " -> ")?;
                }
                write!(f, "[\"{}\" => \"{}\"]", entry.key, entry.value)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
