use std::fmt::{self, Debug, Formatter};
use std::iter;

use super::AllocFailed;

pub(crate) type Link = Option<Box<Entry>>;

/// A single key-value pair, along with the link to the next entry in its chain.
pub(crate) struct Entry {
    pub key: String,
    pub value: String,
    pub next: Link,
}

/// Produces an owned copy of a string, failing instead of aborting when memory runs out.
pub(crate) type CopyFn = fn(&str) -> Result<String, AllocFailed>;

impl Entry {
    /// Allocates an unlinked entry holding copies of `key` and `value`, made with `copy`. Nothing is
    /// leaked if any of the three allocations fail.
    pub fn try_new_with(key: &str, value: &str, copy: CopyFn) -> Result<Box<Entry>, AllocFailed> {
        let key = copy(key)?;
        let value = copy(value)?;

        Ok(Box::try_new(Entry {
            key,
            value,
            next: None,
        })?)
    }
}

/// Copies `s` into a new String, returning an error rather than aborting if the allocation fails.
pub(crate) fn try_copy(s: &str) -> Result<String, AllocFailed> {
    let mut owned = String::new();
    owned.try_reserve_exact(s.len())?;
    owned.push_str(s);
    Ok(owned)
}

/// The owned head of a singly linked list of entries, one per bucket.
#[derive(Default)]
pub(crate) struct Chain {
    pub head: Link,
}

impl Chain {
    pub const fn new() -> Chain {
        Chain {
            head: None,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Counts the entries in the chain by walking it.
    pub fn len(&self) -> usize {
        self.entries().count()
    }

    /// Links `entry` in as the new head of the chain.
    pub fn push_front(&mut self, mut entry: Box<Entry>) {
        entry.next = self.head.take();
        self.head = Some(entry);
    }

    /// Unlinks and returns the head of the chain, if there is one.
    pub fn pop_front(&mut self) -> Option<Box<Entry>> {
        let mut entry = self.head.take()?;
        self.head = entry.next.take();
        Some(entry)
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        iter::successors(self.head.as_deref(), |entry| entry.next.as_deref())
    }

    pub fn find(&self, key: &str) -> Option<&Entry> {
        self.entries().find(|entry| entry.key == key)
    }

    pub fn find_mut(&mut self, key: &str) -> Option<&mut Entry> {
        let mut current = self.head.as_deref_mut();

        while let Some(entry) = current {
            if entry.key == key {
                return Some(entry);
            }
            current = entry.next.as_deref_mut();
        }

        None
    }

    /// Unlinks the entry with the provided `key` and returns it, repairing the link that pointed to
    /// it (the head included).
    pub fn unlink(&mut self, key: &str) -> Option<Box<Entry>> {
        // cursor always points at the link that would need to be rewritten.
        let mut cursor = &mut self.head;

        while cursor.as_ref().is_some_and(|entry| entry.key != key) {
            cursor = &mut cursor.as_mut()?.next;
        }

        let mut removed = cursor.take()?;
        *cursor = removed.next.take();
        Some(removed)
    }
}

// The default drop would recurse once per entry through the boxes, so long chains could overflow
// the stack.
impl Drop for Chain {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut entry) = link {
            link = entry.next.take();
        }
    }
}

impl Debug for Chain {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries().map(|entry| (&entry.key, &entry.value)))
            .finish()
    }
}
