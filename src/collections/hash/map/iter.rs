use std::hash::BuildHasher;
use std::iter::FusedIterator;
use std::slice::{Iter as SliceIter, IterMut as SliceIterMut};
use std::vec::IntoIter as VecIntoIter;

use super::StringMap;
use super::chain::{Chain, Entry};

impl<B: BuildHasher> IntoIterator for StringMap<B> {
    type Item = (String, String);

    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            len: self.len,
            buckets: self.buckets.into_vec().into_iter(),
            current: Chain::new(),
        }
    }
}

/// An owned iterator over the entries of a [`StringMap`], in bucket order.
pub struct IntoIter {
    pub(crate) buckets: VecIntoIter<Chain>,
    pub(crate) current: Chain,
    pub(crate) len: usize,
}

impl Iterator for IntoIter {
    type Item = (String, String);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.pop_front() {
                self.len -= 1;
                let Entry { key, value, .. } = *entry;
                return Some((key, value));
            }

            // Replacing current drops the exhausted chain.
            self.current = self.buckets.next()?;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}

impl<'a, B: BuildHasher> IntoIterator for &'a mut StringMap<B> {
    type Item = (&'a str, &'a mut String);

    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            len: self.len,
            buckets: self.buckets.iter_mut(),
            entry: None,
        }
    }
}

/// An iterator over the entries of a [`StringMap`], with mutable access to the values.
pub struct IterMut<'a> {
    pub(crate) buckets: SliceIterMut<'a, Chain>,
    pub(crate) entry: Option<&'a mut Entry>,
    pub(crate) len: usize,
}

impl<'a> Iterator for IterMut<'a> {
    type Item = (&'a str, &'a mut String);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.entry.take() {
                // Split the borrow so that the value can be handed out while we hold on to next.
                let Entry { key, value, next } = entry;
                self.entry = next.as_deref_mut();
                self.len -= 1;
                return Some((key.as_str(), value));
            }

            let chain = self.buckets.next()?;
            self.entry = chain.head.as_deref_mut();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl ExactSizeIterator for IterMut<'_> {}

impl FusedIterator for IterMut<'_> {}

impl<'a, B: BuildHasher> IntoIterator for &'a StringMap<B> {
    type Item = (&'a str, &'a str);

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            len: self.len,
            buckets: self.buckets.iter(),
            entry: None,
        }
    }
}

/// A borrowed iterator over the entries of a [`StringMap`]. Entries come out bucket by bucket,
/// following chain order within each bucket, but no particular order should be relied upon.
#[derive(Clone)]
pub struct Iter<'a> {
    pub(crate) buckets: SliceIter<'a, Chain>,
    pub(crate) entry: Option<&'a Entry>,
    pub(crate) len: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.entry {
                self.entry = entry.next.as_deref();
                self.len -= 1;
                return Some((entry.key.as_str(), entry.value.as_str()));
            }

            self.entry = self.buckets.next()?.head.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

pub struct IntoKeys(
    pub(crate) IntoIter
);

impl Iterator for IntoKeys {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for IntoKeys {}

impl FusedIterator for IntoKeys {}

pub struct Keys<'a>(
    pub(crate) Iter<'a>
);

impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Keys<'_> {}

impl FusedIterator for Keys<'_> {}

pub struct IntoValues(
    pub(crate) IntoIter
);

impl Iterator for IntoValues {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for IntoValues {}

impl FusedIterator for IntoValues {}

pub struct ValuesMut<'a>(
    pub(crate) IterMut<'a>
);

impl<'a> Iterator for ValuesMut<'a> {
    type Item = &'a mut String;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for ValuesMut<'_> {}

impl FusedIterator for ValuesMut<'_> {}

pub struct Values<'a>(
    pub(crate) Iter<'a>
);

impl<'a> Iterator for Values<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Values<'_> {}

impl FusedIterator for Values<'_> {}
