//! A small collections crate built around [`StringMap`](collections::hash::StringMap), a map of
//! owned string keys to owned string values.
//!
//! # Purpose
//! The map is a textbook separately chained hash table: a bucket array of fixed size, where each
//! bucket holds the head of a singly linked chain of entries. It is deliberately simple. There is
//! no resizing, so once the number of entries outgrows the number of buckets, lookups turn into
//! linear scans of the chains. [`StringMap::load_factor`](collections::hash::StringMap::load_factor)
//! is there so that callers can keep an eye on this.
//!
//! # Method
//! Keys are hashed with djb2 by default (see [`Djb2State`](collections::hash::Djb2State)), but any
//! [`BuildHasher`](std::hash::BuildHasher) can be supplied. Entries are owned boxes linked through
//! `Option<Box<_>>`, so the map owns everything it stores and releases each entry exactly once,
//! either on removal or when the map is dropped.
//!
//! # Error Handling
//! The only thing that can go wrong is running out of memory. Rather than aborting the process,
//! every allocation the map makes is fallible and failures are surfaced as
//! [`AllocFailed`](collections::hash::AllocFailed). When an operation fails, the map is left
//! exactly as it was. Looking up or removing a missing key isn't an error, it just returns
//! [`None`].
//!
//! # Logging
//! The crate emits [`tracing`] events (mostly at `trace` level) but never installs a subscriber,
//! that is left to the binary using it.
//!
//! # Dependencies
//! Fallible boxing relies on the nightly `allocator_api` feature. Error types derive their
//! boilerplate through `derive_more`.
#![feature(allocator_api)]
#![feature(doc_cfg)]

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
#[doc(cfg(feature = "collections"))]
pub mod collections;

pub(crate) mod util;
