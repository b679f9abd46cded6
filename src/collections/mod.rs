//! Collection types.
//!
//! # Purpose
//! At the moment this only holds hash-based collections, namely
//! [`StringMap`](hash::StringMap) and the hashing pieces it is built on.

#[cfg(feature = "hash")]
#[doc(cfg(feature = "hash"))]
pub mod hash;
