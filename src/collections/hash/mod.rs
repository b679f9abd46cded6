//! Hash-based collections, along with the djb2 hash they use by default.

pub mod djb2;
pub mod map;

#[doc(inline)]
pub use djb2::{Djb2Hasher, Djb2State};
#[doc(inline)]
pub use map::{AllocFailed, StringMap};
