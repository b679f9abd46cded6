//! A module containing [`StringMap`] and associated types.
//!
//! Other than the map itself, this module holds the iterators over its entries, keys and values
//! and [`AllocFailed`], the one error the map can produce.
//!
//! There is no mutable iterator over entries or keys because changing a key in place would leave
//! it in the wrong chain.
//!
//! [`StringMap`] is also re-exported under the parent module.

mod chain;
mod error;
mod iter;
mod string_map;

pub use error::*;
pub use iter::*;
pub use string_map::*;
