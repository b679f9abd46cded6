use std::alloc::AllocError;
use std::collections::TryReserveError;

use derive_more::{Display, Error};

/// The global allocator couldn't provide memory for a [`StringMap`](super::StringMap) operation.
/// The map is left unchanged when this is returned.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Unable to allocate memory for StringMap!")]
pub struct AllocFailed;

impl From<AllocError> for AllocFailed {
    fn from(_: AllocError) -> Self {
        AllocFailed
    }
}

// Covers capacity overflow as well as the allocator itself failing, both mean the memory can't be
// had.
impl From<TryReserveError> for AllocFailed {
    fn from(_: TryReserveError) -> Self {
        AllocFailed
    }
}
