use std::hash::{BuildHasher, Hasher};

/// The starting state of a djb2 hash.
pub const DJB2_SEED: u64 = 5381;

/// Hashes the provided `bytes` with djb2, folding each byte into the state as `h * 33 + byte`.
/// Arithmetic wraps on overflow.
///
/// There is no resistance to deliberate collisions here, don't use this for keys chosen by an
/// adversary.
pub const fn djb2(bytes: &[u8]) -> u64 {
    let mut hash = DJB2_SEED;
    let mut i = 0;
    while i < bytes.len() {
        hash = fold(hash, bytes[i]);
        i += 1;
    }
    hash
}

const fn fold(hash: u64, byte: u8) -> u64 {
    // (hash << 5) + hash == hash * 33
    hash.wrapping_mul(33).wrapping_add(byte as u64)
}

/// A [`Hasher`] applying djb2 to everything written to it.
///
/// Note that hashing a [`str`] through [`Hash`](std::hash::Hash) writes a trailing `0xff` byte,
/// so the result differs from [`djb2`] on the same string. [`StringMap`](super::StringMap) writes
/// the raw bytes instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Djb2Hasher {
    state: u64,
}

impl Djb2Hasher {
    /// Creates a new Djb2Hasher starting from [`DJB2_SEED`].
    pub const fn new() -> Djb2Hasher {
        Djb2Hasher {
            state: DJB2_SEED,
        }
    }
}

impl Default for Djb2Hasher {
    fn default() -> Self {
        Djb2Hasher::new()
    }
}

impl Hasher for Djb2Hasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state = fold(self.state, *byte);
        }
    }
}

/// The [`BuildHasher`] for [`Djb2Hasher`], used by default in [`StringMap`](super::StringMap).
/// Unlike [`RandomState`](std::hash::RandomState), it is deterministic across runs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Djb2State;

impl BuildHasher for Djb2State {
    type Hasher = Djb2Hasher;

    fn build_hasher(&self) -> Self::Hasher {
        Djb2Hasher::new()
    }
}
