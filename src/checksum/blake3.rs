//! BLAKE3 digest over buffer contents.

use super::Digest;
use crate::buffer::Segments;

/// An incremental BLAKE3 hasher that accepts whole buffers.
#[derive(Debug, Clone)]
pub struct Blake3Hasher {
    state: ::blake3::Hasher,
}

impl Blake3Hasher {
    /// Creates a new hasher.
    pub fn new() -> Self {
        Self {
            state: ::blake3::Hasher::new(),
        }
    }

    /// Creates a new hasher with a key for keyed hashing.
    pub fn new_keyed(key: &[u8; 32]) -> Self {
        Self {
            state: ::blake3::Hasher::new_keyed(key),
        }
    }

    /// Feeds the readable bytes of `src`, in stream order.
    pub fn update<S: Segments>(&mut self, src: &S) -> &mut Self {
        for segment in src.segments() {
            self.state.update(segment);
        }
        self
    }

    /// Returns the digest of everything fed so far.
    pub fn finalize(&self) -> Digest {
        Digest::new(self.state.finalize().into())
    }

    /// Resets the hasher to its initial state.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

impl Default for Blake3Hasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the BLAKE3 digest of the readable bytes of `src`.
pub fn blake3_digest<S: Segments>(src: &S) -> Digest {
    Blake3Hasher::new().update(src).finalize()
}
