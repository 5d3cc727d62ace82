//! Pooled block chains and the traits shared by every buffer strategy.
//!
//! - [`BlockPool`] - Growable byte stream over a chain of recycled blocks
//! - [`Buffer`] - Write/read/skip surface common to blocks, pools and
//!   [`ByteBuffer`](crate::ByteBuffer)
//! - [`Segments`] - Read-only view of the readable bytes as ordered slices

mod free_list;
mod io;
mod pool;

pub use pool::BlockPool;

use crate::block::{Block, Direction};

/// A byte stream that can be written, read and skipped.
///
/// Every sized operation clamps instead of failing: the return value is the
/// number of bytes actually moved, and callers must treat it as
/// authoritative.
pub trait Buffer {
    /// Copies bytes from `src`, returning how many were accepted.
    ///
    /// With `commit` false the bytes are staged but not yet readable.
    fn write(&mut self, src: &[u8], commit: bool) -> usize;

    /// Copies readable bytes into `dst`, returning how many were copied.
    ///
    /// With `commit` false nothing is consumed.
    fn read(&mut self, dst: &mut [u8], commit: bool) -> usize;

    /// Advances a cursor without copying, returning the distance moved.
    fn skip(&mut self, direction: Direction, length: usize) -> usize;

    /// Returns the number of readable bytes.
    fn len(&self) -> usize;

    /// Returns true if nothing is readable.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read-only access to the readable bytes as an ordered run of slices.
///
/// This is what checksum collaborators fold over. Implementations must
/// yield slices in stream order and must not consume anything.
pub trait Segments {
    /// Returns the readable slices in stream order.
    fn segments(&self) -> impl Iterator<Item = &[u8]>;
}

impl Buffer for Block {
    fn write(&mut self, src: &[u8], commit: bool) -> usize {
        Block::write(self, src, commit)
    }

    fn read(&mut self, dst: &mut [u8], commit: bool) -> usize {
        Block::read(self, dst, commit)
    }

    fn skip(&mut self, direction: Direction, length: usize) -> usize {
        Block::skip(self, direction, length)
    }

    fn len(&self) -> usize {
        self.size()
    }
}

impl Segments for Block {
    fn segments(&self) -> impl Iterator<Item = &[u8]> {
        std::iter::once(self.data())
    }
}
