//! The fixed-capacity block.
//!
//! A [`Block`] owns one byte arena that never grows. It keeps two cursors:
//! `head` (next byte to read) and `pos` (next byte to write), with
//! `0 <= head <= pos <= capacity`. Every sized operation clamps to what is
//! available and returns the number of bytes it actually moved.

use std::fmt;

/// Which cursor a [`skip`](Block::skip) advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Commit bytes that were written through a `malloc` slice.
    Write,
    /// Discard readable bytes without copying them.
    Read,
}

/// A fixed-capacity memory arena with independent read and write cursors.
///
/// # Example
///
/// ```
/// use blockbuf::{Block, Direction};
///
/// let mut block = Block::new(16);
/// assert_eq!(block.write(b"hello", true), 5);
///
/// // Zero-copy: fill the writable region, then commit.
/// let spare = block.malloc();
/// spare[..6].copy_from_slice(b" world");
/// block.skip(Direction::Write, 6);
///
/// assert_eq!(block.data(), b"hello world");
/// ```
pub struct Block {
    data: Box<[u8]>,
    head: usize,
    pos: usize,
}

impl Block {
    /// Creates a block owning `capacity` zeroed bytes.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "block capacity must be non-zero");
        Self {
            data: vec![0u8; capacity].into_boxed_slice(),
            head: 0,
            pos: 0,
        }
    }

    /// Returns the total number of bytes the block owns.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of bytes that can still be written.
    pub fn free(&self) -> usize {
        self.capacity() - self.pos
    }

    /// Returns the number of readable bytes.
    pub fn size(&self) -> usize {
        self.pos - self.head
    }

    /// Returns true if the block holds no readable bytes.
    pub fn is_empty(&self) -> bool {
        self.head == self.pos
    }

    /// Returns the readable bytes.
    pub fn data(&self) -> &[u8] {
        &self.data[self.head..self.pos]
    }

    /// Returns the writable region past the write cursor.
    ///
    /// Bytes written here are not visible to readers until committed with
    /// `skip(Direction::Write, n)`.
    pub fn malloc(&mut self) -> &mut [u8] {
        &mut self.data[self.pos..]
    }

    /// Rewinds both cursors to the start of the arena.
    pub fn reset(&mut self) {
        self.head = 0;
        self.pos = 0;
    }

    /// Advances one cursor by up to `length` bytes, returning the distance moved.
    pub fn skip(&mut self, direction: Direction, length: usize) -> usize {
        match direction {
            Direction::Write => {
                let n = length.min(self.free());
                self.pos += n;
                n
            }
            Direction::Read => {
                let n = length.min(self.size());
                self.head += n;
                n
            }
        }
    }

    /// Copies as much of `other`'s readable bytes as fit and commits them.
    ///
    /// `other` is left untouched.
    pub fn append(&mut self, other: &Block) -> usize {
        let n = self.write(other.data(), false);
        self.skip(Direction::Write, n)
    }

    /// Copies up to `free()` bytes from `src`.
    ///
    /// With `commit` false the bytes are staged past the write cursor without
    /// becoming readable.
    pub fn write(&mut self, src: &[u8], commit: bool) -> usize {
        let n = src.len().min(self.free());
        if n == 0 {
            return 0;
        }

        self.data[self.pos..self.pos + n].copy_from_slice(&src[..n]);
        if commit {
            self.pos += n;
        }
        n
    }

    /// Copies up to `size()` bytes into `dst`.
    ///
    /// With `commit` false this is a peek: the read cursor does not move.
    pub fn read(&mut self, dst: &mut [u8], commit: bool) -> usize {
        let n = self.peek(dst);
        if commit {
            self.head += n;
        }
        n
    }

    /// Copies up to `size()` bytes into `dst` without moving either cursor.
    pub(crate) fn peek(&self, dst: &mut [u8]) -> usize {
        let n = dst.len().min(self.size());
        dst[..n].copy_from_slice(&self.data[self.head..self.head + n]);
        n
    }

    /// Moves the readable bytes to offset 0, freeing the space before `head`.
    pub(crate) fn compact(&mut self) {
        if self.head == 0 {
            return;
        }
        self.data.copy_within(self.head..self.pos, 0);
        self.pos -= self.head;
        self.head = 0;
    }
}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Block")
            .field("capacity", &self.capacity())
            .field("size", &self.size())
            .field("free", &self.free())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let block = Block::new(8);
        assert_eq!(block.capacity(), 8);
        assert_eq!(block.free(), 8);
        assert_eq!(block.size(), 0);
        assert!(block.is_empty());
    }

    #[test]
    #[should_panic(expected = "block capacity must be non-zero")]
    fn test_zero_capacity_panics() {
        let _ = Block::new(0);
    }

    #[test]
    fn test_write_clamps_to_free() {
        let mut block = Block::new(4);
        assert_eq!(block.write(b"abcdef", true), 4);
        assert_eq!(block.data(), b"abcd");
        assert_eq!(block.free(), 0);
        assert_eq!(block.write(b"x", true), 0);
    }

    #[test]
    fn test_full_block_stays_full_after_read() {
        let mut block = Block::new(4);
        block.write(b"abcd", true);
        let mut out = [0u8; 4];
        assert_eq!(block.read(&mut out, true), 4);
        assert!(block.is_empty());
        // head moved but nothing can be written until reset
        assert_eq!(block.free(), 0);
        block.reset();
        assert_eq!(block.free(), 4);
    }

    #[test]
    fn test_read_clamps_to_size() {
        let mut block = Block::new(8);
        block.write(b"abc", true);
        let mut out = [0u8; 8];
        assert_eq!(block.read(&mut out, true), 3);
        assert_eq!(&out[..3], b"abc");
        assert_eq!(block.read(&mut out, true), 0);
    }

    #[test]
    fn test_uncommitted_write_then_skip() {
        let mut block = Block::new(8);
        assert_eq!(block.write(b"abc", false), 3);
        assert_eq!(block.size(), 0);
        assert_eq!(block.skip(Direction::Write, 3), 3);
        assert_eq!(block.data(), b"abc");
    }

    #[test]
    fn test_peek_read() {
        let mut block = Block::new(8);
        block.write(b"abc", true);
        let mut out = [0u8; 2];
        assert_eq!(block.read(&mut out, false), 2);
        assert_eq!(&out, b"ab");
        assert_eq!(block.size(), 3);
    }

    #[test]
    fn test_skip_clamps() {
        let mut block = Block::new(8);
        assert_eq!(block.skip(Direction::Write, 100), 8);
        assert_eq!(block.skip(Direction::Read, 3), 3);
        assert_eq!(block.skip(Direction::Read, 100), 5);
        assert_eq!(block.skip(Direction::Read, 1), 0);
    }

    #[test]
    fn test_append_copies_without_consuming() {
        let mut src = Block::new(8);
        src.write(b"56789", true);
        let mut dst = Block::new(8);
        dst.write(b"1234", true);

        assert_eq!(dst.append(&src), 4);
        assert_eq!(dst.data(), b"12345678");
        assert_eq!(src.data(), b"56789");
    }

    #[test]
    fn test_malloc_exposes_writable_region() {
        let mut block = Block::new(8);
        block.write(b"ab", true);
        let spare = block.malloc();
        assert_eq!(spare.len(), 6);
        spare[0] = b'c';
        block.skip(Direction::Write, 1);
        assert_eq!(block.data(), b"abc");
    }

    #[test]
    fn test_compact() {
        let mut block = Block::new(8);
        block.write(b"abcdef", true);
        block.skip(Direction::Read, 4);
        assert_eq!(block.free(), 2);
        block.compact();
        assert_eq!(block.data(), b"ef");
        assert_eq!(block.free(), 6);
    }
}
