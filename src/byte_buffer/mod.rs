//! Contiguous growable buffer.
//!
//! [`ByteBuffer`] is the simple alternative to [`BlockPool`](crate::BlockPool):
//! one region, head/tail cursors, doubling growth, no chaining and no
//! recycling. Use it when the readable bytes must stay contiguous, for
//! example to decode a fixed-layout record in place.

use bytes::Bytes;

use crate::block::Direction;
use crate::buffer::{Buffer, Segments};
use crate::config::MIN_BUFFER_CAPACITY;

/// A single growable byte region with head and tail cursors.
///
/// # Example
///
/// ```
/// use blockbuf::ByteBuffer;
///
/// let mut buf = ByteBuffer::default();
/// buf.write(b"1234", true);
/// buf.write(b"1234567890", true);
/// assert_eq!(buf.capacity(), 16);
/// assert_eq!(buf.data(), b"12341234567890");
/// ```
#[derive(Debug, Clone)]
pub struct ByteBuffer {
    data: Vec<u8>,
    head: usize,
    tail: usize,
    /// Uncommitted bytes past `tail` from the last staging write.
    staged: usize,
}

impl ByteBuffer {
    /// Creates a buffer with at least `capacity` bytes (never below 8).
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0u8; capacity.max(MIN_BUFFER_CAPACITY)],
            head: 0,
            tail: 0,
            staged: 0,
        }
    }

    /// Returns the size of the region.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of readable bytes.
    pub fn size(&self) -> usize {
        self.tail - self.head
    }

    /// Returns the number of bytes writable without growing.
    pub fn free(&self) -> usize {
        self.capacity() - self.tail
    }

    /// Returns true if nothing is readable.
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Returns the readable bytes.
    pub fn data(&self) -> &[u8] {
        &self.data[self.head..self.tail]
    }

    /// Returns the writable region past the tail cursor.
    ///
    /// Commit bytes written here with `skip(Direction::Write, n)`.
    pub fn spare(&mut self) -> &mut [u8] {
        &mut self.data[self.tail..]
    }

    /// Returns the first `len` readable bytes if they are all resident.
    ///
    /// This is the entry point for decoding a fixed-size record straight out
    /// of the buffer. A `len` of zero still requires one readable byte.
    pub fn contiguous(&self, len: usize) -> Option<&[u8]> {
        if self.size() < len.max(1) {
            return None;
        }
        Some(&self.data[self.head..self.head + len])
    }

    /// Zeroes the whole region and resets both cursors.
    pub fn zero(&mut self) {
        self.data.fill(0);
        self.head = 0;
        self.tail = 0;
        self.staged = 0;
    }

    /// Copies `src` in, growing the region if needed. Always accepts the
    /// full length.
    ///
    /// With `commit` false the bytes land past the tail but are not yet
    /// readable. They stay staged, and move with the cursors if a read
    /// drains the buffer, until committed with `skip(Direction::Write, n)`
    /// or overwritten by the next write.
    pub fn write(&mut self, src: &[u8], commit: bool) -> usize {
        if self.free() < src.len() {
            self.grow(self.size() + src.len());
        }

        self.data[self.tail..self.tail + src.len()].copy_from_slice(src);
        if commit {
            self.tail += src.len();
            self.staged = 0;
        } else {
            self.staged = src.len();
        }
        src.len()
    }

    /// Copies up to `dst.len()` readable bytes into `dst`.
    ///
    /// Once everything has been read both cursors rewind to 0 so the whole
    /// region is reused without reallocating.
    pub fn read(&mut self, dst: &mut [u8], commit: bool) -> usize {
        let n = dst.len().min(self.size());
        dst[..n].copy_from_slice(&self.data[self.head..self.head + n]);
        if commit {
            self.head += n;
        }
        self.rewind_if_drained();
        n
    }

    /// Advances a cursor by up to `length` bytes without copying.
    pub fn skip(&mut self, direction: Direction, length: usize) -> usize {
        let n = match direction {
            Direction::Write => {
                let n = length.min(self.free());
                self.tail += n;
                self.staged = self.staged.saturating_sub(n);
                n
            }
            Direction::Read => {
                let n = length.min(self.size());
                self.head += n;
                n
            }
        };
        self.rewind_if_drained();
        n
    }

    /// Copies the readable bytes into a [`Bytes`] without consuming them.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(self.data())
    }

    fn rewind_if_drained(&mut self) {
        if self.head == self.tail {
            let staged = self.tail..self.tail + self.staged;
            self.data.copy_within(staged, 0);
            self.head = 0;
            self.tail = 0;
        }
    }

    /// Makes room for `required` live bytes starting at offset 0.
    ///
    /// Compacts in place when the region is already big enough, otherwise
    /// doubles until it fits and moves the live bytes into the new region.
    fn grow(&mut self, required: usize) {
        let size = self.size();
        if self.capacity() >= required {
            self.data.copy_within(self.head..self.tail, 0);
        } else {
            let mut capacity = self.capacity();
            while capacity < required {
                capacity *= 2;
            }
            let mut data = vec![0u8; capacity];
            data[..size].copy_from_slice(self.data());
            tracing::trace!(from = self.capacity(), to = capacity, "grew byte buffer");
            self.data = data;
        }
        self.head = 0;
        self.tail = size;
    }
}

impl Default for ByteBuffer {
    fn default() -> Self {
        Self::new(MIN_BUFFER_CAPACITY)
    }
}

impl Buffer for ByteBuffer {
    fn write(&mut self, src: &[u8], commit: bool) -> usize {
        ByteBuffer::write(self, src, commit)
    }

    fn read(&mut self, dst: &mut [u8], commit: bool) -> usize {
        ByteBuffer::read(self, dst, commit)
    }

    fn skip(&mut self, direction: Direction, length: usize) -> usize {
        ByteBuffer::skip(self, direction, length)
    }

    fn len(&self) -> usize {
        self.size()
    }
}

impl Segments for ByteBuffer {
    fn segments(&self) -> impl Iterator<Item = &[u8]> {
        std::iter::once(self.data())
    }
}
