//! Chained block buffer with size-classed block recycling.

use std::collections::VecDeque;
use std::fmt;

use super::free_list::FreeList;
use super::{Buffer, Segments};
use crate::block::{Block, Direction};
use crate::config::{DEFAULT_MAX_FREE, PoolConfig};
use crate::util::round_up;

/// A growable byte stream backed by a chain of fixed-capacity blocks.
///
/// The pool owns two chains: the *active* chain, whose readable windows
/// concatenated in order form the stream content, and a bounded *free list*
/// of recycled blocks sorted by capacity. Writes grow the active chain on
/// demand with blocks whose capacity is a multiple of `min_block_size`;
/// reads and skips shrink it and hand emptied blocks back to the free list.
///
/// The pool is single-threaded. Blocks move between pools only through
/// explicit ownership transfers ([`push`](Self::push), [`pop`](Self::pop),
/// [`merge_from`](Self::merge_from), [`drain_from`](Self::drain_from)).
///
/// # Example
///
/// ```
/// use blockbuf::BlockPool;
///
/// let mut pool = BlockPool::new(4);
/// assert_eq!(pool.write(b"hello world", true), 11);
/// assert_eq!(pool.size(), 11);
///
/// let mut out = [0u8; 5];
/// assert_eq!(pool.read(&mut out, true), 5);
/// assert_eq!(&out, b"hello");
/// assert_eq!(pool.size(), 6);
/// ```
pub struct BlockPool {
    active: VecDeque<Block>,
    free: FreeList,
    min_block_size: usize,
}

impl BlockPool {
    /// Creates an empty pool with the given size-class granularity.
    ///
    /// # Panics
    ///
    /// Panics if `min_block_size` is zero.
    pub fn new(min_block_size: usize) -> Self {
        Self::with_config(
            PoolConfig::default()
                .with_min_block_size(min_block_size)
                .with_max_free(DEFAULT_MAX_FREE),
        )
    }

    /// Creates a pool from a configuration, pre-warming its free list.
    ///
    /// # Panics
    ///
    /// Panics if the configured `min_block_size` is zero. Use
    /// [`PoolConfig::validate`] first when the value is not trusted.
    pub fn with_config(config: PoolConfig) -> Self {
        let min_block_size = config.min_block_size();
        assert!(min_block_size > 0, "min_block_size must be non-zero");

        let mut pool = Self {
            active: VecDeque::new(),
            free: FreeList::new(config.max_free()),
            min_block_size,
        };
        for _ in 0..config.prewarm() {
            pool.free.insert(Block::new(min_block_size));
        }
        pool
    }

    /// Returns the size-class granularity.
    pub fn min_block_size(&self) -> usize {
        self.min_block_size
    }

    /// Returns the free list bound.
    pub fn max_free(&self) -> usize {
        self.free.max_free()
    }

    /// Changes the free list bound, evicting the smallest blocks if needed.
    pub fn set_max_free(&mut self, max_free: usize) {
        self.free.set_max_free(max_free);
    }

    /// Rounds `size` up to this pool's size class.
    pub fn round_up(&self, size: usize) -> usize {
        round_up(size, self.min_block_size)
    }

    /// Returns the total number of readable bytes in the active chain.
    pub fn size(&self) -> usize {
        self.active.iter().map(Block::size).sum()
    }

    /// Returns true if no bytes are readable.
    pub fn is_empty(&self) -> bool {
        self.active.iter().all(Block::is_empty)
    }

    /// Returns the number of blocks in the active chain.
    pub fn block_count(&self) -> usize {
        self.active.len()
    }

    /// Returns the number of blocks on the free list.
    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    /// Iterates the active chain in stream order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.active.iter()
    }

    /// Iterates the free list in ascending capacity order.
    pub fn free_blocks(&self) -> impl Iterator<Item = &Block> {
        self.free.iter()
    }

    /// Recycles every active block, leaving the pool empty.
    pub fn clear(&mut self) {
        while let Some(block) = self.active.pop_front() {
            self.free.insert(block);
        }
    }

    /// Takes a block with at least `capacity` bytes and appends it to the
    /// active chain.
    ///
    /// The smallest fitting free block is reused; otherwise a new block of
    /// [`round_up(capacity)`](Self::round_up) bytes is created.
    pub fn allocate(&mut self, capacity: usize) -> &mut Block {
        let block = self.pop_free(capacity);
        let idx = self.active.len();
        self.active.push_back(block);
        &mut self.active[idx]
    }

    /// Takes a block with at least `capacity` bytes without adding it to the
    /// active chain.
    ///
    /// The caller owns the block and can fill it before handing it over with
    /// [`push`](Self::push), or give it back with [`recover`](Self::recover).
    pub fn pop_free(&mut self, capacity: usize) -> Block {
        if let Some(block) = self.free.take_fit(capacity) {
            return block;
        }

        let rounded = self.round_up(capacity);
        tracing::trace!(requested = capacity, capacity = rounded, "allocated block");
        Block::new(rounded)
    }

    /// Resets `block` and returns it to the free list.
    pub fn recover(&mut self, block: Block) {
        self.free.insert(block);
    }

    /// Appends an externally owned block to the tail of the active chain.
    pub fn push(&mut self, block: Block) {
        self.active.push_back(block);
    }

    /// Removes the front block of the active chain and hands it to the caller.
    ///
    /// The free list is not touched.
    pub fn pop(&mut self) -> Option<Block> {
        self.active.pop_front()
    }

    /// Returns the writable region of a tail block with at least `size` free
    /// bytes, allocating one if the current tail is too small.
    ///
    /// Nothing becomes readable until committed with
    /// `skip(Direction::Write, n)`.
    pub fn malloc(&mut self, size: usize) -> &mut [u8] {
        let fits = self.active.back().is_some_and(|tail| tail.free() >= size);
        if !fits {
            self.allocate(size);
        }
        self.tail_region()
    }

    /// Returns whatever writable region the tail block has, allocating one
    /// size class if the chain is empty or the tail is full.
    pub fn malloc_available(&mut self) -> &mut [u8] {
        self.malloc(1)
    }

    fn tail_region(&mut self) -> &mut [u8] {
        match self.active.back_mut() {
            Some(tail) => tail.malloc(),
            None => Default::default(),
        }
    }

    /// Writes `src` into the chain.
    ///
    /// With `commit` true the bytes are appended and immediately readable;
    /// the chain grows by as many blocks as needed, so the full length is
    /// always returned.
    ///
    /// With `commit` false the bytes are staged in the tail block's writable
    /// region only. The chain does not grow past the tail (a first block is
    /// allocated if the chain is empty), so the write is short when the tail
    /// lacks room. Commit staged bytes with `skip(Direction::Write, n)`.
    pub fn write(&mut self, src: &[u8], commit: bool) -> usize {
        if src.is_empty() {
            return 0;
        }

        if !commit {
            if self.active.is_empty() {
                self.allocate(src.len());
            }
            return match self.active.back_mut() {
                Some(tail) => tail.write(src, false),
                None => 0,
            };
        }

        let mut written = match self.active.back_mut() {
            Some(tail) => tail.write(src, true),
            None => 0,
        };
        while written < src.len() {
            let rest = &src[written..];
            written += self.allocate(rest.len()).write(rest, true);
        }
        written
    }

    /// Copies up to `dst.len()` bytes from the front of the chain.
    ///
    /// With `commit` true the bytes are consumed and every block emptied
    /// along the way is recycled. With `commit` false nothing moves.
    pub fn read(&mut self, dst: &mut [u8], commit: bool) -> usize {
        if !commit {
            return self.peek(dst);
        }

        let mut copied = 0;
        while copied < dst.len() {
            let Some(front) = self.active.front_mut() else {
                break;
            };
            copied += front.read(&mut dst[copied..], true);
            if front.is_empty() {
                self.recycle_front();
            }
        }
        copied
    }

    fn peek(&self, dst: &mut [u8]) -> usize {
        let mut copied = 0;
        for block in &self.active {
            if copied == dst.len() {
                break;
            }
            copied += block.peek(&mut dst[copied..]);
        }
        copied
    }

    /// Advances a cursor without copying.
    ///
    /// `Direction::Write` commits bytes previously written through
    /// [`malloc`](Self::malloc) into the tail block. `Direction::Read`
    /// discards bytes from the front, recycling emptied blocks.
    pub fn skip(&mut self, direction: Direction, length: usize) -> usize {
        match direction {
            Direction::Write => self
                .active
                .back_mut()
                .map_or(0, |tail| tail.skip(Direction::Write, length)),
            Direction::Read => {
                let mut skipped = 0;
                while skipped < length {
                    let Some(front) = self.active.front_mut() else {
                        break;
                    };
                    skipped += front.skip(Direction::Read, length - skipped);
                    if front.is_empty() {
                        self.recycle_front();
                    }
                }
                skipped
            }
        }
    }

    fn recycle_front(&mut self) {
        if let Some(block) = self.active.pop_front() {
            self.free.insert(block);
        }
    }

    /// Defragments the active chain into a single block.
    ///
    /// If the front block is large enough to hold everything it is compacted
    /// and reused; otherwise a block of the rounded total size is taken from
    /// the free list or allocated. All other blocks are copied in and
    /// recycled. Returns the resulting block, or `None` if there was nothing
    /// readable (any empty blocks are recycled).
    pub fn merge(&mut self) -> Option<&Block> {
        let total = self.size();
        if total == 0 {
            self.clear();
            return None;
        }

        let merged = self.active.len();
        let mut dest = self.active.pop_front()?;
        if dest.capacity() >= total {
            dest.compact();
        } else {
            let front = dest;
            dest = self.pop_free(total);
            dest.append(&front);
            self.free.insert(front);
        }

        while let Some(block) = self.active.pop_front() {
            dest.append(&block);
            self.free.insert(block);
        }

        tracing::debug!(total, blocks = merged, capacity = dest.capacity(), "merged chain");
        self.active.push_back(dest);
        self.active.back()
    }

    /// Moves every block of `other`'s active chain onto the end of this one.
    ///
    /// No bytes are copied: the blocks change owner. `other` keeps its free
    /// list. Returns the number of readable bytes moved.
    pub fn merge_from(&mut self, other: &mut BlockPool) -> usize {
        let moved = other.size();
        self.active.append(&mut other.active);
        moved
    }

    /// Copies `other`'s readable bytes onto the end of this chain.
    ///
    /// `other` is left unchanged. Returns the number of bytes copied.
    pub fn append_from(&mut self, other: &BlockPool) -> usize {
        let mut copied = 0;
        for block in other.active.iter().filter(|b| !b.is_empty()) {
            copied += self.write(block.data(), true);
        }
        copied
    }

    /// Drains `other` into this chain, recycling each drained block into
    /// `other`'s free list.
    ///
    /// Afterwards `other` has no readable bytes but keeps warm blocks for its
    /// next fill. Returns the number of bytes copied.
    pub fn drain_from(&mut self, other: &mut BlockPool) -> usize {
        let mut copied = 0;
        while let Some(block) = other.pop() {
            copied += self.write(block.data(), true);
            other.recover(block);
        }
        copied
    }

    /// Pushes `block` back onto the front of the active chain.
    pub(crate) fn unpop(&mut self, block: Block) {
        self.active.push_front(block);
    }

    /// Recycles the tail block if nothing was ever written into it.
    pub(crate) fn trim_tail(&mut self) {
        let unused = self
            .active
            .back()
            .is_some_and(|tail| tail.is_empty() && tail.free() == tail.capacity());
        if !unused {
            return;
        }
        if let Some(block) = self.active.pop_back() {
            self.free.insert(block);
        }
    }
}

impl Default for BlockPool {
    fn default() -> Self {
        Self::with_config(PoolConfig::default())
    }
}

impl fmt::Debug for BlockPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockPool")
            .field("min_block_size", &self.min_block_size)
            .field("active", &self.active)
            .field("free", &self.free)
            .finish()
    }
}

impl Buffer for BlockPool {
    fn write(&mut self, src: &[u8], commit: bool) -> usize {
        BlockPool::write(self, src, commit)
    }

    fn read(&mut self, dst: &mut [u8], commit: bool) -> usize {
        BlockPool::read(self, dst, commit)
    }

    fn skip(&mut self, direction: Direction, length: usize) -> usize {
        BlockPool::skip(self, direction, length)
    }

    fn len(&self) -> usize {
        self.size()
    }

    fn is_empty(&self) -> bool {
        BlockPool::is_empty(self)
    }
}

impl Segments for BlockPool {
    fn segments(&self) -> impl Iterator<Item = &[u8]> {
        self.active.iter().map(Block::data)
    }
}
