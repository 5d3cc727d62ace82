//! Bounded, capacity-sorted store of recycled blocks.

use std::collections::VecDeque;

use crate::block::Block;

/// Recycled empty blocks, ascending by capacity.
///
/// When the list grows past `max_free`, entries are evicted from the front,
/// so the smallest blocks are dropped first and the larger, more reusable
/// ones are retained.
#[derive(Debug)]
pub(crate) struct FreeList {
    blocks: VecDeque<Block>,
    max_free: usize,
}

impl FreeList {
    pub(crate) fn new(max_free: usize) -> Self {
        Self {
            blocks: VecDeque::new(),
            max_free,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.blocks.len()
    }

    pub(crate) fn max_free(&self) -> usize {
        self.max_free
    }

    /// Changes the bound, evicting immediately if the list is now too long.
    pub(crate) fn set_max_free(&mut self, max_free: usize) {
        self.max_free = max_free;
        self.enforce_bound();
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    /// Removes and returns the smallest block with at least `capacity` bytes.
    pub(crate) fn take_fit(&mut self, capacity: usize) -> Option<Block> {
        let idx = self.blocks.partition_point(|b| b.capacity() < capacity);
        self.blocks.remove(idx)
    }

    /// Resets `block` and inserts it before the first entry of equal or
    /// larger capacity.
    pub(crate) fn insert(&mut self, mut block: Block) {
        block.reset();
        let capacity = block.capacity();
        let idx = self.blocks.partition_point(|b| b.capacity() < capacity);
        tracing::trace!(capacity, slot = idx, "recycled block");
        self.blocks.insert(idx, block);
        self.enforce_bound();
    }

    fn enforce_bound(&mut self) {
        while self.blocks.len() > self.max_free {
            if let Some(evicted) = self.blocks.pop_front() {
                tracing::debug!(
                    capacity = evicted.capacity(),
                    max_free = self.max_free,
                    "evicted free block"
                );
            }
        }
    }
}
