//! Configuration for pooled buffers.
//!
//! - [`PoolConfig`] - Size class, free-list bound and pre-warming for a
//!   [`BlockPool`](crate::BlockPool)
//!
//! # Example
//!
//! ```
//! use blockbuf::{BlockPool, PoolConfig};
//!
//! let config = PoolConfig::new(4096)?
//!     .with_max_free(32)
//!     .with_prewarm(4);
//! let pool = BlockPool::with_config(config);
//! assert_eq!(pool.free_len(), 4);
//! # Ok::<(), blockbuf::BufferError>(())
//! ```

use crate::error::BufferError;

/// Default size-class granularity (1 KiB).
pub const DEFAULT_MIN_BLOCK_SIZE: usize = 1024;

/// Default number of recycled blocks kept on a pool's free list.
pub const DEFAULT_MAX_FREE: usize = 10;

/// Smallest capacity a [`ByteBuffer`](crate::ByteBuffer) is created with.
pub const MIN_BUFFER_CAPACITY: usize = 8;

/// Configuration for a [`BlockPool`](crate::BlockPool).
///
/// Every block the pool allocates has a capacity that is a multiple of
/// `min_block_size`, so recycled blocks fall into a small set of size
/// classes and can be reused by later requests.
///
/// `prewarm` blocks of one size class each are placed on the free list when
/// the pool is built. If `prewarm` exceeds `max_free`, the bound is raised to
/// `prewarm` so none of them are evicted straight away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolConfig {
    /// Size-class granularity in bytes.
    min_block_size: usize,

    /// Upper bound on the free list length.
    max_free: usize,

    /// Number of blocks allocated up front.
    prewarm: usize,
}

impl PoolConfig {
    /// Creates a new configuration with the given size class.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidConfig`] if `min_block_size` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use blockbuf::PoolConfig;
    ///
    /// let config = PoolConfig::new(512)?;
    /// assert_eq!(config.min_block_size(), 512);
    /// assert!(PoolConfig::new(0).is_err());
    /// # Ok::<(), blockbuf::BufferError>(())
    /// ```
    pub fn new(min_block_size: usize) -> Result<Self, BufferError> {
        if min_block_size == 0 {
            return Err(BufferError::InvalidConfig {
                message: "min_block_size must be non-zero",
            });
        }

        Ok(Self {
            min_block_size,
            ..Self::default()
        })
    }

    /// Sets the size-class granularity.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`PoolConfig::validate`] to check it.
    pub fn with_min_block_size(mut self, size: usize) -> Self {
        self.min_block_size = size;
        self
    }

    /// Sets the free list bound.
    pub fn with_max_free(mut self, max_free: usize) -> Self {
        self.max_free = max_free;
        self
    }

    /// Sets how many blocks are allocated onto the free list up front.
    pub fn with_prewarm(mut self, count: usize) -> Self {
        self.prewarm = count;
        self
    }

    /// Returns the size-class granularity.
    pub fn min_block_size(&self) -> usize {
        self.min_block_size
    }

    /// Returns the free list bound, raised to cover `prewarm`.
    pub fn max_free(&self) -> usize {
        self.max_free.max(self.prewarm)
    }

    /// Returns the pre-warm count.
    pub fn prewarm(&self) -> usize {
        self.prewarm
    }

    /// Validates the current configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use blockbuf::PoolConfig;
    ///
    /// let config = PoolConfig::default().with_min_block_size(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), BufferError> {
        Self::new(self.min_block_size).map(|_| ())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            min_block_size: DEFAULT_MIN_BLOCK_SIZE,
            max_free: DEFAULT_MAX_FREE,
            prewarm: 0,
        }
    }
}
