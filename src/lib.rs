//! blockbuf
//!
//! Chunked, pooled byte buffers for Rust.
//!
//! `blockbuf` stages a byte stream in a chain of fixed-capacity blocks and
//! recycles emptied blocks through a bounded, size-classed free list, so
//! repeated produce/consume cycles (read a file or socket, drain it
//! downstream) stop paying for allocation.
//!
//! - [`Block`] - fixed-capacity arena with read and write cursors
//! - [`BlockPool`] - growable chain of blocks with recycling, merging and
//!   cross-pool transfer
//! - [`ByteBuffer`] - single contiguous region that grows by doubling
//!
//! The crate intentionally:
//! - does NOT synchronize (wrap a pool in a lock to share it)
//! - does NOT persist or serialize buffers
//! - does NOT fail on short data: every sized operation returns the number
//!   of bytes it actually moved
//!
//! # Sync
//!
//! ```
//! use blockbuf::{BlockPool, Direction};
//!
//! let mut pool = BlockPool::new(1024);
//!
//! // Zero-copy producer: fill the tail block in place, then commit.
//! let region = pool.malloc(5);
//! region[..5].copy_from_slice(b"hello");
//! pool.skip(Direction::Write, 5);
//!
//! // Copying producer.
//! pool.write(b" world", true);
//!
//! let mut out = [0u8; 11];
//! assert_eq!(pool.read(&mut out, true), 11);
//! assert_eq!(&out, b"hello world");
//! assert_eq!(pool.free_len(), 1);
//! ```
//!
//! # Moving data between pools
//!
//! ```
//! use blockbuf::BlockPool;
//!
//! let mut a = BlockPool::new(64);
//! let mut b = BlockPool::new(64);
//! a.write(b"X", true);
//! b.write(b"Y", true);
//!
//! a.merge_from(&mut b); // blocks change owner, nothing is copied
//! assert_eq!(a.to_bytes(), "XY");
//! assert_eq!(b.size(), 0);
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use blockbuf::{read_blocks, PoolConfig};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead + Unpin>(reader: R) -> Result<(), blockbuf::BufferError> {
//!     let mut stream = read_blocks(reader, PoolConfig::default());
//!
//!     while let Some(block) = stream.next().await {
//!         let block = block?;
//!         println!("block {}", block.size());
//!         stream.recover(block);
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod block;
mod buffer;
mod byte_buffer;
mod config;
mod error;

pub mod checksum; // read-only collaborators
mod util; // internal helpers

#[cfg(feature = "async-io")]
mod async_stream;

//
// Public surface
//

pub use block::{Block, Direction};
pub use buffer::{BlockPool, Buffer, Segments};
pub use byte_buffer::ByteBuffer;
pub use config::{DEFAULT_MAX_FREE, DEFAULT_MIN_BLOCK_SIZE, MIN_BUFFER_CAPACITY, PoolConfig};
pub use error::BufferError;

#[cfg(feature = "async-io")]
pub use async_stream::{BlockStream, read_blocks};
