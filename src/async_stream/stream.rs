//! Async stream adapter that fills pooled blocks.
//!
//! # Example
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
//!         println!("block: {} bytes", block.size());
//!         stream.recover(block);
//!     }
//!     Ok(())
//! }
//! ```

use std::io::ErrorKind;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::block::{Block, Direction};
use crate::buffer::BlockPool;
use crate::config::PoolConfig;
use crate::error::BufferError;

pin_project! {
    /// A stream of filled blocks read from an async reader.
    ///
    /// Bytes are read directly into block memory. A block is yielded as soon
    /// as it is full; the last, possibly partial, block is yielded at end of
    /// stream. Hand consumed blocks back with [`recover`](Self::recover) so
    /// later reads reuse them instead of allocating.
    pub struct BlockStream<R> {
        #[pin]
        reader: R,
        pool: BlockPool,
        finished: bool,
    }
}

impl<R> BlockStream<R> {
    /// Creates a new block stream from an async reader.
    pub fn new(reader: R, config: PoolConfig) -> Self {
        Self {
            reader,
            pool: BlockPool::with_config(config),
            finished: false,
        }
    }

    /// Returns a consumed block to the stream's free list.
    pub fn recover(&mut self, block: Block) {
        self.pool.recover(block);
    }

    /// Returns the pool backing the stream.
    pub fn pool(&self) -> &BlockPool {
        &self.pool
    }
}

impl<R: AsyncRead> Stream for BlockStream<R> {
    type Item = Result<Block, BufferError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.finished {
            return Poll::Ready(None);
        }

        loop {
            let region = this.pool.malloc_available();
            match this.reader.as_mut().poll_read(cx, region) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Err(e)) if e.kind() == ErrorKind::Interrupted => continue,
                Poll::Ready(Err(e)) => {
                    *this.finished = true;
                    this.pool.trim_tail();
                    return Poll::Ready(Some(Err(BufferError::Io(e))));
                }
                Poll::Ready(Ok(0)) => {
                    *this.finished = true;
                    this.pool.trim_tail();
                    return Poll::Ready(this.pool.pop().map(Ok));
                }
                Poll::Ready(Ok(n)) => {
                    this.pool.skip(Direction::Write, n);
                    let full = this.pool.blocks().last().is_some_and(|b| b.free() == 0);
                    if full {
                        if let Some(block) = this.pool.pop() {
                            return Poll::Ready(Some(Ok(block)));
                        }
                    }
                }
            }
        }
    }
}

/// Creates a block stream from an async reader.
///
/// Uses `futures_io::AsyncRead` for runtime-agnostic async I/O. For tokio
/// readers, convert with `tokio_util::compat`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use blockbuf::{read_blocks, PoolConfig};
///
/// let file = tokio::fs::File::open("file").await?;
/// let stream = read_blocks(file.compat(), PoolConfig::default());
/// ```
pub fn read_blocks<R: AsyncRead>(reader: R, config: PoolConfig) -> BlockStream<R> {
    BlockStream::new(reader, config)
}
