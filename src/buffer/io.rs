//! I/O adapters for [`BlockPool`].
//!
//! Producers fill the pool straight into block memory through
//! [`malloc_available`](BlockPool::malloc_available), and consumers drain it
//! block by block, so neither direction needs an intermediate copy.

use std::io::{self, ErrorKind, Read, Write};

use bytes::{Buf, Bytes, BytesMut};

use super::{BlockPool, Segments};
use crate::block::Direction;
use crate::error::BufferError;

impl BlockPool {
    /// Reads from `reader` until end of stream, writing directly into block
    /// memory. Returns the number of bytes ingested.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Io`] if the reader fails. Bytes ingested before
    /// the failure stay in the pool.
    ///
    /// # Example
    ///
    /// ```
    /// use blockbuf::BlockPool;
    ///
    /// let mut pool = BlockPool::new(4);
    /// let n = pool.fill_from(&b"streamed input"[..])?;
    /// assert_eq!(n, 14);
    /// assert_eq!(pool.size(), 14);
    /// # Ok::<(), blockbuf::BufferError>(())
    /// ```
    pub fn fill_from<R: Read>(&mut self, mut reader: R) -> Result<usize, BufferError> {
        let mut total = 0;
        loop {
            let region = self.malloc_available();
            match reader.read(region) {
                Ok(0) => break,
                Ok(n) => {
                    total += self.skip(Direction::Write, n);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.trim_tail();
                    return Err(e.into());
                }
            }
        }
        self.trim_tail();
        tracing::trace!(bytes = total, "filled from reader");
        Ok(total)
    }

    /// Writes every readable byte to `writer`, recycling each block once it
    /// has been written. Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Io`] if the writer fails. The block that was
    /// being written is put back at the front of the chain, so nothing is
    /// lost.
    pub fn drain_to<W: Write>(&mut self, mut writer: W) -> Result<usize, BufferError> {
        let mut total = 0;
        while let Some(block) = self.pop() {
            if let Err(e) = writer.write_all(block.data()) {
                self.unpop(block);
                return Err(e.into());
            }
            total += block.size();
            self.recover(block);
        }
        writer.flush()?;
        Ok(total)
    }

    /// Copies the readable bytes into a contiguous [`Bytes`] without
    /// consuming them.
    pub fn to_bytes(&self) -> Bytes {
        let mut out = BytesMut::with_capacity(self.size());
        for segment in self.segments() {
            out.extend_from_slice(segment);
        }
        out.freeze()
    }
}

impl Write for BlockPool {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(BlockPool::write(self, buf, true))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Read for BlockPool {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(BlockPool::read(self, buf, true))
    }
}

impl Buf for BlockPool {
    fn remaining(&self) -> usize {
        self.size()
    }

    fn chunk(&self) -> &[u8] {
        self.segments()
            .find(|segment| !segment.is_empty())
            .unwrap_or_default()
    }

    fn advance(&mut self, cnt: usize) {
        let skipped = self.skip(Direction::Read, cnt);
        assert_eq!(skipped, cnt, "cannot advance past the end of the pool");
    }
}
