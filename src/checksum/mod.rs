//! Checksum collaborators over blocks, pools and contiguous buffers.
//!
//! Every function here only reads: it walks [`Segments`] in stream order and
//! folds the bytes into a running value. Cursors never move and no block is
//! recycled.
//!
//! - [`crc32`] - Running CRC-32 (zlib polynomial), feature `checksum`
//! - [`adler32`] - Running Adler-32, feature `checksum`
//! - [`blake3_digest`] - BLAKE3 digest, feature `hash-blake3`
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "checksum")]
//! # {
//! use blockbuf::BlockPool;
//! use blockbuf::checksum::crc32;
//!
//! let mut pool = BlockPool::new(2);
//! pool.write(b"123456789", true);
//! assert_eq!(crc32(0, &pool), 0xCBF4_3926);
//! # }
//! ```
//!
//! [`Segments`]: crate::Segments

#[cfg(feature = "checksum")]
mod adler32;
#[cfg(feature = "hash-blake3")]
mod blake3;
#[cfg(feature = "checksum")]
mod crc32;
#[cfg(feature = "hash-blake3")]
mod digest;

#[cfg(feature = "checksum")]
pub use adler32::{ADLER32_INIT, adler32};
#[cfg(feature = "hash-blake3")]
pub use self::blake3::{Blake3Hasher, blake3_digest};
#[cfg(feature = "checksum")]
pub use crc32::crc32;
#[cfg(feature = "hash-blake3")]
pub use digest::Digest;
