//! Async block streaming.
//!
//! This module reads from a `futures-io::AsyncRead` straight into pooled
//! blocks, making it runtime-agnostic and compatible with tokio, async-std,
//! smol, and other async runtimes.
//!
//! - [`read_blocks`] - Creates an async stream of filled blocks from a reader
//!
//! This module requires the `async-io` feature to be enabled.

mod stream;

pub use stream::{BlockStream, read_blocks};
