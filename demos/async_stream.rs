//! Async block streaming example.
//!
//! Reads a file with tokio and receives it as filled pool blocks.
//!
//! Run with:
//!     cargo run --example async_stream --features async-io -- /path/to/file

use futures_util::StreamExt;
use tokio_util::compat::TokioAsyncReadCompatExt;

use blockbuf::{PoolConfig, read_blocks};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    let file = tokio::fs::File::open(&path).await?;
    let mut stream = read_blocks(file.compat(), PoolConfig::new(4096)?.with_max_free(4));

    let mut blocks = 0;
    let mut bytes = 0;
    while let Some(block) = stream.next().await {
        let block = block?;
        blocks += 1;
        bytes += block.size();
        println!("Block {}: {} of {} bytes", blocks, block.size(), block.capacity());
        stream.recover(block);
    }

    println!("\nTotal: {} blocks, {} bytes", blocks, bytes);
    println!("Blocks kept for reuse: {}", stream.pool().free_len());

    Ok(())
}
