//! File round trip example: fill a pool from a file, merge it into one
//! block, then drain it into a copy of the file.
//!
//! Run with:
//!     cargo run --example sync_file -- /path/to/file

use std::env;
use std::fs::File;

use blockbuf::checksum::crc32;
use blockbuf::{BlockPool, PoolConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    println!("Reading file: {}\n", path);

    let config = PoolConfig::new(20 * 1024)?.with_max_free(16);
    let mut pool = BlockPool::with_config(config);

    let read = pool.fill_from(File::open(&path)?)?;
    let crc = crc32(0, &pool);
    println!(
        "Read {} bytes into {} blocks, crc32={:08x}",
        read,
        pool.block_count(),
        crc
    );

    if let Some(block) = pool.merge() {
        println!("Merged into one block of {} bytes", block.capacity());
    }
    assert_eq!(crc32(0, &pool), crc, "merge must not change content");

    let copy = env::temp_dir().join("blockbuf_sync_file.copy");
    let written = pool.drain_to(File::create(&copy)?)?;
    println!("Wrote {} bytes to {}", written, copy.display());
    println!("Free blocks after drain: {}", pool.free_len());

    let mut check = BlockPool::with_config(config);
    check.fill_from(File::open(&copy)?)?;
    println!("Copy matches: {}", crc32(0, &check) == crc);

    Ok(())
}
