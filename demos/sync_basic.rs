//! Basic pool usage example.
//!
//! Run with:
//!     cargo run --example sync_basic

use blockbuf::{BlockPool, ByteBuffer, Direction};

fn main() {
    let mut pool = BlockPool::new(8);

    // Copying writes split across size-classed blocks
    pool.write(b"this is buff 1", true);
    println!(
        "after write:  {} bytes in {} blocks",
        pool.size(),
        pool.block_count()
    );
    println!("{:?}\n", pool);

    // Zero-copy producer: fill the tail in place, then commit
    let region = pool.malloc(6);
    region[..6].copy_from_slice(b", buff");
    pool.skip(Direction::Write, 6);

    let mut head = [0u8; 4];
    pool.read(&mut head, true);
    println!("read: {:?}", String::from_utf8_lossy(&head));

    if let Some(block) = pool.merge() {
        println!(
            "merged into one block: capacity={}, size={}",
            block.capacity(),
            block.size()
        );
    }
    println!("content: {:?}\n", String::from_utf8_lossy(&pool.to_bytes()));

    pool.clear();
    println!("after clear: size={}, free blocks={}", pool.size(), pool.free_len());

    // Contiguous alternative
    let mut buf = ByteBuffer::default();
    buf.write(b"1234", true);
    buf.write(b"1234567890", true);
    println!(
        "\nbyte buffer: capacity={}, data={:?}",
        buf.capacity(),
        String::from_utf8_lossy(buf.data())
    );
}
