// Integration tests for the BlockPool public API
// Tests cover: round trips, short results, recycling, merging, transfers, I/O

use std::io::Cursor;

use blockbuf::{Block, BlockPool, Buffer, ByteBuffer, Direction, PoolConfig};

fn drain(pool: &mut BlockPool) -> Vec<u8> {
    let mut out = vec![0u8; pool.size()];
    let n = pool.read(&mut out, true);
    out.truncate(n);
    out
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

#[test]
fn test_empty_pool() {
    let mut pool = BlockPool::default();
    let mut out = [0u8; 8];

    assert_eq!(pool.size(), 0, "New pool should hold no bytes");
    assert_eq!(pool.read(&mut out, true), 0, "Reading empty pool returns 0");
    assert_eq!(pool.skip(Direction::Read, 8), 0);
    assert_eq!(pool.skip(Direction::Write, 8), 0);
    assert!(pool.merge().is_none());
    assert!(pool.pop().is_none());
}

#[test]
fn test_empty_write_is_noop() {
    let mut pool = BlockPool::new(16);
    assert_eq!(pool.write(b"", true), 0);
    assert_eq!(pool.block_count(), 0, "Empty write must not allocate");
}

#[test]
fn test_round_trip_many_writes() {
    let mut pool = BlockPool::new(7);
    let mut expected = Vec::new();

    for i in 0..50u8 {
        let piece: Vec<u8> = (0..i).map(|j| i.wrapping_mul(j)).collect();
        assert_eq!(pool.write(&piece, true), piece.len());
        expected.extend_from_slice(&piece);
    }

    assert_eq!(pool.size(), expected.len());
    assert_eq!(drain(&mut pool), expected);
    assert_eq!(pool.block_count(), 0, "Draining recycles every block");
}

#[test]
fn test_short_read_then_zero() {
    let mut pool = BlockPool::new(4);
    pool.write(b"abcde", true);

    let mut out = [0u8; 32];
    assert_eq!(pool.read(&mut out, true), 5);
    assert_eq!(&out[..5], b"abcde");
    assert_eq!(pool.read(&mut out, true), 0);
}

// ============================================================================
// Size Classes and Free List
// ============================================================================

#[test]
fn test_allocations_are_rounded() {
    let mut pool = BlockPool::new(100);
    for (request, expected) in [(0, 100), (1, 100), (100, 100), (101, 200), (250, 300)] {
        let block = pool.pop_free(request);
        assert_eq!(block.capacity(), expected, "request {}", request);
    }
}

#[test]
fn test_free_list_is_bounded_and_sorted() {
    let mut pool = BlockPool::with_config(PoolConfig::new(8).unwrap().with_max_free(3));
    for cap in [64, 8, 32, 16, 128, 8] {
        pool.recover(Block::new(cap));
    }

    let caps: Vec<_> = pool.free_blocks().map(Block::capacity).collect();
    assert_eq!(caps, vec![32, 64, 128], "Smallest blocks are evicted first");
}

#[test]
fn test_set_max_free_evicts() {
    let mut pool = BlockPool::with_config(PoolConfig::new(8).unwrap().with_prewarm(5));
    assert_eq!(pool.free_len(), 5);
    pool.set_max_free(2);
    assert_eq!(pool.free_len(), 2);
    assert_eq!(pool.max_free(), 2);
}

#[test]
fn test_recycled_blocks_are_reused() {
    let mut pool = BlockPool::new(1024);
    pool.write(&[1u8; 1000], true);
    drain(&mut pool);
    assert_eq!(pool.free_len(), 1);

    pool.write(&[2u8; 500], true);
    assert_eq!(pool.free_len(), 0, "Second fill reuses the recycled block");
    assert_eq!(pool.blocks().next().map(Block::capacity), Some(1024));
}

// ============================================================================
// Staged Writes and Zero-copy Producers
// ============================================================================

#[test]
fn test_staged_write_does_not_grow_chain() {
    let mut pool = BlockPool::new(8);
    pool.write(b"123456", true);

    assert_eq!(pool.write(b"abcdef", false), 2, "Staged write is short");
    assert_eq!(pool.block_count(), 1);
    assert_eq!(pool.size(), 6, "Staged bytes are invisible");

    pool.skip(Direction::Write, 2);
    assert_eq!(drain(&mut pool), b"123456ab");
}

#[test]
fn test_malloc_then_commit_like_a_reader() {
    let mut pool = BlockPool::new(16);
    let mut source = Cursor::new(b"bytes arriving from a socket".to_vec());

    loop {
        let region = pool.malloc_available();
        let n = std::io::Read::read(&mut source, region).unwrap();
        if n == 0 {
            break;
        }
        pool.skip(Direction::Write, n);
    }

    assert_eq!(pool.to_bytes(), "bytes arriving from a socket");
}

// ============================================================================
// Merge
// ============================================================================

#[test]
fn test_merge_preserves_content_and_size() {
    let mut pool = BlockPool::new(3);
    for piece in [&b"ab"[..], b"cdef", b"g", b"hijkl"] {
        pool.write(piece, true);
    }
    pool.skip(Direction::Read, 1);
    let before = pool.size();

    let merged = pool.merge().expect("pool has data");
    assert_eq!(merged.data(), b"bcdefghijkl");
    assert_eq!(pool.size(), before);
    assert_eq!(pool.block_count(), 1);
}

#[test]
fn test_merge_twice_is_stable() {
    let mut pool = BlockPool::new(4);
    pool.write(b"abcd", true);
    pool.write(b"efgh", true);

    let first = pool.merge().map(|b| (b.capacity(), b.data().to_vec()));
    let second = pool.merge().map(|b| (b.capacity(), b.data().to_vec()));
    assert_eq!(first, second);
}

// ============================================================================
// Cross-pool Transfer
// ============================================================================

#[test]
fn test_transfer_move() {
    let mut a = BlockPool::new(2);
    let mut b = BlockPool::new(100);
    a.write(b"X", true);
    b.write(b"Y", true);

    assert_eq!(a.merge_from(&mut b), 1);
    assert_eq!(b.block_count(), 0);
    assert_eq!(b.free_len(), 0, "Moved blocks are not recycled");
    assert_eq!(a.block_count(), 2);
    assert_eq!(drain(&mut a), b"XY");
}

#[test]
fn test_transfer_copy() {
    let mut a = BlockPool::new(4);
    let mut b = BlockPool::new(4);
    a.write(b"X", true);
    b.write(b"Y", true);

    assert_eq!(a.append_from(&b), 1);
    assert_eq!(b.to_bytes(), "Y", "Source is untouched");
    assert_eq!(drain(&mut a), b"XY");
}

#[test]
fn test_transfer_drain_and_recycle() {
    let mut a = BlockPool::new(4);
    let mut b = BlockPool::new(4);
    a.write(b"X", true);
    b.write(b"Y", true);

    assert_eq!(a.drain_from(&mut b), 1);
    assert_eq!(b.size(), 0);
    assert_eq!(b.free_len(), 1, "Source keeps the block that carried Y");
    assert_eq!(drain(&mut a), b"XY");
}

#[test]
fn test_pop_push_hand_off() {
    let mut producer = BlockPool::new(8);
    let mut consumer = BlockPool::new(8);
    producer.write(b"handed over", true);

    while let Some(block) = producer.pop() {
        consumer.push(block);
    }

    assert_eq!(consumer.to_bytes(), "handed over");
    assert_eq!(producer.size(), 0);
}

// ============================================================================
// I/O Collaborators
// ============================================================================

#[test]
fn test_fill_then_drain() {
    let data: Vec<u8> = (0..10_000).map(|i| (i % 251) as u8).collect();
    let mut pool = BlockPool::new(1024);

    assert_eq!(pool.fill_from(Cursor::new(&data)).unwrap(), data.len());
    let blocks = pool.block_count();

    let mut sink = Vec::new();
    assert_eq!(pool.drain_to(&mut sink).unwrap(), data.len());
    assert_eq!(sink, data);
    assert_eq!(pool.free_len(), blocks.min(pool.max_free()));
}

#[test]
fn test_strategies_agree() {
    let payload = b"contiguous or chained, the bytes are the same";
    let mut pool = BlockPool::new(5);
    let mut flat = ByteBuffer::default();

    Buffer::write(&mut pool, payload, true);
    Buffer::write(&mut flat, payload, true);

    assert_eq!(pool.to_bytes(), flat.to_bytes());
    assert_eq!(Buffer::len(&pool), Buffer::len(&flat));
}
