#![no_main]

use std::collections::VecDeque;

use blockbuf::{BlockPool, Direction};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&first, ops)) = data.split_first() else {
        return;
    };

    // First byte picks the size class; the rest is an opcode stream
    let mut pool = BlockPool::new(first as usize % 64 + 1);
    let mut model: VecDeque<u8> = VecDeque::new();

    let mut rest = ops;
    while let Some((&op, tail)) = rest.split_first() {
        let len = tail.first().copied().unwrap_or(0) as usize;
        rest = tail.get(1..).unwrap_or_default();

        match op % 7 {
            0 => {
                let bytes: Vec<u8> = (0..len).map(|i| i as u8 ^ op).collect();
                assert_eq!(pool.write(&bytes, true), len);
                model.extend(bytes);
            }
            1 => {
                let mut out = vec![0u8; len];
                let got = pool.read(&mut out, true);
                assert_eq!(got, len.min(model.len()));
                let expected: Vec<u8> = model.drain(..got).collect();
                assert_eq!(&out[..got], &expected[..]);
            }
            2 => {
                let mut out = vec![0u8; len];
                let got = pool.read(&mut out, false);
                assert_eq!(got, len.min(model.len()));
                assert!(out[..got].iter().eq(model.iter().take(got)));
            }
            3 => {
                let skipped = pool.skip(Direction::Read, len);
                assert_eq!(skipped, len.min(model.len()));
                model.drain(..skipped);
            }
            4 => {
                let region = pool.malloc(len);
                assert!(region.len() >= len);
                region[..len].fill(op);
                let committed = pool.skip(Direction::Write, len);
                assert_eq!(committed, len);
                model.extend(std::iter::repeat_n(op, len));
            }
            5 => {
                let merged = pool.merge().map(|block| block.data().to_vec());
                match merged {
                    Some(bytes) => assert!(bytes.iter().eq(model.iter())),
                    None => assert!(model.is_empty()),
                }
            }
            _ => {
                pool.set_max_free(len % 16);
            }
        }

        assert_eq!(pool.size(), model.len());
        assert!(pool.free_len() <= pool.max_free());
        let free: Vec<usize> = pool.free_blocks().map(|b| b.capacity()).collect();
        assert!(free.windows(2).all(|w| w[0] <= w[1]));
        assert!(pool.blocks().all(|b| b.capacity() % pool.min_block_size() == 0));
    }
});
