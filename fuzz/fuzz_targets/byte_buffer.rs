#![no_main]

use std::collections::VecDeque;

use blockbuf::{ByteBuffer, Direction};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut buf = ByteBuffer::new(data.first().copied().unwrap_or(0) as usize);
    let mut model: VecDeque<u8> = VecDeque::new();

    for pair in data.chunks(2) {
        let op = pair[0];
        let len = pair.get(1).copied().unwrap_or(0) as usize;

        match op % 4 {
            0 => {
                let bytes = vec![op; len];
                assert_eq!(buf.write(&bytes, true), len);
                model.extend(bytes);
            }
            1 => {
                let mut out = vec![0u8; len];
                let got = buf.read(&mut out, true);
                assert_eq!(got, len.min(model.len()));
                let expected: Vec<u8> = model.drain(..got).collect();
                assert_eq!(&out[..got], &expected[..]);
            }
            2 => {
                let skipped = buf.skip(Direction::Read, len);
                assert_eq!(skipped, len.min(model.len()));
                model.drain(..skipped);
            }
            _ => {
                if let Some(record) = buf.contiguous(len) {
                    assert!(record.iter().eq(model.iter().take(len)));
                } else {
                    assert!(model.len() < len.max(1));
                }
            }
        }

        assert_eq!(buf.size(), model.len());
        assert!(buf.capacity() >= 8);
        assert!(buf.data().iter().eq(model.iter()));
    }
});
