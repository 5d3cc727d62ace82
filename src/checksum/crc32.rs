//! Running CRC-32.

use crate::buffer::Segments;

/// Folds the readable bytes of `src` into a running CRC-32.
///
/// Start a fresh checksum with `0`. Feeding the result back in continues the
/// computation, so `crc32(crc32(0, &a), &b)` equals the CRC of `a` followed
/// by `b`.
pub fn crc32<S: Segments>(crc: u32, src: &S) -> u32 {
    let mut hasher = crc32fast::Hasher::new_with_initial(crc);
    for segment in src.segments() {
        hasher.update(segment);
    }
    hasher.finalize()
}
