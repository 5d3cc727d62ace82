//! Running Adler-32.

use adler2::Adler32;

use crate::buffer::Segments;

/// Initial value for a fresh Adler-32.
pub const ADLER32_INIT: u32 = 1;

/// Folds the readable bytes of `src` into a running Adler-32.
///
/// Start a fresh checksum with [`ADLER32_INIT`].
pub fn adler32<S: Segments>(adler: u32, src: &S) -> u32 {
    let mut state = Adler32::from_checksum(adler);
    for segment in src.segments() {
        state.write_slice(segment);
    }
    state.checksum()
}
