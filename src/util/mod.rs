//! Internal utility functions and helpers.
//!
//! This module contains small helper functions used throughout the crate.
//! It is an implementation detail and not part of the public API.

/// Rounds `size` up to the next multiple of `class`, never below one class.
///
/// This is the size-class rule every pooled block allocation goes through,
/// so that recycled blocks land in a small set of reusable capacities.
pub(crate) fn round_up(size: usize, class: usize) -> usize {
    debug_assert!(class > 0);
    size.div_ceil(class).max(1) * class
}
