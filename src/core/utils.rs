//! Utility types and traits.

use core::hash::Hash;

/// A trait represents a lightweight index.
///
/// The internal can be arbitrary, but it should be able to convert to a raw and
/// *unique* [`usize`] index in a dense range starting at zero.
pub trait Idx: Copy + Ord + Hash {
    /// Get the raw [`usize`] from the index.
    fn index(self) -> usize;
}

impl Idx for usize {
    fn index(self) -> usize { self }
}
