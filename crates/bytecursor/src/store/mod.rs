//! Backing storage for [`ByteBuffer`](crate::ByteBuffer).
//!
//! A buffer only needs a handful of primitives from its storage: append,
//! random-access copy, front and back truncation, and a view of the whole
//! sequence. Everything typed (widths, byte order, cursor bookkeeping) lives
//! in the buffer, so a store never sees the read position.

mod deque;
mod vec;

use alloc::{borrow::Cow, vec::Vec};
use core::fmt::Debug;

pub use deque::DequeStore;
pub use vec::VecStore;

/// Minimal, cursor-free byte storage capability.
///
/// Indices are always checked by the caller; implementations may panic on
/// out-of-range arguments the way slice indexing does.
pub trait ByteStore: Default + Clone + Debug {
    /// Create a store that owns `bytes`.
    fn from_vec(bytes: Vec<u8>) -> Self;

    /// Create an empty store able to hold `capacity` bytes without
    /// reallocating.
    fn with_capacity(capacity: usize) -> Self;

    /// Number of stored bytes.
    fn len(&self) -> usize;

    /// Whether no bytes are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append `bytes` at the end.
    fn extend_from_slice(&mut self, bytes: &[u8]);

    /// Append a single byte.
    fn push(&mut self, byte: u8);

    /// Byte at `index`, if any.
    fn get(&self, index: usize) -> Option<u8>;

    /// Copy `dst.len()` bytes starting at `start` into `dst`.
    fn copy_to_slice(&self, start: usize, dst: &mut [u8]);

    /// Drop the first `count` bytes.
    fn discard_front(&mut self, count: usize);

    /// Keep only the first `len` bytes.
    fn truncate(&mut self, len: usize);

    /// Drop every byte.
    fn clear(&mut self);

    /// The whole sequence in order; borrowed when the storage is contiguous.
    fn contiguous(&self) -> Cow<'_, [u8]>;

    /// Give up the storage as a `Vec<u8>`.
    fn into_vec(self) -> Vec<u8>;
}
