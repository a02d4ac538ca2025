use alloc::{borrow::Cow, vec::Vec};

use super::ByteStore;

/// Contiguous `Vec<u8>` storage.
///
/// Appends and whole-buffer views are free; discarding a prefix shifts the
/// remaining bytes down.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VecStore(Vec<u8>);

impl ByteStore for VecStore {
    fn from_vec(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.0.extend_from_slice(bytes);
    }

    fn push(&mut self, byte: u8) {
        self.0.push(byte);
    }

    fn get(&self, index: usize) -> Option<u8> {
        self.0.get(index).copied()
    }

    fn copy_to_slice(&self, start: usize, dst: &mut [u8]) {
        dst.copy_from_slice(&self.0[start..start + dst.len()]);
    }

    fn discard_front(&mut self, count: usize) {
        self.0.drain(..count);
    }

    fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }

    fn clear(&mut self) {
        self.0.clear();
    }

    fn contiguous(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(&self.0)
    }

    fn into_vec(self) -> Vec<u8> {
        self.0
    }
}
