use alloc::{borrow::Cow, collections::VecDeque, vec::Vec};

use super::ByteStore;

/// Ring storage backed by `VecDeque<u8>`.
///
/// Discarding a consumed prefix only moves the ring head, which suits
/// consumers that parse a message, `ltrim`, and append the next chunk. A
/// whole-buffer view has to copy once the ring has wrapped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DequeStore(VecDeque<u8>);

impl ByteStore for DequeStore {
    fn from_vec(bytes: Vec<u8>) -> Self {
        Self(VecDeque::from(bytes))
    }

    fn with_capacity(capacity: usize) -> Self {
        Self(VecDeque::with_capacity(capacity))
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.0.extend(bytes.iter().copied());
    }

    fn push(&mut self, byte: u8) {
        self.0.push_back(byte);
    }

    fn get(&self, index: usize) -> Option<u8> {
        self.0.get(index).copied()
    }

    fn copy_to_slice(&self, start: usize, dst: &mut [u8]) {
        // The requested run may straddle the wrap point.
        let (front, back) = self.0.as_slices();
        let end = start + dst.len();
        if end <= front.len() {
            dst.copy_from_slice(&front[start..end]);
        } else if start >= front.len() {
            let offset = start - front.len();
            dst.copy_from_slice(&back[offset..offset + dst.len()]);
        } else {
            let (head, tail) = dst.split_at_mut(front.len() - start);
            head.copy_from_slice(&front[start..]);
            tail.copy_from_slice(&back[..tail.len()]);
        }
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
        match self.0.as_slices() {
            (front, []) => Cow::Borrowed(front),
            (front, back) => {
                let mut joined = Vec::with_capacity(front.len() + back.len());
                joined.extend_from_slice(front);
                joined.extend_from_slice(back);
                Cow::Owned(joined)
            }
        }
    }

    fn into_vec(self) -> Vec<u8> {
        self.0.into()
    }
}
