//! The cursor buffer.
//!
//! Writes always append to the end of the stored bytes; reads consume from the
//! cursor. The two never share a head: writing does not move the cursor and
//! reading never changes the bytes.
//!
//! ```
//! use bytecursor::ArrayBuffer;
//!
//! let mut buf = ArrayBuffer::new();
//! buf.write_uint16(1000)?.write_int24_be(-100_000)?;
//! buf.write_utf8_string("abc");
//! assert_eq!(buf.to_string(), "E8 03 FE 79 60 61 62 63");
//!
//! assert_eq!(buf.read_uint16()?, 1000);
//! assert_eq!(buf.read_int24_be()?, -100_000);
//! assert_eq!(buf.read_utf8_string(None)?, "abc");
//! assert!(!buf.is_more());
//! # Ok::<(), bytecursor::BufferError>(())
//! ```

use alloc::{borrow::Cow, string::String, vec, vec::Vec};
use core::fmt;

use bstr::BString;
use tracing::{debug, trace};

use crate::{
    error::{BoundsError, BufferError},
    store::{ByteStore, DequeStore, VecStore},
    width::{self, MAX_WIDTH, Order},
};

/// A growable byte sequence with a read cursor.
///
/// `S` selects the storage strategy; see [`ArrayBuffer`] and [`DequeBuffer`].
/// Every operation either completes or fails without changing the buffer.
#[derive(Debug, Clone, Default)]
pub struct ByteBuffer<S: ByteStore = VecStore> {
    store: S,
    position: usize,
}

/// A [`ByteBuffer`] over contiguous `Vec<u8>` storage.
pub type ArrayBuffer = ByteBuffer<VecStore>;

/// A [`ByteBuffer`] over ring storage, cheap to `ltrim` repeatedly.
pub type DequeBuffer = ByteBuffer<DequeStore>;

impl<S: ByteStore> ByteBuffer<S> {
    /// An empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(S::default())
    }

    /// An empty buffer with room for `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_store(S::with_capacity(capacity))
    }

    /// A buffer holding `store`'s bytes, cursor at the start.
    #[must_use]
    pub fn with_store(store: S) -> Self {
        Self { store, position: 0 }
    }

    /// A buffer seeded with `bytes`, cursor at the start.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::with_store(S::from_vec(bytes.into()))
    }

    /// A buffer seeded with the UTF-8 encoding of `text`.
    pub fn from_text(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Writes
    // ─────────────────────────────────────────────────────────────────────

    /// Append `value` as a signed little-endian integer `size` bytes wide.
    ///
    /// # Errors
    ///
    /// [`RangeError`](crate::RangeError) if `size` is not in `1..=8` or
    /// `value` does not fit in `size` bytes.
    pub fn write_int(&mut self, value: i64, size: usize) -> Result<&mut Self, BufferError> {
        self.put_signed(value, size, Order::Little)
    }

    /// Big-endian counterpart of [`write_int`](Self::write_int).
    ///
    /// # Errors
    ///
    /// As for [`write_int`](Self::write_int).
    pub fn write_int_be(&mut self, value: i64, size: usize) -> Result<&mut Self, BufferError> {
        self.put_signed(value, size, Order::Big)
    }

    /// Append `value` as an unsigned little-endian integer `size` bytes wide.
    ///
    /// # Errors
    ///
    /// [`RangeError`](crate::RangeError) if `size` is not in `1..=8` or
    /// `value` exceeds `256^size - 1`.
    pub fn write_uint(&mut self, value: u64, size: usize) -> Result<&mut Self, BufferError> {
        self.put_unsigned(value, size, Order::Little)
    }

    /// Big-endian counterpart of [`write_uint`](Self::write_uint).
    ///
    /// # Errors
    ///
    /// As for [`write_uint`](Self::write_uint).
    pub fn write_uint_be(&mut self, value: u64, size: usize) -> Result<&mut Self, BufferError> {
        self.put_unsigned(value, size, Order::Big)
    }

    /// Append an IEEE-754 binary32, little-endian.
    pub fn write_float(&mut self, value: f32) -> &mut Self {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Append an IEEE-754 binary32, big-endian.
    pub fn write_float_be(&mut self, value: f32) -> &mut Self {
        self.write_bytes(&value.to_be_bytes())
    }

    /// Append an IEEE-754 binary64, little-endian.
    pub fn write_double(&mut self, value: f64) -> &mut Self {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Append an IEEE-754 binary64, big-endian.
    pub fn write_double_be(&mut self, value: f64) -> &mut Self {
        self.write_bytes(&value.to_be_bytes())
    }

    /// Append the UTF-8 bytes of `text`, with no length prefix or terminator.
    pub fn write_utf8_string(&mut self, text: &str) -> &mut Self {
        self.write_bytes(text.as_bytes())
    }

    /// Append `bytes` verbatim.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.store.extend_from_slice(bytes);
        self
    }

    fn put_signed(
        &mut self,
        value: i64,
        size: usize,
        order: Order,
    ) -> Result<&mut Self, BufferError> {
        width::check_signed(value, size)
            .inspect_err(|e| debug!(value, size, error = %e, "rejected signed write"))?;
        #[allow(clippy::cast_sign_loss)]
        let bits = value as u64;
        self.put_packed(bits, size, order);
        Ok(self)
    }

    fn put_unsigned(
        &mut self,
        value: u64,
        size: usize,
        order: Order,
    ) -> Result<&mut Self, BufferError> {
        width::check_unsigned(value, size)
            .inspect_err(|e| debug!(value, size, error = %e, "rejected unsigned write"))?;
        self.put_packed(value, size, order);
        Ok(self)
    }

    /// Append an already range-checked value.
    pub(crate) fn put_packed(&mut self, value: u64, size: usize, order: Order) {
        let mut out = [0; MAX_WIDTH];
        width::pack(value, size, order, &mut out);
        self.store.extend_from_slice(&out[..size]);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────────────────

    /// Read a signed little-endian integer `size` bytes wide.
    ///
    /// # Errors
    ///
    /// [`RangeError::Width`](crate::RangeError::Width) for a width outside
    /// `1..=8`, [`BoundsError`] if fewer than `size` bytes remain.
    pub fn read_int(&mut self, size: usize) -> Result<i64, BufferError> {
        let unsigned = self.take_unsigned(size, Order::Little)?;
        Ok(width::sign_extend(unsigned, size))
    }

    /// Big-endian counterpart of [`read_int`](Self::read_int).
    ///
    /// # Errors
    ///
    /// As for [`read_int`](Self::read_int).
    pub fn read_int_be(&mut self, size: usize) -> Result<i64, BufferError> {
        let unsigned = self.take_unsigned(size, Order::Big)?;
        Ok(width::sign_extend(unsigned, size))
    }

    /// Read an unsigned little-endian integer `size` bytes wide.
    ///
    /// # Errors
    ///
    /// As for [`read_int`](Self::read_int).
    pub fn read_uint(&mut self, size: usize) -> Result<u64, BufferError> {
        self.take_unsigned(size, Order::Little)
    }

    /// Big-endian counterpart of [`read_uint`](Self::read_uint).
    ///
    /// # Errors
    ///
    /// As for [`read_int`](Self::read_int).
    pub fn read_uint_be(&mut self, size: usize) -> Result<u64, BufferError> {
        self.take_unsigned(size, Order::Big)
    }

    /// Read an IEEE-754 binary32, little-endian.
    ///
    /// # Errors
    ///
    /// [`BoundsError`] if fewer than 4 bytes remain.
    pub fn read_float(&mut self) -> Result<f32, BufferError> {
        Ok(f32::from_le_bytes(self.take_array()?))
    }

    /// Read an IEEE-754 binary32, big-endian.
    ///
    /// # Errors
    ///
    /// [`BoundsError`] if fewer than 4 bytes remain.
    pub fn read_float_be(&mut self) -> Result<f32, BufferError> {
        Ok(f32::from_be_bytes(self.take_array()?))
    }

    /// Read an IEEE-754 binary64, little-endian.
    ///
    /// # Errors
    ///
    /// [`BoundsError`] if fewer than 8 bytes remain.
    pub fn read_double(&mut self) -> Result<f64, BufferError> {
        Ok(f64::from_le_bytes(self.take_array()?))
    }

    /// Read an IEEE-754 binary64, big-endian.
    ///
    /// # Errors
    ///
    /// [`BoundsError`] if fewer than 8 bytes remain.
    pub fn read_double_be(&mut self) -> Result<f64, BufferError> {
        Ok(f64::from_be_bytes(self.take_array()?))
    }

    /// Read text bytes as written, without validating them.
    ///
    /// `Some(n)` with `n > 0` reads exactly `n` bytes. `None` or `Some(0)`
    /// reads everything after the cursor, which is an empty string once the
    /// buffer is exhausted.
    ///
    /// # Errors
    ///
    /// [`BoundsError`] if an exact length is requested and fewer bytes remain.
    pub fn read_utf8_string(&mut self, length: Option<usize>) -> Result<BString, BufferError> {
        self.read_bytes(length).map(BString::from)
    }

    /// Like [`read_utf8_string`](Self::read_utf8_string), but the bytes must
    /// be valid UTF-8.
    ///
    /// # Errors
    ///
    /// [`BoundsError`] as for `read_utf8_string`, or
    /// [`BufferError::Utf8`] if the bytes are malformed. The cursor does not
    /// move in either case.
    pub fn read_utf8_str(&mut self, length: Option<usize>) -> Result<String, BufferError> {
        let count = self.run_length(length)?;
        let text = String::from_utf8(self.copy_run(count)).map_err(|e| e.utf8_error())?;
        self.position += count;
        Ok(text)
    }

    /// Read raw bytes with the same length policy as
    /// [`read_utf8_string`](Self::read_utf8_string).
    ///
    /// # Errors
    ///
    /// [`BoundsError`] if an exact length is requested and fewer bytes remain.
    pub fn read_bytes(&mut self, size: Option<usize>) -> Result<Vec<u8>, BufferError> {
        let count = self.run_length(size)?;
        let bytes = self.copy_run(count);
        self.position += count;
        Ok(bytes)
    }

    /// The byte under the cursor, without consuming it.
    #[must_use]
    pub fn peek_u8(&self) -> Option<u8> {
        self.store.get(self.position)
    }

    /// Resolve the exact-or-remainder length policy.
    fn run_length(&self, requested: Option<usize>) -> Result<usize, BoundsError> {
        match requested {
            Some(n) if n > 0 => {
                self.ensure_remaining(n)?;
                Ok(n)
            }
            _ => Ok(self.remains()),
        }
    }

    fn copy_run(&self, count: usize) -> Vec<u8> {
        let mut out = vec![0; count];
        self.store.copy_to_slice(self.position, &mut out);
        out
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], BufferError> {
        self.ensure_remaining(N)?;
        let mut out = [0; N];
        self.store.copy_to_slice(self.position, &mut out);
        self.position += N;
        Ok(out)
    }

    fn take_unsigned(&mut self, size: usize, order: Order) -> Result<u64, BufferError> {
        width::check_width(size)?;
        self.ensure_remaining(size)?;
        Ok(self.take_unchecked(size, order))
    }

    /// Decode `size` bytes the caller has already bounds-checked.
    pub(crate) fn take_unchecked(&mut self, size: usize, order: Order) -> u64 {
        let mut raw = [0; MAX_WIDTH];
        self.store.copy_to_slice(self.position, &mut raw[..size]);
        self.position += size;
        width::unpack(&raw[..size], order)
    }

    pub(crate) fn ensure_remaining(&self, requested: usize) -> Result<(), BoundsError> {
        if requested == 0 || self.remains() >= requested {
            return Ok(());
        }
        let err = BoundsError::Underflow {
            position: self.position,
            size: self.size(),
            requested,
        };
        debug!(
            position = self.position,
            size = self.size(),
            requested,
            "rejected read"
        );
        Err(err)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Cursor & buffer management
    // ─────────────────────────────────────────────────────────────────────

    /// Current read cursor.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move the read cursor to `position`.
    ///
    /// # Errors
    ///
    /// [`BoundsError::Seek`] if `position` is past the end; the cursor stays
    /// where it was.
    pub fn set_position(&mut self, position: usize) -> Result<(), BufferError> {
        if position > self.size() {
            debug!(requested = position, size = self.size(), "rejected seek");
            return Err(BoundsError::Seek {
                target: position,
                size: self.size(),
            }
            .into());
        }
        trace!(from = self.position, to = position, "seek");
        self.position = position;
        Ok(())
    }

    /// Bytes between the cursor and the end.
    #[must_use]
    pub fn remains(&self) -> usize {
        self.size() - self.position
    }

    /// Whether any bytes remain to be read.
    #[must_use]
    pub fn is_more(&self) -> bool {
        self.remains() > 0
    }

    /// Number of stored bytes, read or not.
    #[must_use]
    pub fn size(&self) -> usize {
        self.store.len()
    }

    /// Whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Drop every byte before the cursor and re-anchor the cursor at zero.
    pub fn ltrim(&mut self) -> &mut Self {
        trace!(discarded = self.position, kept = self.remains(), "ltrim");
        self.store.discard_front(self.position);
        self.position = 0;
        self
    }

    /// Keep bytes `[0, position]`, including the byte under the cursor, and
    /// re-anchor the cursor at zero.
    ///
    /// With the cursor at the end nothing is dropped.
    pub fn rtrim(&mut self) -> &mut Self {
        let keep = (self.position + 1).min(self.size());
        trace!(kept = keep, discarded = self.size() - keep, "rtrim");
        self.store.truncate(keep);
        self.position = 0;
        self
    }

    /// Drop every byte and reset the cursor.
    pub fn clear(&mut self) -> &mut Self {
        trace!(discarded = self.size(), "clear");
        self.store.clear();
        self.position = 0;
        self
    }

    /// The whole stored sequence, regardless of the cursor.
    #[must_use]
    pub fn get_buffer(&self) -> Cow<'_, [u8]> {
        self.store.contiguous()
    }

    /// The whole stored sequence as an owned byte string.
    #[must_use]
    pub fn encode(&self) -> BString {
        BString::from(self.get_buffer().into_owned())
    }

    /// The whole stored sequence as a list of byte values.
    #[must_use]
    pub fn to_bytes_array(&self) -> Vec<u8> {
        self.get_buffer().into_owned()
    }

    /// Give up the buffer, keeping its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.store.into_vec()
    }

    /// The backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Space-separated uppercase hex, e.g. `61 62 63`.
impl<S: ByteStore> fmt::Display for ByteBuffer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.get_buffer().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

/// Buffers compare by content and cursor, whatever their storage.
impl<S: ByteStore, T: ByteStore> PartialEq<ByteBuffer<T>> for ByteBuffer<S> {
    fn eq(&self, other: &ByteBuffer<T>) -> bool {
        self.position == other.position && self.get_buffer() == other.get_buffer()
    }
}

impl<S: ByteStore> Eq for ByteBuffer<S> {}

impl<S: ByteStore> From<Vec<u8>> for ByteBuffer<S> {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<S: ByteStore> From<&[u8]> for ByteBuffer<S> {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<S: ByteStore> From<&str> for ByteBuffer<S> {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl<S: ByteStore> FromIterator<u8> for ByteBuffer<S> {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut buf = Self::new();
        buf.extend(iter);
        buf
    }
}

/// Appends, like [`ByteBuffer::write_bytes`].
impl<S: ByteStore> Extend<u8> for ByteBuffer<S> {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for byte in iter {
            self.store.push(byte);
        }
    }
}

// Serialized as `{"bytes": [..], "position": n}`; a position beyond the bytes
// is rejected on the way in.
#[cfg(feature = "serde")]
mod serde_impls {
    use alloc::vec::Vec;

    use serde::{
        Deserialize, Deserializer, Serialize, Serializer,
        de::Error,
        ser::SerializeStruct,
    };

    use super::ByteBuffer;
    use crate::{error::BoundsError, store::ByteStore};

    impl<S: ByteStore> Serialize for ByteBuffer<S> {
        fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
        where
            Ser: Serializer,
        {
            let mut state = serializer.serialize_struct("ByteBuffer", 2)?;
            state.serialize_field("bytes", &*self.get_buffer())?;
            state.serialize_field("position", &self.position)?;
            state.end()
        }
    }

    #[derive(Deserialize)]
    #[serde(rename = "ByteBuffer")]
    struct Parts {
        bytes: Vec<u8>,
        position: usize,
    }

    impl<'de, S: ByteStore> Deserialize<'de> for ByteBuffer<S> {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let Parts { bytes, position } = Parts::deserialize(deserializer)?;
            if position > bytes.len() {
                return Err(D::Error::custom(BoundsError::Seek {
                    target: position,
                    size: bytes.len(),
                }));
            }
            Ok(Self {
                store: S::from_vec(bytes),
                position,
            })
        }
    }
}
