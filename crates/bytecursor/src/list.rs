//! Runs of same-width unsigned little-endian values.

use alloc::vec::Vec;

use tracing::debug;

use crate::{
    buffer::ByteBuffer,
    error::{BoundsError, BufferError},
    store::ByteStore,
    width::{self, Order},
};

impl<S: ByteStore> ByteBuffer<S> {
    /// Validate every value, then append them all; a bad value anywhere in
    /// `values` leaves the buffer untouched.
    fn write_list(&mut self, values: &[u64], size: usize) -> Result<&mut Self, BufferError> {
        for (index, &value) in values.iter().enumerate() {
            width::check_unsigned(value, size).inspect_err(
                |e| debug!(index, value, size, error = %e, "rejected list write"),
            )?;
        }
        for &value in values {
            self.put_packed(value, size, Order::Little);
        }
        Ok(self)
    }

    /// Bounds-check the whole run up front so a short buffer fails before the
    /// first element is consumed.
    fn read_list(&mut self, count: usize, size: usize) -> Result<Vec<u64>, BufferError> {
        let requested = count.checked_mul(size).ok_or(BoundsError::Underflow {
            position: self.position(),
            size: self.size(),
            requested: usize::MAX,
        })?;
        self.ensure_remaining(requested)?;
        Ok((0..count)
            .map(|_| self.take_unchecked(size, Order::Little))
            .collect())
    }

    /// Append each value as an unsigned 8-bit integer.
    ///
    /// # Errors
    ///
    /// [`RangeError`](crate::RangeError) if any value exceeds 255.
    pub fn write_list_u8(&mut self, values: &[u64]) -> Result<&mut Self, BufferError> {
        self.write_list(values, 1)
    }

    /// Append each value as an unsigned 16-bit little-endian integer.
    ///
    /// # Errors
    ///
    /// [`RangeError`](crate::RangeError) if any value does not fit.
    pub fn write_list_u16(&mut self, values: &[u64]) -> Result<&mut Self, BufferError> {
        self.write_list(values, 2)
    }

    /// Append each value as an unsigned 24-bit little-endian integer.
    ///
    /// # Errors
    ///
    /// [`RangeError`](crate::RangeError) if any value does not fit.
    pub fn write_list_u24(&mut self, values: &[u64]) -> Result<&mut Self, BufferError> {
        self.write_list(values, 3)
    }

    /// Append each value as an unsigned 32-bit little-endian integer.
    ///
    /// # Errors
    ///
    /// [`RangeError`](crate::RangeError) if any value does not fit.
    pub fn write_list_u32(&mut self, values: &[u64]) -> Result<&mut Self, BufferError> {
        self.write_list(values, 4)
    }

    /// Same as [`write_list_u8`](Self::write_list_u8).
    ///
    /// # Errors
    ///
    /// As for `write_list_u8`.
    pub fn write_list8(&mut self, values: &[u64]) -> Result<&mut Self, BufferError> {
        self.write_list_u8(values)
    }

    /// Same as [`write_list_u16`](Self::write_list_u16).
    ///
    /// # Errors
    ///
    /// As for `write_list_u16`.
    pub fn write_list16(&mut self, values: &[u64]) -> Result<&mut Self, BufferError> {
        self.write_list_u16(values)
    }

    /// Read `count` unsigned 8-bit integers.
    ///
    /// # Errors
    ///
    /// [`BoundsError`] if fewer than `count` bytes remain.
    pub fn read_list_u8(&mut self, count: usize) -> Result<Vec<u64>, BufferError> {
        self.read_list(count, 1)
    }

    /// Read `count` unsigned 16-bit little-endian integers.
    ///
    /// # Errors
    ///
    /// [`BoundsError`] if fewer than `2 * count` bytes remain.
    pub fn read_list_u16(&mut self, count: usize) -> Result<Vec<u64>, BufferError> {
        self.read_list(count, 2)
    }

    /// Read `count` unsigned 24-bit little-endian integers.
    ///
    /// # Errors
    ///
    /// [`BoundsError`] if fewer than `3 * count` bytes remain.
    pub fn read_list_u24(&mut self, count: usize) -> Result<Vec<u64>, BufferError> {
        self.read_list(count, 3)
    }

    /// Read `count` unsigned 32-bit little-endian integers.
    ///
    /// # Errors
    ///
    /// [`BoundsError`] if fewer than `4 * count` bytes remain.
    pub fn read_list_u32(&mut self, count: usize) -> Result<Vec<u64>, BufferError> {
        self.read_list(count, 4)
    }

    /// Same as [`read_list_u8`](Self::read_list_u8).
    ///
    /// # Errors
    ///
    /// As for `read_list_u8`.
    pub fn read_list8(&mut self, count: usize) -> Result<Vec<u64>, BufferError> {
        self.read_list_u8(count)
    }

    /// Same as [`read_list_u16`](Self::read_list_u16).
    ///
    /// # Errors
    ///
    /// As for `read_list_u16`.
    pub fn read_list16(&mut self, count: usize) -> Result<Vec<u64>, BufferError> {
        self.read_list_u16(count)
    }
}
