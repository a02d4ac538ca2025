//! Fixed-width shorthands over [`ByteBuffer::write_int`] and friends.
//!
//! Values stay `i64`/`u64` at every width so an out-of-range value is a
//! [`RangeError`](crate::RangeError) at the call, not a silent `as` cast
//! before it.

use crate::{buffer::ByteBuffer, error::BufferError, store::ByteStore};

macro_rules! byte_fields {
    ($value:ty, $kind:literal, $write:ident, $read:ident, $generic_write:ident, $generic_read:ident) => {
        impl<S: ByteStore> ByteBuffer<S> {
            #[doc = concat!("Append ", $kind, " 8-bit integer.")]
            ///
            /// # Errors
            ///
            /// [`RangeError`](crate::RangeError) if `value` does not fit in one byte.
            pub fn $write(&mut self, value: $value) -> Result<&mut Self, BufferError> {
                self.$generic_write(value, 1)
            }

            #[doc = concat!("Read ", $kind, " 8-bit integer.")]
            ///
            /// # Errors
            ///
            /// [`BoundsError`](crate::BoundsError) if the buffer is exhausted.
            pub fn $read(&mut self) -> Result<$value, BufferError> {
                self.$generic_read(1)
            }
        }
    };
}

macro_rules! wide_fields {
    (
        $value:ty, $kind:literal, ($generic_write:ident, $generic_write_be:ident,
        $generic_read:ident, $generic_read_be:ident);
        $( $bits:literal / $size:literal => $write:ident, $write_be:ident, $read:ident, $read_be:ident; )*
    ) => {
        impl<S: ByteStore> ByteBuffer<S> {
            $(
                #[doc = concat!("Append ", $kind, " ", stringify!($bits), "-bit integer, little-endian.")]
                ///
                /// # Errors
                ///
                /// [`RangeError`](crate::RangeError) if `value` does not fit.
                pub fn $write(&mut self, value: $value) -> Result<&mut Self, BufferError> {
                    self.$generic_write(value, $size)
                }

                #[doc = concat!("Append ", $kind, " ", stringify!($bits), "-bit integer, big-endian.")]
                ///
                /// # Errors
                ///
                /// [`RangeError`](crate::RangeError) if `value` does not fit.
                pub fn $write_be(&mut self, value: $value) -> Result<&mut Self, BufferError> {
                    self.$generic_write_be(value, $size)
                }

                #[doc = concat!("Read ", $kind, " ", stringify!($bits), "-bit integer, little-endian.")]
                ///
                /// # Errors
                ///
                #[doc = concat!("[`BoundsError`](crate::BoundsError) if fewer than ", stringify!($size), " bytes remain.")]
                pub fn $read(&mut self) -> Result<$value, BufferError> {
                    self.$generic_read($size)
                }

                #[doc = concat!("Read ", $kind, " ", stringify!($bits), "-bit integer, big-endian.")]
                ///
                /// # Errors
                ///
                #[doc = concat!("[`BoundsError`](crate::BoundsError) if fewer than ", stringify!($size), " bytes remain.")]
                pub fn $read_be(&mut self) -> Result<$value, BufferError> {
                    self.$generic_read_be($size)
                }
            )*
        }
    };
}

byte_fields!(i64, "a signed", write_int8, read_int8, write_int, read_int);
byte_fields!(u64, "an unsigned", write_uint8, read_uint8, write_uint, read_uint);

wide_fields! {
    i64, "a signed", (write_int, write_int_be, read_int, read_int_be);
    16 / 2 => write_int16, write_int16_be, read_int16, read_int16_be;
    24 / 3 => write_int24, write_int24_be, read_int24, read_int24_be;
    32 / 4 => write_int32, write_int32_be, read_int32, read_int32_be;
    64 / 8 => write_int64, write_int64_be, read_int64, read_int64_be;
}

wide_fields! {
    u64, "an unsigned", (write_uint, write_uint_be, read_uint, read_uint_be);
    16 / 2 => write_uint16, write_uint16_be, read_uint16, read_uint16_be;
    24 / 3 => write_uint24, write_uint24_be, read_uint24, read_uint24_be;
    32 / 4 => write_uint32, write_uint32_be, read_uint32, read_uint32_be;
    64 / 8 => write_uint64, write_uint64_be, read_uint64, read_uint64_be;
}
