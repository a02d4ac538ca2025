//! A typed description of one encoded field, used to drive reads and writes
//! the same way against every store.

use alloc::{string::String, vec::Vec};

use crate::{BufferError, ByteBuffer, ByteStore};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Field {
    Int { value: i64, size: usize, big: bool },
    UInt { value: u64, size: usize, big: bool },
    /// Floats are carried as bits so NaN payloads compare exactly.
    Float { bits: u32, big: bool },
    Double { bits: u64, big: bool },
    Text(String),
    Bytes(Vec<u8>),
}

impl Field {
    /// Number of bytes the field occupies once written.
    pub(crate) fn encoded_len(&self) -> usize {
        match self {
            Field::Int { size, .. } | Field::UInt { size, .. } => *size,
            Field::Float { .. } => 4,
            Field::Double { .. } => 8,
            Field::Text(text) => text.len(),
            Field::Bytes(bytes) => bytes.len(),
        }
    }
}

pub(crate) fn write_field<S: ByteStore>(
    buf: &mut ByteBuffer<S>,
    field: &Field,
) -> Result<(), BufferError> {
    match *field {
        Field::Int { value, size, big: false } => buf.write_int(value, size).map(drop),
        Field::Int { value, size, big: true } => buf.write_int_be(value, size).map(drop),
        Field::UInt { value, size, big: false } => buf.write_uint(value, size).map(drop),
        Field::UInt { value, size, big: true } => buf.write_uint_be(value, size).map(drop),
        Field::Float { bits, big: false } => {
            buf.write_float(f32::from_bits(bits));
            Ok(())
        }
        Field::Float { bits, big: true } => {
            buf.write_float_be(f32::from_bits(bits));
            Ok(())
        }
        Field::Double { bits, big: false } => {
            buf.write_double(f64::from_bits(bits));
            Ok(())
        }
        Field::Double { bits, big: true } => {
            buf.write_double_be(f64::from_bits(bits));
            Ok(())
        }
        Field::Text(ref text) => {
            buf.write_utf8_string(text);
            Ok(())
        }
        Field::Bytes(ref bytes) => {
            buf.write_bytes(bytes);
            Ok(())
        }
    }
}

/// Read a field of the same shape as `template`.
pub(crate) fn read_field<S: ByteStore>(
    buf: &mut ByteBuffer<S>,
    template: &Field,
) -> Result<Field, BufferError> {
    Ok(match *template {
        Field::Int { size, big, .. } => Field::Int {
            value: if big { buf.read_int_be(size)? } else { buf.read_int(size)? },
            size,
            big,
        },
        Field::UInt { size, big, .. } => Field::UInt {
            value: if big { buf.read_uint_be(size)? } else { buf.read_uint(size)? },
            size,
            big,
        },
        Field::Float { big, .. } => Field::Float {
            bits: if big { buf.read_float_be()? } else { buf.read_float()? }.to_bits(),
            big,
        },
        Field::Double { big, .. } => Field::Double {
            bits: if big { buf.read_double_be()? } else { buf.read_double()? }.to_bits(),
            big,
        },
        Field::Text(ref text) => Field::Text(buf.read_utf8_str(Some(text.len()))?),
        Field::Bytes(ref bytes) => Field::Bytes(buf.read_bytes(Some(bytes.len()))?),
    })
}
