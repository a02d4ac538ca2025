//! Fixed-width integer packing.
//!
//! Values of one through eight bytes are carried in the low bytes of a `u64`.
//! Encoding is plain two's-complement truncation (`byte_i = (v >> 8i) & 0xFF`)
//! and decoding sign-extends from the top bit of the chosen width, so the same
//! routines serve every width from 8 to 64 bits.

use crate::error::RangeError;

/// Largest supported width in bytes.
pub(crate) const MAX_WIDTH: usize = 8;

/// Byte order of a multi-byte field.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Order {
    Little,
    Big,
}

pub(crate) fn check_width(size: usize) -> Result<(), RangeError> {
    if (1..=MAX_WIDTH).contains(&size) {
        Ok(())
    } else {
        Err(RangeError::Width(size))
    }
}

/// Inclusive bounds of a signed field `size` bytes wide:
/// `[-(256^(size-1) * 128), 256^(size-1) * 128 - 1]`.
pub(crate) fn signed_bounds(size: usize) -> (i128, i128) {
    let half = 1i128 << (8 * size - 1);
    (-half, half - 1)
}

/// Inclusive upper bound of an unsigned field `size` bytes wide.
pub(crate) fn unsigned_max(size: usize) -> i128 {
    (1i128 << (8 * size)) - 1
}

pub(crate) fn check_signed(value: i64, size: usize) -> Result<(), RangeError> {
    check_width(size)?;
    let (min, max) = signed_bounds(size);
    let value = i128::from(value);
    if value < min || value > max {
        return Err(RangeError::OutOfRange { value, min, max });
    }
    Ok(())
}

pub(crate) fn check_unsigned(value: u64, size: usize) -> Result<(), RangeError> {
    check_width(size)?;
    let max = unsigned_max(size);
    let value = i128::from(value);
    if value > max {
        return Err(RangeError::OutOfRange { value, min: 0, max });
    }
    Ok(())
}

/// Encodes the low `size` bytes of `value` into `out[..size]`.
///
/// The caller has already range-checked `value`, so the truncated bytes are
/// either all zero or (for negative signed input) all `0xFF`.
pub(crate) fn pack(value: u64, size: usize, order: Order, out: &mut [u8; MAX_WIDTH]) {
    let le = value.to_le_bytes();
    match order {
        Order::Little => out[..size].copy_from_slice(&le[..size]),
        Order::Big => {
            for (dst, src) in out[..size].iter_mut().zip(le[..size].iter().rev()) {
                *dst = *src;
            }
        }
    }
}

/// Reassembles an unsigned value from `bytes` (at most eight of them).
pub(crate) fn unpack(bytes: &[u8], order: Order) -> u64 {
    debug_assert!(bytes.len() <= MAX_WIDTH);
    let fold = |acc: u64, b: &u8| (acc << 8) | u64::from(*b);
    match order {
        Order::Little => bytes.iter().rev().fold(0, fold),
        Order::Big => bytes.iter().fold(0, fold),
    }
}

/// Two's-complement decoding of a `size`-byte unsigned value: anything at or
/// above `2^(8*size-1)` maps to `unsigned - 2^(8*size)`.
#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
pub(crate) fn sign_extend(unsigned: u64, size: usize) -> i64 {
    let shift = 64 - 8 * size as u32;
    ((unsigned << shift) as i64) >> shift
}
