use thiserror::Error;

/// Any failure reported by a [`ByteBuffer`](crate::ByteBuffer) operation.
///
/// Every variant is raised before the buffer is touched: a failed write
/// appends nothing and a failed read leaves the cursor where it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// A value does not fit the requested width and signedness.
    #[error("range error: {0}")]
    Range(#[from] RangeError),
    /// A read or seek reaches past the stored bytes.
    #[error("bounds error: {0}")]
    Bounds(#[from] BoundsError),
    /// Bytes requested as validated text are not UTF-8.
    #[error("invalid utf-8: {0}")]
    Utf8(#[from] core::str::Utf8Error),
}

/// Rejection of a numeric value or of the width it is encoded with.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// `value` lies outside `[min, max]` for the requested width.
    #[error("value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        /// The rejected value.
        value: i128,
        /// Smallest encodable value.
        min: i128,
        /// Largest encodable value.
        max: i128,
    },
    /// Widths are limited to one through eight bytes.
    #[error("unsupported byte width {0}, expected 1..=8")]
    Width(usize),
}

/// Rejection of a cursor movement.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsError {
    /// Fewer than `requested` bytes remain after `position`.
    #[error(
        "not enough bytes in the buffer: position {position}, size {size}, requested {requested}"
    )]
    Underflow {
        /// Cursor at the time of the read.
        position: usize,
        /// Number of stored bytes.
        size: usize,
        /// Bytes the read needed.
        requested: usize,
    },
    /// The cursor was asked to move past the end.
    #[error("position {target} is out of bounds [0, {size}]")]
    Seek {
        /// Requested cursor.
        target: usize,
        /// Number of stored bytes.
        size: usize,
    },
}
