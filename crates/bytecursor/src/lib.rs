//! A cursor-based binary buffer.
//!
//! [`ByteBuffer`] pairs an in-memory byte sequence with a read position and
//! offers typed writes and reads for 1–8 byte signed and unsigned integers,
//! IEEE-754 floats, raw byte runs and UTF-8 text, in little- and big-endian
//! order. Writes append; reads advance the cursor; [`ByteBuffer::ltrim`] drops
//! what has already been parsed.
//!
//! ```
//! use bytecursor::{ArrayBuffer, BoundsError, BufferError};
//!
//! let mut buf = ArrayBuffer::new();
//! buf.write_int(-1000, 2)?;
//! assert_eq!(buf.to_string(), "18 FC");
//!
//! assert_eq!(buf.read_int(2)?, -1000);
//! assert!(matches!(
//!     buf.read_uint8(),
//!     Err(BufferError::Bounds(BoundsError::Underflow { requested: 1, .. }))
//! ));
//! # Ok::<(), BufferError>(())
//! ```
//!
//! The storage strategy is a type parameter: [`ArrayBuffer`] keeps the bytes
//! in a `Vec<u8>`, [`DequeBuffer`] in a ring that discards consumed prefixes
//! without shifting. Both behave identically.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod error;
mod fixed;
mod list;
mod store;
mod width;

#[cfg(test)]
mod tests;

pub use buffer::{ArrayBuffer, ByteBuffer, DequeBuffer};
pub use error::{BoundsError, BufferError, RangeError};
pub use store::{ByteStore, DequeStore, VecStore};

pub use bstr::BString;
