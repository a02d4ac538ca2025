//! Encodes a handful of type-length-value records, then parses them back one
//! at a time, trimming each parsed record off the front of the buffer.
//!
//! Run with
//!
//! ```bash
//! RUST_LOG=trace cargo run -p bytecursor --example tlv_record
//! ```

use bytecursor::{BufferError, DequeBuffer};
use tracing_subscriber::EnvFilter;

const TAG_NAME: u64 = 1;
const TAG_COUNT: u64 = 2;
const TAG_RATIO: u64 = 3;

fn main() -> Result<(), BufferError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut buf = DequeBuffer::new();

    // tag u8, length u16 BE, value
    buf.write_uint8(TAG_NAME)?.write_uint16_be(5)?;
    buf.write_utf8_string("gauge");
    buf.write_uint8(TAG_COUNT)?.write_uint16_be(4)?.write_uint32(42)?;
    buf.write_uint8(TAG_RATIO)?.write_uint16_be(8)?;
    buf.write_double_be(0.75);
    println!("encoded {} bytes: {buf}", buf.size());

    // An out-of-range value is rejected before anything is appended.
    if let Err(err) = buf.write_uint16_be(70_000) {
        println!("rejected: {err}");
    }

    while buf.is_more() {
        let tag = buf.read_uint8()?;
        let len = usize::try_from(buf.read_uint16_be()?).unwrap_or(usize::MAX);
        match tag {
            TAG_NAME => println!("name  = {}", buf.read_utf8_str(Some(len))?),
            TAG_COUNT => println!("count = {}", buf.read_uint32()?),
            TAG_RATIO => println!("ratio = {}", buf.read_double_be()?),
            _ => {
                buf.read_bytes(Some(len))?;
            }
        }
        buf.ltrim();
    }

    Ok(())
}
