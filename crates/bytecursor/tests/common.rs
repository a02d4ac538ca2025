#![allow(missing_docs, dead_code)]

use bytecursor::{BufferError, ByteBuffer, ByteStore};

/// A small telemetry frame as a device would emit it.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub version: u8,
    pub flags: u8,
    pub timestamp: u32,
    pub temperature: f32,
    pub samples: Vec<u16>,
    pub name: String,
    pub offset: f64,
}

pub const MAGIC: u64 = 0xCAFE;

pub fn sample() -> Reading {
    Reading {
        version: 1,
        flags: 0b101,
        timestamp: 1_700_000_000,
        temperature: 21.5,
        samples: vec![100, 200, 65_535],
        name: "probe-7".to_string(),
        offset: -0.125,
    }
}

/// Layout: magic u16 BE, version u8, flags u8, timestamp u32 LE, temperature
/// f32 LE, sample count u16 LE, samples u16 LE each, name (rest minus the
/// trailing 8 bytes), offset f64 BE.
pub fn encode<S: ByteStore>(buf: &mut ByteBuffer<S>, r: &Reading) -> Result<(), BufferError> {
    let samples: Vec<u64> = r.samples.iter().copied().map(u64::from).collect();
    buf.write_uint16_be(MAGIC)?
        .write_uint8(r.version.into())?
        .write_uint8(r.flags.into())?
        .write_uint32(r.timestamp.into())?;
    buf.write_float(r.temperature)
        .write_uint16(samples.len() as u64)?
        .write_list_u16(&samples)?;
    buf.write_utf8_string(&r.name).write_double_be(r.offset);
    Ok(())
}

pub fn decode<S: ByteStore>(buf: &mut ByteBuffer<S>) -> Result<Reading, BufferError> {
    assert_eq!(buf.read_uint16_be()?, MAGIC);
    let version = buf.read_uint8()? as u8;
    let flags = buf.read_uint8()? as u8;
    let timestamp = buf.read_uint32()? as u32;
    let temperature = buf.read_float()?;
    let count = buf.read_uint16()? as usize;
    let samples = buf.read_list_u16(count)?.into_iter().map(|v| v as u16).collect();
    let name_len = buf.remains().saturating_sub(8);
    let name = buf.read_utf8_str(Some(name_len))?;
    let offset = buf.read_double_be()?;
    Ok(Reading {
        version,
        flags,
        timestamp,
        temperature,
        samples,
        name,
        offset,
    })
}
