#![no_main]

use arbitrary::Arbitrary;
use bytecursor::{ArrayBuffer, BufferError, ByteBuffer, ByteStore, DequeBuffer};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug, Clone)]
enum Op {
    WriteInt { value: i64, size: u8, big: bool },
    WriteUInt { value: u64, size: u8, big: bool },
    WriteFloat(f32),
    WriteDouble(f64),
    WriteBytes(Vec<u8>),
    WriteList16(Vec<u64>),
    ReadInt { size: u8, big: bool },
    ReadUInt { size: u8, big: bool },
    ReadDouble,
    ReadBytes(Option<u8>),
    ReadText(Option<u8>),
    ReadList24(u8),
    Seek(u8),
    Ltrim,
    Rtrim,
    Clear,
}

/// Outcomes as plain data so both stores can be compared; floats as bits.
#[derive(Debug, PartialEq)]
enum Outcome {
    Done,
    Int(i64),
    UInt(u64),
    Bits(u64),
    Bytes(Vec<u8>),
    Text(String),
    List(Vec<u64>),
    Failed(BufferError),
}

fn apply<S: ByteStore>(buf: &mut ByteBuffer<S>, op: &Op) -> Outcome {
    let result = match *op {
        Op::WriteInt { value, size, big } => {
            let size = usize::from(size);
            let result = if big {
                buf.write_int_be(value, size)
            } else {
                buf.write_int(value, size)
            };
            result.map(|_| Outcome::Done)
        }
        Op::WriteUInt { value, size, big } => {
            let size = usize::from(size);
            let result = if big {
                buf.write_uint_be(value, size)
            } else {
                buf.write_uint(value, size)
            };
            result.map(|_| Outcome::Done)
        }
        Op::WriteFloat(value) => {
            buf.write_float_be(value);
            Ok(Outcome::Done)
        }
        Op::WriteDouble(value) => {
            buf.write_double(value);
            Ok(Outcome::Done)
        }
        Op::WriteBytes(ref bytes) => {
            buf.write_bytes(bytes);
            Ok(Outcome::Done)
        }
        Op::WriteList16(ref values) => buf.write_list_u16(values).map(|_| Outcome::Done),
        Op::ReadInt { size, big } => {
            let size = usize::from(size);
            let result = if big {
                buf.read_int_be(size)
            } else {
                buf.read_int(size)
            };
            result.map(Outcome::Int)
        }
        Op::ReadUInt { size, big } => {
            let size = usize::from(size);
            let result = if big {
                buf.read_uint_be(size)
            } else {
                buf.read_uint(size)
            };
            result.map(Outcome::UInt)
        }
        Op::ReadDouble => buf.read_double().map(|v| Outcome::Bits(v.to_bits())),
        Op::ReadBytes(len) => buf.read_bytes(len.map(usize::from)).map(Outcome::Bytes),
        Op::ReadText(len) => buf.read_utf8_str(len.map(usize::from)).map(Outcome::Text),
        Op::ReadList24(count) => buf.read_list_u24(usize::from(count)).map(Outcome::List),
        Op::Seek(position) => buf.set_position(usize::from(position)).map(|()| Outcome::Done),
        Op::Ltrim => {
            buf.ltrim();
            Ok(Outcome::Done)
        }
        Op::Rtrim => {
            buf.rtrim();
            Ok(Outcome::Done)
        }
        Op::Clear => {
            buf.clear();
            Ok(Outcome::Done)
        }
    };
    result.unwrap_or_else(Outcome::Failed)
}

fn check_invariants<S: ByteStore>(buf: &ByteBuffer<S>) {
    assert!(buf.position() <= buf.size());
    assert_eq!(buf.remains(), buf.size() - buf.position());
    assert_eq!(buf.is_more(), buf.remains() > 0);
    assert_eq!(buf.get_buffer().len(), buf.size());
}

fuzz_target!(|ops: Vec<Op>| {
    let mut vec = ArrayBuffer::new();
    let mut ring = DequeBuffer::new();
    for op in &ops {
        let before = vec.clone();
        let a = apply(&mut vec, op);
        let b = apply(&mut ring, op);
        assert_eq!(a, b, "stores disagree on {op:?}");
        assert_eq!(vec, ring, "stores diverged after {op:?}");
        if matches!(a, Outcome::Failed(_)) {
            assert_eq!(vec, before, "failed {op:?} mutated the buffer");
        }
        check_invariants(&vec);
        check_invariants(&ring);
    }
});
