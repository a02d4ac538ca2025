use alloc::{string::ToString, vec::Vec};

use rstest::rstest;

use crate::{
    ArrayBuffer, BoundsError, BufferError, ByteBuffer, ByteStore, DequeBuffer, DequeStore, VecStore,
};

fn two_fields<S: ByteStore>() -> ByteBuffer<S> {
    let mut buf = ByteBuffer::<S>::new();
    buf.write_int16(100).unwrap().write_int16_be(100).unwrap();
    buf
}

#[test]
fn ltrim_drops_parsed_prefix() {
    fn check<S: ByteStore>() {
        let mut buf = two_fields::<S>();
        assert_eq!(buf.size(), 4);
        assert_eq!(buf.read_int16().unwrap(), 100);
        assert_eq!(buf.position(), 2);

        buf.ltrim();
        assert_eq!(buf.size(), 2);
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.to_string(), "00 64");
        assert_eq!(buf.read_int16_be().unwrap(), 100);
    }
    check::<VecStore>();
    check::<DequeStore>();
}

#[test]
fn ltrim_at_start_keeps_everything() {
    let mut buf = two_fields::<VecStore>();
    buf.ltrim();
    assert_eq!(buf.to_string(), "64 00 00 64");
}

#[rstest]
#[case::at_start(0, "0A")]
#[case::middle(2, "0A 0B 0C")]
#[case::last_byte(4, "0A 0B 0C 0D 0E")]
#[case::at_end(5, "0A 0B 0C 0D 0E")]
fn rtrim_keeps_byte_under_cursor(#[case] position: usize, #[case] expected: &str) {
    fn check<S: ByteStore>(position: usize, expected: &str) {
        let mut buf = ByteBuffer::<S>::from_bytes([0x0A, 0x0B, 0x0C, 0x0D, 0x0E]);
        buf.set_position(position).unwrap();
        buf.rtrim();
        assert_eq!(buf.to_string(), expected);
        assert_eq!(buf.position(), 0);
    }
    check::<VecStore>(position, expected);
    check::<DequeStore>(position, expected);
}

#[test]
fn rtrim_on_empty_buffer_is_a_no_op() {
    let mut buf = ArrayBuffer::new();
    buf.rtrim();
    assert!(buf.is_empty());
    assert_eq!(buf.position(), 0);
}

#[test]
fn clear_resets_bytes_and_cursor() {
    let mut buf = DequeBuffer::from_text("abc");
    buf.read_uint8().unwrap();
    buf.clear();
    assert!(buf.is_empty());
    assert_eq!(buf.position(), 0);
    assert_eq!(buf.to_string(), "");
}

#[test]
fn seek_is_checked() {
    let mut buf = ArrayBuffer::from_bytes([1, 2, 3]);
    buf.set_position(3).unwrap();
    assert!(!buf.is_more());
    assert_eq!(
        buf.set_position(4).unwrap_err(),
        BufferError::Bounds(BoundsError::Seek { target: 4, size: 3 })
    );
    assert_eq!(buf.position(), 3);
    buf.set_position(1).unwrap();
    assert_eq!(buf.read_uint8().unwrap(), 2);
}

#[test]
fn writes_append_behind_the_cursor() {
    let mut buf = ArrayBuffer::from_bytes([1, 2]);
    buf.set_position(1).unwrap();
    buf.write_uint8(3).unwrap();
    assert_eq!(buf.position(), 1);
    assert_eq!(buf.read_list_u8(2).unwrap(), [2, 3]);
}

#[test]
fn remains_and_is_more_track_the_cursor() {
    let mut buf = ArrayBuffer::new();
    assert_eq!(buf.remains(), 0);
    assert!(!buf.is_more());

    buf.write_utf8_string("abcde");
    assert_eq!(buf.remains(), 5);
    assert!(buf.is_more());

    assert_eq!(buf.read_utf8_string(Some(4)).unwrap(), "abcd");
    assert_eq!(buf.remains(), 1);
    assert!(buf.is_more());

    buf.read_uint8().unwrap();
    assert_eq!(buf.remains(), 0);
    assert!(!buf.is_more());
}

#[test]
fn peek_does_not_consume() {
    let mut buf = ArrayBuffer::from_bytes([7, 8]);
    assert_eq!(buf.peek_u8(), Some(7));
    assert_eq!(buf.peek_u8(), Some(7));
    buf.read_uint8().unwrap();
    assert_eq!(buf.peek_u8(), Some(8));
    buf.read_uint8().unwrap();
    assert_eq!(buf.peek_u8(), None);
}

#[test]
fn views_cover_whole_buffer_regardless_of_cursor() {
    let mut buf = DequeBuffer::from_text("abc");
    buf.read_uint8().unwrap();
    assert_eq!(buf.encode(), "abc");
    assert_eq!(buf.to_bytes_array(), b"abc");
    assert_eq!(&*buf.get_buffer(), b"abc");
    assert_eq!(buf.into_bytes(), b"abc");
}

#[test]
fn stores_compare_by_content_and_cursor() {
    let mut vec = ArrayBuffer::from_text("xyz");
    let mut ring = DequeBuffer::from_text("xyz");
    assert_eq!(vec, ring);
    vec.read_uint8().unwrap();
    assert_ne!(vec, ring);
    ring.read_uint8().unwrap();
    assert_eq!(vec, ring);
}

#[test]
fn construction_helpers_agree() {
    let from_iter: ArrayBuffer = (1u8..=3).collect();
    let mut extended = ArrayBuffer::new();
    extended.extend([1u8, 2, 3]);
    assert_eq!(from_iter, extended);
    assert_eq!(from_iter, ArrayBuffer::from(Vec::from([1u8, 2, 3])));

    let mut ring: DequeBuffer = (1u8..=2).collect();
    ring.read_uint8().unwrap();
    ring.extend((3u8..=4).filter(|b| b % 2 == 0));
    assert_eq!(ring.to_string(), "01 02 04");
    assert_eq!(ring.position(), 1);

    let wrapped = ByteBuffer::with_store(VecStore::from_vec(Vec::from([7u8, 8])));
    assert_eq!(wrapped.position(), 0);
    assert_eq!(wrapped.store().len(), 2);
    assert_eq!(wrapped, ArrayBuffer::from_bytes([7u8, 8]));
    assert_eq!(ArrayBuffer::from("ab"), ArrayBuffer::from(&b"ab"[..]));
    assert!(ArrayBuffer::with_capacity(64).is_empty());
}

#[test]
fn incremental_parse_with_ring_store() {
    // Length-prefixed frames arriving in pieces; each parsed frame is trimmed.
    let mut buf = DequeBuffer::new();
    let mut frames = Vec::new();
    let chunks: [&[u8]; 4] = [&[3, b'a'], b"bc", &[2, b'd', b'e', 1], b"f"];
    for chunk in chunks {
        buf.write_bytes(chunk);
        while let Some(len) = buf.peek_u8() {
            let len = usize::from(len);
            if buf.remains() < 1 + len {
                break;
            }
            buf.read_uint8().unwrap();
            frames.push(buf.read_utf8_str(Some(len)).unwrap());
            buf.ltrim();
        }
    }
    assert_eq!(frames, ["abc", "de", "f"]);
    assert!(buf.is_empty());
}
