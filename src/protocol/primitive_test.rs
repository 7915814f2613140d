use crate::error::Error;
use crate::protocol::primitive::*;

#[test]
fn lenenc_one_byte() {
    let (value, rest) = read_int_lenenc(&[0xFA, 0x01]).unwrap();
    assert_eq!(value, 250);
    assert_eq!(rest, &[0x01]);
}

#[test]
fn lenenc_two_bytes() {
    let (value, rest) = read_int_lenenc(&[0xFC, 0x34, 0x12]).unwrap();
    assert_eq!(value, 0x1234);
    assert!(rest.is_empty());
}

#[test]
fn lenenc_three_bytes() {
    let (value, _) = read_int_lenenc(&[0xFD, 0x56, 0x34, 0x12]).unwrap();
    assert_eq!(value, 0x123456);
}

#[test]
fn lenenc_eight_bytes() {
    let (value, _) =
        read_int_lenenc(&[0xFE, 0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]).unwrap();
    assert_eq!(value, 0x0102030405060708);
}

#[test]
fn lenenc_truncated() {
    assert!(matches!(read_int_lenenc(&[]), Err(Error::UnexpectedEof)));
    assert!(matches!(read_int_lenenc(&[0xFC, 0x01]), Err(Error::UnexpectedEof)));
    assert!(matches!(read_int_lenenc(&[0xFD, 0x01, 0x02]), Err(Error::UnexpectedEof)));
}

#[test]
fn lenenc_null_marker() {
    assert!(matches!(read_int_lenenc(&[0xFB]), Err(Error::InvalidPacket)));
}

#[test]
fn string_lenenc() {
    let (s, rest) = read_string_lenenc(b"\x05usersxyz").unwrap();
    assert_eq!(s, b"users");
    assert_eq!(rest, b"xyz");
}

#[test]
fn string_lenenc_too_short() {
    assert!(matches!(
        read_string_lenenc(b"\x05use"),
        Err(Error::UnexpectedEof)
    ));
}
