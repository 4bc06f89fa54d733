//! Helpers for decoding LEB128-encoded integers.
//!
//! <https://en.wikipedia.org/wiki/LEB128>
use crate::decode::read_byte;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeU32Error {
    #[error("uint32 too large")]
    TooLarge,

    #[error("uint32 representation too long")]
    RepresentationTooLong,

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Decodes an unsigned LEB128 u32, returning the value together with the number of bytes
/// it occupied.
pub fn decode_u32_counted<R: io::Read + ?Sized>(
    reader: &mut R,
) -> Result<(u32, usize), DecodeU32Error> {
    let mut result: u32 = 0;
    let mut shift: u8 = 0;

    // 5 == ceil(32/7)
    for i in 1..=5 {
        let byte = read_byte(reader)?;

        result |= u32::from(byte & 0b0111_1111 /* 0x7F */) << shift;

        let continuation_bit = byte & 0b1000_0000 /* 0x80 */;
        if continuation_bit == 0 {
            if i == 5 && (byte & 0b1111_0000/* 0xF0 */) != 0 {
                // we're at byte 5, which means 4*7=28 bits have been
                // consumed by the payload at this point. This leaves no more
                // than 32-28=4 more bits available for the rest of the payload.
                return Err(DecodeU32Error::TooLarge);
            }
            return Ok((result, i));
        }

        shift += 7;
    }

    Err(DecodeU32Error::RepresentationTooLong)
}

pub fn decode_u32<R: io::Read + ?Sized>(reader: &mut R) -> Result<u32, DecodeU32Error> {
    decode_u32_counted(reader).map(|(value, _)| value)
}

#[derive(Error, Debug)]
pub enum DecodeI32Error {
    #[error("int32 too large")]
    TooLarge,

    #[error("int32 representation too long")]
    RepresentationTooLong,

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub(crate) fn decode_i32<R: io::Read + ?Sized>(reader: &mut R) -> Result<i32, DecodeI32Error> {
    let mut result: i64 = 0;
    let mut shift: u8 = 0;

    // 5 == ceil(32/7)
    for _ in 1..=5 {
        let byte = read_byte(reader)?;

        result |= i64::from(byte & 0b0111_1111 /* 0x7F */) << shift;
        shift += 7;

        let continuation_bit = byte & 0b1000_0000 /* 0x80 */;
        if continuation_bit == 0 {
            if (byte & 0b0100_0000/* 0x40 */) != 0 {
                result |= !0 << shift;
            }

            return i32::try_from(result).map_err(|_| DecodeI32Error::TooLarge);
        }
    }

    Err(DecodeI32Error::RepresentationTooLong)
}

#[derive(Error, Debug)]
pub enum DecodeI64Error {
    #[error("int64 representation too long")]
    RepresentationTooLong,

    #[error("int64 incorrect sign extension")]
    IncorrectSignExtension,

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub(crate) fn decode_i64<R: io::Read + ?Sized>(reader: &mut R) -> Result<i64, DecodeI64Error> {
    let mut result: i64 = 0;
    let mut shift: u8 = 0;

    // 10 == ceil(64/7)
    for _ in 1..=10 {
        let byte = read_byte(reader)?;

        result |= i64::from(byte & 0b0111_1111 /* 0x7F */) << shift;
        shift += 7;

        let continuation_bit = byte & 0b1000_0000 /* 0x80 */;
        if continuation_bit == 0 {
            let on_10th_byte = shift >= 64;
            let is_negative = (byte & 0b0100_0000/* 0x40 */) != 0;

            if on_10th_byte {
                // only the lowest bit of the 10th byte carries payload; the rest must
                // replicate the sign
                let padding = byte & 0b0011_1111 /* 0x3F */;
                if is_negative && padding != 0b0011_1111 {
                    return Err(DecodeI64Error::IncorrectSignExtension);
                }
                if !is_negative && padding != 0b0000_0000 {
                    return Err(DecodeI64Error::IncorrectSignExtension);
                }
            } else if is_negative {
                result |= !0 << shift;
            }

            return Ok(result);
        }
    }

    Err(DecodeI64Error::RepresentationTooLong)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::integer::{encode_i64, encode_u32};

    fn encoded_u32(value: u32) -> Vec<u8> {
        let mut out = Vec::new();
        encode_u32(value, &mut out);
        out
    }

    fn encoded_i64(value: i64) -> Vec<u8> {
        let mut out = Vec::new();
        encode_i64(value, &mut out);
        out
    }

    fn read_u32_from(bytes: Vec<u8>) -> Result<u32, DecodeU32Error> {
        decode_u32(&mut bytes.as_slice())
    }

    fn read_i32_from(bytes: Vec<u8>) -> Result<i32, DecodeI32Error> {
        decode_i32(&mut bytes.as_slice())
    }

    fn read_i64_from(bytes: Vec<u8>) -> Result<i64, DecodeI64Error> {
        decode_i64(&mut bytes.as_slice())
    }

    #[test]
    fn read_u32_decodes_simple_values() {
        assert_eq!(read_u32_from(encoded_u32(0)).unwrap(), 0);
        assert_eq!(read_u32_from(encoded_u32(127)).unwrap(), 127);
        assert_eq!(read_u32_from(encoded_u32(128)).unwrap(), 128);
        assert_eq!(read_u32_from(encoded_u32(u32::MAX)).unwrap(), u32::MAX);
    }

    #[test]
    fn read_u32_counts_consumed_bytes() {
        let mut input: &[u8] = &[0xE5, 0x8E, 0x26, 0xAA];
        assert_eq!(decode_u32_counted(&mut input).unwrap(), (624485, 3));
        assert_eq!(input, &[0xAA]);
    }

    #[test]
    fn read_u32_rejects_payload_bits_in_last_byte() {
        let err = read_u32_from(vec![0xFF, 0xFF, 0xFF, 0xFF, 0x10]).unwrap_err();
        assert!(matches!(err, DecodeU32Error::TooLarge));
    }

    #[test]
    fn read_u32_accepts_extended_zero() {
        assert_eq!(read_u32_from(vec![0x80, 0x00]).unwrap(), 0);
    }

    #[test]
    fn read_u32_rejects_six_groups() {
        let err = read_u32_from(vec![0x80, 0x80, 0x80, 0x80, 0x80, 0x00]).unwrap_err();
        assert!(matches!(err, DecodeU32Error::RepresentationTooLong));
    }

    #[test]
    fn read_u32_reports_truncation() {
        match read_u32_from(vec![0x80, 0x80]).unwrap_err() {
            DecodeU32Error::Io(e) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn read_i32_decodes_edge_values() {
        for value in [0, 1, -1, 63, -64, 64, -65, i32::MAX, i32::MIN] {
            assert_eq!(read_i32_from(encoded_i64(value.into())).unwrap(), value);
        }
    }

    #[test]
    fn read_i32_accepts_non_minimal_encoding_for_negative_one() {
        assert_eq!(read_i32_from(vec![0xFF, 0x7F]).unwrap(), -1);
    }

    #[test]
    fn read_i32_rejects_out_of_range_positive() {
        let bytes = encoded_i64(i64::from(i32::MAX) + 1);
        let err = read_i32_from(bytes).unwrap_err();
        assert!(matches!(err, DecodeI32Error::TooLarge));
    }

    #[test]
    fn read_i32_rejects_out_of_range_negative() {
        let bytes = encoded_i64(i64::from(i32::MIN) - 1);
        let err = read_i32_from(bytes).unwrap_err();
        assert!(matches!(err, DecodeI32Error::TooLarge));
    }

    #[test]
    fn read_i32_rejects_representation_too_long() {
        let err = read_i32_from(vec![0x80, 0x80, 0x80, 0x80, 0x80]).unwrap_err();
        assert!(matches!(err, DecodeI32Error::RepresentationTooLong));
    }

    #[test]
    fn read_i64_decodes_edge_values() {
        for value in [0i64, 1, -1, i64::MAX, i64::MIN] {
            assert_eq!(read_i64_from(encoded_i64(value)).unwrap(), value);
        }
    }

    #[test]
    fn read_i64_rejects_incorrect_positive_padding() {
        let mut bytes = vec![0x80; 9];
        bytes.push(0x02);
        let err = read_i64_from(bytes).unwrap_err();
        assert!(matches!(err, DecodeI64Error::IncorrectSignExtension));
    }

    #[test]
    fn read_i64_rejects_representation_too_long() {
        let err = read_i64_from(vec![0x80; 10]).unwrap_err();
        assert!(matches!(err, DecodeI64Error::RepresentationTooLong));
    }

    #[test]
    fn read_i64_accepts_full_length_negative_min() {
        let mut bytes = vec![0x80; 9];
        bytes.push(0x7F);
        assert_eq!(read_i64_from(bytes).unwrap(), i64::MIN);
    }
}
