use crate::decode::integer::{DecodeU32Error, decode_u32, decode_u32_counted};
use std::io::{self, Read};
use thiserror::Error;

// Upper bound on the capacity reserved up front for a list, whatever length it declares.
// Longer lists still decode; they just grow as elements arrive.
const MAX_PREALLOCATED_ELEMENTS: usize = 1024;

pub(crate) fn read_byte<R: Read + ?Sized>(reader: &mut R) -> Result<u8, io::Error> {
    let mut buf = [0u8];
    reader.read_exact(&mut buf)?;
    Ok(buf[0])
}

#[derive(Debug, Error)]
pub enum DecodeFloat32Error {
    #[error("failed reading 4 bytes for f32")]
    ReadPayload(#[from] io::Error),
}

pub(crate) fn decode_f32<R: Read + ?Sized>(r: &mut R) -> Result<f32, DecodeFloat32Error> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(f32::from_le_bytes(buf))
}

#[derive(Debug, Error)]
pub enum DecodeFloat64Error {
    #[error("failed reading 8 bytes for f64")]
    ReadPayload(#[from] io::Error),
}

pub(crate) fn decode_f64<R: Read + ?Sized>(r: &mut R) -> Result<f64, DecodeFloat64Error> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(f64::from_le_bytes(buf))
}

#[derive(Error)]
pub enum DecodeListError<E> {
    #[error("failed decoding list length")]
    DecodeLength(#[from] DecodeU32Error),

    #[error("failed parsing list element at position {position}")]
    ParseElement { position: u32, source: E },
}

/// Decodes a list of homogeneous elements, encoded as their u32 count followed by each
/// element in turn.
pub(crate) fn decode_list<R, F, T, E>(
    reader: &mut R,
    mut parse_fn: F,
) -> Result<Vec<T>, DecodeListError<E>>
where
    R: Read + ?Sized,
    F: FnMut(&mut R) -> Result<T, E>,
{
    let len = decode_u32(reader)?;

    let capacity = usize::try_from(len).map_or(MAX_PREALLOCATED_ELEMENTS, |len| {
        len.min(MAX_PREALLOCATED_ELEMENTS)
    });
    let mut items = Vec::with_capacity(capacity);
    for i in 0..len {
        let elem = parse_fn(reader).map_err(|err| DecodeListError::ParseElement {
            position: i,
            source: err,
        })?;
        items.push(elem);
    }

    Ok(items)
}

// we want any DecodeListError::ParseElement errors to also display the inner
// error type pointed to by source.
impl<E: std::fmt::Debug> std::fmt::Debug for DecodeListError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DecodeLength(e) => f.debug_tuple("DecodeLength").field(e).finish(),
            Self::ParseElement { position, source } => f
                .debug_struct("ParseElement")
                .field("position", position)
                .field(
                    "source",
                    &format_args!(
                        "{}::{source:#?}",
                        std::any::type_name::<E>()
                            .rsplit("::")
                            .next()
                            .unwrap_or_else(|| std::any::type_name::<E>())
                    ),
                )
                .finish(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DecodeByteVectorError {
    #[error("failed decoding vector length")]
    DecodeLength(#[from] DecodeU32Error),

    #[error("failed reading vector elements")]
    ReadElements(#[from] io::Error),
}

/// Reads a u32 length followed by that many bytes. Memory is only committed as bytes actually
/// arrive, so a bogus length on a short input fails with `UnexpectedEof` instead of
/// allocating up front.
pub(crate) fn decode_byte_vector<R: Read + ?Sized>(
    reader: &mut R,
) -> Result<Vec<u8>, DecodeByteVectorError> {
    decode_byte_vector_counted(reader).map(|(bytes, _)| bytes)
}

// Also returns the number of bytes consumed, length prefix included.
fn decode_byte_vector_counted<R: Read + ?Sized>(
    reader: &mut R,
) -> Result<(Vec<u8>, usize), DecodeByteVectorError> {
    let (len, prefix_len) = decode_u32_counted(reader)?;

    let mut bytes = Vec::new();
    let mut payload = Read::take(&mut *reader, u64::from(len));
    payload.read_to_end(&mut bytes)?;
    if payload.limit() != 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }

    let consumed = prefix_len + bytes.len();
    Ok((bytes, consumed))
}

#[derive(Debug, Error)]
pub enum DecodeNameError {
    #[error(transparent)]
    DecodeByteVector(#[from] DecodeByteVectorError),

    #[error("name is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub(crate) fn decode_name<R: Read + ?Sized>(reader: &mut R) -> Result<String, DecodeNameError> {
    decode_name_counted(reader).map(|(name, _)| name)
}

/// Decodes a length-prefixed UTF-8 name, returning it together with the number of bytes it
/// occupied, length prefix included.
///
/// <https://www.w3.org/TR/wasm-core-1/#names%E2%91%A2>
pub fn decode_name_counted<R: Read + ?Sized>(
    reader: &mut R,
) -> Result<(String, usize), DecodeNameError> {
    let (bytes, consumed) = decode_byte_vector_counted(reader)?;
    Ok((String::from_utf8(bytes)?, consumed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_name_reads_length_prefixed_text() {
        let mut input: &[u8] = &[0x05, b'h', b'e', b'l', b'l', b'o', 0xFF];
        assert_eq!(decode_name(&mut input).unwrap(), "hello");
        assert_eq!(input, &[0xFF]);
    }

    #[test]
    fn decode_name_counts_length_prefix() {
        let mut name = vec![0x80, 0x01];
        name.extend(std::iter::repeat_n(b'a', 128));
        let (decoded, consumed) = decode_name_counted(&mut name.as_slice()).unwrap();
        assert_eq!(decoded.len(), 128);
        assert_eq!(consumed, 130);
    }

    #[test]
    fn decode_name_rejects_invalid_utf8() {
        let mut input: &[u8] = &[0x02, 0xC3, 0x28];
        let err = decode_name(&mut input).unwrap_err();
        assert!(matches!(err, DecodeNameError::Utf8(_)));
    }

    #[test]
    fn decode_name_reports_truncation() {
        let mut input: &[u8] = &[0x05, b'h', b'e'];
        match decode_name(&mut input).unwrap_err() {
            DecodeNameError::DecodeByteVector(DecodeByteVectorError::ReadElements(e)) => {
                assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn decode_list_reports_failing_position() {
        let mut input: &[u8] = &[0x03, 0x01, 0x02];
        let err = decode_list(&mut input, read_byte).unwrap_err();
        match err {
            DecodeListError::ParseElement { position, source } => {
                assert_eq!(position, 2);
                assert_eq!(source.kind(), io::ErrorKind::UnexpectedEof);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn decode_list_does_not_trust_declared_length_for_allocation() {
        // declares u32::MAX elements but carries none
        let mut input: &[u8] = &[0xFF, 0xFF, 0xFF, 0xFF, 0x0F];
        assert!(decode_list(&mut input, read_byte).is_err());
    }
}
