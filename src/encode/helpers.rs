use crate::core::types::ExternKind;
use crate::encode::integer::encode_u32;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error(transparent)]
    Unsupported(#[from] UnsupportedEncodeError),

    #[error("length {len} does not fit in a u32 length prefix")]
    LengthOverflow { len: usize },
}

/// Encoding a value of this kind is not implemented.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported encode target: {kind} import descriptor")]
pub struct UnsupportedEncodeError {
    pub kind: ExternKind,
}

pub(crate) fn encode_len(len: usize, out: &mut Vec<u8>) -> Result<(), EncodeError> {
    let len = u32::try_from(len).map_err(|_| EncodeError::LengthOverflow { len })?;
    encode_u32(len, out);
    Ok(())
}

pub(crate) fn encode_list<T, F>(
    items: &[T],
    out: &mut Vec<u8>,
    mut encode_fn: F,
) -> Result<(), EncodeError>
where
    F: FnMut(&T, &mut Vec<u8>) -> Result<(), EncodeError>,
{
    encode_len(items.len(), out)?;
    items.iter().try_for_each(|item| encode_fn(item, out))
}

pub(crate) fn encode_byte_vector(bytes: &[u8], out: &mut Vec<u8>) -> Result<(), EncodeError> {
    encode_len(bytes.len(), out)?;
    out.extend_from_slice(bytes);
    Ok(())
}

pub(crate) fn encode_name(name: &str, out: &mut Vec<u8>) -> Result<(), EncodeError> {
    encode_byte_vector(name.as_bytes(), out)
}

/// Frames `payload` as `id`, its u32 length, then the payload itself. Used for both
/// sections and name subsections.
pub(crate) fn encode_framed(id: u8, payload: &[u8], out: &mut Vec<u8>) -> Result<(), EncodeError> {
    out.push(id);
    encode_byte_vector(payload, out)
}
