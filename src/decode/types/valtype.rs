use crate::core::types::valtype::ValType;
use crate::decode::FromMarkerByte;
use crate::decode::read_byte;
use phf::phf_ordered_map;
use std::io::{self, Read};
use thiserror::Error;

// Valid marker bytes for [ValType].
#[expect(non_upper_case_globals)]
static ValType_MARKERS: phf::OrderedMap<u8, ValType> = phf_ordered_map! {
    0x7Fu8 => ValType::I32,
    0x7Eu8 => ValType::I64,
    0x7Du8 => ValType::F32,
    0x7Cu8 => ValType::F64,
};

#[derive(Debug, Error)]
#[error(
    "invalid ValType marker byte - expected one of {markers}; got {0:#04X}",
    markers = ValType::markers_formatted()
)]
pub struct InvalidValTypeMarkerError(pub u8);

impl From<u8> for InvalidValTypeMarkerError {
    fn from(b: u8) -> Self {
        Self(b)
    }
}

#[derive(Debug, Error)]
pub enum DecodeValTypeError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    InvalidMarkerByte(#[from] InvalidValTypeMarkerError),
}

impl ValType {
    pub(crate) fn decode<R: Read + ?Sized>(reader: &mut R) -> Result<Self, DecodeValTypeError> {
        Ok(Self::from_marker(read_byte(reader)?)?)
    }
}

impl FromMarkerByte for ValType {
    type Error = InvalidValTypeMarkerError;

    fn markers() -> &'static phf::OrderedMap<u8, Self> {
        &ValType_MARKERS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_every_number_type() {
        let mut input: &[u8] = &[0x7F, 0x7E, 0x7D, 0x7C];
        let decoded: Vec<ValType> = (0..4)
            .map(|_| ValType::decode(&mut input).unwrap())
            .collect();
        assert_eq!(
            decoded,
            vec![ValType::I32, ValType::I64, ValType::F32, ValType::F64]
        );
    }

    #[test]
    fn rejects_unknown_marker() {
        let mut input: &[u8] = &[0x7B];
        match ValType::decode(&mut input).unwrap_err() {
            DecodeValTypeError::InvalidMarkerByte(InvalidValTypeMarkerError(b)) => {
                assert_eq!(b, 0x7B)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
