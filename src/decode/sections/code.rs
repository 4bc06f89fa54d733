use crate::core::Code;
use crate::decode::helpers::{
    DecodeByteVectorError, DecodeListError, decode_byte_vector, decode_list,
};
use std::io::Read;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeCodeSectionError {
    #[error("failed decoding Code section")]
    DecodeList(#[from] DecodeListError<DecodeCodeError>),
}

pub(crate) fn decode_code_section<R: Read + ?Sized>(
    reader: &mut R,
) -> Result<Vec<Code>, DecodeCodeSectionError> {
    Ok(decode_list(reader, parse_code)?)
}

#[derive(Debug, Error)]
pub enum DecodeCodeError {
    #[error("failed reading function body")]
    ReadBody(#[from] DecodeByteVectorError),
}

// The body is size-prefixed, so it can be taken as a whole without looking at the
// instructions inside.
fn parse_code<R: Read + ?Sized>(reader: &mut R) -> Result<Code, DecodeCodeError> {
    Ok(Code {
        body: decode_byte_vector(reader)?,
    })
}
