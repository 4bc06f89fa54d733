use crate::core::indices::{FuncIdx, TableIdx};
use crate::core::{ConstExpr, Elem};
use crate::decode::DecodeConstExprError;
use crate::decode::helpers::{DecodeListError, decode_list};
use crate::decode::indices::{DecodeFuncIdxError, DecodeTableIdxError};
use std::io::Read;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeElementSectionError {
    #[error("failed decoding Element section")]
    DecodeList(#[from] DecodeListError<DecodeElementError>),
}

pub(crate) fn decode_element_section<R: Read + ?Sized>(
    reader: &mut R,
) -> Result<Vec<Elem>, DecodeElementSectionError> {
    Ok(decode_list(reader, parse_elem)?)
}

#[derive(Debug, Error)]
pub enum DecodeElementError {
    #[error(transparent)]
    DecodeTableIdx(#[from] DecodeTableIdxError),

    #[error("failed decoding offset expression")]
    DecodeOffsetExpression(#[from] DecodeConstExprError),

    #[error("failed decoding function indices")]
    DecodeFuncIdxList(#[from] DecodeListError<DecodeFuncIdxError>),
}

fn parse_elem<R: Read + ?Sized>(reader: &mut R) -> Result<Elem, DecodeElementError> {
    Ok(Elem {
        table: TableIdx::decode(reader)?,
        offset: ConstExpr::decode(reader)?,
        init: decode_list(reader, FuncIdx::decode)?,
    })
}
