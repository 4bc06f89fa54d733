use crate::core::indices::MemIdx;
use crate::core::{ConstExpr, Data};
use crate::decode::DecodeConstExprError;
use crate::decode::helpers::{
    DecodeByteVectorError, DecodeListError, decode_byte_vector, decode_list,
};
use crate::decode::indices::DecodeMemIdxError;
use std::io::Read;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeDataSectionError {
    #[error("failed decoding Data section")]
    DecodeList(#[from] DecodeListError<DecodeDataSegmentError>),
}

pub(crate) fn decode_data_section<R: Read + ?Sized>(
    reader: &mut R,
) -> Result<Vec<Data>, DecodeDataSectionError> {
    Ok(decode_list(reader, parse_data)?)
}

#[derive(Debug, Error)]
pub enum DecodeDataSegmentError {
    #[error("failed decoding Memory index")]
    DecodeMemIdx(#[from] DecodeMemIdxError),

    #[error("failed decoding offset expression")]
    DecodeOffsetExpr(#[from] DecodeConstExprError),

    #[error("failed decoding init byte vector")]
    DecodeInitVector(#[from] DecodeByteVectorError),
}

fn parse_data<R: Read + ?Sized>(reader: &mut R) -> Result<Data, DecodeDataSegmentError> {
    Ok(Data {
        memory: MemIdx::decode(reader)?,
        offset: ConstExpr::decode(reader)?,
        init: decode_byte_vector(reader)?,
    })
}
