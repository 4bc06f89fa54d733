use crate::core::indices::{FuncIdx, GlobalIdx, MemIdx, TableIdx};
use crate::core::types::ExternKind;
use crate::core::{Export, ExportDesc};
use crate::decode::FromMarkerByte;
use crate::decode::helpers::{DecodeListError, DecodeNameError, decode_list, decode_name};
use crate::decode::integer::{DecodeU32Error, decode_u32};
use crate::decode::read_byte;
use crate::decode::types::InvalidExternKindMarkerError;
use std::io::{self, Read};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeExportSectionError {
    #[error("failed decoding Export section")]
    DecodeList(#[from] DecodeListError<DecodeExportError>),
}

pub(crate) fn decode_export_section<R: Read + ?Sized>(
    reader: &mut R,
) -> Result<Vec<Export>, DecodeExportSectionError> {
    Ok(decode_list(reader, parse_export)?)
}

#[derive(Debug, Error)]
pub enum DecodeExportError {
    #[error(transparent)]
    DecodeName(#[from] DecodeNameError),

    #[error("failed reading Export descriptor marker byte")]
    ReadDescriptorMarkerByte(io::Error),

    #[error(transparent)]
    InvalidDescriptorMarkerByte(#[from] InvalidExternKindMarkerError),

    #[error("failed reading ExportDesc index")]
    DecodeIndex(#[from] DecodeU32Error),
}

fn parse_export<R: Read + ?Sized>(reader: &mut R) -> Result<Export, DecodeExportError> {
    let name = decode_name(reader)?;

    let marker = read_byte(reader).map_err(DecodeExportError::ReadDescriptorMarkerByte)?;
    let kind = ExternKind::from_marker(marker)?;
    let idx = decode_u32(reader)?;

    let desc = match kind {
        ExternKind::Func => ExportDesc::Func(FuncIdx(idx)),
        ExternKind::Table => ExportDesc::Table(TableIdx(idx)),
        ExternKind::Mem => ExportDesc::Mem(MemIdx(idx)),
        ExternKind::Global => ExportDesc::Global(GlobalIdx(idx)),
    };

    Ok(Export { name, desc })
}
