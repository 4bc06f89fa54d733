use crate::core::indices::TypeIdx;
use crate::core::types::{ExternKind, GlobalType, TableType};
use crate::core::{Import, ImportDesc};
use crate::decode::FromMarkerByte;
use crate::decode::helpers::{DecodeListError, DecodeNameError, decode_list, decode_name};
use crate::decode::indices::DecodeTypeIdxError;
use crate::decode::read_byte;
use crate::decode::types::memtype::parse_memtype;
use crate::decode::types::{
    DecodeGlobalTypeError, DecodeMemoryTypeError, DecodeTableTypeError,
    InvalidExternKindMarkerError,
};
use std::io::{self, Read};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeImportSectionError {
    #[error("failed decoding Import section")]
    DecodeList(#[from] DecodeListError<DecodeImportError>),
}

pub(crate) fn decode_import_section<R: Read + ?Sized>(
    reader: &mut R,
) -> Result<Vec<Import>, DecodeImportSectionError> {
    Ok(decode_list(reader, parse_import)?)
}

#[derive(Debug, Error)]
pub enum DecodeImportError {
    #[error("failed decoding module name")]
    DecodeModuleName(DecodeNameError),

    #[error("failed decoding entity name")]
    DecodeName(DecodeNameError),

    #[error("failed reading Import descriptor marker byte")]
    ReadDescriptorMarkerByte(io::Error),

    #[error(transparent)]
    InvalidDescriptorMarkerByte(#[from] InvalidExternKindMarkerError),

    #[error(transparent)]
    DecodeTypeIdx(#[from] DecodeTypeIdxError),

    #[error(transparent)]
    DecodeTableType(#[from] DecodeTableTypeError),

    #[error(transparent)]
    DecodeMemType(#[from] DecodeMemoryTypeError),

    #[error(transparent)]
    DecodeGlobalType(#[from] DecodeGlobalTypeError),
}

fn parse_import<R: Read + ?Sized>(reader: &mut R) -> Result<Import, DecodeImportError> {
    let module = decode_name(reader).map_err(DecodeImportError::DecodeModuleName)?;
    let name = decode_name(reader).map_err(DecodeImportError::DecodeName)?;

    let marker = read_byte(reader).map_err(DecodeImportError::ReadDescriptorMarkerByte)?;
    let desc = match ExternKind::from_marker(marker)? {
        ExternKind::Func => ImportDesc::Func {
            r#type: TypeIdx::decode(reader)?,
            debug_name: None,
        },
        ExternKind::Table => ImportDesc::Table(TableType::decode(reader)?),
        ExternKind::Mem => ImportDesc::Mem(parse_memtype(reader)?),
        ExternKind::Global => ImportDesc::Global(GlobalType::decode(reader)?),
    };

    Ok(Import { module, name, desc })
}
