use crate::core::{CustomSection, SectionKind};
use crate::decode::helpers::{DecodeNameError, decode_name};
use std::io::{self, Read};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeCustomSectionError {
    #[error("failed decoding custom section name")]
    DecodeName(#[from] DecodeNameError),

    #[error("failed reading custom section contents")]
    Io(#[from] io::Error),
}

/// Consumes the reader to its end; the caller is expected to bound it to the section size.
pub(crate) fn decode_custom_section<R: Read + ?Sized>(
    reader: &mut R,
    after: Option<SectionKind>,
) -> Result<CustomSection, DecodeCustomSectionError> {
    let name = decode_name(reader)?;
    let mut contents = Vec::new();
    reader.read_to_end(&mut contents)?;

    Ok(CustomSection {
        name,
        contents,
        after,
    })
}
