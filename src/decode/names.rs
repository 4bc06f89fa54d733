use crate::core::indices::{FuncIdx, LocalIdx};
use crate::core::names::{
    FUNCTION_NAMES_SUBSECTION_ID, LOCAL_NAMES_SUBSECTION_ID, MODULE_NAME_SUBSECTION_ID,
    NAME_SECTION_NAME,
};
use crate::core::{CustomSection, Module, NameSection};
use crate::decode::helpers::{DecodeListError, DecodeNameError, decode_list, decode_name};
use crate::decode::indices::{DecodeFuncIdxError, DecodeLocalIdxError};
use crate::decode::integer::{DecodeU32Error, decode_u32};
use crate::decode::read_byte;
use std::io::{self, Read};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeNameSectionError {
    #[error("custom section {0:?} is not a name section")]
    NotANameSection(String),

    #[error("failed reading name subsection ID")]
    ReadSubsectionId(#[source] io::Error),

    #[error("failed decoding size of name subsection {id}")]
    DecodeSubsectionSize {
        id: u8,
        #[source]
        source: DecodeU32Error,
    },

    #[error("failed decoding module name")]
    DecodeModuleName(#[source] DecodeNameError),

    #[error("failed decoding function names")]
    DecodeFunctionNames(#[source] DecodeListError<DecodeNameMapError<DecodeFuncIdxError>>),

    #[error("failed decoding local names")]
    DecodeLocalNames(#[source] DecodeListError<DecodeIndirectNameMapError>),

    #[error("failed skipping name subsection {id}")]
    SkipSubsection {
        id: u8,
        #[source]
        source: io::Error,
    },

    #[error("name subsection {id} size mismatch: declared {declared} bytes; got {got}")]
    SubsectionSizeMismatch { id: u8, declared: u32, got: u64 },
}

#[derive(Debug, Error)]
pub enum DecodeNameMapError<E: std::error::Error + 'static> {
    #[error(transparent)]
    DecodeIndex(E),

    #[error(transparent)]
    DecodeName(#[from] DecodeNameError),
}

#[derive(Debug, Error)]
pub enum DecodeIndirectNameMapError {
    #[error(transparent)]
    DecodeFuncIdx(#[from] DecodeFuncIdxError),

    #[error("failed decoding local name map")]
    DecodeLocalNames(#[from] DecodeListError<DecodeNameMapError<DecodeLocalIdxError>>),
}

impl NameSection {
    /// Decodes the subsections of a "name" custom section. Subsections with an unknown ID are
    /// skipped.
    pub fn decode(section: &CustomSection) -> Result<Self, DecodeNameSectionError> {
        if section.name != NAME_SECTION_NAME {
            return Err(DecodeNameSectionError::NotANameSection(
                section.name.clone(),
            ));
        }

        let mut names = NameSection::default();
        let mut reader = section.contents.as_slice();

        while !reader.is_empty() {
            let id = read_byte(&mut reader).map_err(DecodeNameSectionError::ReadSubsectionId)?;
            let size = decode_u32(&mut reader)
                .map_err(|source| DecodeNameSectionError::DecodeSubsectionSize { id, source })?;

            let mut subsection = Read::take(&mut reader, size.into());
            match id {
                MODULE_NAME_SUBSECTION_ID => {
                    names.module_name = Some(
                        decode_name(&mut subsection)
                            .map_err(DecodeNameSectionError::DecodeModuleName)?,
                    );
                }
                FUNCTION_NAMES_SUBSECTION_ID => {
                    names.function_names = decode_list(&mut subsection, parse_function_name)
                        .map_err(DecodeNameSectionError::DecodeFunctionNames)?;
                }
                LOCAL_NAMES_SUBSECTION_ID => {
                    names.local_names = decode_list(&mut subsection, parse_function_local_names)
                        .map_err(DecodeNameSectionError::DecodeLocalNames)?;
                }
                _ => {
                    io::copy(&mut subsection, &mut io::sink())
                        .map_err(|source| DecodeNameSectionError::SkipSubsection { id, source })?;
                }
            }

            if subsection.limit() != 0 {
                return Err(DecodeNameSectionError::SubsectionSizeMismatch {
                    id,
                    declared: size,
                    got: u64::from(size) - subsection.limit(),
                });
            }
        }

        Ok(names)
    }
}

impl Module {
    /// Finds the first "name" custom section and decodes it.
    pub fn name_section(&self) -> Option<Result<NameSection, DecodeNameSectionError>> {
        self.custom_sections
            .iter()
            .find(|section| section.name == NAME_SECTION_NAME)
            .map(NameSection::decode)
    }
}

fn parse_function_name<R: Read + ?Sized>(
    reader: &mut R,
) -> Result<(FuncIdx, String), DecodeNameMapError<DecodeFuncIdxError>> {
    let idx = FuncIdx::decode(reader).map_err(DecodeNameMapError::DecodeIndex)?;
    Ok((idx, decode_name(reader)?))
}

fn parse_local_name<R: Read + ?Sized>(
    reader: &mut R,
) -> Result<(LocalIdx, String), DecodeNameMapError<DecodeLocalIdxError>> {
    let idx = LocalIdx::decode(reader).map_err(DecodeNameMapError::DecodeIndex)?;
    Ok((idx, decode_name(reader)?))
}

fn parse_function_local_names<R: Read + ?Sized>(
    reader: &mut R,
) -> Result<(FuncIdx, Vec<(LocalIdx, String)>), DecodeIndirectNameMapError> {
    let func = FuncIdx::decode(reader)?;
    let locals = decode_list(reader, parse_local_name)?;
    Ok((func, locals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn name_section(contents: &[u8]) -> CustomSection {
        CustomSection {
            name: NAME_SECTION_NAME.to_owned(),
            contents: contents.to_vec(),
            after: None,
        }
    }

    #[test]
    fn decodes_all_subsections() {
        let section = name_section(&[
            0x00, 0x03, 0x02, b'm', b'd', // module name "md"
            0x01, 0x05, 0x01, 0x03, 0x02, b'f', b'n', // func 3 named "fn"
            0x02, 0x06, 0x01, 0x03, 0x01, 0x00, 0x01, b'a', // func 3 local 0 named "a"
        ]);

        assert_eq!(
            NameSection::decode(&section).unwrap(),
            NameSection {
                module_name: Some("md".to_owned()),
                function_names: vec![(FuncIdx(3), "fn".to_owned())],
                local_names: vec![(FuncIdx(3), vec![(LocalIdx(0), "a".to_owned())])],
            }
        );
    }

    #[test]
    fn skips_unknown_subsections() {
        let section = name_section(&[0x07, 0x02, 0xAA, 0xBB, 0x00, 0x02, 0x01, b'm']);
        assert_eq!(
            NameSection::decode(&section).unwrap().module_name.as_deref(),
            Some("m")
        );
    }

    #[test]
    fn rejects_subsection_size_mismatch() {
        let section = name_section(&[0x00, 0x04, 0x02, b'm', b'd', 0x00]);
        assert!(matches!(
            NameSection::decode(&section).unwrap_err(),
            DecodeNameSectionError::SubsectionSizeMismatch {
                id: 0,
                declared: 4,
                got: 3
            }
        ));
    }

    #[test]
    fn rejects_other_custom_sections() {
        let section = CustomSection {
            name: "producers".to_owned(),
            contents: vec![],
            after: None,
        };
        assert!(matches!(
            NameSection::decode(&section).unwrap_err(),
            DecodeNameSectionError::NotANameSection(_)
        ));
    }
}
