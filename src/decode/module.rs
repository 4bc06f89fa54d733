use crate::core::{Module, PREAMBLE, SectionKind, section_id_name};
use crate::decode::FromMarkerByte;
use crate::decode::integer::{DecodeU32Error, decode_u32};
use crate::decode::read_byte;
use crate::decode::sections::*;
use phf::phf_ordered_map;
use std::io::{self, Read};
use thiserror::Error;

#[derive(Debug, Error)]
#[error(
    "invalid section ID {0:#04X} ({name}): expected one of {markers}",
    name = describe_section_id(.0),
    markers = SectionKind::markers_formatted()
)]
pub struct InvalidSectionIdError(pub u8);

impl From<u8> for InvalidSectionIdError {
    fn from(b: u8) -> Self {
        Self(b)
    }
}

fn describe_section_id(id: &u8) -> &'static str {
    section_id_name(*id)
}

// Valid marker bytes for [SectionKind].
#[expect(non_upper_case_globals)]
static SectionId_MARKERS: phf::OrderedMap<u8, SectionKind> = phf_ordered_map! {
            0u8 => SectionKind::Custom,
            1u8 => SectionKind::Type,
            2u8 => SectionKind::Import,
            3u8 => SectionKind::Function,
            4u8 => SectionKind::Table,
            5u8 => SectionKind::Memory,
            6u8 => SectionKind::Global,
            7u8 => SectionKind::Export,
            8u8 => SectionKind::Start,
            9u8 => SectionKind::Element,
            10u8 => SectionKind::Code,
            11u8 => SectionKind::Data,
};

impl FromMarkerByte for SectionKind {
    type Error = InvalidSectionIdError;

    fn markers() -> &'static phf::OrderedMap<u8, Self> {
        &SectionId_MARKERS
    }
}

/// The top-level error that may occur when attempting to decode bytes into
/// a [Module].
///
/// Encompasses all possible errors that may occur during decoding,
/// including section-specific errors.
#[derive(Debug, Error)]
pub enum DecodeModuleError {
    #[error(transparent)]
    ParsePreamble(#[from] ParsePreambleError),

    #[error("out of order section: {current:?} cannot appear after {previous:?}")]
    SectionOutOfOrder {
        current: SectionKind,
        previous: SectionKind,
    },

    #[error("encountered duplicate section: {0:?}")]
    DuplicateSection(SectionKind),

    /// `got` is the number of bytes the contents took, or `None` when they run past the
    /// declared end.
    #[error(
        "{section_kind:?} section size mismatch: declared {declared} bytes; {contents}",
        contents = describe_contents(.got)
    )]
    SectionSizeMismatch {
        section_kind: SectionKind,
        declared: u32,
        got: Option<u64>,
    },

    #[error(
        "input ended inside {section_kind:?} section: declared {declared} bytes; got {got}"
    )]
    TruncatedSection {
        section_kind: SectionKind,
        declared: u32,
        got: u64,
    },

    #[error("failed reading {section_kind:?} section contents")]
    ReadSection {
        section_kind: SectionKind,
        #[source]
        source: io::Error,
    },

    // section-specific errors
    #[error(transparent)]
    DecodeSectionHeader(#[from] DecodeSectionHeaderError),

    #[error(transparent)]
    DecodeCustomSection(#[from] DecodeCustomSectionError),

    #[error(transparent)]
    DecodeTypeSection(#[from] DecodeTypeSectionError),

    #[error(transparent)]
    DecodeImportSection(#[from] DecodeImportSectionError),

    #[error(transparent)]
    DecodeFunctionSection(#[from] DecodeFunctionSectionError),

    #[error(transparent)]
    DecodeTableSection(#[from] DecodeTableSectionError),

    #[error(transparent)]
    DecodeMemorySection(#[from] DecodeMemorySectionError),

    #[error(transparent)]
    DecodeGlobalSection(#[from] DecodeGlobalSectionError),

    #[error(transparent)]
    DecodeExportSection(#[from] DecodeExportSectionError),

    #[error(transparent)]
    DecodeStartSection(#[from] DecodeStartSectionError),

    #[error(transparent)]
    DecodeElementSection(#[from] DecodeElementSectionError),

    #[error(transparent)]
    DecodeCodeSection(#[from] DecodeCodeSectionError),

    #[error(transparent)]
    DecodeDataSection(#[from] DecodeDataSectionError),
}

/// Decode `input` into a WebAssembly [Module].
///
/// The input is read sequentially and is never rewound, so any [Read] works. Each section's
/// contents are read in full before they are decoded, which is what tells an input that ends
/// early ([TruncatedSection](DecodeModuleError::TruncatedSection)) apart from a declared size
/// that disagrees with the contents
/// ([SectionSizeMismatch](DecodeModuleError::SectionSizeMismatch)).
pub fn decode_module(mut input: impl Read) -> Result<Module, DecodeModuleError> {
    parse_preamble(&mut input)?;

    let mut module = Module::default();
    let mut previous: Option<SectionKind> = None;

    while let Some(section_header) = decode_section_header(&mut input)? {
        let section_kind = section_header.kind;
        check_section_order(previous, section_kind)?;

        let declared = section_header.size;
        let mut payload = Vec::new();
        input
            .by_ref()
            .take(declared.into())
            .read_to_end(&mut payload)
            .map_err(|source| DecodeModuleError::ReadSection {
                section_kind,
                source,
            })?;

        if payload.len() < declared as usize {
            return Err(DecodeModuleError::TruncatedSection {
                section_kind,
                declared,
                got: payload.len() as u64,
            });
        }

        let mut section_reader = SectionReader::new(&payload);
        if let Err(e) = decode_section(&mut module, section_kind, previous, &mut section_reader) {
            if section_reader.overrun {
                return Err(DecodeModuleError::SectionSizeMismatch {
                    section_kind,
                    declared,
                    got: None,
                });
            }
            return Err(e);
        }

        if !section_reader.remaining.is_empty() {
            return Err(DecodeModuleError::SectionSizeMismatch {
                section_kind,
                declared,
                got: Some((payload.len() - section_reader.remaining.len()) as u64),
            });
        }

        // Custom sections may appear anywhere, so they don't take part in ordering
        if section_kind != SectionKind::Custom {
            previous = Some(section_kind);
        }
    }

    Ok(module)
}

fn describe_contents(got: &Option<u64>) -> String {
    match got {
        Some(got) => format!("contents took {got}"),
        None => "contents run past the end".to_owned(),
    }
}

/// The section payload, already read in full. Records whether a decoder asked for
/// bytes past its end.
struct SectionReader<'a> {
    remaining: &'a [u8],
    overrun: bool,
}

impl<'a> SectionReader<'a> {
    fn new(payload: &'a [u8]) -> Self {
        Self {
            remaining: payload,
            overrun: false,
        }
    }
}

impl Read for SectionReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.remaining.is_empty() && !buf.is_empty() {
            self.overrun = true;
        }
        self.remaining.read(buf)
    }
}

fn decode_section(
    module: &mut Module,
    section_kind: SectionKind,
    previous: Option<SectionKind>,
    reader: &mut SectionReader<'_>,
) -> Result<(), DecodeModuleError> {
    match section_kind {
        SectionKind::Custom => module
            .custom_sections
            .push(decode_custom_section(reader, previous)?),
        SectionKind::Type => module.types = decode_type_section(reader)?,
        SectionKind::Import => module.imports = decode_import_section(reader)?,
        SectionKind::Function => module.funcs = decode_function_section(reader)?,
        SectionKind::Table => module.tables = decode_table_section(reader)?,
        SectionKind::Memory => module.mems = decode_memory_section(reader)?,
        SectionKind::Global => module.globals = decode_global_section(reader)?,
        SectionKind::Export => module.exports = decode_export_section(reader)?,
        SectionKind::Start => module.start = Some(decode_start_section(reader)?),
        SectionKind::Element => module.elems = decode_element_section(reader)?,
        SectionKind::Code => module.codes = decode_code_section(reader)?,
        SectionKind::Data => module.datas = decode_data_section(reader)?,
    }

    Ok(())
}

fn check_section_order(
    previous: Option<SectionKind>,
    current: SectionKind,
) -> Result<(), DecodeModuleError> {
    let Some(previous) = previous else {
        return Ok(());
    };

    if current == SectionKind::Custom {
        return Ok(());
    }

    if current < previous {
        return Err(DecodeModuleError::SectionOutOfOrder { current, previous });
    }

    if current == previous {
        return Err(DecodeModuleError::DuplicateSection(current));
    }

    Ok(())
}

#[derive(Debug, Error)]
pub enum ParsePreambleError {
    #[error("failed decoding preamble")]
    Io(#[from] io::Error),

    #[error("unexpected preamble: expected {preamble:#X?}; got {0:#X?}", preamble = PREAMBLE)]
    Unexpected([u8; 8]),
}

fn parse_preamble<R: Read + ?Sized>(reader: &mut R) -> Result<(), ParsePreambleError> {
    let mut preamble = [0u8; 8];
    reader.read_exact(&mut preamble)?;

    if preamble != PREAMBLE {
        return Err(ParsePreambleError::Unexpected(preamble));
    }

    Ok(())
}

/// Each section consists of a one-byte section id, the u32 size of the contents
/// (in bytes), and the actual contents.
///
/// Note: 'Section header' is not a term used by the WebAssembly standard.
#[derive(PartialEq, Debug)]
struct SectionHeader {
    kind: SectionKind,
    size: u32,
}

#[derive(Debug, Error)]
pub enum DecodeSectionHeaderError {
    #[error("failed reading section ID byte")]
    ReadSectionIdByte(#[from] io::Error),

    #[error("invalid section ID")]
    InvalidSectionId(#[from] InvalidSectionIdError),

    #[error("failed decoding section size")]
    DecodeSectionSize(#[from] DecodeU32Error),
}

// A clean end of input is only allowed in place of a section id.
fn decode_section_header<R: Read + ?Sized>(
    reader: &mut R,
) -> Result<Option<SectionHeader>, DecodeSectionHeaderError> {
    let id = match read_byte(reader) {
        Ok(id) => id,
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let kind = SectionKind::from_marker(id)?;
    let size = decode_u32(reader)?;

    Ok(Some(SectionHeader { kind, size }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_order_allows_custom_anywhere() {
        assert!(check_section_order(None, SectionKind::Data).is_ok());
        assert!(check_section_order(Some(SectionKind::Data), SectionKind::Custom).is_ok());
        assert!(check_section_order(Some(SectionKind::Type), SectionKind::Import).is_ok());
        assert!(check_section_order(Some(SectionKind::Type), SectionKind::Data).is_ok());
    }

    #[test]
    fn section_order_rejects_repeats_and_regressions() {
        assert!(matches!(
            check_section_order(Some(SectionKind::Export), SectionKind::Export),
            Err(DecodeModuleError::DuplicateSection(SectionKind::Export))
        ));
        assert!(matches!(
            check_section_order(Some(SectionKind::Code), SectionKind::Memory),
            Err(DecodeModuleError::SectionOutOfOrder {
                current: SectionKind::Memory,
                previous: SectionKind::Code
            })
        ));
    }

    #[test]
    fn unknown_section_id_is_named_in_diagnostics() {
        let message = InvalidSectionIdError(0x0C).to_string();
        assert!(message.starts_with("invalid section ID 0x0C (unknown)"), "{message}");
    }

    #[test]
    fn section_reader_flags_reads_past_the_payload() {
        let payload = [0x01, 0x02];
        let mut reader = SectionReader::new(&payload);

        let mut buf = [0u8; 2];
        reader.read_exact(&mut buf).unwrap();
        assert!(!reader.overrun);

        assert!(reader.read_exact(&mut [0u8]).is_err());
        assert!(reader.overrun);
    }

    #[test]
    fn empty_input_after_preamble_has_no_header() {
        let mut input: &[u8] = &[];
        assert!(decode_section_header(&mut input).unwrap().is_none());
    }
}
