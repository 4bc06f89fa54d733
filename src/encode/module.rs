use crate::core::{Module, PREAMBLE, SectionKind};
use crate::encode::helpers::{EncodeError, encode_framed, encode_list};
use crate::encode::integer::encode_u32;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeModuleError {
    #[error("failed encoding {section_kind:?} section")]
    EncodeSection {
        section_kind: SectionKind,
        #[source]
        source: EncodeError,
    },

    #[error("custom section {name:?} cannot be placed after another custom section")]
    MisplacedCustomSection { name: String },
}

/// Encode `module` into its binary form.
///
/// Non-custom sections are written in canonical order; a section whose component is empty
/// (or, for the start section, absent) is left out. Custom sections are written after the
/// section they followed when decoded, see
/// [`CustomSection::after`](crate::core::CustomSection::after). A custom section whose `after`
/// is [SectionKind::Custom] has no such position and is rejected.
///
/// No validation is performed: indices, limits and function/code counts are written as they
/// are.
pub fn encode_module(module: &Module) -> Result<Vec<u8>, EncodeModuleError> {
    if let Some(custom) = module
        .custom_sections
        .iter()
        .find(|c| c.after == Some(SectionKind::Custom))
    {
        return Err(EncodeModuleError::MisplacedCustomSection {
            name: custom.name.clone(),
        });
    }

    let mut out = PREAMBLE.to_vec();

    encode_custom_sections(module, None, &mut out)?;

    for section_kind in SectionKind::ORDERED {
        let wrap = |source| EncodeModuleError::EncodeSection {
            section_kind,
            source,
        };

        if let Some(payload) = encode_section_payload(module, section_kind).map_err(wrap)? {
            encode_framed(section_kind.id(), &payload, &mut out).map_err(wrap)?;
        }

        encode_custom_sections(module, Some(section_kind), &mut out)?;
    }

    Ok(out)
}

fn encode_custom_sections(
    module: &Module,
    after: Option<SectionKind>,
    out: &mut Vec<u8>,
) -> Result<(), EncodeModuleError> {
    let wrap = |source| EncodeModuleError::EncodeSection {
        section_kind: SectionKind::Custom,
        source,
    };

    for custom in module.custom_sections.iter().filter(|c| c.after == after) {
        let mut payload = Vec::new();
        custom.encode(&mut payload).map_err(wrap)?;
        encode_framed(SectionKind::Custom.id(), &payload, out).map_err(wrap)?;
    }

    Ok(())
}

// Returns None when the module has nothing to put in the section.
fn encode_section_payload(
    module: &Module,
    section_kind: SectionKind,
) -> Result<Option<Vec<u8>>, EncodeError> {
    let mut payload = Vec::new();

    let present = match section_kind {
        SectionKind::Custom => false,
        SectionKind::Type => {
            encode_list(&module.types, &mut payload, |t, out| t.encode(out))?;
            !module.types.is_empty()
        }
        SectionKind::Import => {
            encode_list(&module.imports, &mut payload, |i, out| i.encode(out))?;
            !module.imports.is_empty()
        }
        SectionKind::Function => {
            encode_list(&module.funcs, &mut payload, |idx, out| {
                encode_u32(idx.0, out);
                Ok(())
            })?;
            !module.funcs.is_empty()
        }
        SectionKind::Table => {
            encode_list(&module.tables, &mut payload, |t, out| {
                t.encode(out);
                Ok(())
            })?;
            !module.tables.is_empty()
        }
        SectionKind::Memory => {
            encode_list(&module.mems, &mut payload, |m, out| {
                m.encode(out);
                Ok(())
            })?;
            !module.mems.is_empty()
        }
        SectionKind::Global => {
            encode_list(&module.globals, &mut payload, |g, out| g.encode(out))?;
            !module.globals.is_empty()
        }
        SectionKind::Export => {
            encode_list(&module.exports, &mut payload, |e, out| e.encode(out))?;
            !module.exports.is_empty()
        }
        SectionKind::Start => match module.start {
            Some(idx) => {
                encode_u32(idx.0, &mut payload);
                true
            }
            None => false,
        },
        SectionKind::Element => {
            encode_list(&module.elems, &mut payload, |e, out| e.encode(out))?;
            !module.elems.is_empty()
        }
        SectionKind::Code => {
            encode_list(&module.codes, &mut payload, |c, out| c.encode(out))?;
            !module.codes.is_empty()
        }
        SectionKind::Data => {
            encode_list(&module.datas, &mut payload, |d, out| d.encode(out))?;
            !module.datas.is_empty()
        }
    };

    Ok(present.then_some(payload))
}
