//! The in-memory representation of a WebAssembly module.
pub mod custom_section;
pub mod expr;
pub mod export;
pub mod import;
pub mod indices;
pub mod names;
pub mod types;

mod module;
mod segments;

pub use custom_section::CustomSection;
pub use export::{Export, ExportDesc};
pub use expr::ConstExpr;
pub use import::{Import, ImportDesc};
pub use module::{IndexSpaces, MAGIC_NUMBER, Module, SectionKind, VERSION};
pub(crate) use module::PREAMBLE;
pub use names::NameSection;
pub use segments::{Code, Data, Elem, Global};

/// Name of a section id, as used in diagnostics. Ids without a known section are named
/// `"unknown"`.
pub fn section_id_name(id: u8) -> &'static str {
    use crate::decode::FromMarkerByte;

    SectionKind::from_marker(id).map_or("unknown", SectionKind::name)
}
