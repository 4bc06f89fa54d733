//! Decoders for the contents of each section.
//!
//! Every decoder consumes the payload of a single section; checking that the whole payload
//! was consumed is left to the module decoder.
pub mod code;
pub mod custom;
pub mod data;
pub mod element;
pub mod export;
pub mod function;
pub mod global;
pub mod import;
pub mod memory;
pub mod start;
pub mod table;
pub mod r#type;

pub(crate) use code::decode_code_section;
pub(crate) use custom::decode_custom_section;
pub(crate) use data::decode_data_section;
pub(crate) use element::decode_element_section;
pub(crate) use export::decode_export_section;
pub(crate) use function::decode_function_section;
pub(crate) use global::decode_global_section;
pub(crate) use import::decode_import_section;
pub(crate) use memory::decode_memory_section;
pub(crate) use start::decode_start_section;
pub(crate) use table::decode_table_section;
pub(crate) use r#type::decode_type_section;

pub use code::{DecodeCodeError, DecodeCodeSectionError};
pub use custom::DecodeCustomSectionError;
pub use data::{DecodeDataSectionError, DecodeDataSegmentError};
pub use element::{DecodeElementError, DecodeElementSectionError};
pub use export::{DecodeExportError, DecodeExportSectionError};
pub use function::DecodeFunctionSectionError;
pub use global::{DecodeGlobalError, DecodeGlobalSectionError};
pub use import::{DecodeImportError, DecodeImportSectionError};
pub use memory::DecodeMemorySectionError;
pub use start::DecodeStartSectionError;
pub use table::DecodeTableSectionError;
pub use r#type::DecodeTypeSectionError;
