//! Convenience re-exports for decode-related error types.

pub use crate::decode::indices::{
    DecodeFuncIdxError, DecodeGlobalIdxError, DecodeLocalIdxError, DecodeMemIdxError,
    DecodeTableIdxError, DecodeTypeIdxError,
};
pub use crate::decode::integer::{DecodeI32Error, DecodeI64Error, DecodeU32Error};
pub use crate::decode::sections::{
    DecodeCodeError, DecodeCodeSectionError, DecodeCustomSectionError, DecodeDataSectionError,
    DecodeDataSegmentError, DecodeElementError, DecodeElementSectionError, DecodeExportError,
    DecodeExportSectionError, DecodeFunctionSectionError, DecodeGlobalError,
    DecodeGlobalSectionError, DecodeImportError, DecodeImportSectionError,
    DecodeMemorySectionError, DecodeStartSectionError, DecodeTableSectionError,
    DecodeTypeSectionError,
};
pub use crate::decode::types::{
    DecodeFuncTypeError, DecodeGlobalTypeError, DecodeMemoryTypeError, DecodeRefTypeError,
    DecodeResultTypeError, DecodeTableTypeError, DecodeValTypeError, InvalidExternKindMarkerError,
    InvalidMutabilityByteError, InvalidRefTypeMarkerError, InvalidValTypeMarkerError,
    MemoryLimitsError, ParseLimitsError,
};
pub use crate::decode::{
    DecodeByteVectorError, DecodeConstExprError, DecodeFloat32Error, DecodeFloat64Error,
    DecodeIndirectNameMapError, DecodeListError, DecodeModuleError, DecodeNameError,
    DecodeNameMapError, DecodeNameSectionError, DecodeSectionHeaderError,
    InvalidConstExprOpcodeError, InvalidSectionIdError, ParsePreambleError,
};
