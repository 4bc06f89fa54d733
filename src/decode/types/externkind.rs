use crate::core::types::externkind::ExternKind;
use crate::decode::FromMarkerByte;
use phf::phf_ordered_map;
use thiserror::Error;

// Valid marker bytes for [ExternKind], shared by import and export descriptors.
#[expect(non_upper_case_globals)]
static ExternKind_MARKERS: phf::OrderedMap<u8, ExternKind> = phf_ordered_map! {
    0x00u8 => ExternKind::Func,
    0x01u8 => ExternKind::Table,
    0x02u8 => ExternKind::Mem,
    0x03u8 => ExternKind::Global,
};

#[derive(Debug, Error)]
#[error(
    "invalid descriptor kind marker byte - expected one of {markers}; got {0:#04X}",
    markers = ExternKind::markers_formatted()
)]
pub struct InvalidExternKindMarkerError(pub u8);

impl From<u8> for InvalidExternKindMarkerError {
    fn from(b: u8) -> Self {
        Self(b)
    }
}

impl FromMarkerByte for ExternKind {
    type Error = InvalidExternKindMarkerError;

    fn markers() -> &'static phf::OrderedMap<u8, Self> {
        &ExternKind_MARKERS
    }
}
