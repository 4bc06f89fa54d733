use crate::core::types::limits::Limits;
use crate::core::types::reftype::RefType;

/// Table types classify tables over elements of reference type within a size range. Like
/// memories, tables are constrained by limits for their minimum and optionally maximum
/// size. The limits are given in numbers of entries.
///
/// <https://www.w3.org/TR/wasm-core-1/#table-types%E2%91%A0>
/// <https://www.w3.org/TR/wasm-core-1/#binary-tabletype>
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct TableType {
    pub reftype: RefType,
    pub limits: Limits,
}
