use crate::core::indices::TypeIdx;
use crate::core::types::{ExternKind, GlobalType, MemType, TableType};

/// The imports component of a module defines a set of imports that are required for
/// instantiation. Each import is labeled by a two-level name space, consisting of a module
/// name and a name for an entity within that module. Importable definitions are functions,
/// tables, memories, and globals. Each import is specified by a descriptor with a
/// respective type that a definition provided during instantiation is required to match.
/// Every import defines an index in the respective index space. In each index space, the
/// indices of imports go before the first index of any definition contained in the module
/// itself.
///
/// <https://www.w3.org/TR/wasm-core-1/#imports%E2%91%A0>
/// <https://www.w3.org/TR/wasm-core-1/#import-section%E2%91%A0>
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Import {
    pub module: String,
    pub name: String,
    pub desc: ImportDesc,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ImportDesc {
    Func {
        r#type: TypeIdx,

        /// Human-readable name of the function, emitted in the "name" custom section. It is
        /// not part of the import itself, so decoding an import always leaves it unset.
        debug_name: Option<String>,
    },
    Table(TableType),
    Mem(MemType),
    Global(GlobalType),
}

impl ImportDesc {
    pub fn kind(&self) -> ExternKind {
        match self {
            ImportDesc::Func { .. } => ExternKind::Func,
            ImportDesc::Table(_) => ExternKind::Table,
            ImportDesc::Mem(_) => ExternKind::Mem,
            ImportDesc::Global(_) => ExternKind::Global,
        }
    }
}
