use super::custom_section::CustomSection;
use super::import::{Import, ImportDesc};
use super::export::Export;
use super::indices::{FuncIdx, TypeIdx};
use super::segments::{Code, Data, Elem, Global};
use super::types::{FuncType, GlobalType, MemType, TableType};

pub const MAGIC_NUMBER: [u8; 4] = [0x00, 0x61, 0x73, 0x6D];
pub const VERSION: [u8; 4] = [0x01, 0x00, 0x00, 0x00];

pub(crate) static PREAMBLE: [u8; 8] = [
    MAGIC_NUMBER[0],
    MAGIC_NUMBER[1],
    MAGIC_NUMBER[2],
    MAGIC_NUMBER[3],
    VERSION[0],
    VERSION[1],
    VERSION[2],
    VERSION[3],
];

/// WebAssembly programs are organized into modules, which are the unit of deployment,
/// loading, and compilation. A module collects definitions for types, functions, tables,
/// memories, and globals. In addition, it can declare imports and exports and provide
/// initialization in the form of data and element segments, or a start function.
///
/// Imported and locally defined entities are kept apart; use [`Module::all_declarations`]
/// to get the index spaces they form together.
///
/// <https://www.w3.org/TR/wasm-core-1/#modules%E2%91%A0>
/// <https://www.w3.org/TR/wasm-core-1/#binary-module>
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Module {
    /// Human-readable name of the module. Not part of any standard section; it is only
    /// emitted by [`encode_name_section`](crate::encode_name_section).
    pub name: Option<String>,

    /// Custom sections have the id 0. They are intended to be used for debugging information or
    /// third-party extensions, and are ignored by the WebAssembly semantics.
    ///
    /// <https://www.w3.org/TR/wasm-core-1/#custom-section%E2%91%A0>
    pub custom_sections: Vec<CustomSection>,

    /// The types component of a module defines a vector of function types. All function types
    /// used in a module must be defined in this component. They are referenced by type indices.
    ///
    /// <https://www.w3.org/TR/wasm-core-1/#types%E2%91%A0>
    /// <https://www.w3.org/TR/wasm-core-1/#type-section%E2%91%A0>
    pub types: Vec<FuncType>,

    /// <https://www.w3.org/TR/wasm-core-1/#import-section%E2%91%A0>
    pub imports: Vec<Import>,

    /// Type indices of the locally defined functions, in declaration order. Their bodies are
    /// in [`Self::codes`], at the same position.
    ///
    /// <https://www.w3.org/TR/wasm-core-1/#function-section%E2%91%A0>
    pub funcs: Vec<TypeIdx>,

    /// <https://www.w3.org/TR/wasm-core-1/#table-section%E2%91%A0>
    pub tables: Vec<TableType>,

    /// <https://www.w3.org/TR/wasm-core-1/#memory-section%E2%91%A0>
    pub mems: Vec<MemType>,

    /// <https://www.w3.org/TR/wasm-core-1/#global-section%E2%91%A0>
    pub globals: Vec<Global>,

    /// <https://www.w3.org/TR/wasm-core-1/#export-section%E2%91%A0>
    pub exports: Vec<Export>,

    /// The start component of a module declares the function index of a start function that is
    /// automatically invoked when the module is instantiated, after tables and memories have
    /// been initialized.
    ///
    /// <https://www.w3.org/TR/wasm-core-1/#start-section%E2%91%A0>
    pub start: Option<FuncIdx>,

    /// <https://www.w3.org/TR/wasm-core-1/#element-section%E2%91%A0>
    pub elems: Vec<Elem>,

    /// <https://www.w3.org/TR/wasm-core-1/#code-section%E2%91%A0>
    pub codes: Vec<Code>,

    /// <https://www.w3.org/TR/wasm-core-1/#data-section%E2%91%A0>
    pub datas: Vec<Data>,
}

/// The index spaces of a module: imported entities first, in import order, followed by the
/// module's own definitions, in declaration order.
///
/// <https://www.w3.org/TR/wasm-core-1/#index-spaces%E2%91%A0>
#[derive(Debug, PartialEq, Default)]
pub struct IndexSpaces {
    /// The type index of every function.
    pub functions: Vec<TypeIdx>,
    pub globals: Vec<GlobalType>,
    pub memories: Vec<MemType>,
    pub tables: Vec<TableType>,
}

impl Module {
    /// Resolves the function, global, memory and table index spaces. Every index found
    /// elsewhere in the module (a call target, a `global.get`, an export, ...) points into
    /// one of these.
    ///
    /// No validation is performed.
    pub fn all_declarations(&self) -> IndexSpaces {
        let mut spaces = IndexSpaces::default();

        for import in &self.imports {
            match &import.desc {
                ImportDesc::Func { r#type, .. } => spaces.functions.push(*r#type),
                ImportDesc::Table(t) => spaces.tables.push(*t),
                ImportDesc::Mem(m) => spaces.memories.push(*m),
                ImportDesc::Global(g) => spaces.globals.push(*g),
            }
        }

        spaces.functions.extend(self.funcs.iter().copied());
        spaces.globals.extend(self.globals.iter().map(|g| g.r#type));
        spaces.memories.extend(self.mems.iter().copied());
        spaces.tables.extend(self.tables.iter().copied());

        spaces
    }
}

/// Each section consists of a one-byte section id, the u32 size of the contents
/// (in bytes), and the actual contents, whose structure is dependent on the section id.
///
/// Variants are declared in the order non-custom sections must appear in.
///
/// <https://www.w3.org/TR/wasm-core-1/#sections%E2%91%A0>
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
#[repr(u8)]
pub enum SectionKind {
    Custom = 0,
    Type = 1,
    Import = 2,
    Function = 3,
    Table = 4,
    Memory = 5,
    Global = 6,
    Export = 7,
    Start = 8,
    Element = 9,
    Code = 10,
    Data = 11,
}

impl SectionKind {
    /// Every section kind except [`SectionKind::Custom`], in canonical order.
    pub const ORDERED: [SectionKind; 11] = [
        SectionKind::Type,
        SectionKind::Import,
        SectionKind::Function,
        SectionKind::Table,
        SectionKind::Memory,
        SectionKind::Global,
        SectionKind::Export,
        SectionKind::Start,
        SectionKind::Element,
        SectionKind::Code,
        SectionKind::Data,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            SectionKind::Custom => "custom",
            SectionKind::Type => "type",
            SectionKind::Import => "import",
            SectionKind::Function => "function",
            SectionKind::Table => "table",
            SectionKind::Memory => "memory",
            SectionKind::Global => "global",
            SectionKind::Export => "export",
            SectionKind::Start => "start",
            SectionKind::Element => "element",
            SectionKind::Code => "code",
            SectionKind::Data => "data",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Limits, Mut, RefType, ValType};
    use crate::core::{ConstExpr, Global};
    use pretty_assertions::assert_eq;

    fn import(desc: ImportDesc) -> Import {
        Import {
            module: "env".to_owned(),
            name: "x".to_owned(),
            desc,
        }
    }

    fn func_import(type_idx: u32) -> Import {
        import(ImportDesc::Func {
            r#type: TypeIdx(type_idx),
            debug_name: None,
        })
    }

    fn mem(min: u32) -> MemType {
        MemType {
            limits: Limits { min, max: None },
        }
    }

    fn table(min: u32) -> TableType {
        TableType {
            reftype: RefType::Func,
            limits: Limits { min, max: None },
        }
    }

    #[test]
    fn functions_place_imports_first() {
        let module = Module {
            imports: vec![func_import(10000)],
            funcs: vec![TypeIdx(10), TypeIdx(20), TypeIdx(30)],
            ..Default::default()
        };

        assert_eq!(
            module.all_declarations().functions,
            vec![TypeIdx(10000), TypeIdx(10), TypeIdx(20), TypeIdx(30)]
        );
    }

    #[test]
    fn functions_without_imports_or_locals() {
        let only_locals = Module {
            funcs: vec![TypeIdx(10), TypeIdx(20), TypeIdx(30)],
            ..Default::default()
        };
        assert_eq!(
            only_locals.all_declarations().functions,
            vec![TypeIdx(10), TypeIdx(20), TypeIdx(30)]
        );

        let only_imports = Module {
            imports: vec![func_import(10000)],
            ..Default::default()
        };
        assert_eq!(
            only_imports.all_declarations().functions,
            vec![TypeIdx(10000)]
        );
    }

    #[test]
    fn globals_place_imports_first() {
        let module = Module {
            imports: vec![import(ImportDesc::Global(GlobalType(Mut::Const, ValType::I32)))],
            globals: vec![Global {
                r#type: GlobalType(Mut::Var, ValType::I32),
                init: ConstExpr::I32Const(0),
            }],
            ..Default::default()
        };

        let spaces = module.all_declarations();
        assert_eq!(
            spaces.globals,
            vec![
                GlobalType(Mut::Const, ValType::I32),
                GlobalType(Mut::Var, ValType::I32)
            ]
        );
        assert!(spaces.functions.is_empty());
        assert!(spaces.memories.is_empty());
        assert!(spaces.tables.is_empty());
    }

    #[test]
    fn memories_place_imports_first() {
        let module = Module {
            imports: vec![import(ImportDesc::Mem(mem(1)))],
            mems: vec![mem(100)],
            ..Default::default()
        };

        assert_eq!(module.all_declarations().memories, vec![mem(1), mem(100)]);
    }

    #[test]
    fn tables_place_imports_first() {
        let module = Module {
            imports: vec![import(ImportDesc::Table(table(1)))],
            tables: vec![table(10)],
            ..Default::default()
        };

        assert_eq!(module.all_declarations().tables, vec![table(1), table(10)]);
    }

    #[test]
    fn imports_are_filtered_by_kind_in_declaration_order() {
        let module = Module {
            imports: vec![
                import(ImportDesc::Mem(mem(1))),
                func_import(3),
                import(ImportDesc::Table(table(2))),
                func_import(1),
            ],
            funcs: vec![TypeIdx(7)],
            ..Default::default()
        };

        let spaces = module.all_declarations();
        assert_eq!(spaces.functions, vec![TypeIdx(3), TypeIdx(1), TypeIdx(7)]);
        assert_eq!(spaces.memories, vec![mem(1)]);
        assert_eq!(spaces.tables, vec![table(2)]);
    }

    #[test]
    fn section_ids_follow_canonical_order() {
        let ids: Vec<u8> = SectionKind::ORDERED.iter().map(|k| k.id()).collect();
        assert_eq!(ids, (1..=11).collect::<Vec<u8>>());
        assert!(SectionKind::ORDERED.is_sorted());
    }
}
