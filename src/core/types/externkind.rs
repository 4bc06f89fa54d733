use std::fmt;

/// The kind of definition an import or export refers to. In the binary format it is the
/// discriminant byte preceding an import or export descriptor.
///
/// <https://www.w3.org/TR/wasm-core-1/#binary-importdesc>
/// <https://www.w3.org/TR/wasm-core-1/#binary-exportdesc>
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum ExternKind {
    Func,
    Table,
    Mem,
    Global,
}

impl ExternKind {
    pub fn name(self) -> &'static str {
        match self {
            ExternKind::Func => "func",
            ExternKind::Table => "table",
            ExternKind::Mem => "mem",
            ExternKind::Global => "global",
        }
    }
}

impl fmt::Display for ExternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
